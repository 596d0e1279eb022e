//! VADS docs CLI library.
//!
//! This library provides the core functionality for the `vads-docs` tool,
//! exposing argument definitions, commands and formatters so they can be
//! tested without spawning the binary.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `components` - List documented components, optionally by status
//! - `find` - Show one component's metadata
//! - `suggest` - Rank component names similar to a query
//! - `analyze` - Show property classification and inferred purpose
//! - `examples` - Generate usage examples
//! - `config` - Manage the configuration file
//! - `completions` - Generate shell completions

#![allow(clippy::format_push_string)]
#![allow(clippy::unused_async)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use actions::ConfigAction;
