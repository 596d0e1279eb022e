//! Core types, configuration, and errors for VA component documentation tooling.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The component model (`ComponentBlock`, `Property`, `ComponentData`, `ComponentRegistry`)
//! - Closed enumerations for maturity metadata and derived status
//! - The example model (`Example`, `ExampleType`, `GenerateOptions`)
//! - Error hierarchy with contextual information
//! - Parser configuration (`ParserConfig`)
//! - CLI-facing types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{MAX_SUGGESTIONS, ParserConfig, ParserConfigBuilder};
pub use error::{Error, Result};
pub use types::{
    ComponentBlock, ComponentData, ComponentRegistry, ComponentStatus, Example, ExampleType,
    GenerateOptions, MaturityCategory, MaturityLevel, Property,
};
