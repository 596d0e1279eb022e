//! Command implementations for the VADS docs CLI.
//!
//! Each command module loads what it needs, runs one pipeline operation and
//! formats the result according to the requested output format.

pub mod analyze;
pub mod common;
pub mod completions;
pub mod components;
pub mod config;
pub mod examples;
pub mod find;
pub mod suggest;
