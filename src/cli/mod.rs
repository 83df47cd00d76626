//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - log: Record a ride
//! - list-riders / list-bikes: Show the known option lists
//! - config init: Initialize configuration file
pub mod config;
pub mod list;
pub mod log;
mod prompt;
