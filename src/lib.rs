//! Chromakit - color science toolkit
//!
//! Command-line front end for [`color_core`]: configuration, PNG pixel
//! sources, argument parsing and report formatting.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use color_core;
pub use error::CliError;
