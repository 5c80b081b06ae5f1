//! kitbox core library
//!
//! This library provides the pure conversion and analysis functions behind
//! the kitbox command-line toolbox: unit conversion tables, color space
//! transforms, text readability metrics, and digest computation.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod digest;
pub mod text;
pub mod units;
