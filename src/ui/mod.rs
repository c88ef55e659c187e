//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! All console output goes through this module so formatting and the
//! `--quiet`/`--debug` flags are handled in one place.

pub mod output;

pub use output::{debug, error, print, warn, Verbosity};
