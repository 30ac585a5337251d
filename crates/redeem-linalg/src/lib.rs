//! redeem-linalg: small dense linear-algebra primitives.
//!
//! The crate provides a fixed-size numeric `Vector` and a row/column
//! addressable `Matrix` with elementwise arithmetic, scaling, multiplication,
//! sub-region copy/paste and concatenation. Everything runs in memory on the
//! calling thread; operations that can fail return a `LinalgError` before
//! touching the receiver.
//!
//! Logging goes through the `log` facade. Install a logger such as
//! `env_logger` in the binary to see trace output for shape-changing
//! operations.
pub mod config;
pub mod error;
pub mod math;

pub use config::{LinalgConfig, Notation};
pub use error::{ErrorKind, LinalgError, Result};
pub use math::{Matrix, Vector};
