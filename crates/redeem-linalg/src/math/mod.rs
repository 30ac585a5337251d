//! Dense vector and matrix containers.
//!
//! `Vector` is a fixed-size sequence of numbers; `Matrix` is a row-major
//! table that hands out rows and columns as independent `Vector` copies.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
