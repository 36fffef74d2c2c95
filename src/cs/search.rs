//! Searching primitives shared by the subsequence algorithms.

pub mod bisect;

pub use bisect::{bisect_left_by, bisect_right_by};
