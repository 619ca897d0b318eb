//! Utility modules: build info, persistence.

pub mod build_info;
pub mod persistence;

pub use persistence::*;
