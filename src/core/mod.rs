//! Shared constants and the error type.

#![allow(unused_imports)]

pub mod constants;
pub mod errors;

pub use constants::*;
pub use errors::*;
