//! Character classes, records, progression, and validation.

#![allow(unused_imports)]

pub mod class;
pub mod progression;
pub mod record;
pub mod validation;

pub use class::*;
pub use progression::*;
pub use record::*;
pub use validation::*;
