//! Utilities shared between the codepair binaries and their tests.

pub mod logger;
pub mod time;
