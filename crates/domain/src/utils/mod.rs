//! Pure utility functions

pub mod dates;
