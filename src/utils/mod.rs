//! Utility functions for the registry core.

pub mod dates;
