//! Concrete rule sets.

pub mod war;
