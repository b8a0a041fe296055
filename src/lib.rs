//! This crate approximates a longest common subsequence of two strings with an
//! evolutionary search: candidate solutions select symbols of the shorter string with a
//! bit vector and evolve towards selections which embed into the longer string.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod evolution;
pub mod population;
pub mod prelude;
pub mod problem;
pub mod termination;
pub mod utils;
