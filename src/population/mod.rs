//! This module contains a population model for the generational evolution.

mod bit_vector;
pub use self::bit_vector::*;

mod generational;
pub use self::generational::*;

mod solution;
pub use self::solution::*;
