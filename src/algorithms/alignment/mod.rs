//! This module contains alignment primitives which estimate how close a candidate
//! sequence is to being a subsequence of a reference sequence.

mod banded;
pub use self::banded::*;

mod feasibility;
pub use self::feasibility::*;
