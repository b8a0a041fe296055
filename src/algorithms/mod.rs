//! This module contains domain independent algorithm building blocks.

pub mod alignment;
pub mod math;
