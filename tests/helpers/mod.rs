
pub mod population;
