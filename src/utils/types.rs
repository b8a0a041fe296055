/// A type alias for a float type.
/// Note: rust has a fast math code generation ability, which is not stabilized yet.
pub type Float = f64;
