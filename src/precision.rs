//! Tolerance constants for geometric comparisons.
//!
//! Two different zeros live here: `CONFUSION` is the geometric zero
//! (two points closer than this are the same point), `RESOLUTION` is the
//! numerical zero used when normalizing vectors. They are not
//! interchangeable.

/// Angular tolerance for orthogonality and parallelism checks on unit
/// vectors (radians).
pub const ANGULAR: f64 = 1.0e-9;

/// Confusion tolerance: two points are coincident if their distance is
/// below this value.
pub const CONFUSION: f64 = 1.0e-7;

/// Square of `CONFUSION`, for squared-distance comparisons.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Fundamental resolution for zero-length checks in normalization.
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;
