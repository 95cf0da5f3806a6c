//! Geometry value types for the section core.
//!
//! A deliberately small foundation: a raw coordinate triplet, a cartesian
//! point and an always-unit direction. Everything is an immutable value
//! object, constructed fresh per use, with no shared state.

mod xyz;
mod pnt;
mod dir;

pub use xyz::XYZ;
pub use pnt::Pnt;
pub use dir::Dir;
