//! Stereo texture-coordinate remapping for the video sphere.
//!
//! Each eye's sphere keeps the UVs it was generated with as an immutable
//! baseline. Changing the stereo format or the field of view rebuilds the
//! derived UVs from that baseline, so the result never depends on the
//! order of earlier changes.

mod surface;
mod uv;

pub use surface::{EyeSurface, StereoSurface};
pub use uv::{remap, remap_into, remap_pair, BaselineUv, DerivedUv};
