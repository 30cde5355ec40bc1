// Services built on top of the indicator core.
pub mod overlay;

pub use overlay::{compute_overlay, compute_overlays};
