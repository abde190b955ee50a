//! Layout domain: deterministic seeded level layouts.

mod sampler;


pub use sampler::{Layout, LayoutParams, MAX_REACH, PlatformSpan, sample_layout};
