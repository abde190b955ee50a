//! Movement domain: system modules for input sampling and ground detection.

pub(crate) mod collisions;
pub(crate) mod input;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{clear_input_edges, read_input};
