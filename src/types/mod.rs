// src/types/mod.rs
pub mod profile;

pub use profile::{CvParams, Profile};
