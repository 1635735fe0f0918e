// src/lib.rs
//! Tailored CV generation: match a profile's skills against a job
//! description, render the result into an HTML template and hand it to an
//! external converter.

pub mod cli;
pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod generator;
pub mod skills;
pub mod types;

pub use config::CvConfig;
pub use converter::{CommandConverter, ConversionOutput, Converter, SkipConversion};
pub use error::{CvError, Result};
pub use generator::{CvGenerator, GenerationOutcome};
pub use skills::{MatchingOptions, SkillReport};
