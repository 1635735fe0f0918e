// src/core/mod.rs
//! Core services shared by the generation pipeline

pub mod config_manager;
pub mod fs_ops;
pub mod template_engine;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use template_engine::{RenderContext, TemplateEngine};
