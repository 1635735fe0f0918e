// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_JD_FILE: &str = "jdskills.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.html";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_TEMPLATE: &str = "default";
pub const DEFAULT_CONVERTER: &str = "node";
pub const DEFAULT_CONVERTER_SCRIPT: &str = "js/html2pdf.js";

/// Locations and external command used by one generation run.
#[derive(Debug, Clone)]
pub struct CvConfig {
    pub config_path: PathBuf,
    pub jd_path: PathBuf,
    pub output_path: PathBuf,
    pub templates_dir: PathBuf,
    pub template: String,
    pub converter: ConverterCommand,
    pub root_dir: PathBuf,
}

/// External process that turns the rendered HTML into the final document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ConverterCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_CONVERTER.to_string(),
            args: vec![DEFAULT_CONVERTER_SCRIPT.to_string()],
        }
    }
}

impl Default for CvConfig {
    fn default() -> Self {
        // Capture the current directory at creation time
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            jd_path: PathBuf::from(DEFAULT_JD_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            template: DEFAULT_TEMPLATE.to_string(),
            converter: ConverterCommand::default(),
            root_dir: current_dir,
        }
    }
}

impl CvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_jd_path(mut self, path: PathBuf) -> Self {
        self.jd_path = path;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_templates_dir(mut self, dir: PathBuf) -> Self {
        self.templates_dir = dir;
        self
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = template;
        self
    }

    pub fn with_converter(mut self, converter: ConverterCommand) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_root_dir(mut self, dir: PathBuf) -> Self {
        self.root_dir = dir;
        self
    }

    fn absolute_path(&self, relative_path: &PathBuf) -> PathBuf {
        if relative_path.is_absolute() {
            relative_path.clone()
        } else {
            self.root_dir.join(relative_path)
        }
    }

    pub fn config_path_absolute(&self) -> PathBuf {
        self.absolute_path(&self.config_path)
    }

    pub fn jd_path_absolute(&self) -> PathBuf {
        self.absolute_path(&self.jd_path)
    }

    pub fn output_path_absolute(&self) -> PathBuf {
        self.absolute_path(&self.output_path)
    }

    pub fn templates_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.templates_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = CvConfig::new().with_root_dir(PathBuf::from("/work"));

        assert_eq!(config.config_path_absolute(), PathBuf::from("/work/config.yaml"));
        assert_eq!(config.jd_path_absolute(), PathBuf::from("/work/jdskills.txt"));
        assert_eq!(config.output_path_absolute(), PathBuf::from("/work/output.html"));
        assert_eq!(config.template, "default");
        assert_eq!(config.converter.program, "node");
        assert_eq!(config.converter.args, vec!["js/html2pdf.js"]);
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = CvConfig::new()
            .with_root_dir(PathBuf::from("/work"))
            .with_output_path(PathBuf::from("/tmp/cv.html"))
            .with_templates_dir(PathBuf::from("themes"));

        assert_eq!(config.output_path_absolute(), PathBuf::from("/tmp/cv.html"));
        assert_eq!(config.templates_dir_absolute(), PathBuf::from("/work/themes"));
    }
}
