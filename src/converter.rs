// src/converter.rs
//! Hand-off of the rendered HTML to an external document converter.

use crate::config::ConverterCommand;
use crate::error::{CvError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Captured output of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutput {
    pub stdout: String,
}

pub trait Converter {
    fn convert(&self, document: &Path) -> Result<ConversionOutput>;
}

/// Runs a fixed external command once and waits for it.
///
/// The command receives no document argument; the converter script reads
/// the rendered file from its own fixed location. The document path is
/// only used for logging.
pub struct CommandConverter {
    command: ConverterCommand,
}

impl CommandConverter {
    pub fn new(command: ConverterCommand) -> Self {
        Self { command }
    }
}

impl Converter for CommandConverter {
    fn convert(&self, document: &Path) -> Result<ConversionOutput> {
        info!(
            "Converting {} with: {} {}",
            document.display(),
            self.command.program,
            self.command.args.join(" ")
        );

        let output = Command::new(&self.command.program)
            .args(&self.command.args)
            .output()
            .map_err(|e| CvError::Conversion {
                message: format!("Failed to execute {}: {}", self.command.program, e),
                output: String::new(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(CvError::Conversion {
                message: format!("{} exited with {}", self.command.program, output.status),
                output: [stdout, stderr]
                    .into_iter()
                    .filter(|s| !s.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        debug!("Converter stderr: {}", stderr.trim_end());
        Ok(ConversionOutput { stdout })
    }
}

/// Leaves the rendered HTML as the final artifact.
pub struct SkipConversion;

impl Converter for SkipConversion {
    fn convert(&self, document: &Path) -> Result<ConversionOutput> {
        info!("Skipping conversion of {}", document.display());
        Ok(ConversionOutput::default())
    }
}
