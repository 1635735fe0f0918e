// src/cli.rs
use crate::config::{self, ConverterCommand, CvConfig};
use crate::converter::{CommandConverter, Converter, SkipConversion};
use crate::core::TemplateEngine;
use crate::generator::{self, CvGenerator};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cvmatch")]
#[command(about = "Generate a CV tailored to a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the tailored CV and convert it (default)
    Generate(GenerateArgs),
    /// Print matched and common skills as JSON without rendering
    Skills(InputArgs),
    /// List templates found in the templates directory
    Templates {
        #[arg(long, default_value = config::DEFAULT_TEMPLATES_DIR)]
        templates_dir: PathBuf,
    },
}

#[derive(Args, Clone)]
pub struct InputArgs {
    /// Profile config with personal data and skills
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Job description text file
    #[arg(long = "job-description", default_value = config::DEFAULT_JD_FILE)]
    pub job_description: PathBuf,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Rendered HTML output file
    #[arg(long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    #[arg(long, default_value = config::DEFAULT_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// Template directory name under the templates directory
    #[arg(long, default_value = config::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Converter program run after rendering
    #[arg(long, default_value = config::DEFAULT_CONVERTER)]
    pub converter: String,

    /// Arguments passed to the converter program
    #[arg(long = "converter-arg", default_values_t = [config::DEFAULT_CONVERTER_SCRIPT.to_string()])]
    pub converter_args: Vec<String>,

    /// Stop after writing the HTML file
    #[arg(long)]
    pub skip_convert: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            inputs: InputArgs::default(),
            output: PathBuf::from(config::DEFAULT_OUTPUT_FILE),
            templates_dir: PathBuf::from(config::DEFAULT_TEMPLATES_DIR),
            template: config::DEFAULT_TEMPLATE.to_string(),
            converter: config::DEFAULT_CONVERTER.to_string(),
            converter_args: vec![config::DEFAULT_CONVERTER_SCRIPT.to_string()],
            skip_convert: false,
        }
    }
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(config::DEFAULT_CONFIG_FILE),
            job_description: PathBuf::from(config::DEFAULT_JD_FILE),
        }
    }
}

impl GenerateArgs {
    pub fn to_config(&self) -> CvConfig {
        self.inputs
            .to_config()
            .with_output_path(self.output.clone())
            .with_templates_dir(self.templates_dir.clone())
            .with_template(self.template.clone())
            .with_converter(ConverterCommand {
                program: self.converter.clone(),
                args: self.converter_args.clone(),
            })
    }

    fn converter(&self, config: &CvConfig) -> Box<dyn Converter> {
        if self.skip_convert {
            Box::new(SkipConversion)
        } else {
            Box::new(CommandConverter::new(config.converter.clone()))
        }
    }
}

impl InputArgs {
    pub fn to_config(&self) -> CvConfig {
        CvConfig::new()
            .with_config_path(self.config.clone())
            .with_jd_path(self.job_description.clone())
    }
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => {
            let config = args.to_config();
            let converter = args.converter(&config);
            let generator = CvGenerator::new(config)?;

            let outcome = generator
                .generate(converter.as_ref())
                .await
                .map_err(|e| {
                    let stage = e.stage();
                    anyhow::Error::new(e)
                        .context(format!("CV generation failed at {} stage", stage))
                })?;

            info!("Common skills: {}", outcome.skills.common.join(", "));
            if !outcome.conversion.stdout.trim().is_empty() {
                println!("{}", outcome.conversion.stdout.trim_end());
            }
            println!("✓ Written {}", outcome.output_path.display());
        }

        Command::Skills(args) => {
            let (_, report) = generator::match_skills(&args.to_config()).await?;

            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize skill report")?;
            println!("{}", json);
        }

        Command::Templates { templates_dir } => {
            let engine = TemplateEngine::new(templates_dir)?;
            if engine.templates().is_empty() {
                println!("No templates found.");
            }
            for template in engine.templates() {
                println!(
                    "{:<20} {}",
                    template.id,
                    template
                        .manifest
                        .description
                        .as_deref()
                        .unwrap_or(&template.manifest.name)
                );
            }
        }
    }

    Ok(())
}
