// src/generator.rs
use crate::config::CvConfig;
use crate::converter::{ConversionOutput, Converter};
use crate::core::{ConfigManager, FsOps, RenderContext, TemplateEngine};
use crate::error::{CvError, Result};
use crate::skills::{self, SkillReport};
use crate::types::CvParams;
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub output_path: PathBuf,
    pub skills: SkillReport,
    pub conversion: ConversionOutput,
}

pub struct CvGenerator {
    pub config: CvConfig,
    template_engine: TemplateEngine,
}

impl CvGenerator {
    pub fn new(mut config: CvConfig) -> Result<Self> {
        let template_engine = TemplateEngine::new(config.templates_dir_absolute())?;

        config.template = normalize_template_for_generator(&config.template, &template_engine);

        Ok(Self {
            config,
            template_engine,
        })
    }

    /// Load the profile and job description and compute the skill lists.
    pub async fn match_skills(&self) -> Result<(CvParams, SkillReport)> {
        match_skills(&self.config).await
    }

    /// Fill the configured template with the profile and skill list.
    pub async fn render(&self, params: &CvParams, report: &SkillReport) -> Result<String> {
        let template = self.template_engine.load_template(&self.config.template).await?;

        let mut variables = params.profile.variables();
        variables.insert(
            "generated_on".to_string(),
            Some(Local::now().format("%Y-%m-%d").to_string()),
        );

        let context = RenderContext {
            variables,
            skills: report.common.clone(),
        };
        TemplateEngine::render(&template, &context)
    }

    /// Run the whole pipeline: match, render, write, convert.
    pub async fn generate(&self, converter: &dyn Converter) -> Result<GenerationOutcome> {
        let (params, report) = self.match_skills().await?;
        let html = self.render(&params, &report).await?;

        let output_path = self.config.output_path_absolute();
        FsOps::write_file_safe(&output_path, &html)
            .await
            .map_err(|source| CvError::Io {
                path: output_path.clone(),
                source,
            })?;

        let conversion = converter.convert(&output_path)?;

        info!(
            "Successfully generated CV for {} ({} template) at {}",
            params.profile.name,
            self.config.template,
            output_path.display()
        );

        Ok(GenerationOutcome {
            output_path,
            skills: report,
            conversion,
        })
    }
}

/// Load the inputs named by `config` and compute the skill lists.
pub async fn match_skills(config: &CvConfig) -> Result<(CvParams, SkillReport)> {
    let params = ConfigManager::load_cv_params(&config.config_path_absolute()).await?;
    let jd_tokens = skills::read_tokens(&config.jd_path_absolute()).await?;

    let report = SkillReport::build(
        &params.skills,
        &params.static_skills,
        &jd_tokens,
        params.matching,
    );

    info!("Matched skills: {:?}", report.matched);
    info!("Common skills: {:?}", report.common);
    Ok((params, report))
}

fn normalize_template_for_generator(template: &str, template_engine: &TemplateEngine) -> String {
    let requested = template.to_lowercase();
    template_engine
        .list_templates()
        .into_iter()
        .find(|available| available.to_lowercase() == requested)
        .unwrap_or_else(|| template.to_string())
}
