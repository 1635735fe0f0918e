// src/core/template_engine.rs
//! Template discovery and rendering.
//!
//! A template is a directory under the templates root holding an HTML main
//! file and an optional `manifest.toml`. Placeholders use `{{field}}`;
//! `{{#skills}}...{{/skills}}` repeats its body once per skill with the
//! skill available as `{{.}}`; `{{#field}}...{{/field}}` renders its body
//! only when the optional profile field is set.

use crate::core::FsOps;
use crate::error::{CvError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SKILLS_SECTION: &str = "skills";
const CURRENT_ITEM: &str = ".";
const DEFAULT_MAIN_FILE: &str = "index.html";

// ===== Template Models =====

#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub id: String,
    pub path: PathBuf,
    pub manifest: TemplateManifest,
}

impl TemplateInfo {
    pub fn main_file(&self) -> PathBuf {
        self.path.join(
            self.manifest
                .main_file
                .as_deref()
                .unwrap_or(DEFAULT_MAIN_FILE),
        )
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemplateManifest {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub main_file: Option<String>,
}

/// Values available to a template during rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, Option<String>>,
    pub skills: Vec<String>,
}

// ===== Main Template Engine =====

pub struct TemplateEngine {
    templates_dir: PathBuf,
    templates: Vec<TemplateInfo>,
}

impl TemplateEngine {
    /// Create new template engine with automatic discovery
    pub fn new(templates_dir: PathBuf) -> Result<Self> {
        let mut engine = Self {
            templates_dir,
            templates: Vec::new(),
        };
        engine.discover_templates()?;
        Ok(engine)
    }

    fn discover_templates(&mut self) -> Result<()> {
        self.templates.clear();

        if !self.templates_dir.exists() {
            warn!(
                "Templates directory does not exist: {}",
                self.templates_dir.display()
            );
            return Ok(());
        }

        let entries = std::fs::read_dir(&self.templates_dir).map_err(|e| {
            CvError::Template(format!(
                "Failed to read templates directory {}: {}",
                self.templates_dir.display(),
                e
            ))
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(template_id) = path.file_name().and_then(|n| n.to_str()) {
                match load_template_info(template_id, &path) {
                    Ok(template) => {
                        debug!(
                            "Loaded template: {} from {}",
                            template.id,
                            template.path.display()
                        );
                        self.templates.push(template);
                    }
                    Err(e) => warn!("Failed to load template {}: {}", template_id, e),
                }
            }
        }

        self.templates.sort_by(|a, b| a.id.cmp(&b.id));
        info!("Discovered {} templates", self.templates.len());
        Ok(())
    }

    /// List available templates
    pub fn list_templates(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.id.clone()).collect()
    }

    pub fn templates(&self) -> &[TemplateInfo] {
        &self.templates
    }

    /// Get template info by ID
    pub fn get_template(&self, template_id: &str) -> Option<&TemplateInfo> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    /// Read the main file of a template
    pub async fn load_template(&self, template_id: &str) -> Result<String> {
        let template = self.get_template(template_id).ok_or_else(|| {
            CvError::Template(format!(
                "Template '{}' not found. Available templates: {:?}. Templates directory: {}",
                template_id,
                self.list_templates(),
                self.templates_dir.display()
            ))
        })?;

        let main_file = template.main_file();
        FsOps::read_file_safe(&main_file).await.map_err(|e| {
            CvError::Template(format!(
                "Failed to read template file {}: {}",
                main_file.display(),
                e
            ))
        })
    }

    // ===== Rendering =====

    /// Fill `template_content` with values from `context`.
    pub fn render(template_content: &str, context: &RenderContext) -> Result<String> {
        let nodes = parse(template_content)?;
        let mut out = String::with_capacity(template_content.len());
        render_nodes(&nodes, context, None, &mut out)?;
        Ok(out)
    }
}

fn load_template_info(template_id: &str, template_path: &Path) -> Result<TemplateInfo> {
    let manifest_path = template_path.join("manifest.toml");

    let manifest = if manifest_path.exists() {
        let content = std::fs::read_to_string(&manifest_path).map_err(|e| {
            CvError::Template(format!(
                "Failed to read manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            CvError::Template(format!(
                "Failed to parse manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })?
    } else {
        TemplateManifest {
            name: template_id.to_string(),
            description: None,
            author: None,
            version: None,
            main_file: None,
        }
    };

    Ok(TemplateInfo {
        id: template_id.to_string(),
        path: template_path.to_path_buf(),
        manifest,
    })
}

// ===== Parsing =====

#[derive(Debug, PartialEq)]
enum Node {
    Text(String),
    Var(String),
    Section { name: String, body: Vec<Node> },
}

fn parse(content: &str) -> Result<Vec<Node>> {
    let mut root = Vec::new();
    // Open sections: (name, nodes collected so far).
    let mut open: Vec<(String, Vec<Node>)> = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let end = after_open.find("}}").ok_or_else(|| {
            CvError::Render(format!(
                "Unterminated placeholder near: {}",
                snippet(&rest[start..])
            ))
        })?;

        if start > 0 {
            current(&mut root, &mut open).push(Node::Text(rest[..start].to_string()));
        }

        let tag = after_open[..end].trim();
        if let Some(name) = tag.strip_prefix('#') {
            open.push((name.trim().to_string(), Vec::new()));
        } else if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            let (section, body) = open.pop().ok_or_else(|| {
                CvError::Render(format!(
                    "Closing tag {{{{/{}}}}} without matching section",
                    name
                ))
            })?;
            if section != name {
                return Err(CvError::Render(format!(
                    "Section {{{{#{}}}}} closed by {{{{/{}}}}}",
                    section, name
                )));
            }
            current(&mut root, &mut open).push(Node::Section {
                name: section,
                body,
            });
        } else if tag.is_empty() {
            return Err(CvError::Render("Empty placeholder {{}}".to_string()));
        } else {
            current(&mut root, &mut open).push(Node::Var(tag.to_string()));
        }

        rest = &after_open[end + 2..];
    }

    if let Some((section, _)) = open.pop() {
        return Err(CvError::Render(format!(
            "Section {{{{#{}}}}} is never closed",
            section
        )));
    }

    if !rest.is_empty() {
        root.push(Node::Text(rest.to_string()));
    }
    Ok(root)
}

fn current<'a>(root: &'a mut Vec<Node>, open: &'a mut [(String, Vec<Node>)]) -> &'a mut Vec<Node> {
    match open.last_mut() {
        Some((_, nodes)) => nodes,
        None => root,
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(40).collect()
}

fn render_nodes(
    nodes: &[Node],
    context: &RenderContext,
    item: Option<&str>,
    out: &mut String,
) -> Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) if name == CURRENT_ITEM => {
                let value = item.ok_or_else(|| {
                    CvError::Render("{{.}} used outside of {{#skills}}".to_string())
                })?;
                out.push_str(value);
            }
            Node::Var(name) => match context.variables.get(name) {
                Some(Some(value)) => out.push_str(value),
                Some(None) => {
                    return Err(CvError::Render(format!(
                        "Field '{}' is used by the template but missing from the profile",
                        name
                    )))
                }
                None => {
                    return Err(CvError::Render(format!("Unknown placeholder {{{{{}}}}}", name)))
                }
            },
            Node::Section { name, body } if name == SKILLS_SECTION => {
                for skill in &context.skills {
                    render_nodes(body, context, Some(skill), out)?;
                }
            }
            Node::Section { name, body } => match context.variables.get(name) {
                Some(Some(_)) => render_nodes(body, context, item, out)?,
                Some(None) => {}
                None => {
                    return Err(CvError::Render(format!("Unknown section {{{{#{}}}}}", name)))
                }
            },
        }
    }
    Ok(())
}
