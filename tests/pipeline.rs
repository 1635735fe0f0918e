use cv_matcher::config::CvConfig;
use cv_matcher::{ConversionOutput, Converter, CvError, CvGenerator, SkipConversion};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG: &str = r#"
name: Jane Doe
email: jane@example.com
phone: "555-0100"
residence: Helsinki
header: Backend developer.
education: MSc Computer Science
certificates: CKA
experience: "<div class=\"job\">Acme</div>"
linkedin: https://linkedin.com/in/janedoe
skills: [Go, Docker, Java]
static_skills: [Teamwork]
"#;

const TEMPLATE: &str = "<h1>{{name}}</h1>{{#github}}<a>{{github}}</a>{{/github}}\
<ul>{{#skills}}<li>{{.}}</li>{{/skills}}</ul>{{experience}}";

fn workspace(config: &str, template: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), config).unwrap();
    fs::write(
        dir.path().join("jdskills.txt"),
        "Looking for a Go developer familiar with docker and kubernetes",
    )
    .unwrap();

    let template_dir = dir.path().join("templates").join("default");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("index.html"), template).unwrap();
    dir
}

fn config_for(dir: &TempDir) -> CvConfig {
    CvConfig::new().with_root_dir(dir.path().to_path_buf())
}

#[derive(Default)]
struct RecordingConverter {
    calls: RefCell<Vec<PathBuf>>,
}

impl Converter for RecordingConverter {
    fn convert(&self, document: &Path) -> cv_matcher::Result<ConversionOutput> {
        self.calls.borrow_mut().push(document.to_path_buf());
        Ok(ConversionOutput {
            stdout: "converted".to_string(),
        })
    }
}

struct FailingConverter;

impl Converter for FailingConverter {
    fn convert(&self, _document: &Path) -> cv_matcher::Result<ConversionOutput> {
        Err(CvError::Conversion {
            message: "node exited with exit status: 1".to_string(),
            output: "PDF conversion failed".to_string(),
        })
    }
}

#[tokio::test]
async fn generates_html_with_static_skills_first() {
    let dir = workspace(CONFIG, TEMPLATE);
    let generator = CvGenerator::new(config_for(&dir)).unwrap();
    let converter = RecordingConverter::default();

    let outcome = generator.generate(&converter).await.unwrap();

    assert_eq!(outcome.skills.matched, vec!["go", "docker"]);
    assert_eq!(outcome.skills.common, vec!["Teamwork", "go", "docker"]);
    assert_eq!(outcome.output_path, dir.path().join("output.html"));
    assert_eq!(outcome.conversion.stdout, "converted");
    assert_eq!(*converter.calls.borrow(), vec![dir.path().join("output.html")]);

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    assert_eq!(
        html,
        "<h1>Jane Doe</h1><ul><li>Teamwork</li><li>go</li><li>docker</li></ul>\
<div class=\"job\">Acme</div>"
    );
}

#[tokio::test]
async fn missing_optional_field_fails_before_writing() {
    let dir = workspace(CONFIG, "<a href={{github}}>gh</a>");
    let generator = CvGenerator::new(config_for(&dir)).unwrap();

    let err = generator.generate(&SkipConversion).await.unwrap_err();

    assert!(matches!(err, CvError::Render(_)));
    assert!(!dir.path().join("output.html").exists());
}

#[tokio::test]
async fn conversion_failure_keeps_rendered_html() {
    let dir = workspace(CONFIG, TEMPLATE);
    let generator = CvGenerator::new(config_for(&dir)).unwrap();

    let err = generator.generate(&FailingConverter).await.unwrap_err();

    assert_eq!(err.stage(), "conversion");
    assert!(err.to_string().contains("PDF conversion failed"));
    assert!(dir.path().join("output.html").exists());
}

#[tokio::test]
async fn missing_job_description_is_fatal() {
    let dir = workspace(CONFIG, TEMPLATE);
    fs::remove_file(dir.path().join("jdskills.txt")).unwrap();
    let generator = CvGenerator::new(config_for(&dir)).unwrap();

    let err = generator.generate(&SkipConversion).await.unwrap_err();
    assert!(matches!(err, CvError::JobDescriptionRead { .. }));
}

#[tokio::test]
async fn unknown_template_is_reported() {
    let dir = workspace(CONFIG, TEMPLATE);
    let config = config_for(&dir).with_template("modern".to_string());
    let generator = CvGenerator::new(config).unwrap();

    let err = generator.generate(&SkipConversion).await.unwrap_err();
    assert!(matches!(err, CvError::Template(_)));
}

#[tokio::test]
async fn template_name_is_case_insensitive() {
    let dir = workspace(CONFIG, TEMPLATE);
    let config = config_for(&dir).with_template("DEFAULT".to_string());
    let generator = CvGenerator::new(config).unwrap();

    assert_eq!(generator.config.template, "default");
    generator.generate(&SkipConversion).await.unwrap();
}

#[tokio::test]
async fn strict_mode_from_config() {
    let config = format!("{}matching:\n  mode: strict\n", CONFIG)
        .replace("skills: [Go, Docker, Java]", "skills: [Go, Docker., Java]");
    let dir = workspace(&config, TEMPLATE);

    let (_, report) = cv_matcher::generator::match_skills(&config_for(&dir))
        .await
        .unwrap();

    assert_eq!(report.matched, vec!["go"]);
    assert_eq!(report.common, vec!["Teamwork", "go"]);
}
