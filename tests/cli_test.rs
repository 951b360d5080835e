use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
personal:
  name: Katherine Johnson
  title: Mathematician
  profile_image: img/kj.jpg
  resume_pdf: files/kj.pdf
  calendly_url: https://cal.test/kj
  linkedin_url: https://li.test/kj
current_work: [Trajectory analysis]
past_work: []
current_explorations: []
proud_projects: [Friendship 7]
experience: []
education: []
footer:
  template_credit:
    link: https://template.test
"#;

fn portfolio_gen() -> Command {
    Command::cargo_bin("portfolio-gen").unwrap()
}

#[test]
fn test_generates_page_in_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("portfolio-config.yaml");
    std::fs::write(&config_path, CONFIG).unwrap();
    let out_dir = temp_dir.path().join("site");

    portfolio_gen()
        .arg("--config")
        .arg(&config_path)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let html = std::fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(html.contains("<title>Katherine Johnson</title>"));
    assert!(html.contains("<li>Trajectory analysis</li>"));
}

#[test]
fn test_dry_run_prints_summary_only() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("portfolio-config.yaml");
    std::fs::write(&config_path, CONFIG).unwrap();

    portfolio_gen()
        .arg("--config")
        .arg(&config_path)
        .arg("--output-dir")
        .arg(temp_dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Katherine Johnson"));

    assert!(!temp_dir.path().join("index.html").exists());
}

#[test]
fn test_missing_config_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    portfolio_gen()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("portfolio-config.yaml"));

    assert!(!temp_dir.path().join("index.html").exists());
}

#[test]
fn test_missing_field_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("portfolio-config.yaml");
    std::fs::write(&config_path, CONFIG.replace("  name: Katherine Johnson\n", "")).unwrap();

    portfolio_gen()
        .arg("--config")
        .arg(&config_path)
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("personal.name"));

    assert!(!temp_dir.path().join("index.html").exists());
}
