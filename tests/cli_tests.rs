use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn mpbill_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mpbill"))
}

/// Run `init` into a fresh temp dir and return both
fn init_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mpbill-config");

    mpbill_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    (temp_dir, config_path)
}

fn run_in(config_path: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    mpbill_cmd()
        .args(["-C", config_path.to_str().unwrap()])
        .args(args)
        .assert()
}

#[test]
fn test_help() {
    mpbill_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado Pago billing rows"));
}

#[test]
fn test_version() {
    mpbill_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mpbill"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mpbill-config");

    mpbill_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized mpbill config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("catalog.toml").exists());
    assert!(config_path.join("billing.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["init"])
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_products_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    run_in(&config_path, &["products"])
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("mpbill init"));
}

#[test]
fn test_products_defaults_to_active() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["products"])
        .success()
        .stdout(predicate::str::contains("CAM-001"))
        .stdout(predicate::str::contains("KIT-010"))
        .stdout(predicate::str::contains("CAM-002").not());
}

#[test]
fn test_products_any_status_with_brand() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["products", "--status", "any", "--brand", "NIKE"])
        .success()
        .stdout(predicate::str::contains("CAM-001"))
        .stdout(predicate::str::contains("CAM-002"))
        .stdout(predicate::str::contains("KIT-010").not());
}

#[test]
fn test_products_kits_only() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["products", "--kits"])
        .success()
        .stdout(predicate::str::contains("KIT-010"))
        .stdout(predicate::str::contains("CAM-001").not());

    run_in(&config_path, &["products", "--no-kits", "--status", "inactive"])
        .success()
        .stdout(predicate::str::contains("CAM-002"))
        .stdout(predicate::str::contains("KIT-010").not());
}

#[test]
fn test_products_kit_flags_conflict() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["products", "--kits", "--no-kits"]).failure();
}

#[test]
fn test_products_no_match() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["products", "--brand", "puma"])
        .success()
        .stdout(predicate::str::contains("No products match."));
}

#[test]
fn test_products_string_ativo_is_not_active() {
    let (_temp_dir, config_path) = init_config();
    fs::write(
        config_path.join("catalog.toml"),
        r#"
[REAL]
ativo = true

[FAKE]
ativo = "true"
"#,
    )
    .unwrap();

    run_in(&config_path, &["products"])
        .success()
        .stdout(predicate::str::contains("REAL"))
        .stdout(predicate::str::contains("FAKE").not());
}

#[test]
fn test_show_product() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["show", "KIT-010"])
        .success()
        .stdout(predicate::str::contains("Kit Treino"))
        .stdout(predicate::str::contains("Adidas"))
        .stdout(predicate::str::contains("e_kit"));
}

#[test]
fn test_show_missing_product() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["show", "NOPE"])
        .failure()
        .stderr(predicate::str::contains("Product 'NOPE' not found"));
}

#[test]
fn test_catalog_parse_error() {
    let (_temp_dir, config_path) = init_config();
    fs::write(config_path.join("catalog.toml"), "[broken\n").unwrap();

    run_in(&config_path, &["products"])
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_rows_lists_all() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["rows"])
        .success()
        .stdout(predicate::str::contains("000123"))
        .stdout(predicate::str::contains("000124"))
        .stdout(predicate::str::contains("R$100.00"));
}

#[test]
fn test_rows_single_competencia() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["rows", "--competencia", "2024-06"])
        .success()
        .stdout(predicate::str::contains("000124"))
        .stdout(predicate::str::contains("000123").not());

    run_in(&config_path, &["rows", "--competencia", "2023-01"])
        .success()
        .stdout(predicate::str::contains("No billing rows for 2023-01."));
}

#[test]
fn test_rows_invalid_competencia_flag() {
    let (_temp_dir, config_path) = init_config();

    run_in(&config_path, &["rows", "--competencia", "2024-13"])
        .failure()
        .stderr(predicate::str::contains("Invalid competencia '2024-13'"));
}

#[test]
fn test_rows_invalid_competencia_in_file() {
    let (_temp_dir, config_path) = init_config();
    fs::write(
        config_path.join("billing.toml"),
        r#"
[[row]]
competencia = "2024-05"

[[row]]
competencia = "05/2024"
"#,
    )
    .unwrap();

    run_in(&config_path, &["rows"])
        .failure()
        .stderr(predicate::str::contains("'05/2024' in row 2"));
}

#[test]
fn test_custom_file_locations_and_currency() {
    let (temp_dir, config_path) = init_config();
    let billing_path = temp_dir.path().join("elsewhere.toml");
    fs::write(
        &billing_path,
        r#"
[[row]]
numero_nfe = "777"
valor_operacao = 9.5
competencia = "2024-02"
"#,
    )
    .unwrap();
    fs::write(
        config_path.join("config.toml"),
        format!(
            "[display]\ncurrency_symbol = \"$\"\n\n[files]\nbilling = {:?}\n",
            billing_path.to_str().unwrap()
        ),
    )
    .unwrap();

    run_in(&config_path, &["rows"])
        .success()
        .stdout(predicate::str::contains("777"))
        .stdout(predicate::str::contains("$9.50"));

    // catalog falls back to the default location
    run_in(&config_path, &["show", "CAM-001"]).success();
}

#[test]
fn test_missing_config_toml_uses_defaults() {
    let (_temp_dir, config_path) = init_config();
    fs::remove_file(config_path.join("config.toml")).unwrap();

    run_in(&config_path, &["rows"])
        .success()
        .stdout(predicate::str::contains("R$"));
}
