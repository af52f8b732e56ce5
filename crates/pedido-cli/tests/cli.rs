use std::fs;

use assert_cmd::Command;
use pedido_core::test_support::{make_pdf, make_pdf_without_resources};
use predicates::prelude::*;
use tempfile::TempDir;

fn pedido(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pedido").unwrap();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.json"));
    cmd
}

fn order_pdf(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pedido.pdf");
    fs::write(
        &path,
        make_pdf(&[&["Sold 42", "Vendedor Joao Silva", "Total de itens 0"]]),
    )
    .unwrap();
    path
}

#[test]
fn test_convert_writes_derived_filename() {
    let dir = TempDir::new().unwrap();
    let input = order_pdf(&dir);
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .arg("convert")
        .arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-pedido-Desconhecido_Sold-42.xlsx"));

    let output = dir.path().join("Pre-pedido-Desconhecido_Sold-42.xlsx");
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_convert_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = order_pdf(&dir);
    let output = dir.path().join("out.xlsx");
    fs::write(&output, b"existing").unwrap();
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read(&output).unwrap(), b"existing");

    pedido(&dir)
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--quiet", "--force"])
        .assert()
        .success();
    assert!(fs::read(&output).unwrap().starts_with(b"PK"));
}

#[test]
fn test_convert_rejects_missing_input() {
    let dir = TempDir::new().unwrap();
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .args(["convert", "missing.pdf", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_convert_reports_unreadable_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("quebrado.pdf");
    fs::write(&input, make_pdf_without_resources(&["Sold 42"])).unwrap();
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .arg("convert")
        .arg(&input)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process PDF"));
    assert!(!dir.path().join("Pre-pedido-Desconhecido_Sold-42.xlsx").exists());
}

#[test]
fn test_inspect_json() {
    let dir = TempDir::new().unwrap();
    let input = order_pdf(&dir);
    pedido(&dir).args(["config", "init"]).assert().success();

    let assert = pedido(&dir)
        .arg("inspect")
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["order"]["header"]["sold"], "42");
    assert_eq!(json["order"]["header"]["pre_pedido"], "Desconhecido");
    assert!(json.get("raw_text").is_none());
}

#[test]
fn test_inspect_text_shows_warnings() {
    let dir = TempDir::new().unwrap();
    let input = order_pdf(&dir);
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sold"))
        .stdout(predicate::str::contains("Itens do pedido"));
}

#[test]
fn test_config_get_and_set() {
    let dir = TempDir::new().unwrap();
    pedido(&dir).args(["config", "init"]).assert().success();

    pedido(&dir)
        .args(["config", "get", "workbook.sheet_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pedido Completo"));

    pedido(&dir)
        .args(["config", "set", "layout.sentinel", "sem-id"])
        .assert()
        .success();

    pedido(&dir)
        .args(["config", "get", "layout.sentinel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sem-id"));

    pedido(&dir)
        .args(["config", "set", "workbook.sheet_name", "a/b"])
        .assert()
        .failure();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let input = order_pdf(&dir);

    pedido(&dir)
        .arg("inspect")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
