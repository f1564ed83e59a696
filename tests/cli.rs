use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn renders_both_pictures() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t3", "-l20", "-o"])
        .arg(dir.path())
        .arg("5")
        .assert()
        .success();

    for name in &["newton_attractors_x5.ppm", "newton_convergence_x5.ppm"] {
        let text = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(text.starts_with("P3\n20 20\n255\n"));
        assert_eq!(text.lines().count(), 3 + 20);
    }
}

#[test]
fn rejects_degree_out_of_range() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t2", "-l10", "-o"])
        .arg(dir.path())
        .arg("10")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 9"));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn rejects_zero_threads() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t0", "-l10", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be positive"));
}

#[test]
fn rejects_missing_degree() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t2", "-l10"])
        .assert()
        .failure();
}

#[test]
fn reports_unwritable_output() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-t2", "-l10", "-o"])
        .arg(dir.path().join("missing"))
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
