//! Integration tests for the solid-demos CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn solid_demos() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("solid-demos"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help() {
    solid_demos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("open-closed"))
        .stdout(predicate::str::contains("dependency-inversion"));
}

#[test]
fn test_open_closed_sample_catalog() {
    solid_demos()
        .arg("open-closed")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Green products (new):\n\t-Apple is green\n\t-Tree is green\n",
        ))
        .stdout(predicate::str::contains(
            "Large products:\n\t-Tree is large\n\t-House is large\n",
        ))
        .stdout(predicate::str::contains(
            "Large, blue products:\n\t-House is large AND blue\n",
        ));
}

#[test]
fn test_open_closed_custom_criteria() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("products.dat");
    fs::write(&path, "Kite::red::medium\nBarn::red::yuge\nPond::blue::large\n").unwrap();

    solid_demos()
        .args(["open-closed", "--catalog"])
        .arg(&path)
        .args(["--color", "red", "--size", "yuge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t-Barn (red, yuge)"))
        .stdout(predicate::str::contains("Kite (red, medium)").not());
}

#[test]
fn test_open_closed_rejects_unknown_color() {
    solid_demos()
        .args(["open-closed", "--color", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for color"));
}

#[test]
fn test_single_responsibility_saves_journal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("journal.txt");

    solid_demos()
        .args(["single-responsibility", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("======\n1: I did nothing today\n"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "1: I did nothing today\n");

    // Second run without --overwrite must fail and keep the file
    solid_demos()
        .args(["single-responsibility", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    solid_demos()
        .args(["single-responsibility", "--overwrite", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_liskov() {
    solid_demos()
        .arg("liskov")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected area: 12, actual area: 12"))
        .stdout(predicate::str::contains("Width: 4, height: 4 -> area 16"));
}

#[test]
fn test_dependency_inversion() {
    solid_demos()
        .arg("dependency-inversion")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "John has a child named Chris\nJohn has a child named Matt\n",
        ));

    solid_demos()
        .args(["dependency-inversion", "--parent", "Matt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No children found for Matt"));
}

#[test]
fn test_all_runs_every_demo() {
    solid_demos()
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single responsibility principle"))
        .stdout(predicate::str::contains("Interface segregation principle"))
        .stdout(predicate::str::contains("Photocopier"));
}

#[test]
fn test_benchmark_small() {
    solid_demos()
        .args(["benchmark", "--items", "500", "--iterations", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("par_filter: avg"));
}
