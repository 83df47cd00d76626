use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to convert path to forward slashes for TOML compatibility on Windows
fn path_to_toml_string(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Helper to create a config whose rides_dir points inside `temp_dir`
fn init_config(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let config_path = temp_dir.path().join("bikelog.toml");
    let rides_dir = temp_dir.path().join("rides");

    cargo::cargo_bin_cmd!("bikelog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated_config = config_content.replace(
        "rides_dir = \"./rides\"",
        &format!("rides_dir = \"{}\"", path_to_toml_string(&rides_dir)),
    );
    fs::write(&config_path, updated_config).unwrap();

    (config_path, rides_dir)
}

#[test]
fn test_log_ride_writes_yearly_file() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args([
            "log",
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "2024-01-15",
            "--rider",
            "Chris",
            "--bike",
            "Cannondale ST400",
            "--distance",
            "20.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ Logged ride: 1/15/2024 - Chris rode 20.5 miles on Cannondale ST400",
        ))
        .stdout(predicate::str::contains("rides_2024.csv"));

    let content = fs::read_to_string(rides_dir.join("rides_2024.csv")).unwrap();
    assert_eq!(
        content,
        "Date,Name,Distance,Bike,Comment\n1/15/2024,Chris,20.5,Cannondale ST400,\n"
    );
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .env("BIKELOG_CONFIG", &config_path)
        .args([
            "log",
            "--date",
            "2023-12-31",
            "--rider",
            "Theo",
            "--bike",
            "Fuji",
            "--distance",
            "4",
        ])
        .assert()
        .success();

    assert!(rides_dir.join("rides_2023.csv").exists());
}

#[test]
fn test_missing_distance_fails() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("bikelog")
        .current_dir(temp_dir.path())
        .env_remove("BIKELOG_CONFIG")
        .args(["log", "--rider", "Chris", "--bike", "Fuji"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--distance is required"));

    assert!(!temp_dir.path().join("rides").exists());
}

#[test]
fn test_missing_rider_fails() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("bikelog")
        .current_dir(temp_dir.path())
        .env_remove("BIKELOG_CONFIG")
        .args(["log", "--bike", "Fuji", "--distance", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rider is required"));
}

#[test]
fn test_invalid_date_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args([
            "log",
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "15/01/2024",
            "--rider",
            "Chris",
            "--bike",
            "Fuji",
            "--distance",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid date format: 15/01/2024. Use YYYY-MM-DD",
        ));

    assert!(!rides_dir.exists());
}

#[test]
fn test_unknown_rider_declined_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args([
            "log",
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "2024-06-01",
            "--rider",
            "Grandpa",
            "--bike",
            "Fuji",
            "--distance",
            "2",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: 'Grandpa' is not in the default rider list.",
        ))
        .stdout(predicate::str::contains("Ride not logged."));

    assert!(!rides_dir.join("rides_2024.csv").exists());
}

#[test]
fn test_unknown_bike_confirmed_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args([
            "log",
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "2024-06-01",
            "--rider",
            "Sally",
            "--bike",
            "Brompton, folding",
            "--distance",
            "6",
        ])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged ride"));

    let content = fs::read_to_string(rides_dir.join("rides_2024.csv")).unwrap();
    assert!(content.contains("6/1/2024,Sally,6,\"Brompton, folding\","));
}

#[test]
fn test_yes_flag_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args([
            "log",
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "2024-06-01",
            "--rider",
            "Grandpa",
            "--bike",
            "Unicycle",
            "--distance",
            "1",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning").not());

    assert!(rides_dir.join("rides_2024.csv").exists());
}

#[test]
fn test_newest_entry_comes_first() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, rides_dir) = init_config(&temp_dir);

    for (date, rider) in [("2024-05-01", "Chris"), ("2024-03-01", "Lucja")] {
        cargo::cargo_bin_cmd!("bikelog")
            .args([
                "log",
                "--config",
                config_path.to_str().unwrap(),
                "--date",
                date,
                "--rider",
                rider,
                "--bike",
                "Fuji",
                "--distance",
                "3",
            ])
            .assert()
            .success();
    }

    let content = fs::read_to_string(rides_dir.join("rides_2024.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Name,Distance,Bike,Comment",
            "3/1/2024,Lucja,3,Fuji,",
            "5/1/2024,Chris,3,Fuji,",
        ]
    );
}

#[test]
fn test_list_riders_with_defaults() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("bikelog")
        .current_dir(temp_dir.path())
        .env_remove("BIKELOG_CONFIG")
        .arg("list-riders")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available riders:"))
        .stdout(predicate::str::contains("  1. Chris\n"))
        .stdout(predicate::str::contains("  7. Theo\n"));
}

#[test]
fn test_list_bikes_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = init_config(&temp_dir);

    cargo::cargo_bin_cmd!("bikelog")
        .args(["list-bikes", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available bikes:"))
        .stdout(predicate::str::contains("  2. Cannondale ST400\n"))
        .stdout(predicate::str::contains("  13. Torelli 2\n"));
}

#[test]
fn test_config_init_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = init_config(&temp_dir);
    let before = fs::read_to_string(&config_path).unwrap();

    cargo::cargo_bin_cmd!("bikelog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), before);
}
