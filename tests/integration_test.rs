use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Result};
use tempfile::{tempdir, TempDir};

const RAW_PATH: &str = "data/raw/Kaggle_LEGO_DATASET.csv";
const OUT_PATH: &str = "data/processed/lego_model_ready.csv";

fn create_working_directory_with_sample() -> Result<TempDir> {
    let directory = tempdir()?;
    let sample_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join("Kaggle_LEGO_DATASET.csv");
    let raw_path = directory.path().join(RAW_PATH);

    fs::create_dir_all(raw_path.parent().ok_or_else(|| anyhow!("raw path has no parent"))?)?;
    fs::copy(sample_path, raw_path)?;

    Ok(directory)
}

fn output_path(directory: &TempDir) -> PathBuf {
    directory.path().join(OUT_PATH)
}

#[test]
fn test_cli_builds_model_ready_dataset_from_sample() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_lego-dataset-builder");
    let directory = create_working_directory_with_sample()?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Step 1 complete.");
    assert_eq!(lines[1], "Rows before filter: 9");
    assert_eq!(lines[2], "Rows after  filter: 6");
    assert_eq!(lines[3], "Rows model-ready : 5");
    assert!(lines[4].starts_with("Wrote: "));
    assert!(lines[4].ends_with("lego_model_ready.csv"));
    assert_eq!(lines[5], "Missingness (top 9):");
    assert!(lines[6].starts_with("Theme_Group"));

    let written = fs::read_to_string(output_path(&directory))?;
    let mut rows = written.lines();

    assert_eq!(
        rows.next(),
        Some("aftermarket_value_ratio,Current_Price,USD_MSRP,price_per_piece,Pieces,Minifigures,age_years,Theme_Group,Availability")
    );

    for row in rows {
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields.len(), 9);

        let _: f64 = fields[0].parse()?;
        let usd_msrp: f64 = fields[2].parse()?;
        let pieces: f64 = fields[4].parse()?;
        let minifigures: i64 = fields[5].parse()?;
        let age_years: f64 = fields[6].parse()?;

        assert!(usd_msrp > 0.0);
        assert!(pieces > 0.0);
        assert!(minifigures >= 0);
        assert!(age_years >= 0.0);
    }

    Ok(())
}

#[test]
fn test_cli_fills_missing_minifigures_with_zero() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_lego-dataset-builder");
    let directory = create_working_directory_with_sample()?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let written = fs::read_to_string(output_path(&directory))?;
    let t_rex = written.lines()
        .find(|row| row.contains(",69.99,"))
        .ok_or_else(|| anyhow!("T-Rex Hunter row missing from output"))?;
    let fields: Vec<&str> = t_rex.split(',').collect();

    assert_eq!(fields[4], "866");
    assert_eq!(fields[5], "0");

    Ok(())
}

#[test]
fn test_cli_aborts_without_raw_dataset() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_lego-dataset-builder");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Raw LEGO dataset not found at:"));
    assert!(stderr.contains("Kaggle_LEGO_DATASET.csv"));
    assert!(!directory.path().join("data").join("processed").exists());

    Ok(())
}

#[test]
fn test_cli_accepts_log_level_argument() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_lego-dataset-builder");
    let directory = create_working_directory_with_sample()?;

    let output = Command::new(binary_path)
        .arg("info")
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("rows are model-ready"));

    Ok(())
}
