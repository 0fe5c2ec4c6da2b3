// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, srccombine_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_error_missing_input_folder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    srccombine_cmd()
        .arg("non_existent_folder_hopefully")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Input directory not found"));

    assert!(!temp.path().join("combined_source.txt").exists());
    temp.close()?;
    Ok(())
}

#[test]
fn test_error_no_matching_files_creates_no_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "readme.md", "# docs")?;
    create_file(temp.path(), "Form1.Designer.cs", "generated")?;

    srccombine_cmd()
        .args(["-o", "out.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No '.cs' files found"));

    assert!(!temp.path().join("out.txt").exists());
    temp.close()?;
    Ok(())
}

#[test]
fn test_error_empty_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    srccombine_cmd()
        .args(["-e", "."])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid configuration"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    srccombine_cmd()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: unexpected argument"))
        .stdout(predicate::str::contains("Usage").not())
        .stdout(predicate::str::contains("For more information").not())
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
    Ok(())
}

#[test]
fn test_error_missing_option_value_is_one_line() -> Result<(), Box<dyn std::error::Error>> {
    srccombine_cmd()
        .arg("-o")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
    Ok(())
}

#[test]
fn test_error_invalid_utf8_source_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("bad.cs"), [0x63u8, 0xff, 0xfe, 0x0a])?;

    srccombine_cmd()
        .args(["-o", "out.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to read source file"))
        .stdout(predicate::str::contains("bad.cs"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_output_directory_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.cs", "A")?;

    srccombine_cmd()
        .args(["-o", "no/such/dir/out.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to write output file"));

    temp.close()?;
    Ok(())
}
