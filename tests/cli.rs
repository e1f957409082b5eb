use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_infix_calc"))
        .args(args)
        .output()
        .expect("failed to run binary")
}

#[test]
fn test_single_expression() {
    let output = run(&["-e", "1 - 2 - 3"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-4\n");
}

#[test]
fn test_print_tree() {
    let output = run(&["--print-tree", "-e", "2 + 3 * 4"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(2 + (3 * 4)) => 14\n");
}

#[test]
fn test_file_mode() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x = 5").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "x + 1").unwrap();

    let output = run(&[file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5\n6\n");
}

#[test]
fn test_file_mode_fails_on_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x = 1").unwrap();
    writeln!(file, "x / 0").unwrap();

    let output = run(&[file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
}

#[test]
fn test_missing_file() {
    let output = run(&["/definitely/not/here.calc"]);
    assert!(!output.status.success());
}
