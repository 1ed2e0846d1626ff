use std::fs;
use std::process::Command;
use tempfile::TempDir;

const JAVA: &str = include_str!("M68kConst.java");

fn m68k_gen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_m68k-gen"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn writes_into_directory() {
    let dir = TempDir::new().unwrap();

    let output = m68k_gen().arg("java").arg(dir.path()).output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let written = fs::read_to_string(dir.path().join("M68kConst.java")).unwrap();
    assert_eq!(written, JAVA);
}

#[test]
fn writes_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consts.py");

    let status = m68k_gen().arg("python").arg(&path).status().unwrap();
    assert!(status.success());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# For Unicorn Engine. AUTO-GENERATED FILE, DO NOT EDIT"));
    assert!(written.ends_with("UC_M68K_REG_ENDING = 19\n"));
}

#[test]
fn writes_to_stdout() {
    let output = m68k_gen().arg("rust").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pub enum RegisterM68K {"));
}

#[test]
fn unknown_language() {
    let output = m68k_gen().arg("cobol").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown binding language `cobol`"), "{}", stderr);
}

#[test]
fn unwritable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("M68kConst.java");

    let output = m68k_gen().arg("java").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error writing constants:"), "{}", stderr);
}

#[test]
fn usage() {
    let output = m68k_gen().output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Usage: "), "{}", stderr);
}
