// e2e/cli_integration.rs — black-box tests of the `libzip` binary
//
// Drives the binary through std::process::Command: stdin/stdout piping,
// file arguments, mode and codec selection, overwrite policy, multiple-file
// mode and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const CALLDATA: &str = "0xa9059cbb000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa960450000000000000000000000000000000000000000000000000de0b6b3a7640000";

/// Locate the `libzip` binary produced by Cargo.
fn libzip_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_libzip") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("libzip");
    p
}

/// Run the binary with `args`, feeding `stdin`.
fn run(args: &[&str], stdin: &str, dir: &Path) -> Output {
    let mut child = Command::new(libzip_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("LIBZIP_CODEC")
        .env_remove("LIBZIP_NBWORKERS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn libzip");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

// ── 1. Pipes ─────────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_round_trip_cd() {
    let dir = TempDir::new().unwrap();
    let packed = run(&[], CALLDATA, dir.path());
    assert!(packed.status.success());
    let packed = stdout_of(&packed);
    assert!(packed.ends_with('\n'));
    assert!(packed.len() < CALLDATA.len());

    let back = run(&["-d"], &packed, dir.path());
    assert!(back.status.success());
    assert_eq!(stdout_of(&back).trim_end(), CALLDATA);
}

#[test]
fn stdin_to_stdout_round_trip_flz() {
    let dir = TempDir::new().unwrap();
    let packed = run(&["--flz", "-"], CALLDATA, dir.path());
    assert!(packed.status.success());
    let back = run(&["-d", "--flz"], &stdout_of(&packed), dir.path());
    assert_eq!(stdout_of(&back).trim_end(), CALLDATA);
}

#[test]
fn codec_from_environment() {
    let dir = TempDir::new().unwrap();
    let env_out = Command::new(libzip_bin())
        .arg(dir.path().join("in.hex"))
        .env("LIBZIP_CODEC", "flz")
        .stdin(Stdio::null())
        .output();
    // Missing file: exits 1 whatever the codec.
    assert_eq!(env_out.unwrap().status.code(), Some(1));

    fs::write(dir.path().join("in.hex"), "0x000000").unwrap();
    let out = Command::new(libzip_bin())
        .arg("in.hex")
        .current_dir(dir.path())
        .env("LIBZIP_CODEC", "flz")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "0x02000000\n");
}

// ── 2. Files ─────────────────────────────────────────────────────────────────

#[test]
fn file_to_file_and_back_by_suffix() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tx.hex"), format!("{CALLDATA}\n")).unwrap();

    let out = run(&["--flz", "tx.hex", "tx.hex.flz"], "", dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    // Auto mode: the .flz suffix selects decompression with FLZ.
    let out = run(&["tx.hex.flz", "restored.hex"], "", dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(dir.path().join("restored.hex")).unwrap(), format!("{CALLDATA}\n"));
}

#[test]
fn existing_output_requires_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.hex"), CALLDATA).unwrap();
    fs::write(dir.path().join("out.cd"), "keep me").unwrap();

    let out = run(&["in.hex", "out.cd"], "", dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_to_string(dir.path().join("out.cd")).unwrap(), "keep me");

    let out = run(&["-f", "in.hex", "out.cd"], "", dir.path());
    assert!(out.status.success());
    assert_ne!(fs::read_to_string(dir.path().join("out.cd")).unwrap(), "keep me");
}

#[test]
fn force_stdout_ignores_output_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.hex"), "0x11223344").unwrap();
    let out = run(&["-c", "in.hex", "never.cd"], "", dir.path());
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "0xeeddccbb\n");
    assert!(!dir.path().join("never.cd").exists());
}

// ── 3. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-t", "--flz"], CALLDATA, dir.path());
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

// ── 4. Multiple files ────────────────────────────────────────────────────────

#[test]
fn multiple_files_round_trip() {
    let dir = TempDir::new().unwrap();
    let names = ["a.hex", "b.hex", "c.hex", "d.hex"];
    for (i, name) in names.iter().enumerate() {
        fs::write(dir.path().join(name), format!("0x{}{}\n", "00".repeat(i * 40), "ab")).unwrap();
    }

    let mut args = vec!["-m", "-T2", "-q"];
    args.extend(names);
    let out = run(&args, "", dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    for name in names {
        fs::remove_file(dir.path().join(name)).unwrap();
    }
    let packed: Vec<String> = names.iter().map(|n| format!("{n}.cd")).collect();
    let mut args = vec!["-d", "-m"];
    args.extend(packed.iter().map(String::as_str));
    let out = run(&args, "", dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    for (i, name) in names.iter().enumerate() {
        let text = fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(text, format!("0x{}{}\n", "00".repeat(i * 40), "ab"));
    }
}

#[test]
fn multiple_files_partial_failure_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.hex"), "0x00").unwrap();
    let out = run(&["-m", "ok.hex", "missing.hex"], "", dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(dir.path().join("ok.hex.cd").exists());
}

#[test]
fn multiple_files_auto_mode_resolves_each_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.hex"), "0x11223344").unwrap();
    fs::write(dir.path().join("b.cd"), "0xeeddccbb").unwrap();

    let out = run(&["-m", "b.cd", "a.hex"], "", dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(dir.path().join("a.hex.cd")).unwrap(), "0xeeddccbb\n");
    assert_eq!(fs::read_to_string(dir.path().join("b")).unwrap(), "0x11223344\n");
}

// ── 5. Help, version, usage errors ───────────────────────────────────────────

#[test]
fn version_prints_banner() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-V"], "", dir.path());
    assert!(out.status.success());
    assert!(stdout_of(&out).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--help"], "", dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn bad_usage_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--no-such-option"], "", dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad usage"));
}

#[test]
fn bad_hex_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = run(&[], "0xa", dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("multiple of 2"));
}
