// Integration tests for io/file_io.rs — sources, destinations and overwrite policy

use std::io::Write;

use libzip::io::file_io::{open_dst_file, read_src};
use libzip::io::{Prefs, NUL_MARK};
use tempfile::TempDir;

#[test]
fn read_src_returns_whole_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.hex");
    std::fs::write(&path, "0x00ff\n").unwrap();
    assert_eq!(read_src(path.to_str().unwrap()).unwrap(), b"0x00ff\n");
}

#[test]
fn new_destination_is_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.cd");
    let mut dst = open_dst_file(path.to_str().unwrap(), &Prefs::default()).unwrap();
    assert!(!dst.is_stdout);
    dst.write_all(b"0xff\n").unwrap();
    dst.flush().unwrap();
    drop(dst);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0xff\n");
}

#[test]
fn existing_destination_needs_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("taken.flz");
    std::fs::write(&path, "old").unwrap();
    let err = open_dst_file(path.to_str().unwrap(), &Prefs::default()).err().unwrap();
    assert!(err.to_string().contains("use -f"), "{err}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
}

#[test]
fn null_device_never_conflicts() {
    assert!(open_dst_file(NUL_MARK, &Prefs::default()).is_ok());
}
