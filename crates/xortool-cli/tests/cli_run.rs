// crates/xortool-cli/tests/cli_run.rs

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use xortool_core::dexor::dexor;

const FOX: &[u8] = b"the quick brown fox the quick brown fox";

fn xortool(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xortool"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn xortool")
}

fn assert_ok(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn guesses_length_and_writes_plaintexts() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();

    let out = xortool(tmp.path(), &["-c", " ", "fox.bin"]);
    let stdout = assert_ok(&out);

    assert!(stdout.contains("Probable key lengths:"), "{stdout}");
    assert!(stdout.contains("   3:   "), "{stdout}");
    assert!(stdout.contains("possible key(s) of length 3:"), "{stdout}");

    let out_dir = tmp.path().join("xortool_out");
    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 13, "{names:?}");
    assert!(names.iter().all(|n| n.len() > 3 && n.as_bytes()[2] == b'_'), "{names:?}");

    let abc = names
        .iter()
        .find(|n| n.ends_with("_abc"))
        .expect("plaintext for key abc");
    assert_eq!(fs::read(out_dir.join(abc)).unwrap(), FOX.to_vec());
}

#[test]
fn hex_input_with_known_length() {
    let tmp = tempfile::tempdir().unwrap();
    let text = hex_lines(&dexor(FOX, b"abc"));
    fs::write(tmp.path().join("fox.hex"), text).unwrap();

    let out = xortool(
        tmp.path(),
        &["-x", "-l", "3", "-c", "20", "--no-plaintexts", "fox.hex"],
    );
    let stdout = assert_ok(&out);

    assert!(!stdout.contains("Probable key lengths:"), "{stdout}");
    assert!(stdout.contains("13 possible key(s) of length 3:"), "{stdout}");
    assert!(stdout.contains("..."), "{stdout}");
    assert!(!tmp.path().join("xortool_out").exists());
}

#[test]
fn output_dir_is_recreated() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();
    let out_dir = tmp.path().join("plain");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("stale"), b"old").unwrap();

    let out = xortool(
        tmp.path(),
        &["-l", "3", "-c", " ", "--limit", "2", "-o", "plain", "fox.bin"],
    );
    assert_ok(&out);

    assert!(!out_dir.join("stale").exists());
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 2);
}

#[test]
fn missing_char_fails_after_reporting_lengths() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();

    let out = xortool(tmp.path(), &["fox.bin"]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stdout.contains("Probable key lengths:"), "{stdout}");
    assert!(stderr.contains("most frequent plaintext byte"), "{stderr}");
    assert!(!tmp.path().join("xortool_out").exists());
}

#[test]
fn single_byte_input_has_no_length() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("one.bin"), b"\x42").unwrap();

    let out = xortool(tmp.path(), &["-c", " ", "-m", "8", "one.bin"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no probable key length"), "{stderr}");
    assert!(!tmp.path().join("xortool_out").exists());
}

#[test]
fn zero_limit_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();

    let out = xortool(
        tmp.path(),
        &["-l", "3", "-c", " ", "--limit", "0", "--no-plaintexts", "fox.bin"],
    );
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("No keys guessed!"), "{stdout}");
}

#[test]
fn limited_listing_still_reports_full_count() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();

    let out = xortool(
        tmp.path(),
        &["-l", "3", "-c", " ", "--limit", "1", "--no-plaintexts", "fox.bin"],
    );
    let stdout = assert_ok(&out);
    assert!(stdout.contains("13 possible key(s) of length 3:"), "{stdout}");
    assert!(stdout.contains("..."), "{stdout}");
}

#[test]
fn key_length_far_beyond_input_guesses_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("fox.bin"), dexor(FOX, b"abc")).unwrap();

    let out = xortool(tmp.path(), &["-l", "100000000000", "-c", " ", "fox.bin"]);
    let stdout = assert_ok(&out);
    assert!(stdout.contains("No keys guessed!"), "{stdout}");
    assert!(!tmp.path().join("xortool_out").exists());
}

fn hex_lines(bytes: &[u8]) -> String {
    let mut s = String::new();
    for chunk in bytes.chunks(16) {
        for b in chunk {
            s.push_str(&format!("{b:02x}"));
        }
        s.push('\n');
    }
    s
}
