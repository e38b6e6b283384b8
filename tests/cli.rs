use std::process::Command;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fbasenc"))
}

#[test]
fn test_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, b"foobar").unwrap();

    let output = cmd()
        .args(["--base32hex", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"CPNMUOJ1E8======\n");
}

#[test]
fn test_large_file_is_mapped_and_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let plain: Vec<u8> = (0..=255u8).cycle().take(3 * 1024 * 1024).collect();
    let encoded_path = dir.path().join("encoded.b64");

    let plain_path = dir.path().join("plain.bin");
    std::fs::write(&plain_path, &plain).unwrap();
    let enc = cmd()
        .args(["--base64", plain_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(enc.status.success());
    std::fs::write(&encoded_path, &enc.stdout).unwrap();

    let dec = cmd()
        .args(["--base64", "-d", encoded_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(dec.status.success());
    assert_eq!(dec.stdout, plain);
}

#[test]
fn test_dash_reads_stdin() {
    let output = cmd()
        .args(["--base16", "-"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope");
    let output = cmd()
        .args(["--base64", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = format!("basenc: {}: No such file or directory", path.display());
    assert!(stderr.starts_with(&expected), "{}", stderr);
    assert!(!stderr.contains("os error"));
}
