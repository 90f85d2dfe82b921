use std::process::Command;

mod common;

use common::parse_line;

// Runs the full default sweep, about a minute in release mode:
// `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn prints_only_results_on_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_memory_latency"))
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    assert!(output.status.success(), "exit status {}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 17, "stdout:\n{}", stdout);

    let sizes: Vec<usize> = lines
        .iter()
        .map(|line| parse_line(line).unwrap_or_else(|| panic!("malformed line {:?}", line)).0)
        .collect();
    assert_eq!(sizes, (10..=26).map(|e| 1usize << e).collect::<Vec<_>>());

    for log_text in ["timing with the", "latency ranges from", "INFO", "WARN"] {
        assert!(!stdout.contains(log_text), "{:?} on stdout", log_text);
    }
    assert!(stderr.contains("timing with the"), "stderr:\n{}", stderr);
    assert!(stderr.contains("latency ranges from"), "stderr:\n{}", stderr);
}
