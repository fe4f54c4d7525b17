use std::process::Command;

fn calcpi() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calcpi"))
}

#[test]
fn test_reports_estimate() {
    let output = calcpi()
        .args(["100000", "-j", "2", "-r", "3", "-q"])
        .output()
        .expect("Failed to execute calcpi");

    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("calcpi failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("100000 steps across 2 worker threads"));
    assert!(stdout.contains("Calculation of Pi: 3.14159"));
    assert!(stdout.contains("Duration:"));
}

#[test]
fn test_missing_argument_fails() {
    let output = calcpi().output().expect("Failed to execute calcpi");
    assert!(!output.status.success());
}

#[test]
fn test_non_numeric_argument_fails() {
    let output = calcpi()
        .args(["lots", "-q"])
        .output()
        .expect("Failed to execute calcpi");
    assert!(!output.status.success());
}

#[test]
fn test_non_positive_steps_fail() {
    for steps in ["0", "-5"] {
        let output = calcpi()
            .args([steps, "-q"])
            .output()
            .expect("Failed to execute calcpi");

        assert!(!output.status.success(), "{} steps should fail", steps);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("step count must be a positive integer"),
            "unexpected stderr: {}",
            stderr
        );
    }
}

#[test]
fn test_zero_threads_fail() {
    let output = calcpi()
        .args(["1000", "-j", "0", "-q"])
        .output()
        .expect("Failed to execute calcpi");
    assert!(!output.status.success());
}
