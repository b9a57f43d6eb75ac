use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_strhunt(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strhunt"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute strhunt");

    // The process may exit before reading stdin (argument errors)
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for strhunt")
}

#[test]
fn test_interactive_session() {
    let output = run_strhunt(&["--seed", "7", "-j", "4"], "200\n0\n");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Insert the string size:"),
        "Should prompt for the size"
    );
    assert!(
        stdout.contains("Generating string with size 200..."),
        "Should announce generation"
    );
    assert!(stdout.contains("String generated!"));
    assert!(stdout.contains("Insert a word:"), "Should prompt for a word");
}

#[test]
fn test_found_word_from_printed_string() {
    let args = ["--seed", "42", "-j", "3", "--size", "300", "--print"];

    let output = run_strhunt(&args, "0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let dumped = stdout
        .lines()
        .find(|l| l.len() == 300)
        .expect("Should print the generated string")
        .to_string();

    let word = &dumped[150..155];
    let output = run_strhunt(&args, &format!("{}\n0\n", word));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("{} is in the string!", word)),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_missing_word() {
    let output = run_strhunt(&["--size", "500", "--alphabet", "ab"], "abc\n0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("It looks like abc is not in the string."));
}

#[test]
fn test_several_words_on_one_line() {
    let output = run_strhunt(&["--size", "100", "--alphabet", "a"], "aaa b aaaa 0 aaa\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aaa is in the string!"));
    assert!(stdout.contains("It looks like b is not in the string."));
    assert!(stdout.contains("aaaa is in the string!"));
    // Nothing after the exit token is answered
    let answers = stdout
        .lines()
        .filter(|l| *l == "aaa is in the string!")
        .count();
    assert_eq!(answers, 1);
}

#[test]
fn test_compare_reports_timings() {
    let output = run_strhunt(&["--size", "1000", "--compare"], "xyz\n0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parallel:"));
    assert!(stdout.contains("sequential:"));
}

#[test]
fn test_zero_workers_is_configuration_error() {
    let output = run_strhunt(&["-j", "0", "--size", "10"], "0\n");
    assert!(!output.status.success(), "Command should fail with zero workers");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Configuration error"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_size() {
    let output = run_strhunt(&[], "lots\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid string size"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_alphabet_rejected_by_cli() {
    let output = run_strhunt(&["--alphabet", "aa", "--size", "5"], "0\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate"), "stderr: {}", stderr);
}

#[test]
fn test_non_ascii_alphabet_rejected_by_cli() {
    let output = run_strhunt(&["--alphabet", "éè", "--size", "5"], "0\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ASCII"), "stderr: {}", stderr);
}

#[test]
fn test_size_beyond_address_space() {
    let output = run_strhunt(&[], "18446744073709551615\n0\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid string size"), "stderr: {}", stderr);
}
