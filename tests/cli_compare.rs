use std::path::PathBuf;
use std::process::{Command, Output};

#[rustfmt::skip]
const REFERENCE: [&str; 25] = [
    "0.269", "0.456", "0.677", "0.40800000000000003", "0.22100000000000003",
    "0.6510000000000001", "1.148", "1.6519999999999997", "1.001", "0.5040000000000001",
    "0.8860000000000002", "1.6019999999999996", "2.5129999999999995", "1.627", "0.911",
    "0.617", "1.146", "1.8359999999999996", "1.219", "0.6900000000000001",
    "0.235", "0.454", "0.861", "0.6260000000000001", "0.40700000000000003",
];

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_layer_deltas"))
        .args(args)
        .output()
        .unwrap()
}

fn expected_file(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("layer_deltas_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn default_output() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, REFERENCE);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn generated_output_is_close() {
    let output = run(&["--generated"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let values: Vec<f64> =
        stdout.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 25);
    for (v, r) in values.iter().zip(REFERENCE.iter()) {
        let r: f64 = r.parse().unwrap();
        assert!((v - r).abs() < 1e-9);
    }
}

#[test]
fn expected_file_matches() {
    let path = expected_file("match.txt", &REFERENCE.join("\n"));
    let output = run(&["-e", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "25 values match\n");
}

#[test]
fn expected_file_perturbed() {
    let mut values = REFERENCE.to_vec();
    values[0] = "0.27";
    let path = expected_file("perturbed.txt", &values.join("\n"));
    let output = run(&["-e", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0: expected 0.27, got 0.269"));
    assert!(stdout.contains("1 of 25 values differ"));
}

#[test]
fn expected_file_short() {
    let path = expected_file("short.txt", &REFERENCE[..24].join("\n"));
    let output = run(&["-e", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("24: expected missing"));
}

#[test]
fn expected_file_missing() {
    let output = run(&["-e", "/nonexistent/layer_deltas/expected.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
