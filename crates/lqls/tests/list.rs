use std::path::PathBuf;
use std::process::Command;

fn lqls_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lqls"))
}

fn list(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(lqls_binary())
        .arg("list")
        .args(args)
        .output()
        .expect("Failed to run lqls");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn list_filters_in_category() {
    let (code, stdout, _) = list(&["filters", "--category", "money"]);

    assert_eq!(code, Some(0));
    assert!(stdout.lines().any(|line| line == "money\tMoney"), "stdout: {stdout}");
    assert!(stdout.lines().all(|line| line.ends_with("\tMoney")));
}

#[test]
fn list_tags() {
    let (code, stdout, _) = list(&["tags"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().count(), 31);
    assert!(stdout.lines().any(|line| line.starts_with("for\t")));
}

#[test]
fn list_objects() {
    let (code, stdout, _) = list(&["objects"]);

    assert_eq!(code, Some(0));
    assert!(stdout.lines().any(|line| line.starts_with("product\t")));
}

#[test]
fn list_unknown_category() {
    let (code, _, stderr) = list(&["filters", "--category", "nope"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Unknown category `nope`"), "stderr: {stderr}");
}
