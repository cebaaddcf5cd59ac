#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Runner isolated from the developer's own configuration.
pub fn lp() -> Command {
    let home = env::temp_dir().join("lessonplanner_test_home");
    fs::create_dir_all(&home).ok();
    lp_with_home(&home)
}

/// Runner whose config lives under `home`.
pub fn lp_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("lessonplanner");
    cmd.env("NO_COLOR", "1")
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env("APPDATA", home);
    cmd
}

/// Fresh empty directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("lessonplanner_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Location of the config file for a given `home`.
pub fn config_file_in(home: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        home.join("lessonplanner").join("lessonplanner.conf")
    } else {
        home.join(".lessonplanner").join("lessonplanner.conf")
    }
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lessonplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lessonplanner_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    lp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a plan through the CLI and return the id printed in the acknowledgment.
pub fn add_plan(db_path: &str, subject: &str, class: &str, topic: &str, date: &str) -> String {
    let output = lp()
        .args([
            "--db", db_path, "add", "--teacher", "Ms. Rossi", "--subject", subject, "--class",
            class, "--topic", topic, "--type", "Lecture", "--date", date,
        ])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_id(&stdout).expect("id in add output")
}

pub fn extract_id(stdout: &str) -> Option<String> {
    let start = stdout.find("(id: ")? + "(id: ".len();
    let end = stdout[start..].find(')')? + start;
    Some(stdout[start..end].to_string())
}

/// Lines of `list` output that start with a plan id (`<millis>-<suffix>`).
pub fn plan_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| {
            let first = l.split(' ').next().unwrap_or("");
            first.contains('-') && first.starts_with(|c: char| c.is_ascii_digit())
        })
        .map(str::to_string)
        .collect()
}
