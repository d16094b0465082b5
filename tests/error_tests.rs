//! Error scenario integration tests

use std::process::Command;

fn ccnotify_bin(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ccnotify"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_STATE_HOME", home.join(".local").join("state"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key") && stderr.contains("sound.volume"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["config", "set", "sound.pitch", "3"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sound.pitch"), "got: {}", stderr);
}

#[test]
fn config_set_volume_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["config", "set", "sound.volume", "150"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 0 and 100"), "got: {}", stderr);
}

#[test]
fn config_set_invalid_bool() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["config", "set", "notification.enabled", "sometimes"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'true' or 'false'"), "got: {}", stderr);
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_twice_fails() {
    let home = tempfile::tempdir().unwrap();

    let first = ccnotify_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = ccnotify_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}

#[test]
fn invalid_logs_flags() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["logs", "--follow", "--clear"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_logs_line_count() {
    let home = tempfile::tempdir().unwrap();
    let output = ccnotify_bin(home.path())
        .args(["logs", "-n", "many"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
