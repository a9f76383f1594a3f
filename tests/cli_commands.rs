//! Tests for CLI commands (serve, hash-password, issue-token)

use std::process::{Command, Output};

const SECRET: &str = "test_secret_key_minimum_32_characters_long";

fn gymdesk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gymdesk"))
        .args(args)
        .args(["--config", "does/not/exist.toml"])
        .env("RUST_LOG", "off")
        .env("SESSION_SECRET", SECRET)
        .output()
        .expect("Failed to run gymdesk")
}

fn last_stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .last()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[test]
fn test_cli_help_shows_all_commands() {
    let output = gymdesk(&["--help"]);
    let help_text = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(help_text.contains("serve"), "serve command not in help");
    assert!(help_text.contains("hash-password"), "hash-password command not in help");
    assert!(help_text.contains("issue-token"), "issue-token command not in help");
}

#[test]
fn test_hash_password_prints_argon2_hash() {
    let output = gymdesk(&["hash-password", "Password123"]);

    assert!(output.status.success());
    let hash = last_stdout_line(&output);
    assert!(hash.starts_with("$argon2id$"), "unexpected output: {hash}");
    assert!(gymdesk::password::verify_password("Password123", &hash));
}

#[test]
fn test_issue_token_prints_a_token_the_codec_accepts() {
    let output = gymdesk(&["issue-token", "member-7", "--role", "coach"]);

    assert!(output.status.success());
    let token = last_stdout_line(&output);
    let codec =
        gymdesk_session::SessionCodec::new(SECRET, std::time::Duration::from_secs(60)).unwrap();
    let payload = codec.decode(&token).expect("issued token should be valid");
    assert_eq!(payload.sub, "member-7");
    assert_eq!(payload.role, "coach");
}

#[test]
fn test_issue_token_refuses_short_secret() {
    let output = Command::new(env!("CARGO_BIN_EXE_gymdesk"))
        .args(["--config", "does/not/exist.toml", "issue-token", "member-7"])
        .env("RUST_LOG", "off")
        .env("SESSION_SECRET", "short")
        .output()
        .expect("Failed to run gymdesk");

    assert!(!output.status.success());
}

#[test]
fn test_serve_refuses_invalid_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_gymdesk"))
        .args(["--config", "does/not/exist.toml", "serve"])
        .env("RUST_LOG", "off")
        .env("SESSION_SECRET", SECRET)
        .env("GYMDESK__SESSION__LIFETIME_SECONDS", "0")
        .output()
        .expect("Failed to run gymdesk");

    assert!(!output.status.success());
}
