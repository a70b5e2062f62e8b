use assert_cmd::cargo; // handy crate for testing CLIs

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"))
        .stdout(predicates::str::contains("--tone"))
        .stdout(predicates::str::contains("--ollama-url"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_model_with_no_model() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--model", "llama3.2", "--no-model"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot be used with"));
}

/// An empty directory outside any git repository, also used as `$HOME`.
fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("snippety-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn fails_cleanly_outside_a_repository() {
    let dir = scratch_dir("no-repo");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(&dir)
        .env("HOME", &dir)
        .env("GIT_CEILING_DIRECTORIES", std::env::temp_dir())
        .args(["--auto-stage", "false", "--no-model"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error getting staged diff"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reads_settings_from_env() {
    let dir = scratch_dir("env");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(&dir)
        .env("HOME", &dir)
        .env("GIT_CEILING_DIRECTORIES", std::env::temp_dir())
        .env("SNIPPETY_MODEL", "env-model")
        .env("SNIPPETY_TONE", "pirate")
        .env("SNIPPETY_TIMEOUT", "7")
        .env("SNIPPETY_OLLAMA_URL", "http://env-host:11434")
        .args(["--auto-stage", "false", "-vv"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(r#"model: Some("env-model")"#))
        .stderr(predicates::str::contains("tone: Pirate"))
        .stderr(predicates::str::contains("timeout: 7s"))
        .stderr(predicates::str::contains("http://env-host:11434"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn flags_override_env() {
    let dir = scratch_dir("env-override");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(&dir)
        .env("HOME", &dir)
        .env("GIT_CEILING_DIRECTORIES", std::env::temp_dir())
        .env("SNIPPETY_MODEL", "env-model")
        .env("SNIPPETY_TIMEOUT", "7")
        .args(["--auto-stage", "false", "-vv", "--model", "cli-model", "--timeout", "9"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(r#"model: Some("cli-model")"#))
        .stderr(predicates::str::contains("timeout: 9s"));

    let _ = std::fs::remove_dir_all(&dir);
}
