//! End-to-end tests for the `modforge` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp project containing `package.json`.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{}").unwrap();
    tmp
}

/// `modforge` isolated from the user's config and colour settings.
fn modforge(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modforge").unwrap();
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn module_dir(root: &Path, pascal: &str) -> std::path::PathBuf {
    root.join("src/Modules").join(pascal)
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();
    modforge(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Express module scaffolding"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    modforge(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn test_new_creates_full_module() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "blog_post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module Created"))
        .stdout(predicate::str::contains(
            "import { BlogPostModule } from './Modules/BlogPost';",
        ))
        .stdout(predicate::str::contains("app.use(BlogPostModule);"));

    let module = module_dir(tmp.path(), "BlogPost");
    for file in [
        "index.ts",
        "controllers/blog_post.controller.ts",
        "controllers/index.ts",
        "middlewares/blog_post.middleware.ts",
        "middlewares/index.ts",
        "routes/blog_post.route.ts",
        "routes/index.ts",
        "services/blog_post.service.ts",
        "services/index.ts",
        "repositories/blog_post.repository.ts",
        "repositories/index.ts",
    ] {
        assert!(module.join(file).is_file(), "missing {file}");
    }

    assert_eq!(
        fs::read_to_string(module.join("repositories/blog_post.repository.ts")).unwrap(),
        "export class BlogPostRepository {\n    // Define repository methods here\n}"
    );
    assert_eq!(
        fs::read_to_string(module.join("repositories/index.ts")).unwrap(),
        "export { BlogPostRepository } from './blog_post.repository';\n"
    );
}

#[test]
fn test_interactive_prompt_reads_stdin() {
    let tmp = project();

    modforge(tmp.path())
        .write_stdin("user\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the module name"))
        .stdout(predicate::str::contains("Module Created"));

    assert!(module_dir(tmp.path(), "User").join("index.ts").is_file());
}

#[test]
fn test_empty_name_is_rejected() {
    let tmp = project();

    modforge(tmp.path())
        .write_stdin("   \n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Module name cannot be empty"));

    assert!(!tmp.path().join("src").exists());
}

#[test]
fn test_invalid_name_is_rejected() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "bad name!"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Invalid module name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!tmp.path().join("src").exists());
}

#[test]
fn test_name_without_letters_is_rejected() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "_"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no letters or digits"));

    assert!(!tmp.path().join("src").exists());
}

#[test]
fn test_closed_stdin_is_cancelled() {
    let tmp = project();

    modforge(tmp.path())
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));
}

#[test]
fn test_missing_project_root() {
    let tmp = TempDir::new().unwrap();

    modforge(tmp.path())
        .args(["new", "user"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot find project root"))
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_rerun_keeps_edits() {
    let tmp = project();
    modforge(tmp.path()).args(["new", "user"]).assert().success();

    let controller = module_dir(tmp.path(), "User").join("controllers/user.controller.ts");
    fs::write(&controller, "// mine").unwrap();

    modforge(tmp.path())
        .args(["new", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists, kept"))
        .stdout(predicate::str::contains("nothing written"));

    assert_eq!(fs::read_to_string(&controller).unwrap(), "// mine");
}

#[test]
fn test_missing_files_are_filled_in() {
    let tmp = project();
    modforge(tmp.path()).args(["new", "user"]).assert().success();

    let route = module_dir(tmp.path(), "User").join("routes/user.route.ts");
    fs::remove_file(&route).unwrap();

    modforge(tmp.path()).args(["new", "user"]).assert().success();
    assert!(
        fs::read_to_string(&route)
            .unwrap()
            .starts_with("import { Router } from 'express';")
    );
}

#[test]
fn test_dir_flag_searches_upwards() {
    let tmp = project();
    let nested = tmp.path().join("src/deep/er");
    fs::create_dir_all(&nested).unwrap();
    let elsewhere = TempDir::new().unwrap();

    modforge(elsewhere.path())
        .args(["new", "order", "--dir"])
        .arg(&nested)
        .assert()
        .success();

    assert!(module_dir(tmp.path(), "Order").join("index.ts").is_file());
}

#[test]
fn test_dir_flag_must_exist() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "order", "--dir", "no/such/dir"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "user", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("user.controller.ts"));

    assert!(!tmp.path().join("src").exists());
}

#[test]
fn test_dry_run_marks_existing_files() {
    let tmp = project();
    modforge(tmp.path()).args(["new", "user"]).assert().success();
    let controller = module_dir(tmp.path(), "User").join("controllers/user.controller.ts");
    fs::remove_file(&controller).unwrap();

    modforge(tmp.path())
        .args(["new", "user", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user.route.ts (exists, kept)"))
        .stdout(predicate::str::contains("+ src/Modules/User/controllers/user.controller.ts"));

    assert!(!controller.exists());
}

#[test]
fn test_subfolders_flag() {
    let tmp = project();

    modforge(tmp.path())
        .args(["new", "user", "--subfolders", "controllers,routes"])
        .assert()
        .success();

    let module = module_dir(tmp.path(), "User");
    assert!(module.join("controllers/user.controller.ts").is_file());
    assert!(module.join("routes/index.ts").is_file());
    assert!(!module.join("services").exists());
}

#[test]
fn test_json_output() {
    let tmp = project();

    let out = modforge(tmp.path())
        .args(["--output-format", "json", "new", "user"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["created"].as_array().unwrap().len(), 11);
    assert!(report["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let tmp = project();

    modforge(tmp.path())
        .args(["--quiet", "new", "user"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_modules_dir() {
    let tmp = project();

    modforge(tmp.path())
        .env("MODFORGE_GENERATOR__MODULES_DIR", "lib/modules")
        .args(["new", "user"])
        .assert()
        .success();

    assert!(tmp.path().join("lib/modules/User/index.ts").is_file());
}

#[test]
fn test_config_file_overrides_subfolders() {
    let tmp = project();
    let config = tmp.path().join("modforge.toml");
    fs::write(&config, "[generator]\nsubfolders = [\"routes\"]\n").unwrap();

    modforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "user"])
        .assert()
        .success();

    let module = module_dir(tmp.path(), "User");
    assert!(module.join("routes/user.route.ts").is_file());
    assert!(!module.join("controllers").exists());
}

#[test]
fn test_explicit_missing_config_fails() {
    let tmp = project();

    modforge(tmp.path())
        .args(["--config", "absent.toml", "new", "user"])
        .assert()
        .code(4);
}

#[test]
fn test_config_get() {
    let tmp = TempDir::new().unwrap();

    modforge(tmp.path())
        .args(["config", "get", "generator.modules_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/Modules"));
}

#[test]
fn test_config_init_writes_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("conf/modforge.toml");

    modforge(tmp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[generator]"));
    assert!(written.contains("repositories"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_bash_completions() {
    let tmp = TempDir::new().unwrap();

    modforge(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modforge"));
}
