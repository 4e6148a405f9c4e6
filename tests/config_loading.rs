use std::error::Error;
use std::fs;
use std::path::PathBuf;

use watchnpm::config::{default_config_path, load_and_validate};
use watchnpm::errors::WatchnpmError;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<(tempfile::TempDir, PathBuf), Box<dyn Error>> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("Watchnpm.toml");
    fs::write(&path, contents)?;
    Ok((tmp, path))
}

#[test]
fn loads_a_complete_config() -> TestResult {
    let (_tmp, path) = write_config(
        r#"
[server]
port = 7777

[commands]
build = "npm run build"
test  = "npm test"
run   = "npm run dev"
start = "npm start"
serve = "npx serve build"
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.server.port, 7777);
    assert_eq!(cfg.commands.build, "npm run build");
    assert_eq!(cfg.commands.serve, "npx serve build");
    Ok(())
}

#[test]
fn run_command_is_optional() -> TestResult {
    let (_tmp, path) = write_config(
        r#"
[server]
port = 7777

[commands]
build = "npm run build"
test  = "npm test"
start = "npm start"
serve = "npx serve build"
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.commands.run, "");
    Ok(())
}

#[test]
fn missing_commands_section_is_fatal() -> TestResult {
    let (_tmp, path) = write_config("[server]\nport = 7777\n")?;

    let result = load_and_validate(&path);
    assert!(matches!(result, Err(WatchnpmError::Config(_))));
    Ok(())
}

#[test]
fn missing_required_command_key_is_fatal() -> TestResult {
    let (_tmp, path) = write_config(
        r#"
[server]
port = 7777

[commands]
test  = "npm test"
start = "npm start"
serve = "npx serve build"
"#,
    )?;

    let result = load_and_validate(&path);
    assert!(matches!(result, Err(WatchnpmError::Config(_))));
    Ok(())
}

#[test]
fn zero_port_is_rejected() -> TestResult {
    let (_tmp, path) = write_config(
        r#"
[server]
port = 0

[commands]
build = ""
test  = ""
start = ""
serve = ""
"#,
    )?;

    let result = load_and_validate(&path);
    assert!(matches!(result, Err(WatchnpmError::Config(_))));
    Ok(())
}

#[test]
fn missing_file_is_fatal() -> TestResult {
    let tmp = tempfile::tempdir()?;

    let result = load_and_validate(tmp.path().join("nope.toml"));
    assert!(matches!(result, Err(WatchnpmError::Config(_))));
    Ok(())
}

#[test]
fn empty_command_values_are_allowed() -> TestResult {
    let (_tmp, path) = write_config(
        r#"
[server]
port = 7777

[commands]
build = ""
test  = ""
start = ""
serve = ""
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.commands.build, "");
    Ok(())
}

#[test]
fn default_path_is_project_local() -> TestResult {
    assert_eq!(default_config_path(), PathBuf::from("Watchnpm.toml"));
    Ok(())
}
