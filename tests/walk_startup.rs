use std::error::Error;
use std::fs;

use watchnpm::watch::{FilterRules, FilterSpec, watched_files};

type TestResult = Result<(), Box<dyn Error>>;

fn js_rules() -> FilterRules {
    FilterRules::new(FilterSpec {
        included_extensions: vec![".js".into()],
        excluded_folders: vec!["node_modules".into(), "build".into()],
        ..FilterSpec::default()
    })
    .expect("rules should compile")
}

#[test]
fn reports_only_watched_files() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path();

    fs::create_dir_all(root.join("src"))?;
    fs::write(root.join("src").join("app.js"), "x")?;
    fs::write(root.join("src").join("notes.md"), "x")?;
    fs::write(root.join("index.js"), "x")?;

    let mut watched = watched_files(root, &js_rules());
    watched.sort();

    assert_eq!(watched, vec!["index.js", "src/app.js"]);
    Ok(())
}

#[test]
fn skips_first_level_excluded_folders_wholesale() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path();

    fs::create_dir_all(root.join("node_modules").join("lib"))?;
    fs::write(root.join("node_modules").join("lib").join("dep.js"), "x")?;
    fs::create_dir_all(root.join("build"))?;
    fs::write(root.join("build").join("out.js"), "x")?;
    fs::create_dir_all(root.join("src"))?;
    fs::write(root.join("src").join("app.js"), "x")?;

    let watched = watched_files(root, &js_rules());

    assert_eq!(watched, vec!["src/app.js"]);
    Ok(())
}

#[test]
fn nested_excluded_folders_are_filtered_by_the_classifier() -> TestResult {
    // "src/node_modules" is not first-level, so the walk descends into it;
    // the substring pass of is_watched still rejects every path inside.
    let tmp = tempfile::tempdir()?;
    let root = tmp.path();

    fs::create_dir_all(root.join("src").join("node_modules"))?;
    fs::write(root.join("src").join("node_modules").join("dep.js"), "x")?;
    fs::write(root.join("src").join("app.js"), "x")?;

    let watched = watched_files(root, &js_rules());

    assert_eq!(watched, vec!["src/app.js"]);
    Ok(())
}

#[test]
fn unreadable_subdirectory_does_not_abort_the_walk() -> TestResult {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir()?;
        let root = tmp.path();

        fs::create_dir_all(root.join("locked"))?;
        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("src").join("app.js"), "x")?;

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        let watched = watched_files(root, &js_rules());

        // Restore permissions so the tempdir can be removed.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        assert_eq!(watched, vec!["src/app.js"]);
    }
    Ok(())
}
