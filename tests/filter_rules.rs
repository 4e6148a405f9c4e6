use std::error::Error;

use watchnpm::watch::{FilterRules, FilterSpec};

type TestResult = Result<(), Box<dyn Error>>;

fn rules(spec: FilterSpec) -> FilterRules {
    FilterRules::new(spec).expect("rules should compile")
}

fn js_project_rules() -> FilterRules {
    rules(FilterSpec {
        included_extensions: vec![".js".into()],
        excluded_folders: vec!["node_modules".into()],
        ..FilterSpec::default()
    })
}

#[test]
fn included_extension_marks_path_watched() -> TestResult {
    let rules = js_project_rules();

    assert!(rules.is_watched("src/app.js"));
    assert!(!rules.is_watched("src/app.css"));
    Ok(())
}

#[test]
fn excluded_folder_dominates_included_extension() -> TestResult {
    let rules = js_project_rules();

    assert!(rules.is_watched("src/app.js"));
    assert!(!rules.is_watched("node_modules/lib/app.js"));
    Ok(())
}

#[test]
fn excluded_extension_dominates_included_extension() -> TestResult {
    // "app.min.js" ends with both the included ".js" and the excluded
    // ".min.js"; the exclusion pass runs later and wins.
    let rules = rules(FilterSpec {
        included_extensions: vec![".js".into()],
        excluded_extensions: vec![".min.js".into()],
        ..FilterSpec::default()
    });

    assert!(rules.is_watched("src/app.js"));
    assert!(!rules.is_watched("dist/app.min.js"));
    Ok(())
}

#[test]
fn excluded_file_substring_dominates() -> TestResult {
    let rules = rules(FilterSpec {
        included_extensions: vec![".js".into()],
        excluded_files: vec!["generated".into()],
        ..FilterSpec::default()
    });

    assert!(rules.is_watched("src/app.js"));
    assert!(!rules.is_watched("src/generated.js"));
    Ok(())
}

#[test]
fn excluded_pattern_dominates() -> TestResult {
    let rules = rules(FilterSpec {
        included_extensions: vec![".js".into(), ".html".into()],
        excluded_patterns: vec!["~".into(), "#".into()],
        ..FilterSpec::default()
    });

    assert!(rules.is_watched("index.html"));
    assert!(!rules.is_watched("src/app.js~"));
    assert!(!rules.is_watched("src/#app.js#.js"));
    Ok(())
}

#[test]
fn empty_include_list_watches_nothing() -> TestResult {
    let rules = rules(FilterSpec {
        excluded_folders: vec!["node_modules".into()],
        ..FilterSpec::default()
    });

    assert!(!rules.is_watched("src/app.js"));
    assert!(!rules.is_watched("index.html"));
    assert!(!rules.is_watched(""));
    Ok(())
}

#[test]
fn classification_is_deterministic() -> TestResult {
    let rules = js_project_rules();

    for _ in 0..3 {
        assert!(rules.is_watched("src/app.js"));
        assert!(!rules.is_watched("node_modules/lib/app.js"));
    }
    Ok(())
}

#[test]
fn bare_folder_name_path_is_a_no_op() -> TestResult {
    let rules = js_project_rules();

    // A path equal to a folder name is a conformant input, not an error.
    assert!(!rules.is_watched("node_modules"));
    assert!(!rules.is_watched("src"));
    Ok(())
}

#[test]
fn invalid_exclude_pattern_is_a_construction_error() -> TestResult {
    let result = FilterRules::new(FilterSpec {
        excluded_patterns: vec!["[unclosed".into()],
        ..FilterSpec::default()
    });

    assert!(result.is_err());
    Ok(())
}
