use std::fmt::Write as _;
use std::path::Path;

use super::*;
use crate::config::{PerformanceConfig, QualityConfig};
use crate::filesystem::mock_fs::MockFileSystem;
use crate::rules::{CheckResult, CssTree};

const ROOT: &str = "/site/css";

fn evaluate(check: &dyn Check, fs: &MockFileSystem) -> CheckResult {
    let tree = CssTree::load(fs, Path::new(ROOT)).unwrap();
    check.evaluate(&tree).unwrap()
}

fn with_components(files: &[(&str, &str)]) -> MockFileSystem {
    files.iter().fold(
        MockFileSystem::new().with_dir("/site/css/components"),
        |fs, (name, content)| fs.with_file(format!("{ROOT}/components/{name}"), content),
    )
}

fn variables_with(count: usize) -> String {
    let mut css = String::from(":root {\n");
    for i in 0..count {
        let _ = writeln!(css, "  --token-{i}: {i}px;");
    }
    css.push('}');
    css
}

// ============================================================================
// Component structure
// ============================================================================

#[test]
fn structure_passes_with_exact_set() {
    let fs = with_components(&[("a.css", ""), ("b.css", "")]);
    let check = ComponentStructure::new(vec!["a.css".into(), "b.css".into()]);
    let result = evaluate(&check, &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("All 2"));
}

#[test]
fn structure_reports_missing_and_extra() {
    let fs = with_components(&[("a.css", ""), ("stray.css", ""), ("notes.txt", "")]);
    let check = ComponentStructure::new(vec!["a.css".into(), "b.css".into()]);
    let result = evaluate(&check, &fs);
    assert!(result.is_failed());
    assert_eq!(result.message(), "Missing: b.css. Extra: stray.css");
}

// ============================================================================
// Custom properties
// ============================================================================

#[test]
fn custom_properties_at_minimum_passes() {
    let fs = with_components(&[]).with_file("/site/css/base/variables.css", &variables_with(100));
    let result = evaluate(&CustomProperties::new(100), &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("100"));
}

#[test]
fn custom_properties_below_minimum_warns_with_count() {
    let fs = with_components(&[]).with_file("/site/css/base/variables.css", &variables_with(99));
    let result = evaluate(&CustomProperties::new(100), &fs);
    assert!(result.is_warning());
    assert!(result.message().contains("99"));
}

#[test]
fn custom_properties_missing_file_fails() {
    let fs = with_components(&[]);
    let result = evaluate(&CustomProperties::new(100), &fs);
    assert!(result.is_failed());
    assert!(result.message().contains("variables.css"));
}

// ============================================================================
// BEM naming
// ============================================================================

fn bem_check() -> BemNaming {
    let classifier = BemClassifier::new(&crate::config::BemConfig::default()).unwrap();
    BemNaming::new(classifier, 5.0, 15.0)
}

#[test]
fn bem_quarter_violations_fails_and_lists_offender() {
    let fs = with_components(&[(
        "cards.css",
        ".btn {}\n.btn--primary {}\n.card__title {}\n.Card_Title {}\n",
    )]);
    let result = evaluate(&bem_check(), &fs);
    assert!(result.is_failed());
    assert!(result.message().contains("75.0%"));
    assert!(result.message().contains("(1/4 violations"));
    assert!(result.message().contains("Card_Title"));
}

#[test]
fn bem_ignores_declaration_values() {
    let fs = with_components(&[(
        "spacing.css",
        ".card { margin: .5rem; background: url(\"img/Bad_Name.png\"); }\n",
    )]);
    let result = evaluate(&bem_check(), &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("(0/1 violations"));
}

#[test]
fn bem_between_thresholds_warns() {
    // 1 violation out of 10 tokens = 10%
    let mut css = String::new();
    for i in 0..9 {
        let _ = writeln!(css, ".block-{i} {{}}");
    }
    css.push_str(".Bad {}\n");
    let fs = with_components(&[("list.css", css.as_str())]);
    let result = evaluate(&bem_check(), &fs);
    assert!(result.is_warning());
}

// ============================================================================
// No !important
// ============================================================================

#[test]
fn important_absent_passes() {
    let fs = with_components(&[("a.css", ".a { color: red; }")]);
    let result = evaluate(&NoImportant::new(&[]).unwrap(), &fs);
    assert!(result.is_passed());
}

#[test]
fn important_counted_across_files() {
    let fs = with_components(&[
        ("a.css", ".a { color: red !important; margin: 0 !important; }"),
        ("b.css", ".b { color: blue !important; }"),
        ("c.css", ".c { color: green; }"),
    ]);
    let result = evaluate(&NoImportant::new(&[]).unwrap(), &fs);
    assert!(result.is_failed());
    assert!(result.message().starts_with("Found 3 !important declarations in 2 of 3"));
}

#[test]
fn important_in_allowed_file_is_exempt() {
    let fs = with_components(&[("bootstrap-custom.css", ".x { color: red !important; }")]);
    let check = NoImportant::new(&["bootstrap-*.css".to_string()]).unwrap();
    let result = evaluate(&check, &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("1 exempt"));
}

// ============================================================================
// Responsive design
// ============================================================================

#[test]
fn responsive_meets_minimums() {
    let css = "@media (min-width: 576px) and (max-width: 767px) {}\n".repeat(5);
    let fs = with_components(&[]).with_file("/site/css/base/responsive.css", &css);
    let result = evaluate(&ResponsiveDesign::new(5, 10), &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("Found 5 media queries with 10 breakpoints"));
}

#[test]
fn responsive_below_minimums_warns() {
    let css = "@media (min-width: 576px) {}\n";
    let fs = with_components(&[]).with_file("/site/css/base/responsive.css", css);
    let result = evaluate(&ResponsiveDesign::new(5, 10), &fs);
    assert!(result.is_warning());
}

#[test]
fn responsive_missing_file_fails() {
    let fs = with_components(&[]);
    let result = evaluate(&ResponsiveDesign::new(5, 10), &fs);
    assert!(result.is_failed());
}

// ============================================================================
// Accessibility
// ============================================================================

#[test]
fn accessibility_counts_files_per_signal() {
    let fs = with_components(&[
        ("a.css", ".a:focus { outline: 2px solid; }"),
        ("b.css", ".b[aria-expanded] { box-shadow: none; }"),
        ("c.css", ".c {}"),
    ]);
    let result = evaluate(&Accessibility::new(10), &fs);
    assert!(result.is_warning());
    assert!(
        result
            .message()
            .contains("1 focus styles, 1 ARIA styles, 2 contrast features (total 4")
    );
}

#[test]
fn accessibility_reaching_minimum_passes() {
    let fs = with_components(&[("a.css", ".a:focus { outline: 0; } .sr-only {}")]);
    let result = evaluate(&Accessibility::new(3), &fs);
    assert!(result.is_passed());
}

// ============================================================================
// Performance
// ============================================================================

#[test]
fn performance_small_files_pass() {
    let fs = with_components(&[("a.css", ".a {\n  color: red;\n}\n")]);
    let result = evaluate(&Performance::new(PerformanceConfig::default()), &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("4 avg lines"));
}

#[test]
fn performance_complex_selectors_warn() {
    // 1 complex selector over 2 lines = 50%
    let fs = with_components(&[("a.css", ".a .b > .c + .d { color: red; }\n")]);
    let result = evaluate(&Performance::new(PerformanceConfig::default()), &fs);
    assert!(result.is_warning());
    assert!(result.message().contains("50.0% complexity"));
}

#[test]
fn performance_with_no_components_is_zero() {
    let fs = with_components(&[]);
    let result = evaluate(&Performance::new(PerformanceConfig::default()), &fs);
    assert!(result.is_passed());
    assert!(result.message().starts_with("Performance: 0B avg file size, 0 avg lines"));
}

// ============================================================================
// Code quality
// ============================================================================

#[test]
fn quality_well_commented_passes() {
    let fs = with_components(&[("a.css", "/* block */\n/* element */\n.a { color: red; }\n")]);
    let result = evaluate(&CodeQuality::new(QualityConfig::default()), &fs);
    assert!(result.is_passed());
    assert!(result.message().contains("2.0 comments/file"));
}

#[test]
fn quality_reports_duplicates_and_empty_rules() {
    let fs = with_components(&[
        ("a.css", "/* a */ /* b */ .a { color: red; } .empty {}"),
        ("b.css", "/* a */ /* b */ .a { margin: 0; }"),
    ]);
    let result = evaluate(&CodeQuality::new(QualityConfig::default()), &fs);
    assert!(result.is_warning());
    assert!(result.message().contains("50.0% empty rules"));
    assert!(result.message().contains("50.0% duplicates"));
    assert!(result.message().contains("duplicated: .a"));
}

#[test]
fn battery_has_eight_checks_in_order() {
    let checks = battery(&crate::config::RulesConfig::default()).unwrap();
    let names: Vec<_> = checks.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "Component File Structure",
            "CSS Custom Properties",
            "BEM Naming Convention",
            "No !important Declarations",
            "Responsive Design",
            "Accessibility Features",
            "Performance Metrics",
            "Code Quality",
        ]
    );
}
