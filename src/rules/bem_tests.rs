use super::*;

fn classifier() -> BemClassifier {
    BemClassifier::new(&BemConfig::default()).unwrap()
}

#[test]
fn canonical_shapes_are_compliant() {
    for token in [
        "card",
        "card__title",
        "card--featured",
        "card__title--large",
        "site-header__nav-link--active",
        "nav-bar__item-link--is-active",
        "grid-12",
    ] {
        assert!(BemClassifier::is_bem_shaped(token), "{token}");
    }
}

#[test]
fn malformed_shapes_are_not_bem() {
    for token in [
        "Card_Title",
        "card_title",
        "cardTitle",
        "card__",
        "card__title__text",
        "1col",
        "widget---x",
        "card-",
        "a--b--c",
        "card--a--b",
        "card__title-",
        "card--",
    ] {
        assert!(!BemClassifier::is_bem_shaped(token), "{token}");
    }
}

#[test]
fn mixed_token_set_yields_quarter_violation_rate() {
    let stats = classifier().classify(["btn", "btn--primary", "card__title", "Card_Title"]);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.violations, 1);
    assert_eq!(stats.offenders, vec!["Card_Title".to_string()]);
    assert!((stats.violation_rate() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn allowed_prefix_accepts_non_bem_token() {
    let classifier = classifier();
    assert!(!BemClassifier::is_bem_shaped("col-md_6"));
    assert!(classifier.is_compliant("col-md_6"));
    assert!(classifier.is_compliant("sr-only"));
}

#[test]
fn allowed_pattern_accepts_token() {
    let config = BemConfig {
        allowed_prefixes: Vec::new(),
        allowed_patterns: vec!["^js[A-Z]".to_string()],
        ..BemConfig::default()
    };
    let classifier = BemClassifier::new(&config).unwrap();
    assert!(classifier.is_compliant("jsToggle"));
    assert!(!classifier.is_compliant("Toggle"));
}

#[test]
fn invalid_pattern_is_reported() {
    let config = BemConfig {
        allowed_patterns: vec!["[".to_string()],
        ..BemConfig::default()
    };
    let err = BemClassifier::new(&config).unwrap_err();
    assert!(matches!(err, CssGuardError::InvalidPattern { .. }));
}

#[test]
fn empty_input_has_zero_rate() {
    let stats = classifier().classify(std::iter::empty());
    assert_eq!(stats.total, 0);
    assert!(stats.violation_rate().abs() < f64::EPSILON);
}

#[test]
fn offenders_are_distinct() {
    let stats = classifier().classify(["Bad_One", "Bad_One", "Other_Bad"]);
    assert_eq!(stats.violations, 3);
    assert_eq!(stats.offenders, vec!["Bad_One", "Other_Bad"]);
}
