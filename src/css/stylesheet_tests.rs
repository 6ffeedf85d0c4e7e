use super::*;

#[test]
fn parses_simple_rules() {
    let sheet = Stylesheet::parse(".btn { color: red; }\n.card__title { margin: 0; }\n");
    assert_eq!(sheet.rules.len(), 2);
    assert_eq!(sheet.rules[0].selector, ".btn");
    assert_eq!(sheet.rules[1].selector, ".card__title");
    assert!(!sheet.rules[0].is_empty());
}

#[test]
fn counts_comments_and_strips_them_from_selectors() {
    let sheet = Stylesheet::parse("/* header */\n.nav /* inline */ .item { }\n/* trailing */");
    assert_eq!(sheet.comments, 3);
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].selector, ".nav .item");
}

#[test]
fn detects_empty_rules() {
    let sheet = Stylesheet::parse(".a {}\n.b {\n  \n}\n.c { display: none; }");
    let empty: Vec<_> = sheet.rules.iter().filter(|r| r.is_empty()).collect();
    assert_eq!(empty.len(), 2);
}

#[test]
fn records_media_queries_as_at_rules_and_keeps_nested_rules() {
    let css = "@media (min-width: 768px) {\n  .hero { padding: 2rem; }\n}\n";
    let sheet = Stylesheet::parse(css);
    assert_eq!(sheet.at_rules, vec!["@media (min-width: 768px)".to_string()]);
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].selector, ".hero");
}

#[test]
fn keyframe_selectors_are_not_style_rules() {
    let css = "@keyframes spin { from { transform: rotate(0); } to { transform: rotate(360deg); } }";
    let sheet = Stylesheet::parse(css);
    assert!(sheet.rules.is_empty());
    assert_eq!(sheet.at_rules.len(), 1);
}

#[test]
fn braces_inside_strings_are_ignored() {
    let sheet = Stylesheet::parse(".icon::before { content: \"{\"; }\n.next { color: blue; }");
    assert_eq!(sheet.rules.len(), 2);
    assert_eq!(sheet.rules[1].selector, ".next");
}

#[test]
fn comment_markers_inside_strings_are_not_comments() {
    let sheet = Stylesheet::parse(".a { content: \"/* not a comment */\"; }");
    assert_eq!(sheet.comments, 0);
}

#[test]
fn imports_do_not_leak_into_selectors() {
    let sheet = Stylesheet::parse("@import url(\"base.css\");\n.page { margin: 0; }");
    assert_eq!(sheet.rules[0].selector, ".page");
}

#[test]
fn line_count_matches_newline_split() {
    assert_eq!(Stylesheet::line_count("a\nb\n"), 3);
    assert_eq!(Stylesheet::line_count(""), 1);
}

#[test]
fn count_occurrences_counts_non_overlapping_matches() {
    assert_eq!(
        Stylesheet::count_occurrences("a !important; b !important;", "!important"),
        2
    );
    assert_eq!(Stylesheet::count_occurrences("abc", ""), 0);
}
