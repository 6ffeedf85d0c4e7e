use super::*;

#[test]
fn splits_top_level_commas_only() {
    assert_eq!(
        split_selector_list(".a, .b:is(.c, .d) , .e"),
        vec![".a", ".b:is(.c, .d)", ".e"]
    );
}

#[test]
fn selector_parts_split_on_combinators() {
    assert_eq!(
        selector_parts(".nav > .item + .link ~ span a"),
        vec![".nav", ".item", ".link", "span", "a"]
    );
    assert_eq!(selector_parts(".nav>.item"), vec![".nav", ".item"]);
}

#[test]
fn selector_parts_keep_attribute_values_whole() {
    assert_eq!(
        selector_parts("a[title=\"a b\"] .x"),
        vec!["a[title=\"a b\"]", ".x"]
    );
}

#[test]
fn class_tokens_extracts_every_class() {
    assert_eq!(
        class_tokens(".card__title.is-active:hover > .btn--primary"),
        vec!["card__title", "is-active", "btn--primary"]
    );
}

#[test]
fn class_tokens_skip_quoted_values_and_numbers() {
    assert!(class_tokens("a[href$=\".pdf\"]").is_empty());
    assert!(class_tokens("li:nth-child(1.5)").is_empty());
}

#[test]
fn class_tokens_keep_mixed_case_names() {
    assert_eq!(class_tokens(".Card_Title"), vec!["Card_Title"]);
}
