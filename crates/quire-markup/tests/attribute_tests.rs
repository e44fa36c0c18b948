//! Integration tests for tag-argument extraction.

use quire_markup::extract_attributes;

#[test]
fn test_simple_pairs() {
    let extracted = extract_attributes(r#"id="main" title="Hello world""#);
    assert_eq!(extracted.attributes.len(), 2);
    assert_eq!(extracted.attributes["id"], "main");
    assert_eq!(extracted.attributes["title"], "Hello world");
    assert!(extracted.classes.is_none());
}

#[test]
fn test_last_repeated_name_wins() {
    let extracted = extract_attributes(r#"id="a" id="b""#);
    assert_eq!(extracted.attributes.len(), 1);
    assert_eq!(extracted.attributes["id"], "b");
}

#[test]
fn test_name_characters() {
    let extracted = extract_attributes(r#"data-page="2" my_attr="x" A9="y""#);
    assert_eq!(extracted.attributes["data-page"], "2");
    assert_eq!(extracted.attributes["my_attr"], "x");
    assert_eq!(extracted.attributes["A9"], "y");
}

#[test]
fn test_only_double_quoted_values() {
    let extracted = extract_attributes(r#"a='1' b=2 c = "3" d="4""#);
    assert_eq!(extracted.attributes.len(), 1);
    assert_eq!(extracted.attributes["d"], "4");
}

#[test]
fn test_value_with_angle_bracket_is_rejected() {
    let extracted = extract_attributes(r#"title="a<b" x="y""#);
    assert_eq!(extracted.attributes.len(), 1);
    assert_eq!(extracted.attributes["x"], "y");
}

#[test]
fn test_empty_value() {
    let extracted = extract_attributes(r#"alt="""#);
    assert_eq!(extracted.attributes["alt"], "");
}

#[test]
fn test_unicode_value() {
    let extracted = extract_attributes(r#"alt="café ☕" lang="fr""#);
    assert_eq!(extracted.attributes["alt"], "café ☕");
    assert_eq!(extracted.attributes["lang"], "fr");
}

#[test]
fn test_unicode_between_pairs() {
    let extracted = extract_attributes(r#"é a="1" ü b="2""#);
    assert_eq!(extracted.attributes.len(), 2);
}

#[test]
fn test_classes_split_on_whitespace_runs() {
    let extracted = extract_attributes("class=\"  lead\t note   wide \"");
    let classes = extracted.classes.expect("class attribute present");
    assert_eq!(classes.len(), 3);
    assert!(classes.contains("lead"));
    assert!(classes.contains("note"));
    assert!(classes.contains("wide"));
}

#[test]
fn test_empty_class_attribute() {
    let extracted = extract_attributes(r#"class="""#);
    assert_eq!(extracted.classes.map(|c| c.len()), Some(0));
}

#[test]
fn test_duplicate_class_words() {
    let extracted = extract_attributes(r#"class="a a b""#);
    assert_eq!(extracted.classes.map(|c| c.len()), Some(2));
}

#[test]
fn test_no_pairs() {
    let extracted = extract_attributes("disabled checked");
    assert!(extracted.attributes.is_empty());
    assert!(extracted.classes.is_none());
}
