//! Integration tests for text collapsing and block whitespace normalization.

use quire_dom::{Document, NodeRef};
use quire_markup::ParseOptions;

/// Helper to parse markup with warnings silenced.
fn parse(markup: &str) -> Document {
    quire_markup::parse(markup, &ParseOptions::default().with_warnings(false))
        .expect("markup parses")
}

/// Helper to collect the texts of a node sequence (`None` for tags).
fn texts<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<Option<&'a str>> {
    nodes.map(NodeRef::text).collect()
}

#[test]
fn test_interior_runs_collapse() {
    let doc = parse("<p>a\n\n  b</p>");
    let p = doc.find_first("p").expect("p");
    assert_eq!(texts(p.children()), [Some("a b")]);
}

#[test]
fn test_block_level_trimming() {
    let doc = parse("  <p>x</p>  ");
    let root: Vec<_> = doc.nodes().collect();
    assert_eq!(root.len(), 1);
    assert_eq!(root[0].kind(), "p");
    assert_eq!(texts(root[0].children()), [Some("x")]);
}

#[test]
fn test_inline_adjacency_is_preserved() {
    let doc = parse("a<b>x</b>c");
    assert_eq!(texts(doc.nodes()), [Some("a"), None, Some("c")]);

    let spaced = parse("a <b>x</b> c");
    assert_eq!(texts(spaced.nodes()), [Some("a "), None, Some(" c")]);
}

#[test]
fn test_text_between_blocks_is_trimmed() {
    let doc = parse("<p>a</p>\n   middle   \n<p>b</p>");
    assert_eq!(texts(doc.nodes()), [None, Some("middle"), None]);
}

#[test]
fn test_blank_text_between_blocks_is_dropped() {
    let doc = parse("<div>\n  <p>a</p>\n  <p>b</p>\n</div>");
    let div = doc.find_first("div").expect("div");
    assert_eq!(div.children().count(), 2);
    assert!(div.children().all(|n| n.kind() == "p"));
}

#[test]
fn test_inline_parent_is_not_normalized() {
    let doc = parse("<p><b>  x \n y  </b></p>");
    let b = doc.find_first("b").expect("b");
    assert_eq!(texts(b.children()), [Some(" x y ")]);
}

#[test]
fn test_block_inside_inline_is_kept_verbatim() {
    let doc = parse("<a> <p>x</p> </a>");
    let a = doc.find_first("a").expect("a");
    assert_eq!(texts(a.children()), [Some(" "), None, Some(" ")]);
}

#[test]
fn test_space_between_inline_siblings_survives() {
    let doc = parse("<p><b>bold</b> <i>italic</i></p>");
    let p = doc.find_first("p").expect("p");
    assert_eq!(texts(p.children()), [None, Some(" "), None]);
}

#[test]
fn test_space_before_block_sibling_is_removed() {
    let doc = parse("<p>word <div>block</div> tail</p>");
    let p = doc.find_first("p").expect("p");
    assert_eq!(texts(p.children()), [Some("word"), None, Some("tail")]);
}

#[test]
fn test_control_characters_collapse() {
    let doc = parse("<p>tab\there\u{1}and\r\nthere</p>");
    assert_eq!(doc.text_content(doc.roots()[0]), "tab here and there");
}

#[test]
fn test_non_breaking_space_is_not_collapsed() {
    let doc = parse("<p>a\u{a0}\u{a0}b</p>");
    assert_eq!(doc.text_content(doc.roots()[0]), "a\u{a0}\u{a0}b");
}
