//! Property tests over arbitrary input.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use quire_dom::{Document, NodeRef};
use quire_markup::{ParseError, ParseOptions};

/// Helper to parse with warnings silenced.
fn parse(markup: &str) -> Result<Document, ParseError> {
    quire_markup::parse(markup, &ParseOptions::default().with_warnings(false))
}

/// A non-empty run of ASCII letters and digits in mixed case.
#[derive(Debug, Clone)]
struct TagName(String);

impl Arbitrary for TagName {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let len = usize::arbitrary(g) % 8 + 1;
        let name = (0..len)
            .map(|_| char::from(*g.choose(ALNUM).expect("alphabet is not empty")))
            .collect();
        Self(name)
    }
}

/// Walk every node of a document.
fn all_nodes(doc: &Document) -> Vec<NodeRef<'_>> {
    let mut out = Vec::new();
    let mut pending: Vec<NodeRef<'_>> = doc.nodes().collect();
    while let Some(node) = pending.pop() {
        pending.extend(node.children());
        out.push(node);
    }
    out
}

#[quickcheck]
fn reparse_is_structurally_equal(input: String) -> bool {
    parse(&input) == parse(&input)
}

#[quickcheck]
fn self_closing_tags_have_no_children(input: String) -> bool {
    parse(&input).is_ok_and(|doc| {
        all_nodes(&doc).into_iter().all(|node| {
            node.tag()
                .is_none_or(|tag| !tag.self_closing || node.children().count() == 0)
        })
    })
}

#[quickcheck]
fn text_nodes_are_never_empty(input: String) -> bool {
    parse(&input).is_ok_and(|doc| {
        all_nodes(&doc)
            .into_iter()
            .filter_map(NodeRef::text)
            .all(|text| !text.is_empty())
    })
}

#[quickcheck]
fn tag_names_fold_case(name: TagName) -> bool {
    let lower = name.0.to_ascii_lowercase();
    let upper = name.0.to_ascii_uppercase();
    let (Ok(a), Ok(b)) = (
        parse(&format!("<{}>x</{}>", name.0, upper)),
        parse(&format!("<{lower}>x</{lower}>")),
    ) else {
        return false;
    };
    a == b && a.nodes().next().map(NodeRef::kind) == Some(lower.as_str())
}

#[quickcheck]
fn self_closing_with_attributes_is_empty(name: TagName, value: TagName) -> bool {
    let markup = format!("<{} title=\"{}\"/>tail", name.0, value.0);
    parse(&markup).is_ok_and(|doc| {
        let first = doc.nodes().next();
        first.is_some_and(|tag| {
            tag.children().count() == 0 && tag.attribute("title") == Some(value.0.as_str())
        })
    })
}
