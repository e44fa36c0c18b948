//! Node tree for the quire markup parser.
//!
//! This crate provides the arena-based tree a parse produces and the
//! read-only surface the layout stage consumes: tag kind, attributes, class
//! flags, ordered children and the inline flag.
//!
//! # Design
//!
//! All nodes live in one vector and refer to each other through [`NodeId`]
//! indices. `children` is the only owning relation; `parent`, `prev_sibling`
//! and `next_sibling` are plain indices, so the tree never forms an
//! ownership cycle. A [`Document`] is assembled with a [`DocumentBuilder`]
//! and has no mutation API once finished.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// `"type"` written for text nodes when serializing. Tag names are
/// alphanumeric, so no tag can share it.
pub const TEXT_NODE_TYPE: &str = "#text";

/// Map of attribute names to values for a tag. Keys are unique; the last
/// occurrence of a repeated attribute wins.
pub type AttributesMap = HashMap<String, String>;

/// Set of class flags derived from the `class` attribute.
pub type ClassSet = HashSet<String>;

/// A type-safe index into a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One node of the tree together with its relations.
///
/// Sibling links connect tag nodes only; text nodes record their parent but
/// never appear as anyone's sibling.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub node_type: NodeType,
    /// Enclosing tag, `None` at the top level.
    pub parent: Option<NodeId>,
    /// Ordered, owned children. Always empty for text and self-closing tags.
    pub children: Vec<NodeId>,
    /// The tag opened just after this one at the same level.
    pub next_sibling: Option<NodeId>,
    /// The tag opened just before this one at the same level.
    pub prev_sibling: Option<NodeId>,
}

/// The closed set of node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A markup element.
    Tag(TagData),
    /// A literal run of character data.
    Text(String),
}

/// Tag-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagData {
    /// Lowercase tag identifier. May be empty for nameless tags such as `<>`.
    pub name: String,
    /// Fixed at construction from the inline classification table.
    pub inline: bool,
    /// Written as `<name/>`; such a tag never has children.
    pub self_closing: bool,
    /// Attributes extracted from the tag arguments.
    pub attrs: AttributesMap,
    /// Whitespace-separated words of the `class` attribute, `None` when the
    /// tag has no `class` attribute at all.
    pub classes: Option<ClassSet>,
}

impl TagData {
    /// Returns the tag's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns true if the `class` attribute contains `class_name`.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes
            .as_ref()
            .is_some_and(|classes| classes.contains(class_name))
    }
}

/// The result of one parse: an arena of nodes plus the ordered top-level
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    /// Top-level nodes in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Borrowed views of the top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> Children<'_> {
        Children {
            document: self,
            ids: self.roots.iter(),
        }
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a borrowed view of a node by its ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.get(id).map(|_| NodeRef { document: self, id })
    }

    /// Number of nodes in the arena (every level, tags and text).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the parse produced nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the next sibling tag of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling tag of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Get tag data if this node is a tag.
    #[must_use]
    pub fn as_tag(&self, id: NodeId) -> Option<&TagData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Tag(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            NodeType::Tag(_) => None,
        })
    }

    /// First tag named `name` in depth-first document order.
    #[must_use]
    pub fn find_first(&self, name: &str) -> Option<NodeRef<'_>> {
        self.nodes().find_map(|node| node.find_first(name))
    }

    /// Concatenated text of a node and all its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.node(id) {
            node.collect_text(&mut out);
        }
        out
    }
}

/// Equality is structural: kind, text, inline flag, attributes, classes and
/// children. Back-references and arena positions are ignored.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes())
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes())
    }
}

/// Assembles a [`Document`] during a parse.
///
/// Nodes are allocated top-down; a level's children are attached once the
/// level has been parsed and normalized.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet listed among its parent's children.
    pub fn alloc(&mut self, node_type: NodeType, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Get tag data of an allocated node.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&TagData> {
        self.nodes.get(id.0).and_then(|n| match &n.node_type {
            NodeType::Tag(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Record that `next` follows `prev` at the same level.
    pub fn link_siblings(&mut self, prev: NodeId, next: NodeId) {
        if let Some(node) = self.nodes.get_mut(prev.0) {
            node.next_sibling = Some(next);
        }
        if let Some(node) = self.nodes.get_mut(next.0) {
            node.prev_sibling = Some(prev);
        }
    }

    /// Attach the final, ordered child list of `parent`.
    pub fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children = children;
        }
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seal the arena with its top-level sequence.
    #[must_use]
    pub fn finish(self, roots: Vec<NodeId>) -> Document {
        Document {
            nodes: self.nodes,
            roots,
        }
    }
}

/// A borrowed handle on one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn raw(self) -> &'a Node {
        // NodeRef is only handed out for ids that exist in `document`.
        &self.document.nodes[self.id.0]
    }

    /// Arena index of this node.
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// Tag name, or `"text"` for text nodes.
    ///
    /// A `<text>` tag also reports `"text"`; use [`NodeRef::is_text`] to tell
    /// them apart. Serialized output uses [`TEXT_NODE_TYPE`] instead.
    #[must_use]
    pub fn kind(self) -> &'a str {
        match &self.raw().node_type {
            NodeType::Tag(data) => &data.name,
            NodeType::Text(_) => "text",
        }
    }

    /// True for text nodes.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self.raw().node_type, NodeType::Text(_))
    }

    /// Text of a text node.
    #[must_use]
    pub fn text(self) -> Option<&'a str> {
        self.document.as_text(self.id)
    }

    /// Tag data of a tag node.
    #[must_use]
    pub fn tag(self) -> Option<&'a TagData> {
        self.document.as_tag(self.id)
    }

    /// Inline flag; text nodes are never inline.
    #[must_use]
    pub fn inline(self) -> bool {
        self.tag().is_some_and(|data| data.inline)
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.tag()
            .and_then(|data| data.attrs.get(name))
            .map(String::as_str)
    }

    /// All attributes; `None` for text nodes.
    #[must_use]
    pub fn attributes(self) -> Option<&'a AttributesMap> {
        self.tag().map(|data| &data.attrs)
    }

    /// Class flags; `None` for text nodes and tags without `class`.
    #[must_use]
    pub fn classes(self) -> Option<&'a ClassSet> {
        self.tag().and_then(|data| data.classes.as_ref())
    }

    /// True if the node is a tag carrying `class_name`.
    #[must_use]
    pub fn has_class(self, class_name: &str) -> bool {
        self.tag().is_some_and(|data| data.has_class(class_name))
    }

    /// Ordered children.
    #[must_use]
    pub fn children(self) -> Children<'a> {
        Children {
            document: self.document,
            ids: self.raw().children.iter(),
        }
    }

    /// Enclosing tag.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.raw().parent.and_then(|id| self.document.node(id))
    }

    /// Tag opened just before this one at the same level.
    #[must_use]
    pub fn previous_sibling(self) -> Option<Self> {
        self.raw().prev_sibling.and_then(|id| self.document.node(id))
    }

    /// Tag opened just after this one at the same level.
    #[must_use]
    pub fn next_sibling(self) -> Option<Self> {
        self.raw().next_sibling.and_then(|id| self.document.node(id))
    }

    fn find_first(self, name: &str) -> Option<Self> {
        if !self.is_text() && self.kind() == name {
            return Some(self);
        }
        self.children().find_map(|child| child.find_first(name))
    }

    fn collect_text(self, out: &mut String) {
        match &self.raw().node_type {
            NodeType::Text(text) => out.push_str(text),
            NodeType::Tag(_) => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.raw().node_type, &other.raw().node_type) {
            (NodeType::Text(a), NodeType::Text(b)) => a == b,
            (NodeType::Tag(a), NodeType::Tag(b)) => {
                a.name == b.name
                    && a.inline == b.inline
                    && a.attrs == b.attrs
                    && a.classes == b.classes
                    && self.children().eq(other.children())
            }
            _ => false,
        }
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw().node_type {
            NodeType::Text(text) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", TEXT_NODE_TYPE)?;
                map.serialize_entry("text", text)?;
                map.end()
            }
            NodeType::Tag(data) => {
                // Sorted so that output is stable across runs.
                let attributes: BTreeMap<&str, &str> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                let children: Vec<NodeRef<'_>> = self.children().collect();

                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", &data.name)?;
                map.serialize_entry("inline", &data.inline)?;
                map.serialize_entry("attributes", &attributes)?;
                if let Some(classes) = &data.classes {
                    let classes: BTreeSet<&str> = classes.iter().map(String::as_str).collect();
                    map.serialize_entry("classes", &classes)?;
                }
                map.serialize_entry("children", &children)?;
                map.end()
            }
        }
    }
}

/// Iterator over a node list in document order.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    document: &'a Document,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        self.document.node(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}
