use quire_dom::NodeId;

/// One entry of a level before text nodes are committed to the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LevelItem {
    Tag { id: NodeId, inline: bool },
    Text(String),
}

impl LevelItem {
    const fn is_inline(&self) -> bool {
        matches!(self, Self::Tag { inline: true, .. })
    }
}

/// Trim text next to non-inline siblings (or the level's edges) and drop
/// text left empty. Neighbors are judged on the list as it was before any
/// text was dropped.
pub(crate) fn normalize_level(items: Vec<LevelItem>) -> Vec<LevelItem> {
    let inline: Vec<bool> = items.iter().map(LevelItem::is_inline).collect();
    let last = items.len().saturating_sub(1);

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            LevelItem::Text(text) => {
                let mut trimmed = text.as_str();
                if index == 0 || !inline[index - 1] {
                    trimmed = trimmed.trim_start();
                }
                if index == last || !inline[index + 1] {
                    trimmed = trimmed.trim_end();
                }
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == text.len() {
                    Some(LevelItem::Text(text))
                } else {
                    Some(LevelItem::Text(trimmed.to_string()))
                }
            }
            tag @ LevelItem::Tag { .. } => Some(tag),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> LevelItem {
        LevelItem::Text(s.to_string())
    }

    fn tag(id: usize, inline: bool) -> LevelItem {
        LevelItem::Tag {
            id: NodeId(id),
            inline,
        }
    }

    #[test]
    fn test_edges_are_trimmed() {
        assert_eq!(normalize_level(vec![text("  a b  ")]), vec![text("a b")]);
    }

    #[test]
    fn test_blank_text_next_to_block_is_dropped() {
        let items = vec![text(" "), tag(0, false), text(" ")];
        assert_eq!(normalize_level(items), vec![tag(0, false)]);
    }

    #[test]
    fn test_inline_neighbors_keep_spacing() {
        let items = vec![text(" a "), tag(0, true), text(" c ")];
        assert_eq!(
            normalize_level(items),
            vec![text("a "), tag(0, true), text(" c")]
        );
    }

    #[test]
    fn test_adjacency_uses_original_neighbors() {
        // The blank text is dropped, but the text after it still sees a text
        // neighbor (not the inline tag) and is left-trimmed.
        let items = vec![tag(0, true), text(" "), text(" x")];
        assert_eq!(normalize_level(items), vec![tag(0, true), text("x")]);
    }

    #[test]
    fn test_tags_are_untouched() {
        let items = vec![tag(0, false), tag(1, true)];
        assert_eq!(normalize_level(items.clone()), items);
    }

    #[test]
    fn test_empty_level() {
        assert!(normalize_level(Vec::new()).is_empty());
    }
}
