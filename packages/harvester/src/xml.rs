//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node};

/// Get the tag name without namespace prefix.
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find all elements with the given tag name, anywhere in the document.
///
/// Elements are yielded in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use nubbe_harvester::xml::elements_by_tag;
///
/// let doc = Document::parse("<r><id>1</id><x/><id>2</id></r>").unwrap();
/// assert_eq!(elements_by_tag(&doc, "id").count(), 2);
/// ```
pub fn elements_by_tag<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.descendants()
        .filter(move |node| node.is_element() && get_tag_name(*node) == tag)
}

/// Get the text content of a node, trimmed.
///
/// # Returns
/// Trimmed text content, or empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get the text content of a node, trimmed, with internal newlines
/// collapsed to single spaces.
///
/// The portal indents multi-line values; collapsing keeps each cell on
/// one visual line.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use nubbe_harvester::xml::inline_text;
///
/// let doc = Document::parse("<nome>epi-\n    catechin</nome>").unwrap();
/// assert_eq!(inline_text(doc.root_element()), "epi- catechin");
/// ```
pub fn inline_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| {
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
