//! Tests for element accessors, queries and rendering.

use tagpull_common::MarkupError;
use tagpull_tree::{AttributesMap, Element};

/// Helper to build an attribute map from pairs
fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// <root id="r"><item>one</item><item/>tail</root>
fn sample_tree() -> Element {
    Element::markup(
        "root",
        attrs(&[("id", "r")]),
        vec![
            Element::markup("item", AttributesMap::new(), vec![Element::text("one")]),
            Element::markup("item", AttributesMap::new(), Vec::new()),
            Element::text("tail"),
        ],
    )
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_text_element_rejects_markup_views() {
    let text = Element::text("hello");
    assert!(text.is_text());
    assert_eq!(text.text_content(), Ok("hello"));
    assert!(matches!(
        text.children(),
        Err(MarkupError::InvalidAccess { .. })
    ));
    assert!(matches!(
        text.tag_name(),
        Err(MarkupError::InvalidAccess { .. })
    ));
    assert!(matches!(
        text.attributes(),
        Err(MarkupError::InvalidAccess { .. })
    ));
}

#[test]
fn test_markup_element_rejects_text_view() {
    let tree = sample_tree();
    assert!(!tree.is_text());
    assert_eq!(tree.tag_name(), Ok("root"));
    assert_eq!(tree.children().map(<[Element]>::len), Ok(3));
    assert_eq!(tree.attribute("id"), Some("r"));
    assert_eq!(tree.attribute("missing"), None);
    assert!(matches!(
        tree.text_content(),
        Err(MarkupError::InvalidAccess { .. })
    ));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_descendants_are_pre_order() {
    let tree = sample_tree();
    let kinds: Vec<String> = tree
        .descendants()
        .map(|e| match e {
            Element::Text(t) => format!("#{t}"),
            Element::Markup(m) => m.name.clone(),
        })
        .collect();
    assert_eq!(kinds, vec!["root", "item", "#one", "item", "#tail"]);
}

#[test]
fn test_find_first_and_depth() {
    let tree = sample_tree();
    let item = tree.find_first("item").expect("item present");
    assert_eq!(item.collect_text(), "one");
    assert!(tree.find_first("nope").is_none());

    assert_eq!(Element::text("x").depth(), 1);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_collect_text_concatenates_in_order() {
    assert_eq!(sample_tree().collect_text(), "onetail");
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_indents_one_tab_per_level() {
    let rendered = sample_tree().render(0);
    assert_eq!(
        rendered,
        "\n<root id=\"r\">\n\t<item>\n\t\tone\n\t</item>\n\t<item>\n\t</item>\n\ttail\n</root>"
    );
}

#[test]
fn test_render_sorts_attributes_and_closes_quotes() {
    let element = Element::markup("x", attrs(&[("b", "2"), ("a", "1")]), Vec::new());
    assert_eq!(element.render(1), "\n\t<x a=\"1\" b=\"2\">\n\t</x>");
    assert_eq!(element.to_string(), element.render(0));
}

#[test]
fn test_json_shape() {
    let element = Element::markup(
        "x",
        attrs(&[("a", "1")]),
        vec![Element::text("hi")],
    );
    let json = serde_json::to_value(&element).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "element",
            "name": "x",
            "attributes": { "a": "1" },
            "children": [ { "type": "text", "content": "hi" } ]
        })
    );
}
