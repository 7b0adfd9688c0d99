use proptest::prelude::*;
use serde_json::{json, Map, Value};

use omw_tools::downloads::{render_catalog, render_item, ArtifactItem, ReleaseCatalog};

// ---------------------------------------------------------------------------
// Item rendering properties
// ---------------------------------------------------------------------------

fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._-]{0,24}"
}

proptest! {
    /// A link keeps its href and flags regardless of key order in the source.
    #[test]
    fn link_attributes_independent_of_key_order(
        text in plain_text(),
        href in "[a-z0-9./_-]{1,24}",
        download in any::<bool>(),
        new_tab in any::<bool>(),
        reversed in any::<bool>(),
    ) {
        let mut pairs = vec![
            ("type", json!("link")),
            ("text", json!(text.clone())),
            ("href", json!(href.clone())),
            ("download", json!(download)),
            ("newTab", json!(new_tab)),
        ];
        if reversed {
            pairs.reverse();
        }
        let object: Map<String, Value> =
            pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();

        let html = render_item(&ArtifactItem::from_value(Value::Object(object)));
        let href_attr = format!("<a href=\"{href}\"");
        prop_assert!(html.contains(&href_attr));
        prop_assert_eq!(html.contains(" download"), download);
        prop_assert_eq!(html.contains(" target=\"_blank\""), new_tab);
        let label = format!(">{text}</a>");
        prop_assert!(html.contains(&label));
    }

    /// A text item renders as its text wrapped in exactly one entry container.
    #[test]
    fn text_wrapped_once(text in plain_text()) {
        let item = ArtifactItem::from_value(json!({ "type": "text", "text": text.clone() }));
        let html = render_item(&item);
        prop_assert_eq!(html, format!("<div class=\"dlDataItem\">{text}</div>"));
    }

    /// Objects of an unrecognized type always render, showing every key.
    #[test]
    fn unknown_entries_never_fail(
        kind in "[a-z]{1,8}",
        keys in prop::collection::btree_set("[a-z]{1,8}", 0..5),
    ) {
        prop_assume!(!matches!(kind.as_str(), "text" | "link" | "sep"));
        let mut object = Map::new();
        object.insert("type".to_string(), json!(kind));
        for key in &keys {
            object.insert(key.clone(), json!(1));
        }

        let item = ArtifactItem::from_value(Value::Object(object));
        prop_assert!(item.is_unknown());
        let html = render_item(&item);
        prop_assert!(html.contains("dlDataMalformed"));
        for key in &keys {
            let quoted = format!("\"{key}\"");
            prop_assert!(html.contains(&quoted));
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog rendering properties
// ---------------------------------------------------------------------------

fn catalog_strategy() -> impl Strategy<Value = Value> {
    let item = prop_oneof![
        plain_text().prop_map(|text| json!({ "type": "text", "text": text })),
        (plain_text(), any::<bool>())
            .prop_map(|(text, download)| json!({ "type": "link", "text": text, "href": "./f", "download": download })),
        (0u32..40).prop_map(|size| json!({ "type": "sep", "size": size })),
        Just(json!({ "type": "asdf" })),
    ];
    let group = prop::option::of(prop::collection::vec(item, 0..4));
    let release = (plain_text(), group.clone(), group.clone(), group).prop_map(
        |(title, binaries, source, doc)| {
            let mut object = Map::new();
            object.insert("title".to_string(), json!(title));
            for (key, items) in [("binaries", binaries), ("source", source), ("doc", doc)] {
                if let Some(items) = items {
                    object.insert(key.to_string(), Value::Array(items));
                }
            }
            Value::Object(object)
        },
    );
    prop::collection::vec(release, 0..4).prop_map(Value::Array)
}

proptest! {
    /// Rendering twice into the same region yields the same content as rendering once.
    #[test]
    fn render_catalog_idempotent(root in catalog_strategy(), stale in plain_text()) {
        let catalog = ReleaseCatalog::from_value(root).unwrap();

        let mut once = stale.clone();
        render_catalog(&catalog, &mut once);

        let mut twice = stale;
        render_catalog(&catalog, &mut twice);
        render_catalog(&catalog, &mut twice);

        prop_assert_eq!(once, twice);
    }

    /// One release container per catalog entry.
    #[test]
    fn release_count_preserved(root in catalog_strategy()) {
        let expected = root.as_array().map_or(0, Vec::len);
        let catalog = ReleaseCatalog::from_value(root).unwrap();
        let mut region = String::new();
        render_catalog(&catalog, &mut region);
        prop_assert_eq!(region.matches("class=\"releaseContainer\"").count(), expected);
    }
}
