//! Snapshot restoration with schema backfill.
//!
//! Persisted documents may predate fields that exist today. Restoration
//! parses the saved JSON, applies the legacy migrations, then merges the
//! result over the seed defaults so that any section or field missing from
//! the snapshot takes its default value. An unreadable snapshot is treated
//! as absent; startup never fails because of bad persisted state.

use common::model::content::{ContentDocument, SCHEMA_VERSION};
use log::warn;
use serde_json::{Map, Value};

pub fn restore(saved_text: Option<String>) -> ContentDocument {
    match saved_text {
        Some(text) => match parse_snapshot(&text) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("ignoring unreadable content snapshot: {e}");
                ContentDocument::default()
            }
        },
        None => ContentDocument::default(),
    }
}

fn parse_snapshot(text: &str) -> Result<ContentDocument, String> {
    let saved: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let Value::Object(mut saved) = saved else {
        return Err("snapshot is not a JSON object".to_string());
    };

    let version = saved
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if version == 0 {
        migrate_legacy_lists(&mut saved);
    }

    let mut merged = serde_json::to_value(ContentDocument::default()).map_err(|e| e.to_string())?;
    merge_over(&mut merged, Value::Object(saved));

    let mut doc: ContentDocument = serde_json::from_value(merged).map_err(|e| e.to_string())?;
    doc.schema_version = SCHEMA_VERSION;
    Ok(doc)
}

/// Version-0 snapshots predate the lead, blog, and FAQ sections. They load
/// as empty lists, not as the seeded defaults a brand-new site gets.
fn migrate_legacy_lists(saved: &mut Map<String, Value>) {
    for key in ["leads", "posts", "faqs"] {
        saved
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
    }
}

/// Recursive merge: objects merge key by key, everything else is replaced
/// by the incoming value. Keys absent from `incoming` keep the base value.
fn merge_over(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Object(base), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match base.get_mut(&key) {
                    Some(slot) => merge_over(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_snapshot_yields_defaults() {
        assert_eq!(restore(None), ContentDocument::default());
    }

    #[test]
    fn garbage_snapshot_yields_defaults() {
        assert_eq!(
            restore(Some("{not json".to_string())),
            ContentDocument::default()
        );
        assert_eq!(restore(Some("42".to_string())), ContentDocument::default());
    }

    #[test]
    fn full_round_trip_preserves_every_field() {
        let mut original = ContentDocument::default();
        original.hero.title = "edited".to_string();
        original.services[0].price = Some("services.installation.price".to_string());
        let text = serde_json::to_string(&original).unwrap();
        assert_eq!(restore(Some(text)), original);
    }

    #[test]
    fn legacy_snapshot_gets_empty_late_sections() {
        // A snapshot written before leads/posts/faqs existed: those lists
        // come back empty rather than seeded.
        let mut legacy = serde_json::to_value(ContentDocument::default()).unwrap();
        let map = legacy.as_object_mut().unwrap();
        map.remove("schemaVersion");
        map.remove("leads");
        map.remove("posts");
        map.remove("faqs");
        let doc = restore(Some(legacy.to_string()));
        assert!(doc.leads.is_empty());
        assert!(doc.posts.is_empty());
        assert!(doc.faqs.is_empty());
        assert_eq!(doc.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn missing_nested_fields_backfill_from_defaults() {
        let snapshot = json!({
            "hero": { "title": "custom title" }
        });
        let doc = restore(Some(snapshot.to_string()));
        assert_eq!(doc.hero.title, "custom title");
        // The rest of the hero section falls back to the defaults.
        let defaults = ContentDocument::default();
        assert_eq!(doc.hero.subtitle, defaults.hero.subtitle);
        assert_eq!(doc.hero.background_image, defaults.hero.background_image);
        // Untouched sections come back whole.
        assert_eq!(doc.contact, defaults.contact);
        assert_eq!(doc.services, defaults.services);
    }

    #[test]
    fn current_version_snapshot_keeps_explicit_empty_lists() {
        let mut original = ContentDocument::default();
        original.posts.clear();
        let doc = restore(Some(serde_json::to_string(&original).unwrap()));
        assert!(doc.posts.is_empty());
    }
}
