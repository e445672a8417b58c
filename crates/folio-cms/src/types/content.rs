//! Content item types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key of the locale-invariant value inside a localized field.
const INVARIANT_KEY: &str = "iv";

/// Response of the content listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentsResponse {
    /// Total number of items on the server.
    #[serde(default)]
    pub total: Option<u64>,
    /// Items in server order. Absent or `null` means none; entries that
    /// are not objects are skipped.
    #[serde(default, deserialize_with = "object_items")]
    pub items: Option<Vec<ContentItem>>,
}

impl ContentsResponse {
    /// Items in server order.
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items.unwrap_or_default()
    }
}

/// A content item.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Item ID; empty when the server sent none.
    #[serde(default, deserialize_with = "loose_id")]
    pub id: String,
    /// Field name to localized value (`{"iv": ...}`).
    #[serde(default, deserialize_with = "object_or_none")]
    pub data: Option<Map<String, Value>>,
    /// Creation timestamp.
    #[serde(default, deserialize_with = "string_or_none")]
    pub created: Option<String>,
    /// Last modification timestamp.
    #[serde(default, deserialize_with = "string_or_none")]
    pub last_modified: Option<String>,
    /// Workflow status.
    #[serde(default, deserialize_with = "string_or_none")]
    pub status: Option<String>,
}

// Items are read leniently so one odd entry cannot fail the whole listing.

fn object_items<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<ContentItem>>, D::Error> {
    let items = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(items.map(|items| {
        items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }))
}

fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn string_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn object_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Map<String, Value>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

impl ContentItem {
    /// Locale-invariant value of a field (`data.<name>.iv`).
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.as_ref()?.get(name)?.get(INVARIANT_KEY)
    }

    /// Locale-invariant value of a field as a non-empty string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name)?.as_str().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_contents_response() {
        let response: ContentsResponse = serde_json::from_value(json!({
            "total": 1,
            "items": [{
                "id": "a1",
                "created": "2024-01-01T00:00:00Z",
                "lastModified": "2024-01-02T00:00:00Z",
                "status": "Published",
                "data": {"title": {"iv": "Hello"}, "content": {"iv": {"type": "doc"}}}
            }]
        }))
        .unwrap();

        assert_eq!(response.total, Some(1));
        let items = response.into_items();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, "a1");
        assert_eq!(item.last_modified.as_deref(), Some("2024-01-02T00:00:00Z"));
        assert_eq!(item.field_str("title"), Some("Hello"));
        assert_eq!(item.field("content"), Some(&json!({"type": "doc"})));
    }

    #[test]
    fn test_missing_or_null_items_is_empty() {
        let missing: ContentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(missing.into_items().is_empty());
        let null: ContentsResponse = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(null.into_items().is_empty());
    }

    #[test]
    fn test_field_accessors_tolerate_shape() {
        let item: ContentItem = serde_json::from_value(json!({
            "id": "x",
            "data": {"title": "not localized", "slug": {"iv": ""}}
        }))
        .unwrap();
        assert_eq!(item.field("title"), None);
        assert_eq!(item.field_str("slug"), None);
        assert_eq!(item.field("missing"), None);

        let bare: ContentItem = serde_json::from_value(json!({"id": "y"})).unwrap();
        assert_eq!(bare.field("title"), None);
    }

    #[test]
    fn test_odd_items_do_not_fail_listing() {
        let response: ContentsResponse = serde_json::from_value(json!({
            "items": [
                {"data": {"title": {"iv": "No id"}}},
                {"id": 42, "created": 1_700_000_000, "data": "oops", "status": null},
                "not an item",
                {"id": "ok", "data": {"title": {"iv": "Fine"}}}
            ]
        }))
        .unwrap();

        let items = response.into_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "");
        assert_eq!(items[0].field_str("title"), Some("No id"));
        assert_eq!(items[1].id, "42");
        assert_eq!(items[1].created, None);
        assert!(items[1].data.is_none());
        assert_eq!(items[1].status, None);
        assert_eq!(items[2].id, "ok");
    }
}
