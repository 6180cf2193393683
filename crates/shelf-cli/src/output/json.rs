//! JSON output formatting.

use serde::Serialize;

use shelf_core::Entry;

/// Convert an entry to JSON, using the stored document's field names.
pub fn entry_json(entry: &Entry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

pub fn entries_json(entries: &[&Entry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entries)?)
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shelf_core::{Category, Rating};

    fn sample() -> Entry {
        Entry {
            id: "1700000000002".to_string(),
            name: "OnePiece".to_string(),
            category: Category::Manga,
            rating: Rating::Ex,
            link: None,
            last_position: Some("1100".to_string()),
            view_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2),
            date_added: Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_entry_json_uses_document_field_names() {
        let value = entry_json(&sample()).unwrap();
        assert_eq!(value["id"], "1700000000002");
        assert_eq!(value["category"], "manga");
        assert_eq!(value["rating"], "EX");
        assert_eq!(value["lastPosition"], "1100");
        assert_eq!(value["viewDate"], "2024-01-02");
        assert!(value.get("link").is_none());
    }

    #[test]
    fn test_entries_json_keeps_order() {
        let a = sample();
        let mut b = sample();
        b.id = "1700000000001".to_string();
        let value = entries_json(&[&a, &b]).unwrap();
        let ids: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1700000000002", "1700000000001"]);
    }
}
