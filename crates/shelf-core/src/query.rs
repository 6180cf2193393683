//! Filtered and sorted views over a collection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShelfError};
use crate::types::{Category, Entry, Rating};

/// Field a view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive name
    #[default]
    Name,
    /// Canonical rating order, best first
    Rating,
    /// Category text
    Category,
    /// View date, falling back to the date added
    ViewDate,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Category => "category",
            SortKey::ViewDate => "viewed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "rating" => Ok(SortKey::Rating),
            "category" | "type" => Ok(SortKey::Category),
            "viewed" | "viewdate" | "view-date" | "date" => Ok(SortKey::ViewDate),
            _ => Err(ShelfError::Validation(format!(
                "Unknown sort key \"{}\" (use name, rating, category or viewed)",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// What a view keeps and how it orders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive substring of the name; empty keeps everything
    pub search: String,

    pub category: Option<Category>,

    pub rating: Option<Rating>,

    pub sort_key: SortKey,

    pub direction: SortDirection,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    fn matches(&self, entry: &Entry, needle: &str) -> bool {
        (needle.is_empty() || entry.name.to_lowercase().contains(needle))
            && self.category.map_or(true, |c| entry.category == c)
            && self.rating.map_or(true, |r| entry.rating == r)
    }
}

/// Ascending comparison of two entries by `key`.
pub fn compare(key: SortKey, a: &Entry, b: &Entry) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Rating => a.rating.rank().cmp(&b.rating.rank()),
        SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
        SortKey::ViewDate => a.viewed_at().cmp(&b.viewed_at()),
    }
}

/// Filter `entries` by `criteria` and sort the survivors.
///
/// The sort is stable in both directions: entries that compare equal keep
/// their collection order. Descending uses the reversed ascending
/// comparison, never a separate one.
pub fn view<'a>(entries: &'a [Entry], criteria: &Criteria) -> Vec<&'a Entry> {
    let needle = criteria.search.to_lowercase();
    let mut result: Vec<&Entry> = entries
        .iter()
        .filter(|entry| criteria.matches(entry, &needle))
        .collect();

    let key = criteria.sort_key;
    match criteria.direction {
        SortDirection::Ascending => result.sort_by(|a, b| compare(key, a, b)),
        SortDirection::Descending => result.sort_by(|a, b| compare(key, a, b).reverse()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn entry(id: &str, name: &str, category: Category, rating: Rating) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            category,
            rating,
            link: None,
            last_position: None,
            view_date: None,
            date_added: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn names(view: &[&Entry]) -> Vec<String> {
        view.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_default_criteria_sorts_by_name_case_insensitive() {
        let entries = vec![
            entry("1", "naruto", Category::Manga, Rating::B),
            entry("2", "Bleach", Category::Manga, Rating::B),
            entry("3", "akira", Category::Manga, Rating::B),
        ];
        let result = view(&entries, &Criteria::new());
        assert_eq!(names(&result), vec!["akira", "Bleach", "naruto"]);
    }

    #[test]
    fn test_name_ties_keep_input_order_in_both_directions() {
        let entries = vec![
            entry("1", "Same", Category::Manga, Rating::B),
            entry("2", "other", Category::Manga, Rating::B),
            entry("3", "same", Category::Manga, Rating::B),
        ];

        let asc = view(&entries, &Criteria::new());
        let ids: Vec<_> = asc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);

        let desc = view(&entries, &Criteria::new().descending());
        let ids: Vec<_> = desc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_rating_sort_uses_canonical_order() {
        let mut entries: Vec<Entry> = Rating::ALL
            .iter()
            .rev()
            .enumerate()
            .map(|(i, r)| entry(&i.to_string(), r.as_str(), Category::Manga, *r))
            .collect();
        entries.swap(0, 5);

        let result = view(&entries, &Criteria::new().sort_by(SortKey::Rating));
        let ratings: Vec<_> = result.iter().map(|e| e.rating.as_str()).collect();
        assert_eq!(
            ratings,
            vec![
                "EX",
                "+S",
                "S",
                "-S",
                "+A",
                "A",
                "-A",
                "+B",
                "B",
                "C",
                "D",
                "E",
                "F",
                "DeixarPraMaisTarde"
            ]
        );
    }

    #[test]
    fn test_rating_sort_descending_puts_b_after_c() {
        let entries = vec![
            entry("1", "b", Category::Manga, Rating::B),
            entry("2", "c", Category::Manga, Rating::C),
        ];
        let result = view(
            &entries,
            &Criteria::new().sort_by(SortKey::Rating).descending(),
        );
        assert_eq!(names(&result), vec!["c", "b"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let entries = vec![
            entry("1", "OnePiece", Category::Manga, Rating::Ex),
            entry("2", "Naruto", Category::Manga, Rating::B),
        ];
        let result = view(&entries, &Criteria::new().search("one"));
        assert_eq!(names(&result), vec!["OnePiece"]);
    }

    #[test]
    fn test_whitespace_search_is_matched_literally() {
        let entries = vec![
            entry("1", "Tower of God", Category::Manhwa, Rating::A),
            entry("2", "Naruto", Category::Manga, Rating::B),
        ];
        let result = view(&entries, &Criteria::new().search(" "));
        assert_eq!(names(&result), vec!["Tower of God"]);

        let result = view(&entries, &Criteria::new().search(" naruto"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let entries = vec![
            entry("1", "Tower of God", Category::Manhwa, Rating::A),
            entry("2", "Solo Leveling", Category::Manhwa, Rating::S),
            entry("3", "Monster", Category::Manga, Rating::S),
        ];
        let result = view(
            &entries,
            &Criteria::new().category(Category::Manhwa).rating(Rating::S),
        );
        assert_eq!(names(&result), vec!["Solo Leveling"]);

        let none = view(
            &entries,
            &Criteria::new().category(Category::Outro).search("o"),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_sort_uses_text() {
        let entries = vec![
            entry("1", "x", Category::Outro, Rating::B),
            entry("2", "y", Category::Manhwa, Rating::B),
            entry("3", "z", Category::Manga, Rating::B),
        ];
        let result = view(&entries, &Criteria::new().sort_by(SortKey::Category));
        assert_eq!(names(&result), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_view_date_sort_falls_back_to_date_added() {
        let base = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();
        let mut late = entry("1", "late", Category::Manga, Rating::B);
        late.view_date = NaiveDate::from_ymd_opt(2024, 3, 20);
        let mut undated = entry("2", "undated", Category::Manga, Rating::B);
        undated.date_added = base;
        let mut early = entry("3", "early", Category::Manga, Rating::B);
        early.view_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let mut newest = entry("4", "newest", Category::Manga, Rating::B);
        newest.date_added = base + Duration::days(30);

        let entries = vec![late, undated, early, newest];
        let result = view(&entries, &Criteria::new().sort_by(SortKey::ViewDate));
        assert_eq!(names(&result), vec!["early", "undated", "late", "newest"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let entries = vec![
            entry("1", "b", Category::Manga, Rating::B),
            entry("2", "a", Category::Manga, Rating::B),
        ];
        let _ = view(&entries, &Criteria::new());
        assert_eq!(entries[0].name, "b");
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("viewDate".parse::<SortKey>().unwrap(), SortKey::ViewDate);
        assert_eq!("type".parse::<SortKey>().unwrap(), SortKey::Category);
        assert!("size".parse::<SortKey>().is_err());
    }
}
