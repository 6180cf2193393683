//! Core data types for the catalog.
//!
//! `Category` and `Rating` are closed sets. Text coming from storage or the
//! command line is parsed through `FromStr`, which trims whitespace and
//! ignores letter case; anything else is a validation error.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ShelfError};

/// Medium an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Manga,
    Manhwa,
    /// Anything that is neither manga nor manhwa.
    Outro,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 3] = [Category::Manga, Category::Manhwa, Category::Outro];

    /// Stored text value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Manga => "manga",
            Category::Manhwa => "manhwa",
            Category::Outro => "outro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ShelfError::Validation(format!(
                    "Unknown category \"{}\" (expected one of: manga, manhwa, outro)",
                    value
                ))
            })
    }
}

/// Ordinal grade, declared from best to worst.
///
/// The derived `Ord` follows declaration order, which is the canonical
/// rating order: `EX < +S < S < ... < F < DeixarPraMaisTarde`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    Ex,
    SPlus,
    S,
    SMinus,
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    C,
    D,
    E,
    F,
    /// "Decide later": not graded yet.
    Later,
}

impl Rating {
    /// All ratings in canonical order.
    pub const ALL: [Rating; 14] = [
        Rating::Ex,
        Rating::SPlus,
        Rating::S,
        Rating::SMinus,
        Rating::APlus,
        Rating::A,
        Rating::AMinus,
        Rating::BPlus,
        Rating::B,
        Rating::C,
        Rating::D,
        Rating::E,
        Rating::F,
        Rating::Later,
    ];

    /// Stored text value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Ex => "EX",
            Rating::SPlus => "+S",
            Rating::S => "S",
            Rating::SMinus => "-S",
            Rating::APlus => "+A",
            Rating::A => "A",
            Rating::AMinus => "-A",
            Rating::BPlus => "+B",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
            Rating::F => "F",
            Rating::Later => "DeixarPraMaisTarde",
        }
    }

    /// Zero-based position in the canonical order.
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Rating::ALL
            .into_iter()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ShelfError::Validation(format!(
                    "Unknown rating \"{}\" (expected one of: {})",
                    value,
                    Rating::ALL.map(|r| r.as_str()).join(", ")
                ))
            })
    }
}

macro_rules! text_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

text_serde!(Category);
text_serde!(Rating);

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque identifier, assigned once by the store
    pub id: String,

    /// Title of the work
    pub name: String,

    #[serde(alias = "type")]
    pub category: Category,

    pub rating: Rating,

    /// External link, not validated
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub link: Option<String>,

    /// Last chapter/episode read
    #[serde(
        default,
        alias = "lastChapter",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub last_position: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "view_date")]
    pub view_date: Option<NaiveDate>,

    /// When the entry was created; never changes afterwards
    pub date_added: DateTime<Utc>,
}

impl Entry {
    /// Instant used when sorting by view date: the view date at midnight
    /// UTC, or `date_added` when no view date is recorded.
    pub fn viewed_at(&self) -> DateTime<Utc> {
        match self.view_date {
            Some(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
            None => self.date_added,
        }
    }

    /// Copy of this entry with every user-editable field taken from `draft`.
    pub fn revised(&self, draft: EntryDraft) -> Entry {
        Entry {
            id: self.id.clone(),
            name: draft.name,
            category: draft.category,
            rating: draft.rating,
            link: draft.link,
            last_position: draft.last_position,
            view_date: draft.view_date,
            date_added: self.date_added,
        }
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub category: Category,
    pub rating: Rating,
    pub link: Option<String>,
    pub last_position: Option<String>,
    /// Falls back to the creation date when absent
    pub view_date: Option<NaiveDate>,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>, category: Category, rating: Rating) -> Self {
        Self {
            name: name.into(),
            category,
            rating,
            link: None,
            last_position: None,
            view_date: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_last_position(mut self, position: impl Into<String>) -> Self {
        self.last_position = Some(position.into());
        self
    }

    pub fn with_view_date(mut self, date: NaiveDate) -> Self {
        self.view_date = Some(date);
        self
    }
}

impl Default for EntryDraft {
    /// Blank draft with the front-end defaults: manga, rated B.
    fn default() -> Self {
        Self::new(String::new(), Category::Manga, Rating::B)
    }
}

impl From<&Entry> for EntryDraft {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            category: entry.category,
            rating: entry.rating,
            link: entry.link.clone(),
            last_position: entry.last_position.clone(),
            view_date: entry.view_date,
        }
    }
}

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// (whose UTC date is used).
pub fn parse_view_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc).date_naive());
    }
    Err(ShelfError::Validation(format!(
        "Invalid date (expected YYYY-MM-DD or ISO-8601): {}",
        value
    )))
}

/// Trim optional text; blank values become `None`.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_text(raw))
}

mod view_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_view_date(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
