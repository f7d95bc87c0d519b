//! Front-matter extraction with a fixed default per field.
//!
//! Only `publishedAt` is required. Every other field falls back to an empty
//! value when it is missing or has the wrong shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::warn;

use super::ContentError;
use super::models::{Category, Deliverable, Glance, Metadata, TeamMember};

const FENCE: &str = "---";

/// Split a document into its YAML front-matter block and body.
///
/// Documents that do not open with a `---` fence, or never close it, are all body.
pub fn split(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(rest) = text.strip_prefix(FENCE) else {
        return (None, text);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// Build [`Metadata`] from a front-matter block.
pub fn parse_metadata(yaml: Option<&str>, source: &Path) -> Result<Metadata, ContentError> {
    let value = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => match serde_yaml::from_str::<Value>(yaml) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %source.display(), error = %err, "Unreadable front-matter, using defaults");
                Value::Null
            }
        },
        _ => Value::Null,
    };

    let empty = Mapping::new();
    let fields = Fields {
        map: value.as_mapping().unwrap_or(&empty),
        source,
    };

    let published_at = fields
        .get("publishedAt")
        .and_then(scalar_string)
        .and_then(|raw| parse_timestamp(&raw))
        .ok_or_else(|| ContentError::MissingField {
            path: source.to_path_buf(),
            field: "publishedAt",
        })?;

    Ok(Metadata {
        title: fields.string("title"),
        subtitle: fields.string("subtitle"),
        published_at,
        summary: fields.string("summary"),
        highlights: fields.string_list("highlights"),
        at_a_glance: fields.list::<Glance>("atAGlance"),
        image: fields.string("image"),
        images: fields.string_list("images"),
        tag: fields.string_list("tag"),
        team: fields.list::<TeamMember>("team"),
        link: fields.string("link"),
        category: fields.category("category"),
        deliverables: fields.list::<Deliverable>("deliverables"),
    })
}

/// Parse `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

struct Fields<'a> {
    map: &'a Mapping,
    source: &'a Path,
}

impl Fields<'_> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn malformed(&self, key: &str) {
        warn!(path = %self.source.display(), field = key, "Malformed front-matter field, using default");
    }

    fn string(&self, key: &str) -> String {
        let Some(value) = self.get(key) else {
            return String::new();
        };
        scalar_string(value).unwrap_or_else(|| {
            self.malformed(key);
            String::new()
        })
    }

    /// A list of strings; a lone string counts as a one-element list.
    fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            None => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| {
                    let text = scalar_string(item);
                    if text.is_none() {
                        self.malformed(key);
                    }
                    text
                })
                .collect(),
            Some(value) => match scalar_string(value) {
                Some(text) if !text.is_empty() => vec![text],
                Some(_) => Vec::new(),
                None => {
                    self.malformed(key);
                    Vec::new()
                }
            },
        }
    }

    /// A list of records; items that do not fit the record shape are dropped.
    fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.get(key) {
            None => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| match serde_yaml::from_value::<T>(item.clone()) {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        self.malformed(key);
                        None
                    }
                })
                .collect(),
            Some(_) => {
                self.malformed(key);
                Vec::new()
            }
        }
    }

    fn category(&self, key: &str) -> Option<Category> {
        let raw = scalar_string(self.get(key)?)?;
        let category = Category::parse(&raw);
        if category.is_none() {
            self.malformed(key);
        }
        category
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
