//! Carousel positions carried in the page URL.
//!
//! A page may hold several carousels. Each one is addressed by an id and its
//! active index travels as `?<id>=<index>`, so navigation links work without
//! client-side scripting.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlidePositions(BTreeMap<String, usize>);

impl SlidePositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect positions from query parameters.
    ///
    /// Parameters that are not carousel ids or whose values are not indices are
    /// dropped.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let positions = query
            .iter()
            .filter(|(key, _)| is_valid_id(key))
            .filter_map(|(key, value)| {
                value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .map(|index| (key.clone(), index))
            })
            .collect();
        Self(positions)
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.0.get(id).copied()
    }

    pub fn set(&mut self, id: impl Into<String>, index: usize) {
        self.0.insert(id.into(), index);
    }

    /// Link that moves carousel `id` to `index` and keeps every other
    /// carousel where it is.
    pub fn href_with(&self, id: &str, index: usize) -> String {
        let mut positions = self.0.clone();
        positions.insert(id.to_string(), index);

        let query = positions
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("?{query}#{id}")
    }
}

/// Turn an arbitrary label into a carousel id usable as a query key and anchor.
pub fn normalize_id(raw: &str) -> String {
    let mut id = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if id.is_empty() {
        id.push_str("carousel");
    }
    id
}

fn is_valid_id(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
