//! JSON bodies served next to the HTML pages.

use serde::Serialize;
use std::collections::HashMap;

use crate::observability::MetricsSnapshot;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub metrics: MetricsSnapshot,
    pub version: String,
}
