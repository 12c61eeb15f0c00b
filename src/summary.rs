//! Data model for the WakaTime day summary.
//!
//! These types mirror the fields the relay actually consumes; unknown
//! upstream fields are ignored on deserialization. A received summary is
//! never mutated, only re-serialized as the snapshot.

use serde::{Deserialize, Serialize};

/// Response envelope of `GET /users/current/summaries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// One entry per day in the requested range. The relay requests
    /// `start == end`, so this holds at most one entry.
    pub data: Vec<DailySummary>,
}

/// One day's aggregated activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub grand_total: GrandTotal,
    #[serde(default)]
    pub projects: Vec<UsageItem>,
    #[serde(default)]
    pub languages: Vec<UsageItem>,
    #[serde(default)]
    pub editors: Vec<UsageItem>,
    #[serde(default)]
    pub categories: Vec<UsageItem>,
}

/// Total tracked time for the day, as upstream display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandTotal {
    pub text: String,
}

/// One named entry in a dimension breakdown (a project, language, editor,
/// or category) with its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageItem {
    pub name: String,
    pub text: String,
}
