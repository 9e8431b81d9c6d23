//! Pulse updates shown in the news ticker

use serde::{Deserialize, Serialize};

/// Kind of pulse update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PulseType {
    Govt,
    Private,
    Exam,
    Deadline,
    Update,
}

/// A short news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseUpdate {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PulseType,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaking: Option<bool>,
}

impl PulseUpdate {
    pub fn is_breaking(&self) -> bool {
        self.breaking.unwrap_or(false)
    }
}
