use serde::{Deserialize, Serialize};

/// One word and its weight as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    pub text: String,
    pub value: f64,
}

impl WordStat {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}
