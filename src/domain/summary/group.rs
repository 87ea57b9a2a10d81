//! Summary groups - labeled review panels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}

/// A labeled cluster of answers, tagged with the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryGroup {
    pub title: String,
    pub entries: Vec<SummaryEntry>,
    /// Ordinal of the step to revisit to edit these answers.
    pub source_step: usize,
}

impl SummaryGroup {
    /// Value of the first entry with `label`.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}

/// Collects entries for one group, skipping answers that carry nothing.
pub(crate) struct GroupBuilder {
    title: String,
    source_step: usize,
    entries: Vec<SummaryEntry>,
}

impl GroupBuilder {
    pub fn new(title: impl Into<String>, source_step: usize) -> Self {
        Self {
            title: title.into(),
            source_step,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, label: &str, value: impl Into<String>) -> Self {
        self.entries.push(SummaryEntry {
            label: label.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn text(self, label: &str, value: &Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => self.entry(label, text),
            _ => self,
        }
    }

    pub fn choice(self, label: &str, value: Option<&'static str>) -> Self {
        match value {
            Some(value) => self.entry(label, value),
            None => self,
        }
    }

    pub fn list(self, label: &str, values: &[String]) -> Self {
        let joined = values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            self
        } else {
            self.entry(label, joined)
        }
    }

    pub fn count(self, label: &str, value: u32) -> Self {
        if value == 0 {
            self
        } else {
            self.entry(label, value.to_string())
        }
    }

    pub fn flag(self, label: &str, value: bool) -> Self {
        if value {
            self.entry(label, "Yes")
        } else {
            self
        }
    }

    /// The group, or `None` when nothing was answered.
    pub fn build(self) -> Option<SummaryGroup> {
        if self.entries.is_empty() {
            return None;
        }
        Some(SummaryGroup {
            title: self.title,
            entries: self.entries,
            source_step: self.source_step,
        })
    }
}
