use serde::{Deserialize, Serialize};

/// A single vocabulary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub category: String,
    pub german: String,
    pub plural: Option<String>,
    pub english: String,
}

impl Entry {
    pub fn new(
        category: impl Into<String>,
        german: impl Into<String>,
        plural: Option<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            german: german.into(),
            plural,
            english: english.into(),
        }
    }

    /// Back-face label used when English is on the front: the German term
    /// with its plural in parentheses, when one exists.
    pub fn german_with_plural(&self) -> String {
        match &self.plural {
            Some(plural) => format!("{} ({})", self.german, plural),
            None => self.german.clone(),
        }
    }
}
