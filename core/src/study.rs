use crate::Vocabulary;

/// Display fields for one flashcard, fully determined by the current
/// entry and the front-language preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub category: String,
    /// Text on the visible front face.
    pub front: String,
    /// Plural annotation under the front text. Empty unless German is on
    /// the front and the entry has a plural.
    pub plural_note: String,
    /// Text revealed by flipping the card.
    pub back: String,
    /// Position indicator, `"{index+1} / {N}"`.
    pub counter: String,
}

/// Cursor over the vocabulary in study mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StudyState {
    pub index: usize,
    pub flipped: bool,
}

impl StudyState {
    /// Back to the first card, front face up. Run on every (re-)entry to
    /// study mode.
    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    /// Advance one card, wrapping past the end.
    pub fn next(&mut self, len: usize) {
        self.index = (self.index + 1) % len;
        self.flipped = false;
    }

    /// Go back one card, wrapping before the start.
    pub fn prev(&mut self, len: usize) {
        self.index = (self.index + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Compose the card for the current index.
    ///
    /// Pure with respect to `(index, english_front)`; the flip state only
    /// selects which face the caller shows, never what is on it.
    pub fn card(&self, vocabulary: &Vocabulary, english_front: bool) -> Card {
        // index is kept in range by construction
        let entry = &vocabulary.entries()[self.index];
        let counter = format!("{} / {}", self.index + 1, vocabulary.len());

        if english_front {
            Card {
                category: entry.category.clone(),
                front: entry.english.clone(),
                plural_note: String::new(),
                back: entry.german_with_plural(),
                counter,
            }
        } else {
            Card {
                category: entry.category.clone(),
                front: entry.german.clone(),
                plural_note: entry
                    .plural
                    .as_ref()
                    .map(|p| format!("Plural: {p}"))
                    .unwrap_or_default(),
                back: entry.english.clone(),
                counter,
            }
        }
    }
}
