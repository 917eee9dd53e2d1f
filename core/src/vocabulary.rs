use crate::Entry;
use crate::quiz::OPTION_COUNT;
use thiserror::Error;

/// Error type for vocabulary construction.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Vocabulary has {found} entries, but at least {need} are required for the quiz")]
    TooFewEntries { found: usize, need: usize },
    #[error("Entry {index} is missing its German or English text")]
    IncompleteEntry { index: usize },
}

/// An ordered, immutable list of vocabulary entries.
///
/// Built once at startup and never mutated afterwards. The constructor
/// enforces the invariants the rest of the crate relies on: every entry
/// carries both a German and an English text, and there are enough entries
/// to fill a quiz question with distinct options.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<Entry>,
}

impl Vocabulary {
    pub fn new(entries: Vec<Entry>) -> Result<Self, VocabularyError> {
        if entries.len() < OPTION_COUNT {
            return Err(VocabularyError::TooFewEntries {
                found: entries.len(),
                need: OPTION_COUNT,
            });
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.german.is_empty() || entry.english.is_empty() {
                return Err(VocabularyError::IncompleteEntry { index });
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// The shipped word list: (category, german, plural, english).
///
/// An empty plural marks nouns without a common plural form.
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("Animals", "Hund", "Hunde", "dog"),
    ("Animals", "Katze", "Katzen", "cat"),
    ("Animals", "Vogel", "Vögel", "bird"),
    ("Animals", "Pferd", "Pferde", "horse"),
    ("Animals", "Fisch", "Fische", "fish"),
    ("Food", "Brot", "Brote", "bread"),
    ("Food", "Apfel", "Äpfel", "apple"),
    ("Food", "Käse", "", "cheese"),
    ("Food", "Wasser", "", "water"),
    ("Food", "Ei", "Eier", "egg"),
    ("Places", "Haus", "Häuser", "house"),
    ("Places", "Stadt", "Städte", "city"),
    ("Places", "Schule", "Schulen", "school"),
    ("Places", "Bahnhof", "Bahnhöfe", "train station"),
    ("Places", "Garten", "Gärten", "garden"),
    ("Nature", "Baum", "Bäume", "tree"),
    ("Nature", "Blume", "Blumen", "flower"),
    ("Nature", "Berg", "Berge", "mountain"),
    ("Nature", "Fluss", "Flüsse", "river"),
    ("Nature", "Sonne", "", "sun"),
    ("Family", "Mutter", "Mütter", "mother"),
    ("Family", "Vater", "Väter", "father"),
    ("Family", "Kind", "Kinder", "child"),
    ("Family", "Bruder", "Brüder", "brother"),
    ("Family", "Schwester", "Schwestern", "sister"),
];

/// Build the compiled-in word list.
pub fn builtin_entries() -> Vec<Entry> {
    BUILTIN
        .iter()
        .map(|(category, german, plural, english)| {
            let plural = (!plural.is_empty()).then(|| plural.to_string());
            Entry::new(*category, *german, plural, *english)
        })
        .collect()
}
