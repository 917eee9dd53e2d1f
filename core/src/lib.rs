pub mod entry;
pub mod vocabulary;
pub mod study;
pub mod quiz;
pub mod score;

pub use entry::Entry;
pub use vocabulary::{Vocabulary, VocabularyError, builtin_entries};
pub use study::{Card, StudyState};
pub use quiz::{Answer, OPTION_COUNT, Question, QuizState};
pub use score::{POINTS_PER_CORRECT, ScoreState};
