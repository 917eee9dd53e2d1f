use crate::{ScoreState, Vocabulary};
use rand::Rng;
use rand::seq::SliceRandom;

/// Options presented per question: one correct entry plus three distractors.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question.
///
/// Entries are referenced by vocabulary index, so distinctness between the
/// correct answer and its distractors is by identity rather than by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Vocabulary index of the correct entry.
    pub correct: usize,
    /// Vocabulary indices of all options, in presentation order.
    pub options: Vec<usize>,
}

impl Question {
    /// Draw a question: one uniformly random correct entry, then distinct
    /// distractors by rejection sampling, then a uniform (Fisher-Yates)
    /// shuffle into presentation order.
    ///
    /// Termination relies on the vocabulary holding at least
    /// [`OPTION_COUNT`] entries, which [`Vocabulary::new`] guarantees.
    pub fn generate(vocabulary: &Vocabulary, rng: &mut impl Rng) -> Self {
        let len = vocabulary.len();
        let correct = rng.random_range(0..len);

        let mut options = vec![correct];
        while options.len() < OPTION_COUNT {
            let candidate = rng.random_range(0..len);
            if !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options.shuffle(rng);

        Self { correct, options }
    }

    /// The question prompt: always the English text of the correct entry,
    /// independent of the study-mode front-language preference.
    pub fn prompt<'a>(&self, vocabulary: &'a Vocabulary) -> &'a str {
        &vocabulary.entries()[self.correct].english
    }

    /// The label for one option slot: always the German text.
    pub fn option_label<'a>(&self, vocabulary: &'a Vocabulary, slot: usize) -> &'a str {
        &vocabulary.entries()[self.options[slot]].german
    }

    /// Which presentation slot holds the correct entry.
    pub fn correct_slot(&self) -> usize {
        // the correct index is always among the options
        self.options
            .iter()
            .position(|&idx| idx == self.correct)
            .unwrap_or_default()
    }

    pub fn is_correct(&self, slot: usize) -> bool {
        self.options.get(slot) == Some(&self.correct)
    }
}

/// Outcome of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// Option slot the user picked.
    pub selected: usize,
    pub correct: bool,
}

/// Quiz engine state: Idle until the first question, then alternating
/// between an active question and an answered one.
#[derive(Debug, Default, Clone)]
pub struct QuizState {
    pub question: Option<Question>,
    pub answered: Option<Answer>,
}

impl QuizState {
    /// Replace the current question with a fresh draw and clear the
    /// previous outcome.
    pub fn next_question(&mut self, vocabulary: &Vocabulary) {
        self.next_question_with(vocabulary, &mut rand::rng());
    }

    pub fn next_question_with(&mut self, vocabulary: &Vocabulary, rng: &mut impl Rng) {
        self.question = Some(Question::generate(vocabulary, rng));
        self.answered = None;
    }

    /// Evaluate a picked option slot against the active question.
    ///
    /// Returns `None` without touching the score when there is no active
    /// question, the question was already answered, or the slot is out of
    /// range. The first accepted answer locks the question until the next
    /// draw.
    pub fn answer(&mut self, slot: usize, score: &mut ScoreState) -> Option<Answer> {
        let question = self.question.as_ref()?;
        if self.answered.is_some() || slot >= question.options.len() {
            return None;
        }

        let correct = question.is_correct(slot);
        if correct {
            score.record_correct();
        } else {
            score.record_incorrect();
        }

        let answer = Answer {
            selected: slot,
            correct,
        };
        self.answered = Some(answer);
        Some(answer)
    }
}
