use rand::SeedableRng;
use rand::rngs::StdRng;
use wortschatz_core::{
    Entry, OPTION_COUNT, POINTS_PER_CORRECT, Question, QuizState, ScoreState, Vocabulary,
    VocabularyError, builtin_entries,
};

fn small_vocabulary() -> Vocabulary {
    let entries = vec![
        Entry::new("animals", "Hund", Some("Hunde".to_string()), "dog"),
        Entry::new("animals", "Katze", None, "cat"),
        Entry::new("places", "Haus", Some("Häuser".to_string()), "house"),
        Entry::new("nature", "Baum", Some("Bäume".to_string()), "tree"),
    ];
    Vocabulary::new(entries).expect("sample vocabulary is valid")
}

#[test]
fn test_generated_options_are_distinct_and_contain_the_answer() {
    let vocab = Vocabulary::new(builtin_entries()).expect("builtin vocabulary is valid");

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = Question::generate(&vocab, &mut rng);

        assert_eq!(question.options.len(), OPTION_COUNT);
        for (i, a) in question.options.iter().enumerate() {
            for b in question.options.iter().skip(i + 1) {
                assert_ne!(a, b, "options must be pairwise distinct");
            }
        }
        let hits = question
            .options
            .iter()
            .filter(|&&idx| idx == question.correct)
            .count();
        assert_eq!(hits, 1, "exactly one option is the correct entry");
        assert!(question.is_correct(question.correct_slot()));
    }
}

#[test]
fn test_generation_works_at_minimum_vocabulary_size() {
    // with exactly four entries every entry must appear as an option
    let vocab = small_vocabulary();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = Question::generate(&vocab, &mut rng);
        let mut seen = question.options.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}

#[test]
fn test_prompt_is_english_and_options_are_german() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(7);
    let question = Question::generate(&vocab, &mut rng);

    let correct_entry = &vocab.entries()[question.correct];
    assert_eq!(question.prompt(&vocab), correct_entry.english);
    assert_eq!(
        question.option_label(&vocab, question.correct_slot()),
        correct_entry.german
    );
}

#[test]
fn test_correct_answer_scores_and_extends_streak() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(1);
    let mut quiz = QuizState::default();
    let mut score = ScoreState::default();

    quiz.next_question_with(&vocab, &mut rng);
    let slot = quiz.question.as_ref().unwrap().correct_slot();
    let answer = quiz.answer(slot, &mut score).expect("question is active");

    assert!(answer.correct);
    assert_eq!(score.score, POINTS_PER_CORRECT);
    assert_eq!(score.streak, 1);
}

#[test]
fn test_wrong_answer_breaks_streak_but_keeps_score() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(2);
    let mut quiz = QuizState::default();
    let mut score = ScoreState::new(30, 3);

    quiz.next_question_with(&vocab, &mut rng);
    let correct_slot = quiz.question.as_ref().unwrap().correct_slot();
    let wrong_slot = (correct_slot + 1) % OPTION_COUNT;
    let answer = quiz.answer(wrong_slot, &mut score).expect("question is active");

    assert!(!answer.correct);
    assert_eq!(score.score, 30);
    assert_eq!(score.streak, 0);

    // the correct slot stays identifiable for the reveal
    let question = quiz.question.as_ref().unwrap();
    assert_eq!(
        question.option_label(&vocab, question.correct_slot()),
        vocab.entries()[question.correct].german
    );
}

#[test]
fn test_second_answer_is_ignored() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(3);
    let mut quiz = QuizState::default();
    let mut score = ScoreState::default();

    quiz.next_question_with(&vocab, &mut rng);
    let slot = quiz.question.as_ref().unwrap().correct_slot();
    assert!(quiz.answer(slot, &mut score).is_some());
    assert!(quiz.answer(slot, &mut score).is_none());
    assert!(quiz.answer((slot + 1) % OPTION_COUNT, &mut score).is_none());

    // score reflects exactly one evaluation
    assert_eq!(score.score, POINTS_PER_CORRECT);
    assert_eq!(score.streak, 1);
}

#[test]
fn test_answer_without_active_question_is_ignored() {
    let mut quiz = QuizState::default();
    let mut score = ScoreState::default();

    assert!(quiz.answer(0, &mut score).is_none());
    assert_eq!(score, ScoreState::default());
}

#[test]
fn test_out_of_range_slot_is_ignored() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(4);
    let mut quiz = QuizState::default();
    let mut score = ScoreState::default();

    quiz.next_question_with(&vocab, &mut rng);
    assert!(quiz.answer(OPTION_COUNT, &mut score).is_none());
    assert!(quiz.answered.is_none(), "question is still open");
}

#[test]
fn test_advancing_clears_the_previous_outcome() {
    let vocab = small_vocabulary();
    let mut rng = StdRng::seed_from_u64(5);
    let mut quiz = QuizState::default();
    let mut score = ScoreState::default();

    quiz.next_question_with(&vocab, &mut rng);
    let slot = quiz.question.as_ref().unwrap().correct_slot();
    quiz.answer(slot, &mut score);
    assert!(quiz.answered.is_some());

    quiz.next_question_with(&vocab, &mut rng);
    assert!(quiz.answered.is_none());
    assert!(quiz.question.is_some());
}

#[test]
fn test_undersized_vocabulary_is_rejected() {
    let entries = vec![
        Entry::new("animals", "Hund", None, "dog"),
        Entry::new("animals", "Katze", None, "cat"),
    ];
    match Vocabulary::new(entries) {
        Err(VocabularyError::TooFewEntries { found, need }) => {
            assert_eq!(found, 2);
            assert_eq!(need, OPTION_COUNT);
        }
        other => panic!("expected TooFewEntries, got {other:?}"),
    }
}

#[test]
fn test_entry_without_english_text_is_rejected() {
    let entries = vec![
        Entry::new("animals", "Hund", None, "dog"),
        Entry::new("animals", "Katze", None, ""),
        Entry::new("places", "Haus", None, "house"),
        Entry::new("nature", "Baum", None, "tree"),
    ];
    assert!(matches!(
        Vocabulary::new(entries),
        Err(VocabularyError::IncompleteEntry { index: 1 })
    ));
}
