use wortschatz_core::{Entry, StudyState, Vocabulary};

fn sample_vocabulary() -> Vocabulary {
    let entries = vec![
        Entry::new("animals", "Hund", Some("Hunde".to_string()), "dog"),
        Entry::new("animals", "Katze", None, "cat"),
        Entry::new("places", "Haus", Some("Häuser".to_string()), "house"),
        Entry::new("nature", "Baum", Some("Bäume".to_string()), "tree"),
    ];
    Vocabulary::new(entries).expect("sample vocabulary is valid")
}

#[test]
fn test_navigation_wraps_around() {
    let vocab = sample_vocabulary();
    let mut study = StudyState::default();

    study.index = vocab.len() - 1;
    study.next(vocab.len());
    assert_eq!(study.index, 0, "next past the last card wraps to the first");

    study.prev(vocab.len());
    assert_eq!(
        study.index,
        vocab.len() - 1,
        "prev before the first card wraps to the last"
    );
}

#[test]
fn test_next_then_prev_is_identity() {
    let vocab = sample_vocabulary();
    for start in 0..vocab.len() {
        let mut study = StudyState {
            index: start,
            flipped: false,
        };
        study.next(vocab.len());
        study.prev(vocab.len());
        assert_eq!(study.index, start);

        study.prev(vocab.len());
        study.next(vocab.len());
        assert_eq!(study.index, start);
    }
}

#[test]
fn test_navigation_and_reset_unflip_the_card() {
    let vocab = sample_vocabulary();
    let mut study = StudyState::default();

    study.flip();
    assert!(study.flipped);
    study.next(vocab.len());
    assert!(!study.flipped, "navigation shows the front face first");

    study.flip();
    study.prev(vocab.len());
    assert!(!study.flipped);

    study.flip();
    study.reset();
    assert_eq!(study.index, 0);
    assert!(!study.flipped);
}

#[test]
fn test_card_german_front() {
    let vocab = sample_vocabulary();
    let study = StudyState::default();

    let card = study.card(&vocab, false);
    assert_eq!(card.category, "animals");
    assert_eq!(card.front, "Hund");
    assert_eq!(card.plural_note, "Plural: Hunde");
    assert_eq!(card.back, "dog");
    assert_eq!(card.counter, "1 / 4");
}

#[test]
fn test_card_without_plural_has_empty_note() {
    let vocab = sample_vocabulary();
    let mut study = StudyState::default();
    study.next(vocab.len());

    let card = study.card(&vocab, false);
    assert_eq!(card.front, "Katze");
    assert_eq!(card.plural_note, "");
    assert_eq!(card.counter, "2 / 4");
}

#[test]
fn test_language_toggle_swaps_faces_not_entries() {
    let vocab = sample_vocabulary();
    for index in 0..vocab.len() {
        let study = StudyState {
            index,
            flipped: false,
        };
        let german_front = study.card(&vocab, false);
        let english_front = study.card(&vocab, true);

        // same entry, same position
        assert_eq!(german_front.category, english_front.category);
        assert_eq!(german_front.counter, english_front.counter);

        // the English face carries no plural note; the German text moves
        // to the back with its plural in parentheses
        assert_eq!(english_front.front, german_front.back);
        assert_eq!(english_front.plural_note, "");
        assert!(english_front.back.starts_with(&german_front.front));
    }
}

#[test]
fn test_english_front_back_includes_plural() {
    let vocab = sample_vocabulary();
    let study = StudyState::default();

    let card = study.card(&vocab, true);
    assert_eq!(card.front, "dog");
    assert_eq!(card.back, "Hund (Hunde)");
}
