use std::time::{Duration, Instant};

use fiszki_types::{Direction, Flashcard, Tab};
use proptest::prelude::*;

use crate::study::{Progress, StudySession};

fn deck() -> Vec<Flashcard> {
    vec![
        Flashcard::new("What is a variable?", "A container for data", "IT"),
        Flashcard::new("Mitochondria", "Powerhouse of the cell", "Biology"),
        Flashcard::new("What is a function?", "A reusable block of code", "IT"),
    ]
}

fn loaded(cards: Vec<Flashcard>) -> StudySession {
    let mut session = StudySession::new(Duration::from_millis(300));
    assert!(session.begin_generation());
    session.finish_generation(Ok(cards));
    session
}

#[test]
fn test_categories_in_first_seen_order() {
    let session = loaded(deck());
    assert_eq!(session.categories(), vec!["IT", "Biology"]);
    assert_eq!(session.category_count("IT"), 2);
}

#[test]
fn test_next_and_prev_wrap() {
    let mut session = loaded(deck());
    let start = Instant::now();

    assert!(session.navigate(Direction::Prev, start));
    assert_eq!(session.current_index(), 2);

    assert!(session.navigate(Direction::Next, start + Duration::from_secs(1)));
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_cooldown_drops_rapid_navigation() {
    let mut session = loaded(deck());
    let start = Instant::now();

    assert!(session.navigate(Direction::Next, start));
    assert!(!session.navigate(Direction::Next, start + Duration::from_millis(100)));
    assert_eq!(session.current_index(), 1);
    assert!(session.navigate(Direction::Next, start + Duration::from_millis(300)));
    assert_eq!(session.current_index(), 2);
}

#[test]
fn test_navigation_unflips_card() {
    let mut session = loaded(deck());
    session.flip();
    assert!(session.is_flipped());

    session.navigate(Direction::Next, Instant::now());
    assert!(!session.is_flipped());
}

#[test]
fn test_empty_session_ignores_navigation_and_flip() {
    let mut session = StudySession::default();
    assert!(!session.navigate(Direction::Next, Instant::now()));
    session.flip();
    assert!(!session.is_flipped());
    assert_eq!(
        session.progress(),
        Progress {
            position: 0,
            total: 0,
            percent: 0
        }
    );
}

#[test]
fn test_select_tab_resets_position() {
    let mut session = loaded(deck());
    session.navigate(Direction::Next, Instant::now());
    session.flip();

    session.select_tab(Tab::Category("IT".to_string()));

    assert_eq!(session.current_index(), 0);
    assert!(!session.is_flipped());
    assert_eq!(session.filtered().len(), 2);
    assert_eq!(session.current().unwrap().front, "What is a variable?");
}

#[test]
fn test_unknown_tab_shows_nothing() {
    let mut session = loaded(deck());
    session.select_tab(Tab::parse("Chemistry"));
    assert!(session.current().is_none());
    assert_eq!(session.progress().total, 0);
}

#[test]
fn test_progress_rounds_percent() {
    let mut session = loaded(deck());
    assert_eq!(
        session.progress(),
        Progress {
            position: 1,
            total: 3,
            percent: 33
        }
    );
    session.navigate(Direction::Next, Instant::now());
    assert_eq!(session.progress().percent, 67);
}

#[test]
fn test_generation_is_not_reentrant() {
    let mut session = StudySession::default();
    assert!(session.begin_generation());
    assert!(!session.begin_generation());
    assert!(session.is_generating());

    session.finish_generation(Ok(deck()));
    assert!(!session.is_generating());
    assert!(session.begin_generation());
}

#[test]
fn test_failed_generation_keeps_cards_and_reports() {
    let mut session = loaded(deck());
    assert!(session.begin_generation());
    session.finish_generation(Err("Could not extract JSON from AI response".to_string()));

    assert_eq!(session.flashcards().len(), 3);
    assert!(!session.is_generating());
    assert_eq!(
        session.last_error(),
        Some("Could not extract JSON from AI response")
    );

    assert!(session.begin_generation());
    assert_eq!(session.last_error(), None);
}

#[test]
fn test_successful_generation_appends() {
    let mut session = loaded(deck());
    session.begin_generation();
    session.finish_generation(Ok(vec![Flashcard::new("Q", "A", "History")]));

    assert_eq!(session.flashcards().len(), 4);
    assert_eq!(session.flashcards()[3].category, "History");
    assert_eq!(session.categories(), vec!["IT", "Biology", "History"]);
}

fn cards_strategy() -> impl Strategy<Value = Vec<Flashcard>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            "[a-z]{1,8}",
            prop::sample::select(vec!["IT", "Biology", "History", "Math", ""]),
        )
            .prop_map(|(front, back, category)| Flashcard::new(front, back, category)),
        0..30,
    )
}

proptest! {
    #[test]
    fn prop_category_subsets_partition_the_list(cards in cards_strategy()) {
        let mut session = loaded(cards.clone());
        let categories: Vec<String> = session.categories().into_iter().map(str::to_string).collect();
        let mut seen = 0;

        for category in categories {
            session.select_tab(Tab::Category(category.clone()));
            let subset = session.filtered();
            prop_assert!(subset.iter().all(|card| card.category == category));
            seen += subset.len();
        }
        prop_assert_eq!(seen, cards.len());

        session.select_tab(Tab::All);
        prop_assert_eq!(session.filtered().len(), cards.len());
    }

    #[test]
    fn prop_next_n_times_returns_to_start(cards in cards_strategy()) {
        prop_assume!(!cards.is_empty());
        let n = cards.len();
        let mut session = loaded(cards);
        let mut now = Instant::now();

        for _ in 0..n {
            prop_assert!(session.navigate(Direction::Next, now));
            now += Duration::from_millis(300);
        }
        prop_assert_eq!(session.current_index(), 0);
    }
}
