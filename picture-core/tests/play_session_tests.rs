mod common;

use common::*;
use picture_core::{PlayEvent, PlaySession, ScoringEngine, Transition};
use picture_types::{GuessFeedback, PerformanceTier, PlayError, PlayView};

#[test]
fn test_cat_dog_scenario() {
    let collector = EventCollector::new();
    let mut session = create_cat_dog_session(collector.bus());

    assert_eq!(session.submit_guess("CAT "), Ok(GuessFeedback::Correct));
    assert_eq!(session.score(), 1);
    assert_eq!(
        session.settle_feedback(),
        Some(Transition::Advanced { question_index: 1 })
    );
    assert_eq!(session.current_index(), 1);

    assert_eq!(session.submit_guess("fish"), Ok(GuessFeedback::Wrong));
    session.settle_feedback();
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_index(), 1);

    assert_eq!(session.submit_guess("dog"), Ok(GuessFeedback::Correct));
    assert_eq!(session.score(), 2);
    session.settle_feedback();
    assert!(session.is_completed());

    let result = session.final_score().unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.total, 2);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.tier, PerformanceTier::Perfect);

    match session.view() {
        PlayView::Completed { game_name, result } => {
            assert_eq!(game_name, "Pets");
            assert_eq!(result.percentage, 100);
        }
        other => panic!("Expected completed view, got {:?}", other),
    }

    let completions =
        collector.count_matching(|e| matches!(e, PlayEvent::SessionCompleted { .. }));
    assert_eq!(completions, 1);
}

#[test]
fn test_events_follow_transitions() {
    let collector = EventCollector::new();
    let mut session = create_cat_dog_session(collector.bus());

    guess_and_settle(&mut session, "fish");
    guess_and_settle(&mut session, "cat");

    let events = collector.get_events();
    assert_eq!(events.len(), 5);
    assert!(matches!(
        events[0],
        PlayEvent::SessionStarted {
            question_count: 2,
            ..
        }
    ));
    assert!(matches!(
        events[1],
        PlayEvent::GuessJudged {
            feedback: GuessFeedback::Wrong,
            score: 0,
            ..
        }
    ));
    assert!(matches!(
        events[2],
        PlayEvent::FeedbackCleared {
            question_index: 0,
            ..
        }
    ));
    assert!(matches!(
        events[3],
        PlayEvent::GuessJudged {
            feedback: GuessFeedback::Correct,
            score: 1,
            ..
        }
    ));
    assert!(matches!(
        events[4],
        PlayEvent::QuestionAdvanced {
            question_index: 1,
            ..
        }
    ));
    assert!(events.iter().all(|e| e.game_id() == "game-pets"));
}

#[test]
fn test_pending_feedback_is_a_noop() {
    let mut session = create_session_with_words(&["sun", "moon", "star"]);

    session.submit_guess("sun").unwrap();
    for guess in ["moon", "sun", "", "star"] {
        assert_eq!(session.submit_guess(guess), Err(PlayError::FeedbackPending));
    }
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_index(), 0);

    session.settle_feedback();
    assert_eq!(session.submit_guess("moon"), Ok(GuessFeedback::Correct));
}

#[test]
fn test_score_never_exceeds_question_count() {
    let mut session = create_session_with_words(&["a", "b", "c"]);

    for word in ["x", "a", "y", "b", "z", "c"] {
        guess_and_settle(&mut session, word);
        assert!(session.score() as usize <= session.question_count());
    }

    assert!(session.is_completed());
    assert_eq!(session.score(), 3);
    assert_eq!(session.submit_guess("a"), Err(PlayError::SessionCompleted));
}

#[test]
fn test_completed_only_after_last_correct_advance() {
    let mut session = create_session_with_words(&["one", "two"]);

    guess_and_settle(&mut session, "one");
    assert!(!session.is_completed());

    // Wrong answers on the last question never complete the session
    for _ in 0..5 {
        guess_and_settle(&mut session, "wrong");
        assert!(!session.is_completed());
    }

    session.submit_guess("two").unwrap();
    assert!(!session.is_completed());
    assert!(matches!(
        session.settle_feedback(),
        Some(Transition::Completed(_))
    ));
    assert!(session.is_completed());
    assert_eq!(session.current_index(), session.question_count());
}

#[test]
fn test_three_of_five_resolved_scores_out_of_three() {
    // Only three questions survived resolution; the game declared five
    let questions = vec![
        create_test_question("q1", "tree"),
        create_test_question("q3", "rock"),
        create_test_question("q5", "lake"),
    ];
    let mut game = create_test_game("Nature", &questions);
    game.question_ids = (1..=5).map(|i| format!("q{}", i)).collect();

    let mut session = PlaySession::new(game, questions);
    assert_eq!(session.question_count(), 3);

    guess_and_settle(&mut session, "tree");
    guess_and_settle(&mut session, "rock");
    guess_and_settle(&mut session, "lake");

    let result = session.final_score().unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.score, 3);
}

#[test]
fn test_zero_questions_never_complete() {
    let game = create_test_game("Nothing", &[]);
    let mut session = PlaySession::new(game, Vec::new());

    assert_eq!(session.submit_guess("anything"), Err(PlayError::EmptySession));
    assert_eq!(session.settle_feedback(), None);
    assert!(!session.is_completed());
    assert!(matches!(session.view(), PlayView::Empty { .. }));
}

#[test]
fn test_percentage_matches_final_score() {
    let mut session = create_session_with_words(&["a", "b", "c"]);

    // Every question is eventually answered correctly, so the score is full
    guess_and_settle(&mut session, "a");
    guess_and_settle(&mut session, "nope");
    guess_and_settle(&mut session, "b");
    guess_and_settle(&mut session, "c");

    let result = session.final_score().unwrap();
    assert_eq!(result.percentage, ScoringEngine::percentage(3, 3));
}
