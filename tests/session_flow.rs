use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quizline::parser::parse_question;
use quizline::{Question, QuizError, QuizSession, SessionConfig, SessionStatus};

fn bank(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            let line = format!("Question {} {{right{}, wrong{}, other{}}}", i, i, i, i);
            parse_question(&line).unwrap()
        })
        .collect()
}

fn config(max_questions: usize, random_order: bool) -> SessionConfig {
    SessionConfig {
        max_questions,
        random_order,
    }
}

fn session(questions: Vec<Question>, cfg: SessionConfig, seed: u64) -> QuizSession<StdRng> {
    QuizSession::new(questions, cfg, StdRng::seed_from_u64(seed))
}

#[test]
fn test_random_selection_without_replacement() {
    let questions = bank(8);
    let expected: HashSet<String> = questions.iter().map(|q| q.phrase().to_string()).collect();

    for seed in 0..64 {
        let mut s = session(questions.clone(), config(0, true), seed);
        let mut seen = Vec::new();

        s.advance();
        while let Some(q) = s.current_question() {
            seen.push(q.phrase().to_string());
            let answer = q.correct_option().to_string();
            s.submit_answer(&answer).unwrap();
        }

        assert_eq!(seen.len(), 8, "seed {}", seed);
        let unique: HashSet<String> = seen.into_iter().collect();
        assert_eq!(unique, expected, "seed {}", seed);
        assert_eq!(s.remaining(), 0);
        assert!(s.is_finished());
    }
}

#[test]
fn test_sequential_order_follows_bank() {
    let questions = bank(4);
    let mut s = session(questions.clone(), config(0, false), 1);

    s.advance();
    for q in &questions {
        assert_eq!(s.current_question(), Some(q));
        s.submit_answer("nope").unwrap();
    }
    assert_eq!(s.status(), SessionStatus::Finished);
}

#[test]
fn test_scoring_correct_and_wrong_answers() {
    let mut s = session(bank(3), config(0, false), 2);
    s.advance();

    assert!(s.submit_answer("right0").unwrap());
    assert_eq!(s.score(), 1);
    assert_eq!(s.correct_answers(), 1);

    assert!(!s.submit_answer("wrong1").unwrap());
    assert_eq!(s.score(), 1);
    assert_eq!(s.correct_answers(), 1);

    // Exact match only
    assert!(!s.submit_answer("Right2").unwrap());

    let results = s.results().unwrap();
    assert_eq!(results.total_questions, 3);
    assert_eq!(results.correct_answers, 1);
    assert_eq!(results.score, 1);
    assert!(results.score as usize <= results.total_questions);

    let answers = s.answers();
    assert_eq!(answers.len(), 3);
    assert!(answers[0].correct);
    assert_eq!(answers[1].selected, "wrong1");
    assert_eq!(answers[1].correct_option, "right1");
}

#[test]
fn test_display_options_is_a_permutation() {
    let q = parse_question("Letters {A, B, C, D}").unwrap();
    let mut s = session(vec![q], config(0, true), 3);
    s.advance();

    let mut orders = HashSet::new();
    for _ in 0..200 {
        let mut shown = s.display_options().unwrap();
        orders.insert(shown.clone());
        shown.sort();
        assert_eq!(shown, vec!["A", "B", "C", "D"]);
        assert_eq!(s.current_question().unwrap().correct_option(), "A");
    }
    // 200 draws over 24 permutations
    assert!(orders.len() > 1);
}

#[test]
fn test_random_pick_is_uniform() {
    const RUNS: usize = 10_000;
    let questions = bank(4);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut first = [0usize; 4];
    let mut second = [0usize; 4];

    for _ in 0..RUNS {
        let seed: u64 = rng.gen();
        let mut s = session(questions.clone(), config(0, true), seed);
        s.advance();
        let idx = questions.iter().position(|q| Some(q) == s.current_question()).unwrap();
        first[idx] += 1;

        s.submit_answer("x").unwrap();
        let idx = questions.iter().position(|q| Some(q) == s.current_question()).unwrap();
        second[idx] += 1;
    }

    // Expected 2500 each; the standard deviation is about 43
    for counts in [first, second] {
        for &c in &counts {
            assert!((2250..=2750).contains(&c), "counts {:?}", counts);
        }
    }
}

#[test]
fn test_display_shuffle_is_uniform() {
    const RUNS: usize = 10_000;
    let q = parse_question("Letters {A, B, C, D}").unwrap();
    let mut s = session(vec![q], config(0, true), 12);
    s.advance();

    let mut positions = [0usize; 4];
    for _ in 0..RUNS {
        let shown = s.display_options().unwrap();
        positions[shown.iter().position(|o| o == "A").unwrap()] += 1;
    }

    for &c in &positions {
        assert!((2250..=2750).contains(&c), "positions {:?}", positions);
    }
}

#[test]
fn test_duplicate_option_text_counts_as_correct() {
    let q = parse_question("Echo {same, same, other}").unwrap();
    let mut s = session(vec![q], config(0, true), 4);
    s.advance();

    let shown = s.display_options().unwrap();
    assert_eq!(shown.iter().filter(|o| o.as_str() == "same").count(), 2);

    assert!(s.submit_answer("same").unwrap());
    assert_eq!(s.results().unwrap().score, 1);
}

#[test]
fn test_limit_clamping() {
    assert_eq!(session(bank(10), config(2, true), 0).total_questions(), 2);
    assert_eq!(session(bank(10), config(0, true), 0).total_questions(), 10);
    assert_eq!(session(bank(10), config(50, true), 0).total_questions(), 10);
}

#[test]
fn test_limit_stops_early() {
    let mut s = session(bank(10), config(2, true), 5);
    s.advance();
    assert_eq!(s.progress(), (1, 2));

    s.submit_answer("x").unwrap();
    assert_eq!(s.status(), SessionStatus::InProgress);
    assert_eq!(s.progress(), (2, 2));

    s.submit_answer("x").unwrap();
    assert_eq!(s.status(), SessionStatus::Finished);
    assert!(s.current_question().is_none());
    assert_eq!(s.remaining(), 8);
    assert_eq!(s.results().unwrap().total_questions, 2);
}

#[test]
fn test_submit_after_finish_is_rejected() {
    let mut s = session(bank(1), config(0, true), 6);
    s.advance();
    assert!(s.submit_answer("right0").unwrap());
    assert!(s.is_finished());

    let err = s.submit_answer("right0").unwrap_err();
    assert!(matches!(
        err,
        QuizError::InvalidSessionState {
            status: SessionStatus::Finished,
            ..
        }
    ));
    assert_eq!(s.score(), 1);
    assert_eq!(s.correct_answers(), 1);
}

#[test]
fn test_out_of_state_calls_before_start() {
    let mut s = session(bank(2), config(0, true), 7);
    assert_eq!(s.status(), SessionStatus::NotStarted);

    assert!(matches!(
        s.submit_answer("right0"),
        Err(QuizError::InvalidSessionState {
            status: SessionStatus::NotStarted,
            ..
        })
    ));
    assert!(s.display_options().is_err());
    assert!(s.results().is_err());
    assert_eq!(s.score(), 0);
}

#[test]
fn test_results_unavailable_mid_quiz() {
    let mut s = session(bank(2), config(0, true), 8);
    s.advance();
    s.submit_answer("x").unwrap();
    assert!(matches!(
        s.results(),
        Err(QuizError::InvalidSessionState {
            status: SessionStatus::InProgress,
            ..
        })
    ));
}

#[test]
fn test_empty_pool_finishes_immediately() {
    let mut s = session(Vec::new(), SessionConfig::default(), 9);
    assert_eq!(s.total_questions(), 0);
    assert!(s.is_finished());

    s.advance();
    assert!(s.is_finished());

    let results = s.results().unwrap();
    assert_eq!(results.total_questions, 0);
    assert_eq!(results.correct_answers, 0);
    assert_eq!(results.score, 0);
}

#[test]
fn test_advance_after_finish_is_a_no_op() {
    let mut s = session(bank(1), config(0, false), 10);
    s.advance();
    s.submit_answer("right0").unwrap();
    s.advance();
    s.advance();

    assert!(s.is_finished());
    assert_eq!(s.asked(), 1);
    assert_eq!(s.results().unwrap().score, 1);
}

#[test]
fn test_same_seed_same_order() {
    let play = |seed| {
        let mut s = session(bank(6), config(0, true), seed);
        let mut order = Vec::new();
        s.advance();
        while let Some(q) = s.current_question() {
            order.push(q.phrase().to_string());
            s.submit_answer("x").unwrap();
        }
        order
    };

    assert_eq!(play(42), play(42));
}
