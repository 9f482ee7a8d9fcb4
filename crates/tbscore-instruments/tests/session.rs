use tbscore_core::models::answer::Answer;
use tbscore_core::models::risk::{RiskThresholds, RiskTier};
use tbscore_instruments::catalog::Catalog;
use tbscore_instruments::config::EngineConfig;
use tbscore_instruments::error::ScoringError;
use tbscore_instruments::scoring::{AnswerOption, Category, Question};
use tbscore_instruments::session::{AssessmentSession, SessionState};
use tbscore_instruments::{default_instrument, Instrument};

fn single_question() -> Catalog {
    Catalog::new(
        "single",
        "Single",
        vec![Category::new(
            "Only",
            vec![Question::new(
                "q",
                "prompt",
                vec![
                    AnswerOption::new(0, "none", 0),
                    AnswerOption::new(1, "some", 1),
                    AnswerOption::new(2, "lots", 3),
                ],
            )],
        )],
    )
}

fn two_questions() -> Catalog {
    Catalog::new(
        "pair",
        "Pair",
        vec![Category::new(
            "Pair",
            vec![
                Question::new(
                    "first",
                    "prompt",
                    vec![
                        AnswerOption::new(0, "a", 0),
                        AnswerOption::new(1, "b", 2),
                        AnswerOption::new(2, "c", 3),
                    ],
                ),
                Question::new(
                    "second",
                    "prompt",
                    vec![AnswerOption::new(0, "a", 0), AnswerOption::new(1, "b", 4)],
                ),
            ],
        )],
    )
}

fn answer_all_max(session: &mut AssessmentSession<'_>) {
    let instrument = session.instrument();
    for question in instrument.flatten() {
        let best = question
            .options
            .iter()
            .max_by_key(|o| o.points)
            .unwrap();
        session.record_answer(&question.id, best.value).unwrap();
    }
}

#[test]
fn single_question_top_option() {
    let catalog = single_question();
    let mut session = AssessmentSession::new(&catalog, EngineConfig::default());
    session.record_answer("q", 2).unwrap();
    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, 3);
    assert_eq!(result.max_possible_score, 3);
    // 3 is below the IDAI moderate threshold.
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert!(result.complete);
}

#[test]
fn early_finalize_counts_unanswered_as_zero() {
    let catalog = two_questions();
    let mut session = AssessmentSession::new(&catalog, EngineConfig::default());
    session.record_answer("first", 1).unwrap();
    assert!(!session.is_complete());

    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, 2);
    assert_eq!(result.max_possible_score, 7);
    assert!(!result.complete);
    assert_eq!(result.detailed_scores.len(), 1);
}

#[test]
fn early_finalize_rejected_when_disabled() {
    let catalog = two_questions();
    let config = EngineConfig {
        allow_incomplete_finalize: false,
        ..EngineConfig::default()
    };
    let mut session = AssessmentSession::new(&catalog, config);
    session.record_answer("first", 1).unwrap();

    let err = session.finalize().unwrap_err();
    assert!(matches!(err, ScoringError::Incomplete { answered: 1, total: 2 }));
    assert_eq!(session.state(), SessionState::InProgress);

    session.record_answer("second", 1).unwrap();
    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, 6);
}

#[test]
fn unknown_question_rejected() {
    let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
    let err = session.record_answer("nonexistent", 0).unwrap_err();
    assert!(matches!(err, ScoringError::UnknownQuestion(id) if id == "nonexistent"));
    assert_eq!(session.state(), SessionState::Empty);
}

#[test]
fn unknown_option_rejected() {
    let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
    let err = session.record_answer("fever", 7).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::UnknownOption { ref question_id, value: 7 } if question_id == "fever"
    ));
    assert!(session.answer("fever").is_none());
}

#[test]
fn recording_twice_is_idempotent() {
    let mut once = AssessmentSession::new(default_instrument(), EngineConfig::default());
    once.record_answer("exposure", 3).unwrap();

    let mut twice = AssessmentSession::new(default_instrument(), EngineConfig::default());
    twice.record_answer("exposure", 3).unwrap();
    twice.record_answer("exposure", 3).unwrap();

    assert_eq!(once.answers(), twice.answers());
}

#[test]
fn later_answer_overwrites_earlier() {
    let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
    session.record_answer("tuberculinTest", 0).unwrap();
    session.record_answer("tuberculinTest", 2).unwrap();

    assert_eq!(session.answered_count(), 1);
    assert_eq!(
        session.answer("tuberculinTest"),
        Some(&Answer { value: 2, points: 3 })
    );
}

#[test]
fn state_transitions() {
    let catalog = two_questions();
    let mut session = AssessmentSession::new(&catalog, EngineConfig::default());
    assert_eq!(session.state(), SessionState::Empty);

    session.record_answer("first", 0).unwrap();
    assert_eq!(session.state(), SessionState::InProgress);

    session.record_answer("second", 0).unwrap();
    assert_eq!(session.state(), SessionState::Complete);

    session.finalize().unwrap();
    assert_eq!(session.state(), SessionState::Finalized);
}

#[test]
fn finalized_session_rejects_changes() {
    let catalog = single_question();
    let mut session = AssessmentSession::new(&catalog, EngineConfig::default());
    session.record_answer("q", 1).unwrap();
    session.finalize().unwrap();

    assert!(matches!(
        session.record_answer("q", 2),
        Err(ScoringError::SessionFinalized)
    ));
    assert!(matches!(session.finalize(), Err(ScoringError::SessionFinalized)));
    assert_eq!(session.answer("q"), Some(&Answer { value: 1, points: 1 }));
}

#[test]
fn all_max_answers_reach_max_score() {
    let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
    answer_all_max(&mut session);
    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, result.max_possible_score);
    assert_eq!(result.total_score, 20);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.score_percentage(), 100.0);
}

#[test]
fn total_never_exceeds_max() {
    let idai = default_instrument();
    // Walk every option index in lockstep; each complete set stays under max.
    for pick in 0..4 {
        let mut session = AssessmentSession::new(idai, EngineConfig::default());
        for question in idai.flatten() {
            let option = &question.options[pick.min(question.options.len() - 1)];
            session.record_answer(&question.id, option.value).unwrap();
        }
        let result = session.finalize().unwrap();
        assert!(result.total_score <= result.max_possible_score);
    }
}

#[test]
fn total_below_max_when_any_answer_is_not_top() {
    let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
    answer_all_max(&mut session);
    session.record_answer("cough", 0).unwrap();
    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, 19);
    assert!(result.total_score < result.max_possible_score);
}

#[test]
fn idai_threshold_edges() {
    let cases = [
        // exposure=3 points
        (vec![("exposure", 3)], 3, RiskTier::Low),
        // 3 + fever 1
        (vec![("exposure", 3), ("fever", 1)], 4, RiskTier::Moderate),
        // 3 + 1 + 1
        (vec![("exposure", 3), ("fever", 1), ("cough", 1)], 5, RiskTier::Moderate),
        // 3 + 3
        (vec![("exposure", 3), ("chestXray", 2)], 6, RiskTier::High),
    ];
    for (answers, expected_total, expected_tier) in cases {
        let mut session = AssessmentSession::new(default_instrument(), EngineConfig::default());
        for (id, value) in answers {
            session.record_answer(id, value).unwrap();
        }
        let result = session.finalize().unwrap();
        assert_eq!(result.total_score, expected_total);
        assert_eq!(result.risk_tier, expected_tier, "total {expected_total}");
    }
}

#[test]
fn configured_thresholds_drive_classification() {
    let config = EngineConfig {
        thresholds: RiskThresholds::RELATIVE,
        ..EngineConfig::default()
    };
    let mut session = AssessmentSession::new(default_instrument(), config);
    session.record_answer("exposure", 3).unwrap();
    session.record_answer("chestXray", 2).unwrap();
    let result = session.finalize().unwrap();
    assert_eq!(result.total_score, 6);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
    assert_eq!(result.thresholds, RiskThresholds::RELATIVE);
}

#[test]
fn invalid_thresholds_fail_finalize() {
    let config = EngineConfig {
        thresholds: RiskThresholds {
            high_threshold: 2,
            moderate_threshold: 5,
        },
        ..EngineConfig::default()
    };
    let catalog = single_question();
    let mut session = AssessmentSession::new(&catalog, config);
    session.record_answer("q", 0).unwrap();
    assert!(matches!(session.finalize(), Err(ScoringError::Core(_))));
    assert_eq!(session.state(), SessionState::Complete);
}

#[test]
fn progress_and_next_unanswered() {
    let catalog = two_questions();
    let mut session = AssessmentSession::new(&catalog, EngineConfig::default());
    assert_eq!(session.progress(), 0.0);
    assert_eq!(session.next_unanswered().map(|q| q.id.as_str()), Some("first"));

    session.record_answer("first", 2).unwrap();
    assert_eq!(session.progress(), 0.5);
    assert_eq!(session.next_unanswered().map(|q| q.id.as_str()), Some("second"));

    session.record_answer("second", 0).unwrap();
    assert_eq!(session.progress(), 1.0);
    assert!(session.next_unanswered().is_none());
}

#[test]
fn engine_config_defaults_from_empty_json() {
    let config: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert!(config.allow_incomplete_finalize);
    assert_eq!(config.thresholds, RiskThresholds::IDAI);
}
