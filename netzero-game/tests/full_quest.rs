use netzero_game::{
    DecisionData, GameState, Outcome, QuestSession, StoryTier, calculate_overall_score,
    generate_story, run_summary, scenario_outcome,
};

fn builtin_catalog() -> DecisionData {
    DecisionData::from_json(include_str!("../../assets/data/decisions.json")).unwrap()
}

fn play_through(option_ids: &[&str]) -> GameState {
    let mut session = QuestSession::new(builtin_catalog());
    for option_id in option_ids {
        let before = session.state().clone();
        let outcome = session.choose(option_id).unwrap();

        let state = session.state();
        assert!(state.indicators.in_bounds(), "indicators left their bounds");
        assert_eq!(state.year, state.expected_year(), "year drifted");
        assert_eq!(
            state.decisions.len(),
            before.decisions.len() + 1,
            "history must grow by exactly one"
        );
        assert_eq!(outcome.year, state.year);
    }
    assert!(session.is_complete());
    session.into_state()
}

#[test]
fn greenest_path_reaches_net_zero() {
    let state = play_through(&["high-tax", "rapid", "massive"]);

    assert_eq!(state.year, 2030);
    assert!((state.indicators.global_temperature - 0.8).abs() < 1e-9);
    assert!((state.indicators.co2_concentration - 373.0).abs() < 1e-9);
    assert!((state.indicators.renewable_percent - 73.0).abs() < 1e-9);
    assert!((state.indicators.economic_score - 17.0).abs() < 1e-9);
    assert!((state.indicators.environment_score - 100.0).abs() < 1e-9);
    assert!((state.indicators.social_score - 50.0).abs() < 1e-9);

    assert_eq!(calculate_overall_score(&state), 94);
    assert_eq!(scenario_outcome(&state), Outcome::NetZero.message());
    assert_eq!(
        StoryTier::from_score(calculate_overall_score(&state)),
        StoryTier::Flourishing
    );
    assert!(generate_story(&state).contains("2055"));
}

#[test]
fn dismissive_path_ends_in_mixed_results() {
    let state = play_through(&["no-tax", "slow", "minimal"]);

    assert_eq!(state.year, 2030);
    assert!((state.indicators.global_temperature - 1.4).abs() < 1e-9);
    assert!((state.indicators.co2_concentration - 425.0).abs() < 1e-9);
    assert!((state.indicators.renewable_percent - 24.5).abs() < 1e-9);

    assert_eq!(calculate_overall_score(&state), 59);
    assert_eq!(scenario_outcome(&state), Outcome::Mixed.message());
}

#[test]
fn replaying_the_same_choices_is_bit_identical() {
    let options = ["moderate-tax", "gradual", "moderate"];
    let first = play_through(&options);
    let second = play_through(&options);

    assert_eq!(first, second);
    assert_eq!(
        calculate_overall_score(&first),
        calculate_overall_score(&second)
    );
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn history_records_application_order() {
    let state = play_through(&["moderate-tax", "rapid", "minimal"]);

    let ids: Vec<_> = state.decisions.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["carbon-tax", "renewable-transition", "reforestation"]);
    assert_eq!(
        state.logs,
        vec![
            "log.decision.carbon-tax.moderate-tax",
            "log.decision.renewable-transition.rapid",
            "log.decision.reforestation.minimal",
        ]
    );
}

#[test]
fn summary_matches_the_final_state() {
    let state = play_through(&["high-tax", "rapid", "massive"]);
    let summary = run_summary(&state);

    assert_eq!(summary.final_year, 2030);
    assert_eq!(summary.decisions_applied, 3);
    assert_eq!(summary.score, 94);
    assert_eq!(summary.outcome, Outcome::NetZero);
    assert!(summary.story.contains("2055"));
}
