//! Whole events driven through the public API

use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament::{
    ResultSimulator, SimulationConfig, TournamentConfig, TournamentEvent, TournamentReport,
};
use tourney_core::{EliminationStyle, PairingSystem, Participant, ScoringMode};

fn simulator() -> ResultSimulator {
    ResultSimulator::new(SimulationConfig {
        games_per_match: 3,
        draw_chance: 0.0,
        verbose: false,
    })
}

fn enrolled(n: usize) -> TournamentEvent {
    let mut event = TournamentEvent::new("Flow");
    for i in 0..n {
        event
            .add_participant(Participant::new("Player", &format!("{i:03}")))
            .unwrap();
    }
    event
}

fn play(event: &mut TournamentEvent, rounds: usize, rng: &mut StdRng) {
    let sim = simulator();
    for _ in 0..rounds {
        if event.contender_count() <= 1 {
            break;
        }
        let number = event.create_round(rng).unwrap().number();
        sim.play_round(event, number, rng).unwrap();
    }
}

#[test]
fn swiss_then_top_eight_playoff_crowns_one_winner() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut event = enrolled(20);
    event.create_regulation_segment().unwrap();
    let rounds = event.suggested_round_count();
    assert_eq!(rounds, 5);
    play(&mut event, rounds, &mut rng);
    assert_eq!(event.completed_round_count(), 5);

    event
        .create_playoff_segment(Some(8), EliminationStyle::Single, PairingSystem::None)
        .unwrap();
    assert_eq!(event.suggested_round_count(), 8);
    play(&mut event, 3, &mut rng);

    // Decisive best-of-3 results halve the bracket every round
    assert_eq!(event.round_count(), 8);
    assert_eq!(event.contender_count(), 1);
    assert_eq!(event.outstanding_result_count(), 0);

    let report = TournamentReport::from_event(&event);
    assert_eq!(report.rounds.len(), 8);
    assert_eq!(report.rounds[7].matches.len(), 1);
    assert_eq!(report.rounds[7].segment, "Playoff");
}

#[test]
fn double_elimination_needs_two_losses() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut event = enrolled(8);
    event.set_elimination(EliminationStyle::Double).unwrap();
    event.set_pairing(PairingSystem::None).unwrap();
    event.create_regulation_segment().unwrap();

    play(&mut event, 1, &mut rng);
    // Nobody can be out after a single round
    assert_eq!(event.contender_count(), 8);

    play(&mut event, 20, &mut rng);
    assert!(event.contender_count() <= 1);
    for p in event.inactive_participants() {
        assert!(event.loss_count(p).unwrap() >= 2);
    }
}

#[test]
fn placement_groups_score_every_seat() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut event = enrolled(12);
    event.set_scoring(ScoringMode::PlacementGroup).unwrap();
    event.set_pairing(PairingSystem::None).unwrap();
    event.create_regulation_segment().unwrap();
    play(&mut event, 2, &mut rng);

    let total: u32 = event
        .participants()
        .iter()
        .map(|p| event.match_points(p.id).unwrap())
        .sum();
    // Each round: three groups, 6 + 3 + 1 (+ 0) each
    assert_eq!(total, 2 * 3 * 10);
}

#[test]
fn config_drives_a_full_run() {
    let mut text = String::from("name = \"Config Cup\"\nseed = 3\nregulation_rounds = 2\n");
    for i in 0..6 {
        text.push_str(&format!("\n[[participants]]\nlast_name = \"Entrant{i}\"\n"));
    }
    text.push_str("\n[playoff]\ncut = 4\n\n[simulation]\ndraw_chance = 0.0\n");

    let config = TournamentConfig::from_toml_str(&text).unwrap();
    let mut event = config.build_event().unwrap();
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap());

    event.create_regulation_segment().unwrap();
    play(&mut event, config.regulation_rounds.unwrap(), &mut rng);
    let playoff = config.playoff.as_ref().unwrap();
    event
        .create_playoff_segment(playoff.cut, playoff.elimination, playoff.pairing)
        .unwrap();
    play(&mut event, 5, &mut rng);

    assert_eq!(event.round_count(), 4);
    assert_eq!(event.contender_count(), 1);
}
