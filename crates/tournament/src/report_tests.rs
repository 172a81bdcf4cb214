use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tourney_core::{Participant, ParticipantId};

fn three_player_event() -> TournamentEvent {
    let mut event = TournamentEvent::new("Report Night");
    for (i, (first, last)) in [("Ada", "Lovelace"), ("Grace", "Hopper"), ("Alan", "Turing")]
        .into_iter()
        .enumerate()
    {
        event
            .add_participant(Participant::with_id(
                ParticipantId::from_u128(i as u128 + 1),
                first,
                last,
            ))
            .unwrap();
    }
    event.create_regulation_segment().unwrap();
    event.create_round(&mut StdRng::seed_from_u64(5)).unwrap();
    event
}

#[test]
fn snapshot_uses_display_names() {
    let mut event = three_player_event();
    let pair_index = event
        .round(1)
        .unwrap()
        .matches()
        .iter()
        .position(|m| !m.is_bye())
        .unwrap();
    event.submit_results(1, pair_index, vec![2, 1, 0]).unwrap();
    event.deactivate(ParticipantId::from_u128(3)).unwrap();

    let report = TournamentReport::from_event(&event);
    assert_eq!(report.name, "Report Night");
    assert_eq!(report.standings.len(), 3);
    assert_eq!(report.rounds.len(), 1);
    assert_eq!(report.rounds[0].segment, "Regulation");
    assert_eq!(report.rounds[0].matches.len(), 2);

    let turing = report
        .standings
        .iter()
        .find(|row| row.name == "Alan Turing")
        .unwrap();
    assert!(!turing.active);
    assert!(report
        .rounds[0]
        .matches
        .iter()
        .all(|m| m.results.len() == 3));
}

#[test]
fn text_report_marks_byes_and_pending_matches() {
    let event = three_player_event();
    let text = TournamentReport::from_event(&event).generate_report();

    assert!(text.contains("=== Tournament: Report Night ==="));
    assert!(text.contains("Round 1 (Regulation)"));
    assert!(text.contains("(bye)"));
    assert!(text.contains("pending"));
    assert!(text.contains("Standings:"));
}

#[test]
fn saves_json() {
    let event = three_player_event();
    let report = TournamentReport::from_event(&event);
    let path = std::env::temp_dir().join(format!("tourney_report_{}.json", std::process::id()));

    report.save(&path).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(saved["name"], "Report Night");
    assert_eq!(saved["standings"].as_array().unwrap().len(), 3);
}
