use analysis::round::{Event, Participant, Phase, RoundInput};
use analysis::summary::{self, AnalyzedRound};
use common::round_stats::{AdvancedStats, ClutchSummary, DefuserSummary};
use pretty_assertions::assert_eq;

/// Everyone but `x` plays on the recording team
fn round(players: Vec<(&str, AdvancedStats)>) -> AnalyzedRound {
    let roster = players
        .iter()
        .map(|(name, _)| Participant {
            username: (*name).to_owned(),
            team: if *name == "x" { 1 } else { 0 },
        })
        .collect();

    AnalyzedRound {
        roster,
        stats: players
            .into_iter()
            .map(|(name, stats)| (name.to_owned(), stats))
            .collect(),
    }
}

#[test]
fn clutch_summary() {
    let rounds = vec![
        round(vec![
            (
                "a",
                AdvancedStats {
                    clutch_attempts: 2,
                    clutch_wins: 1,
                    clutch_1v1: true,
                    clutch_1v2: true,
                    survived: true,
                    ..Default::default()
                },
            ),
            ("b", AdvancedStats::default()),
            (
                "x",
                AdvancedStats {
                    clutch_attempts: 3,
                    clutch_wins: 2,
                    clutch_1v1: true,
                    survived: true,
                    ..Default::default()
                },
            ),
        ]),
        round(vec![
            (
                "a",
                AdvancedStats {
                    clutch_attempts: 1,
                    clutch_1v3: true,
                    ..Default::default()
                },
            ),
            (
                "b",
                AdvancedStats {
                    clutch_attempts: 1,
                    clutch_wins: 1,
                    clutch_1v1: true,
                    survived: true,
                    ..Default::default()
                },
            ),
        ]),
    ];

    let result = summary::clutches(&rounds);

    assert_eq!(
        vec![
            ClutchSummary {
                username: "a".to_owned(),
                situations: [1, 1, 1, 0, 0],
                won: [1, 1, 0, 0, 0],
                attempts: 3,
                wins: 1,
                clutch_rate: 1.0 / 3.0 * 100.0,
            },
            ClutchSummary {
                username: "b".to_owned(),
                situations: [1, 0, 0, 0, 0],
                won: [1, 0, 0, 0, 0],
                attempts: 1,
                wins: 1,
                clutch_rate: 100.0,
            },
        ],
        result
    );
}

#[test]
fn defuser_summary() {
    let rounds = vec![
        round(vec![
            (
                "a",
                AdvancedStats {
                    defuser_plants: 2,
                    ..Default::default()
                },
            ),
            (
                "b",
                AdvancedStats {
                    defuser_defuses: 1,
                    ..Default::default()
                },
            ),
            ("c", AdvancedStats::default()),
            (
                "x",
                AdvancedStats {
                    defuser_plants: 5,
                    defuser_defuses: 1,
                    ..Default::default()
                },
            ),
        ]),
        round(vec![(
            "a",
            AdvancedStats {
                defuser_plants: 1,
                ..Default::default()
            },
        )]),
    ];

    let result = summary::defusers(&rounds);

    assert_eq!(
        vec![
            DefuserSummary {
                username: "a".to_owned(),
                plants: 3,
                defuses: 0,
                plant_denials: 0,
                plant_success_rate: 100.0,
            },
            DefuserSummary {
                username: "b".to_owned(),
                plants: 0,
                defuses: 1,
                plant_denials: 0,
                plant_success_rate: 0.0,
            },
        ],
        result
    );
}

#[test]
fn kost_percentage() {
    let kost = AdvancedStats {
        kost: true,
        ..Default::default()
    };
    let rounds = vec![
        round(vec![("a", kost.clone()), ("b", AdvancedStats::default())]),
        round(vec![("a", AdvancedStats::default())]),
        round(vec![("a", kost.clone()), ("b", kost)]),
        round(vec![("a", AdvancedStats::default())]),
    ];

    assert_eq!(Some(50.0), summary::kost_percentage(&rounds, "a"));
    assert_eq!(Some(50.0), summary::kost_percentage(&rounds, "b"));
    assert_eq!(None, summary::kost_percentage(&rounds, "c"));
}

#[test]
fn opponents_are_left_out() {
    let input = RoundInput {
        roster: vec![
            Participant {
                username: "a".to_owned(),
                team: 0,
            },
            Participant {
                username: "b".to_owned(),
                team: 0,
            },
            Participant {
                username: "x".to_owned(),
                team: 1,
            },
        ],
        base: Vec::new(),
        events: vec![
            Event::Plant {
                username: "x".to_owned(),
                phase: Phase::Complete,
                time: 30.0,
            },
            Event::Kill {
                killer: "x".to_owned(),
                victim: "a".to_owned(),
                time: 35.0,
                headshot: false,
            },
        ],
    };

    let rounds = vec![AnalyzedRound::analyze(&input)];

    assert_eq!(1, rounds[0].stats["x"].defuser_plants);
    assert_eq!(1, rounds[0].stats["x"].clutch_attempts);
    assert_eq!(Vec::<DefuserSummary>::new(), summary::defusers(&rounds));
    assert_eq!(Vec::<ClutchSummary>::new(), summary::clutches(&rounds));
}
