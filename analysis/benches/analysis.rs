use analysis::round::{BaseRoundStats, Event, Participant, RoundInput};

fn main() {
    divan::main();
}

/// A round of `players` vs `players` where every kill is answered a second later
fn round(players: usize) -> RoundInput {
    let name = |team: usize, idx: usize| format!("t{}p{}", team, idx);

    let roster = (0..2)
        .flat_map(|team| {
            (0..players).map(move |idx| Participant {
                username: name(team, idx),
                team: team as u8,
            })
        })
        .collect();

    let mut events = Vec::new();
    let mut time = 0.0;
    for idx in 0..players.saturating_sub(1) {
        events.push(Event::Kill {
            killer: name(1, idx),
            victim: name(0, idx),
            time,
            headshot: idx % 2 == 0,
        });
        events.push(Event::Kill {
            killer: name(0, idx + 1),
            victim: name(1, idx),
            time: time + 1.0,
            headshot: false,
        });
        time += 6.0;
    }

    let base = (0..2)
        .flat_map(|team| {
            (0..players).map(move |idx| BaseRoundStats {
                username: name(team, idx),
                kills: 1,
                died: idx + 1 < players,
                ..Default::default()
            })
        })
        .collect();

    RoundInput {
        roster,
        base,
        events,
    }
}

#[divan::bench(args = [5, 50, 500])]
fn advanced(bencher: divan::Bencher, players: usize) {
    let input = round(players);

    bencher.bench(|| {
        analysis::advanced::analyze(
            divan::black_box(&input.roster),
            divan::black_box(&input.base),
            divan::black_box(&input.events),
        )
    });
}
