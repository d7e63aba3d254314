#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiKills {
    pub double: usize,
    pub triple: usize,
    pub quad: usize,
    pub ace: bool,
}

impl MultiKills {
    /// Streaks count towards every tally up to their length, so a streak of
    /// four is a double, a triple and a quad kill at the same time
    fn record(&mut self, streak: usize) {
        if streak >= 2 {
            self.double += 1;
        }
        if streak >= 3 {
            self.triple += 1;
        }
        if streak >= 4 {
            self.quad += 1;
        }
        if streak >= 5 {
            self.ace = true;
        }
    }
}

/// Groups a player's kill times into streaks where no two consecutive kills
/// are more than `max_gap` seconds apart.
pub fn classify(timeline: &[f64], max_gap: f64) -> MultiKills {
    let mut result = MultiKills::default();
    if timeline.len() < 2 {
        return result;
    }

    let mut streak = 1;
    for pair in timeline.windows(2) {
        if pair[1] - pair[0] <= max_gap {
            streak += 1;
        } else {
            result.record(streak);
            streak = 1;
        }
    }
    result.record(streak);

    if timeline.len() >= 5 {
        result.ace = true;
    }

    result
}
