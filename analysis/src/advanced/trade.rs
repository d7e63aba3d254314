use std::collections::VecDeque;

#[derive(Debug)]
struct Death {
    victim: String,
    killer: String,
    time: f64,
}

/// The deaths of the last `width` seconds, oldest first
#[derive(Debug)]
pub struct TradeWindow {
    width: f64,
    deaths: VecDeque<Death>,
}

impl TradeWindow {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            deaths: VecDeque::new(),
        }
    }

    /// Records a kill and returns how many earlier deaths it avenges.
    ///
    /// A death is avenged when `victim` was its killer and the difference in
    /// time is at most `width`. Everything older than that is dropped.
    pub fn record(&mut self, killer: &str, victim: &str, time: f64) -> usize {
        let mut trades = 0;
        let mut expired = None;

        for (idx, death) in self.deaths.iter().enumerate().rev() {
            if time - death.time > self.width {
                expired = Some(idx);
                break;
            }

            if death.killer == victim && killer != victim {
                tracing::debug!(
                    killer,
                    victim,
                    avenged = death.victim.as_str(),
                    "Trade kill"
                );
                trades += 1;
            }
        }

        if let Some(idx) = expired {
            self.deaths.drain(..=idx);
        }

        self.deaths.push_back(Death {
            victim: victim.to_owned(),
            killer: killer.to_owned(),
            time,
        });

        trades
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.deaths.len()
    }
}
