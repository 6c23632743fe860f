//! Win/loss statistics for the current process

use super::Status;

/// Rounds finished since the program started
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    /// Count a finished round; in-progress statuses are ignored
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won => {
                self.total_games += 1;
                self.games_won += 1;
            }
            Status::Lost => self.total_games += 1,
            Status::InProgress => {}
        }
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}
