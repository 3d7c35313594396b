use crate::state::scoreboard::Scoreboard;
use log::debug;
use scores_api::{GameKey, LiveTimer};
use std::collections::HashMap;

/// Running clocks and start countdowns for the games on screen.
///
/// A refresh replaces the whole board; ticks only advance what is already here.
#[derive(Debug, Default, Clone)]
pub struct TimerBoard {
    timers: HashMap<GameKey, LiveTimer>,
}

impl TimerBoard {
    pub fn replace_from(&mut self, board: &Scoreboard) {
        self.timers = board
            .cards()
            .filter_map(|card| card.status.timer().map(|t| (card.key.clone(), t)))
            .collect();
        debug!("timer board reset with {} timers", self.timers.len());
    }

    /// Advance every game clock by one second. Start countdowns are derived
    /// from the wall clock at render time and are left alone.
    pub fn tick(&mut self) {
        for timer in self.timers.values_mut() {
            timer.tick();
        }
    }

    pub fn get(&self, key: &GameKey) -> Option<&LiveTimer> {
        self.timers.get(key)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl From<&Scoreboard> for TimerBoard {
    fn from(board: &Scoreboard) -> Self {
        let mut timers = TimerBoard::default();
        timers.replace_from(board);
        timers
    }
}
