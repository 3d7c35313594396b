use crate::app::MenuItem;
use crate::state::scoreboard::Scoreboard;
use crate::state::timers::TimerBoard;
use chrono::{DateTime, Local};
use scores_api::Sport;

// ---------------------------------------------------------------------------
// Per-league list view state
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct ListState {
    /// First card row shown when the list is taller than the pane.
    pub scroll_offset: u16,
}

impl ListState {
    pub fn scroll_down(&mut self, rows: usize) {
        let max = rows.saturating_sub(1) as u16;
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn clamp(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.min(rows.saturating_sub(1) as u16);
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    /// Replaced wholesale by every data refresh.
    pub scoreboard: Scoreboard,
    /// Advanced once per second between refreshes.
    pub timers: TimerBoard,
    pub nhl_list: ListState,
    pub nba_list: ListState,
    /// None until the first refresh lands.
    pub last_updated: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, sport: Sport) -> &ListState {
        match sport {
            Sport::Nhl => &self.nhl_list,
            Sport::Nba => &self.nba_list,
        }
    }

    pub fn list_mut(&mut self, sport: Sport) -> &mut ListState {
        match sport {
            Sport::Nhl => &mut self.nhl_list,
            Sport::Nba => &mut self.nba_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_stays_within_rows() {
        let mut list = ListState::default();
        list.scroll_up();
        assert_eq!(list.scroll_offset, 0);
        for _ in 0..5 {
            list.scroll_down(3);
        }
        assert_eq!(list.scroll_offset, 2);
        list.clamp(1);
        assert_eq!(list.scroll_offset, 0);
    }

    #[test]
    fn empty_list_never_scrolls() {
        let mut list = ListState::default();
        list.scroll_down(0);
        assert_eq!(list.scroll_offset, 0);
    }
}
