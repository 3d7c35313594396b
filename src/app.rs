use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::scoreboard::Scoreboard;
use chrono::Local;
use log::{LevelFilter, debug};
use scores_api::Sport;
use scores_api::client::Slate;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Nhl,
    Nba,
    Help,
}

impl MenuItem {
    pub fn sport(&self) -> Option<Sport> {
        match self {
            MenuItem::Nhl => Some(Sport::Nhl),
            MenuItem::Nba => Some(Sport::Nba),
            MenuItem::Help => None,
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let app = Self {
            state: AppState::new(),
            settings,
        };

        let level = app.settings.log_level_or(LevelFilter::Error);
        log::set_max_level(level);
        tui_logger::set_default_level(level);

        app
    }

    // -----------------------------------------------------------------------
    // Driver handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Replace everything on screen with a freshly fetched slate.
    pub fn on_scores_refreshed(&mut self, slate: Slate) {
        let board = Scoreboard::build(slate);
        self.state.timers.replace_from(&board);
        self.state.nhl_list.clamp(board.nhl.len());
        self.state.nba_list.clamp(board.nba.len());
        self.state.scoreboard = board;
        self.state.last_updated = Some(Local::now());
    }

    /// One-second tick: advance running clocks only.
    pub fn on_timer_tick(&mut self) {
        if self.state.timers.is_empty() {
            return;
        }
        self.state.timers.tick();
        debug!("ticked {} timers", self.state.timers.len());
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn next_tab(&mut self) {
        let next = match self.state.active_tab {
            MenuItem::Nhl => MenuItem::Nba,
            MenuItem::Nba | MenuItem::Help => MenuItem::Nhl,
        };
        self.update_tab(next);
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn scroll_down(&mut self) {
        if let Some(sport) = self.state.active_tab.sport() {
            let rows = self.state.scoreboard.games(sport).len();
            self.state.list_mut(sport).scroll_down(rows);
        }
    }

    pub fn scroll_up(&mut self) {
        if let Some(sport) = self.state.active_tab.sport() {
            self.state.list_mut(sport).scroll_up();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scores_api::nhl::{NhlClock, NhlPeriodDescriptor};
    use scores_api::{GameKey, LiveTimer, NbaGame, NhlGame};

    fn live_nhl(id: i64, seconds: i64) -> NhlGame {
        NhlGame {
            id,
            game_state: "LIVE".into(),
            period_descriptor: Some(NhlPeriodDescriptor { number: Some(1), period_type: None }),
            clock: Some(NhlClock { seconds_remaining: seconds, ..Default::default() }),
            ..Default::default()
        }
    }

    fn nhl_key(id: &str) -> GameKey {
        GameKey { sport: Sport::Nhl, id: id.into() }
    }

    #[test]
    fn refresh_then_tick_then_refresh() {
        let mut app = App::new(AppSettings::default());
        app.on_scores_refreshed(Slate { nhl: vec![live_nhl(1, 10)], nba: Vec::new() });
        assert!(app.state.last_updated.is_some());

        app.on_timer_tick();
        app.on_timer_tick();
        assert_eq!(app.state.timers.get(&nhl_key("1")), Some(&LiveTimer::Clock { seconds: 8 }));

        app.on_scores_refreshed(Slate { nhl: vec![live_nhl(1, 9)], nba: Vec::new() });
        assert_eq!(app.state.timers.get(&nhl_key("1")), Some(&LiveTimer::Clock { seconds: 9 }));
    }

    #[test]
    fn failed_league_shows_empty_without_touching_the_other() {
        let mut app = App::new(AppSettings::default());
        app.on_scores_refreshed(Slate {
            nhl: vec![live_nhl(1, 10)],
            nba: vec![NbaGame { game_id: "x".into(), game_status: 3, ..Default::default() }],
        });
        app.on_scores_refreshed(Slate { nhl: vec![live_nhl(1, 10)], nba: Vec::new() });
        assert_eq!(app.state.scoreboard.nhl.len(), 1);
        assert!(app.state.scoreboard.nba.is_empty());
    }

    #[test]
    fn scroll_is_clamped_after_a_smaller_refresh() {
        let mut app = App::new(AppSettings::default());
        app.on_scores_refreshed(Slate {
            nhl: (1..=5).map(|id| live_nhl(id, 60)).collect(),
            nba: Vec::new(),
        });
        for _ in 0..4 {
            app.scroll_down();
        }
        assert_eq!(app.state.nhl_list.scroll_offset, 4);
        app.on_scores_refreshed(Slate { nhl: vec![live_nhl(1, 60)], nba: Vec::new() });
        assert_eq!(app.state.nhl_list.scroll_offset, 0);
    }

    #[test]
    fn tabs_cycle_and_help_returns() {
        let mut app = App::new(AppSettings::default());
        assert_eq!(app.state.active_tab, MenuItem::Nhl);
        app.next_tab();
        assert_eq!(app.state.active_tab, MenuItem::Nba);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Nba);
        app.next_tab();
        assert_eq!(app.state.active_tab, MenuItem::Nhl);
    }
}
