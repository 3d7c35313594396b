//! Maps raw NHL and NBA game records onto one display model.
//!
//! A [`StatusDisplay`] is derived fresh from a [`Game`] on every refresh. Any
//! running clock is kept as a [`LiveTimer`] rather than baked into the text,
//! so the tick driver can advance it without refetching.

use crate::nba::NbaGame;
use crate::nhl::NhlGame;
use crate::time::{countdown_until, format_clock, format_local_time, parse_instant};
use crate::{Game, Sport};
use chrono::{DateTime, Utc};
use serde::Serialize;

const NBA_HALFTIME: &str = "Halftime";
const UNKNOWN_STATUS: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusClass {
    #[serde(rename = "status-future")]
    Future,
    #[serde(rename = "status-live")]
    Live,
    #[serde(rename = "status-intermission")]
    Intermission,
}

impl StatusClass {
    pub fn css_name(&self) -> &'static str {
        match self {
            StatusClass::Future => "status-future",
            StatusClass::Live => "status-live",
            StatusClass::Intermission => "status-intermission",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveTimer {
    /// Game or intermission clock, counted down once per tick.
    Clock { seconds: u32 },
    /// Scheduled start; the countdown is recomputed against the current time.
    StartsAt { target: DateTime<Utc> },
}

impl LiveTimer {
    pub fn tick(&mut self) {
        if let LiveTimer::Clock { seconds } = self {
            *seconds = seconds.saturating_sub(1);
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        match self {
            LiveTimer::Clock { seconds } => format_clock(i64::from(*seconds)),
            LiveTimer::StartsAt { target } => countdown_until(*target, now),
        }
    }
}

/// Display text with an optional timer slot between a prefix and a suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub prefix: String,
    pub timer: Option<LiveTimer>,
    pub suffix: String,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { prefix: text.into(), timer: None, suffix: String::new() }
    }

    pub fn timed(prefix: impl Into<String>, timer: LiveTimer, suffix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), timer: Some(timer), suffix: suffix.into() }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        self.render_with(self.timer.as_ref(), now)
    }

    /// Render using `timer` in place of the embedded one. Labels without a
    /// timer slot ignore the override.
    pub fn render_with(&self, timer: Option<&LiveTimer>, now: DateTime<Utc>) -> String {
        match self.timer.and(timer) {
            Some(t) => format!("{}{}{}", self.prefix, t.render(now), self.suffix),
            None => format!("{}{}", self.prefix, self.suffix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub class: StatusClass,
    pub text: Label,
    pub detail: Option<Label>,
}

/// A [`StatusDisplay`] with every timer resolved to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedStatus {
    pub class: StatusClass,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StatusDisplay {
    fn plain(class: StatusClass, text: impl Into<String>) -> Self {
        Self { class, text: Label::plain(text), detail: None }
    }

    /// The single running timer carried by this status, if any.
    pub fn timer(&self) -> Option<LiveTimer> {
        self.text
            .timer
            .or_else(|| self.detail.as_ref().and_then(|d| d.timer))
    }

    pub fn render(&self, now: DateTime<Utc>) -> RenderedStatus {
        self.render_with(self.timer().as_ref(), now)
    }

    pub fn render_with(&self, timer: Option<&LiveTimer>, now: DateTime<Utc>) -> RenderedStatus {
        RenderedStatus {
            class: self.class,
            text: self.text.render_with(timer, now),
            detail: self.detail.as_ref().map(|d| d.render_with(timer, now)),
        }
    }
}

/// Ordinal label for a period or quarter. Periods past regulation are "OT".
pub fn period_ordinal(number: u8, sport: Sport) -> String {
    match number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        4 if sport == Sport::Nba => "4th".to_string(),
        n if n > sport.regulation_periods() => "OT".to_string(),
        n => format!("{n}th"),
    }
}

pub fn normalize(game: &Game) -> StatusDisplay {
    match game {
        Game::Nhl(g) => nhl_status(g),
        Game::Nba(g) => nba_status(g),
    }
}

pub fn nhl_status(game: &NhlGame) -> StatusDisplay {
    match game.game_state.as_str() {
        "FUT" | "PRE" => nhl_future(game),
        "LIVE" | "CRIT" => nhl_live(game).unwrap_or_else(|| nhl_echo(game)),
        "FINAL" | "OFF" => {
            let suffix = match game
                .game_outcome
                .as_ref()
                .and_then(|o| o.last_period_type.as_deref())
            {
                Some("OT") => " (OT)",
                Some("SO") => " (SO)",
                _ => "",
            };
            StatusDisplay::plain(StatusClass::Future, format!("FINAL{suffix}"))
        }
        _ => nhl_echo(game),
    }
}

fn nhl_future(game: &NhlGame) -> StatusDisplay {
    let start = game.start_time_utc.as_deref();
    let text = match start.and_then(parse_instant) {
        Some(target) => Label::timed("", LiveTimer::StartsAt { target }, ""),
        None => Label::plain("TBD"),
    };
    let start_clock = format_local_time(start);
    let detail = (!start_clock.is_empty()).then(|| Label::plain(format!("Starts at {start_clock}")));
    StatusDisplay { class: StatusClass::Future, text, detail }
}

/// None when the record has no clock to describe play with. A missing period
/// only drops the period from the text.
fn nhl_live(game: &NhlGame) -> Option<StatusDisplay> {
    let clock = game.clock.as_ref()?;
    let timer = LiveTimer::Clock { seconds: clock.seconds() };

    if clock.in_intermission {
        return Some(StatusDisplay {
            class: StatusClass::Intermission,
            text: Label::plain("INTERMISSION"),
            detail: Some(Label::timed("", timer, " remaining")),
        });
    }

    let period = game.period_descriptor.as_ref().and_then(|p| p.number);
    let (prefix, detail) = match period {
        Some(n) if n > Sport::Nhl.regulation_periods() => {
            ("OT - ".to_string(), Some("Playing Overtime".to_string()))
        }
        Some(n) => (
            format!("P{n} - "),
            Some(format!("Playing {} Period", period_ordinal(n, Sport::Nhl))),
        ),
        None => (format!("{} - ", game.game_state), None),
    };
    Some(StatusDisplay {
        class: StatusClass::Live,
        text: Label::timed(prefix, timer, ""),
        detail: detail.map(Label::plain),
    })
}

fn nhl_echo(game: &NhlGame) -> StatusDisplay {
    let state = if game.game_state.is_empty() { UNKNOWN_STATUS } else { game.game_state.as_str() };
    StatusDisplay::plain(StatusClass::Future, state)
}

pub fn nba_status(game: &NbaGame) -> StatusDisplay {
    match game.game_status {
        1 => StatusDisplay::plain(
            StatusClass::Future,
            format!("Starts at {}", format_local_time(game.game_time_utc.as_deref())),
        ),
        2 if game.game_status_text.as_deref() == Some(NBA_HALFTIME) => StatusDisplay {
            class: StatusClass::Intermission,
            text: Label::plain("HALFTIME"),
            detail: Some(Label::plain("Intermission")),
        },
        2 => {
            let seconds = crate::time::parse_iso_duration(game.game_clock.as_deref());
            StatusDisplay {
                class: StatusClass::Live,
                text: Label::timed(format!("Q{} - ", game.period), LiveTimer::Clock { seconds }, ""),
                detail: Some(Label::plain(format!(
                    "Playing {} Qtr",
                    period_ordinal(game.period, Sport::Nba)
                ))),
            }
        }
        3 => StatusDisplay::plain(StatusClass::Future, "FINAL"),
        _ => StatusDisplay::plain(
            StatusClass::Future,
            game.game_status_text
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_STATUS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nhl::{NhlClock, NhlGameOutcome, NhlPeriodDescriptor};
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    fn nhl(state: &str) -> NhlGame {
        NhlGame { id: 1, game_state: state.into(), ..Default::default() }
    }

    fn nhl_live_game(period: u8, seconds: i64) -> NhlGame {
        NhlGame {
            period_descriptor: Some(NhlPeriodDescriptor { number: Some(period), period_type: None }),
            clock: Some(NhlClock { seconds_remaining: seconds, ..Default::default() }),
            ..nhl("LIVE")
        }
    }

    fn nba(status: i64) -> NbaGame {
        NbaGame { game_id: "0022400001".into(), game_status: status, ..Default::default() }
    }

    #[test]
    fn ordinals_follow_league_regulation() {
        assert_eq!(period_ordinal(1, Sport::Nhl), "1st");
        assert_eq!(period_ordinal(2, Sport::Nba), "2nd");
        assert_eq!(period_ordinal(3, Sport::Nhl), "3rd");
        assert_eq!(period_ordinal(4, Sport::Nhl), "OT");
        assert_eq!(period_ordinal(4, Sport::Nba), "4th");
        assert_eq!(period_ordinal(5, Sport::Nba), "OT");
        assert_eq!(period_ordinal(0, Sport::Nba), "0th");
    }

    #[test]
    fn nhl_future_counts_down_to_start() {
        let game = NhlGame {
            start_time_utc: Some("2024-01-01T19:00:00Z".into()),
            ..nhl("FUT")
        };
        let status = nhl_status(&game);
        assert_eq!(status.class, StatusClass::Future);
        assert_eq!(status.timer(), Some(LiveTimer::StartsAt { target: at(19, 0, 0) }));

        let rendered = status.render(at(18, 0, 0));
        assert_eq!(rendered.text, "1h 0m 0s");
        assert_eq!(
            rendered.detail,
            Some(format!("Starts at {}", format_local_time(Some("2024-01-01T19:00:00Z"))))
        );
        assert_eq!(status.render(at(19, 0, 1)).text, "Starting...");
    }

    #[test]
    fn nhl_pregame_without_start_time_degrades() {
        let status = nhl_status(&nhl("PRE"));
        assert_eq!(status.class, StatusClass::Future);
        assert_eq!(status.render(at(0, 0, 0)).text, "TBD");
        assert!(status.detail.is_none());
        assert!(status.timer().is_none());
    }

    #[test]
    fn nhl_intermission_ticks_in_detail() {
        let game = NhlGame {
            clock: Some(NhlClock { seconds_remaining: 1021, in_intermission: true, running: Some(true) }),
            ..nhl("LIVE")
        };
        let status = nhl_status(&game);
        assert_eq!(status.class, StatusClass::Intermission);
        let rendered = status.render(at(0, 0, 0));
        assert_eq!(rendered.text, "INTERMISSION");
        assert_eq!(rendered.detail.as_deref(), Some("17:01 remaining"));
        assert_eq!(status.timer(), Some(LiveTimer::Clock { seconds: 1021 }));
    }

    #[test]
    fn nhl_regulation_period() {
        let status = nhl_status(&nhl_live_game(2, 613));
        assert_eq!(status.class, StatusClass::Live);
        let rendered = status.render(at(0, 0, 0));
        assert_eq!(rendered.text, "P2 - 10:13");
        assert_eq!(rendered.detail.as_deref(), Some("Playing 2nd Period"));
    }

    #[test]
    fn nhl_overtime_period() {
        for state in ["LIVE", "CRIT"] {
            let game = NhlGame { game_state: state.into(), ..nhl_live_game(4, 95) };
            let status = nhl_status(&game);
            assert_eq!(status.class, StatusClass::Live);
            let rendered = status.render(at(0, 0, 0));
            assert!(rendered.text.starts_with("OT"), "{}", rendered.text);
            assert_eq!(rendered.text, "OT - 01:35");
            assert_eq!(rendered.detail.as_deref(), Some("Playing Overtime"));
        }
    }

    #[test]
    fn nhl_live_negative_clock_renders_zero() {
        let rendered = nhl_status(&nhl_live_game(3, -12)).render(at(0, 0, 0));
        assert_eq!(rendered.text, "P3 - 00:00");
    }

    #[test]
    fn nhl_live_without_clock_echoes_state() {
        let status = nhl_status(&nhl("CRIT"));
        assert_eq!(status, StatusDisplay::plain(StatusClass::Future, "CRIT"));
    }

    #[test]
    fn nhl_live_without_period_keeps_ticking_clock() {
        let no_period = NhlGame { period_descriptor: None, ..nhl_live_game(1, 600) };
        let status = nhl_status(&no_period);
        assert_eq!(status.class, StatusClass::Live);
        assert_eq!(status.timer(), Some(LiveTimer::Clock { seconds: 600 }));
        assert!(status.detail.is_none());
        assert_eq!(status.render(at(0, 0, 0)).text, "LIVE - 10:00");
        assert_eq!(
            status.render_with(Some(&LiveTimer::Clock { seconds: 599 }), at(0, 0, 0)).text,
            "LIVE - 09:59"
        );

        let numberless = NhlGame {
            game_state: "CRIT".into(),
            period_descriptor: Some(NhlPeriodDescriptor { number: None, period_type: Some("REG".into()) }),
            ..nhl_live_game(1, 95)
        };
        let status = nhl_status(&numberless);
        assert_eq!(status.class, StatusClass::Live);
        assert_eq!(status.render(at(0, 0, 0)).text, "CRIT - 01:35");
    }

    #[test]
    fn nhl_final_marks_overtime_and_shootout() {
        let outcome = |t: &str| NhlGame {
            game_outcome: Some(NhlGameOutcome { last_period_type: Some(t.into()) }),
            ..nhl("OFF")
        };
        assert_eq!(nhl_status(&outcome("OT")).render(at(0, 0, 0)).text, "FINAL (OT)");
        assert_eq!(nhl_status(&outcome("SO")).render(at(0, 0, 0)).text, "FINAL (SO)");
        assert_eq!(nhl_status(&outcome("REG")).render(at(0, 0, 0)).text, "FINAL");
        let final_game = nhl_status(&nhl("FINAL"));
        assert_eq!(final_game, StatusDisplay::plain(StatusClass::Future, "FINAL"));
    }

    #[test]
    fn nhl_unknown_state_is_echoed() {
        assert_eq!(nhl_status(&nhl("PPD")), StatusDisplay::plain(StatusClass::Future, "PPD"));
        assert_eq!(nhl_status(&nhl("")).text, Label::plain("Unknown"));
    }

    #[test]
    fn nba_future_shows_start_time() {
        let game = NbaGame { game_time_utc: Some("2024-01-02T00:30:00Z".into()), ..nba(1) };
        let rendered = nba_status(&game).render(at(0, 0, 0));
        assert_eq!(rendered.class, StatusClass::Future);
        assert_eq!(
            rendered.text,
            format!("Starts at {}", format_local_time(Some("2024-01-02T00:30:00Z")))
        );
        assert!(rendered.detail.is_none());
    }

    #[test]
    fn nba_halftime_ignores_other_fields() {
        let game = NbaGame {
            game_status_text: Some("Halftime".into()),
            period: 2,
            game_clock: Some("PT03M00.00S".into()),
            ..nba(2)
        };
        let status = nba_status(&game);
        assert_eq!(status.class, StatusClass::Intermission);
        assert_eq!(status.text, Label::plain("HALFTIME"));
        assert_eq!(status.detail, Some(Label::plain("Intermission")));
        assert!(status.timer().is_none());
    }

    #[test]
    fn nba_live_quarter() {
        let game = NbaGame {
            game_status_text: Some("Q4 10:13".into()),
            period: 4,
            game_clock: Some("PT10M13.00S".into()),
            ..nba(2)
        };
        let rendered = nba_status(&game).render(at(0, 0, 0));
        assert_eq!(rendered.class, StatusClass::Live);
        assert_eq!(rendered.text, "Q4 - 10:13");
        assert_eq!(rendered.detail.as_deref(), Some("Playing 4th Qtr"));
    }

    #[test]
    fn nba_live_overtime_and_missing_clock() {
        let game = NbaGame { period: 5, game_clock: None, ..nba(2) };
        let rendered = nba_status(&game).render(at(0, 0, 0));
        assert_eq!(rendered.text, "Q5 - 00:00");
        assert_eq!(rendered.detail.as_deref(), Some("Playing OT Qtr"));
    }

    #[test]
    fn nba_final_and_fallback() {
        assert_eq!(nba_status(&nba(3)), StatusDisplay::plain(StatusClass::Future, "FINAL"));
        let postponed = NbaGame { game_status_text: Some("PPD".into()), ..nba(9) };
        assert_eq!(nba_status(&postponed).text, Label::plain("PPD"));
        assert_eq!(nba_status(&nba(0)).text, Label::plain("Unknown"));
    }

    #[test]
    fn normalizing_twice_is_identical() {
        let games = [
            Game::Nhl(nhl_live_game(1, 300)),
            Game::Nhl(NhlGame { start_time_utc: Some("2024-01-01T19:00:00Z".into()), ..nhl("FUT") }),
            Game::Nba(NbaGame { period: 2, game_clock: Some("PT01M02.50S".into()), ..nba(2) }),
        ];
        for game in &games {
            let now = at(18, 30, 0);
            assert_eq!(normalize(game).render(now), normalize(game).render(now));
            assert_eq!(normalize(game), normalize(game));
        }
    }

    #[test]
    fn render_override_replaces_embedded_timer() {
        let status = nhl_status(&nhl_live_game(1, 600));
        let rendered = status.render_with(Some(&LiveTimer::Clock { seconds: 598 }), at(0, 0, 0));
        assert_eq!(rendered.text, "P1 - 09:58");
    }

    #[test]
    fn plain_label_ignores_override() {
        let label = Label::plain("FINAL");
        assert_eq!(label.render_with(Some(&LiveTimer::Clock { seconds: 3 }), at(0, 0, 0)), "FINAL");
    }

    #[test]
    fn clock_timer_floors_at_zero() {
        let mut timer = LiveTimer::Clock { seconds: 1 };
        timer.tick();
        timer.tick();
        assert_eq!(timer, LiveTimer::Clock { seconds: 0 });

        let mut start = LiveTimer::StartsAt { target: at(19, 0, 0) };
        start.tick();
        assert_eq!(start, LiveTimer::StartsAt { target: at(19, 0, 0) });
    }
}
