use crate::state::timers::TimerBoard;
use chrono::{DateTime, Utc};
use scores_api::client::Slate;
use scores_api::ranking::sort_games;
use scores_api::status::{RenderedStatus, normalize};
use scores_api::{Game, GameKey, Sport, StatusDisplay, TeamLine};
use serde::Serialize;

/// A game paired with its normalized status, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub key: GameKey,
    pub game: Game,
    pub status: StatusDisplay,
}

impl GameCard {
    pub fn new(game: Game) -> Self {
        Self { key: game.key(), status: normalize(&game), game }
    }

    /// Resolve the status text, preferring the board's running timer over the
    /// value captured at fetch time.
    pub fn render(&self, timers: &TimerBoard, now: DateTime<Utc>) -> RenderedStatus {
        let embedded = self.status.timer();
        let timer = timers.get(&self.key).or(embedded.as_ref());
        self.status.render_with(timer, now)
    }

    pub fn view(&self, timers: &TimerBoard, now: DateTime<Utc>) -> CardView {
        CardView {
            sport: self.key.sport,
            id: self.key.id.clone(),
            away: self.game.away(),
            home: self.game.home(),
            status: self.render(timers, now),
        }
    }
}

/// Every game from one fetch cycle, ranked and split by league.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    pub nhl: Vec<GameCard>,
    pub nba: Vec<GameCard>,
}

impl Scoreboard {
    /// Merge both leagues, rank the merged list (stable), normalize each game
    /// and split the result back out by league. Games without an id are keyed
    /// by their position in the ranked list.
    pub fn build(slate: Slate) -> Self {
        let mut games: Vec<Game> = slate
            .nhl
            .into_iter()
            .map(Game::Nhl)
            .chain(slate.nba.into_iter().map(Game::Nba))
            .collect();
        sort_games(&mut games);

        let mut board = Scoreboard::default();
        for (position, game) in games.into_iter().enumerate() {
            let mut card = GameCard::new(game);
            // Records without an id must not share a timer.
            if card.key.is_anonymous() {
                card.key.id = format!("#{position}");
            }
            match card.key.sport {
                Sport::Nhl => board.nhl.push(card),
                Sport::Nba => board.nba.push(card),
            }
        }
        board
    }

    pub fn games(&self, sport: Sport) -> &[GameCard] {
        match sport {
            Sport::Nhl => &self.nhl,
            Sport::Nba => &self.nba,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &GameCard> {
        self.nhl.iter().chain(self.nba.iter())
    }

    pub fn view(&self, timers: &TimerBoard, now: DateTime<Utc>) -> BoardView {
        BoardView {
            nhl: self.nhl.iter().map(|c| c.view(timers, now)).collect(),
            nba: self.nba.iter().map(|c| c.view(timers, now)).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub sport: Sport,
    pub id: String,
    pub away: TeamLine,
    pub home: TeamLine,
    pub status: RenderedStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub nhl: Vec<CardView>,
    pub nba: Vec<CardView>,
}

pub fn empty_message(sport: Sport) -> String {
    format!("No {sport} games today")
}
