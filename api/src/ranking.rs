use crate::Game;

/// Sort key across both leagues: live games first, then upcoming, then
/// everything else (final, postponed, unrecognised).
pub fn rank(game: &Game) -> u8 {
    match game {
        Game::Nhl(g) => match g.game_state.as_str() {
            "LIVE" | "CRIT" => 0,
            "FUT" | "PRE" => 1,
            _ => 2,
        },
        Game::Nba(g) => match g.game_status {
            2 => 0,
            1 => 1,
            _ => 2,
        },
    }
}

/// Stable sort by [`rank`]; games of equal rank keep their schedule order.
pub fn sort_games(games: &mut [Game]) {
    games.sort_by_key(rank);
}
