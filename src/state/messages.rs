use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use scores_api::client::Slate;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    RefreshScores,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// Full replacement: every game from both leagues for this cycle.
    ScoresRefreshed { slate: Slate },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    TimerTick,
}
