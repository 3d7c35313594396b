use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Nhl),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Nba),
        (_, KeyCode::Tab, _) => guard.next_tab(),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Game list scrolling
        (MenuItem::Nhl | MenuItem::Nba, Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (MenuItem::Nhl | MenuItem::Nba, Char('k') | KeyCode::Up, _) => guard.scroll_up(),

        // Refresh now instead of waiting for the next period
        (_, Char('r'), _) => {
            drop(guard);
            let _ = network_requests.send(NetworkRequest::RefreshScores).await;
        }

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
