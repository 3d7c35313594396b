mod app;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crate::state::refresher::{PeriodicRefresher, TimerTicker};
use crate::state::scoreboard::Scoreboard;
use crate::state::timers::TimerBoard;
use chrono::Utc;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::LevelFilter;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

#[derive(Debug, PartialEq)]
enum CliMode {
    Tui,
    Once,
    Exit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match handle_cli_args() {
        CliMode::Exit => return Ok(()),
        CliMode::Once => {
            init_stderr_logger()?;
            let settings = AppSettings::load();
            log::set_max_level(settings.log_level_or(LevelFilter::Warn));
            return run_once(settings).await;
        }
        CliMode::Tui => {}
    }

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    // Settings warnings are captured before App::new narrows the level.
    tui_logger::init_logger(LevelFilter::Trace)?;
    tui_logger::set_default_level(LevelFilter::Warn);

    let settings = AppSettings::load();
    let api = settings.api();
    let refresh_interval = settings.refresh_interval;
    let app = Arc::new(Mutex::new(App::new(settings)));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(api, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Periodic score refresh thread (every 10s by default)
    let periodic_updater = PeriodicRefresher::new(network_req_tx.clone(), refresh_interval);
    let periodic_task = tokio::spawn(periodic_updater.run());

    // Clock tick thread (every 1s), independent of the refresh
    let ticker = TimerTicker::new(ui_event_tx.clone());
    let ticker_task = tokio::spawn(ticker.run());

    // Trigger the first fetch on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();
    periodic_task.abort();
    ticker_task.abort();

    Ok(())
}

fn handle_cli_args() -> CliMode {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return CliMode::Tui;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            CliMode::Exit
        }
        "-V" | "--version" => {
            println!("couchscore {}", env!("CARGO_PKG_VERSION"));
            CliMode::Exit
        }
        "--once" => CliMode::Once,
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "couchscore - live NHL and NBA scores in the terminal

Usage:
  couchscore
  couchscore --once
  couchscore --help
  couchscore --version

Options:
  --once   Fetch once and print the scoreboard as JSON

Environment:
  COUCHSCORE_NHL_URL        NHL schedule feed (default https://api-web.nhle.com/v1/score/now)
  COUCHSCORE_NBA_URL        NBA scoreboard feed (default NBA live-data CDN)
  COUCHSCORE_REFRESH_SECS   Seconds between refreshes (default 10)
  COUCHSCORE_LOG            Log level: error, warn, info, debug, trace, off"
}

/// `--once` writes JSON to stdout, so diagnostics go to stderr.
fn init_stderr_logger() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()?;
    log::set_max_level(LevelFilter::Warn);
    Ok(())
}

async fn run_once(settings: AppSettings) -> anyhow::Result<()> {
    let slate = settings.api().fetch_slate().await;
    let board = Scoreboard::build(slate);
    let timers = TimerBoard::from(&board);
    let view = board.view(&timers, Utc::now());
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let should_redraw = handle_ui_event(ui_event, &app, &network_requests).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            Some(response) = network_responses.recv() => {
                handle_network_response(response, &app, &mut loading).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> bool {
    match ui_event {
        UiEvent::AppStarted => {
            let _ = network_requests.send(NetworkRequest::RefreshScores).await;
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, network_requests).await;
            true
        }
        UiEvent::Resize => true,
        UiEvent::TimerTick => {
            let mut guard = app.lock().await;
            guard.on_timer_tick();
            true
        }
    }
}

async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) {
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
        }
        NetworkResponse::ScoresRefreshed { slate } => {
            let mut guard = app.lock().await;
            guard.on_scores_refreshed(slate);
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        let event = match tokio::task::spawn_blocking(crossterm_event::read).await {
            Ok(Ok(event)) => event,
            _ => continue,
        };

        let ui_event = match event {
            Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
            Event::Resize(_, _) => Some(UiEvent::Resize),
            _ => None,
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
