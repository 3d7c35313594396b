use crate::state::messages::{NetworkRequest, UiEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic score refresh. Each request refetches both leagues in full.
pub struct PeriodicRefresher {
    network_requests: mpsc::Sender<NetworkRequest>,
    period: Duration,
}

impl PeriodicRefresher {
    pub fn new(network_requests: mpsc::Sender<NetworkRequest>, period: Duration) -> Self {
        Self { network_requests, period }
    }

    pub async fn run(self) {
        let mut scores_interval = interval(self.period);
        scores_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        scores_interval.tick().await;

        loop {
            scores_interval.tick().await;
            if self
                .network_requests
                .send(NetworkRequest::RefreshScores)
                .await
                .is_err()
            {
                break;
            }
        }
    }
}

/// One-second clock driver. Never touches the network; it only asks the UI
/// loop to advance the timers already on screen.
pub struct TimerTicker {
    ui_events: mpsc::Sender<UiEvent>,
}

impl TimerTicker {
    pub fn new(ui_events: mpsc::Sender<UiEvent>) -> Self {
        Self { ui_events }
    }

    pub async fn run(self) {
        let mut ticks = interval(TICK_INTERVAL);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticks.tick().await;

        loop {
            ticks.tick().await;
            if self.ui_events.send(UiEvent::TimerTick).await.is_err() {
                break;
            }
        }
    }
}
