use crate::ingest::sweep::run_sweep;
use crate::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    period: Duration,
}

pub struct SchedulerHandle {
    state: watch::Receiver<SchedulerState>,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.clone()
    }

    pub async fn join(self) {
        if let Err(e) = self.join.await {
            warn!("Scheduler task ended abnormally: {}", e);
        }
    }
}

/// First tick one period from now. Ticks missed during a long sweep collapse
/// into one and later ticks stay on the original period grid.
pub(crate) fn sweep_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Runs a sweep every `period`, first one a full period after spawning.
    ///
    /// `shutdown` is only observed between sweeps; a sweep that has started runs to completion.
    pub fn spawn(self, state: Arc<AppState>, shutdown: CancellationToken) -> SchedulerHandle {
        let (state_tx, state_rx) = watch::channel(SchedulerState::Idle);
        let period = self.period;

        let join = tokio::spawn(async move {
            info!(period_secs = period.as_secs(), "Starting ingestion scheduler");

            let mut ticker = sweep_ticker(period);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        state_tx.send_replace(SchedulerState::Running);
                        let result = run_sweep(&state.storage, state.fetcher.as_ref()).await;
                        // Under the continue policy the error is already logged; wait for the next tick
                        let _ = state.failure_policy().check("scheduled sweep", result);
                        state_tx.send_replace(SchedulerState::Idle);
                    }
                    _ = shutdown.cancelled() => {
                        info!("Shutting down ingestion scheduler");
                        break;
                    }
                }
            }

            state_tx.send_replace(SchedulerState::Stopped);
        });

        SchedulerHandle {
            state: state_rx,
            join,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_stay_aligned_after_a_long_sweep() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        let mut ticker = sweep_ticker(period);

        ticker.tick().await;
        assert_eq!(start.elapsed(), period);

        // Sweep overruns two and a half periods
        tokio::time::advance(Duration::from_millis(250)).await;

        // The missed ticks collapse into one immediate tick
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(350));

        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }
}
