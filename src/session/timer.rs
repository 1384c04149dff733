//! Rest countdown ticker

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Tick message, tagged with the timer that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub timer_id: u64,
}

/// Handle to a running countdown task.
///
/// The task sends one [`Tick`] per period until the handle is dropped.
/// Must be started from within a tokio runtime.
#[derive(Debug)]
pub struct RestTimer {
    id: u64,
    handle: JoinHandle<()>,
}

impl RestTimer {
    pub fn start(id: u64, period: Duration, tx: UnboundedSender<Tick>) -> Self {
        debug!("Rest timer {} started", id);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if tx.send(Tick { timer_id: id }).is_err() {
                    break;
                }
            }
        });
        Self { id, handle }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for RestTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Rest timer {} stopped", self.id);
    }
}
