//! Periodic tick driver.
//!
//! Spawns one task on a tokio runtime that samples a [`TimeSource`] on a
//! fixed interval and publishes the newest instant on a `watch` channel.
//! Only the [`TickReceiver`] side mutates widget state. A reader that falls
//! behind sees only the latest tick; the ones it slept through are gone, the
//! same as ticks the interval itself skips.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::services::clock::TimeSource;
use crate::services::widget::WidgetEvent;

/// Called after every published tick, e.g. to wake the UI thread.
pub type TickWaker = Box<dyn Fn() + Send + Sync + 'static>;

/// Handle to the running tick task. Dropping it stops the task.
pub struct Ticker {
    task: Option<JoinHandle<()>>,
    period: StdDuration,
}

/// Reading end of the tick channel. Holds at most one pending tick.
pub struct TickReceiver {
    rx: watch::Receiver<Option<DateTime<Utc>>>,
}

impl TickReceiver {
    /// The newest tick not yet taken, without waiting.
    pub fn latest(&mut self) -> Option<WidgetEvent> {
        match self.rx.has_changed() {
            Ok(true) => (*self.rx.borrow_and_update()).map(WidgetEvent::Tick),
            Ok(false) | Err(_) => None,
        }
    }

    /// Wait for the next tick. `None` once the ticker is gone.
    pub async fn next(&mut self) -> Option<WidgetEvent> {
        self.rx.changed().await.ok()?;
        (*self.rx.borrow_and_update()).map(WidgetEvent::Tick)
    }
}

impl Ticker {
    /// Start ticking on `runtime`. Returns the handle and the receiver the
    /// ticks arrive on.
    pub fn start(
        runtime: &Handle,
        source: Arc<dyn TimeSource>,
        period: StdDuration,
        waker: Option<TickWaker>,
    ) -> (Self, TickReceiver) {
        let (tx, rx) = watch::channel(None);
        let task = runtime.spawn(run_ticks(source, period, tx, waker));
        log::info!("Ticker started with a {:?} period", period);

        (
            Self {
                task: Some(task),
                period,
            },
            TickReceiver { rx },
        )
    }

    pub fn period(&self) -> StdDuration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the tick task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::info!("Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticks(
    source: Arc<dyn TimeSource>,
    period: StdDuration,
    tx: watch::Sender<Option<DateTime<Utc>>>,
    waker: Option<TickWaker>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if tx.send(Some(source.now())).is_err() {
            log::debug!("Tick receiver dropped; ticker exiting");
            break;
        }
        if let Some(waker) = &waker {
            waker();
        }
    }
}
