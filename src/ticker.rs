//! Periodic elapsed-time refresh for the quiz screen.
//!
//! A ticker belongs to exactly one quiz session. Dropping it aborts the task,
//! so every path out of the quiz screen stops the timer.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use uuid::Uuid;

/// One timer firing, tagged with the session it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub session_id: Uuid,
}

pub struct ElapsedTicker {
    session_id: Uuid,
    handle: JoinHandle<()>,
}

impl ElapsedTicker {
    /// Spawn the timer task. Must be called inside a tokio runtime.
    pub fn spawn(session_id: Uuid, period: Duration, tx: mpsc::UnboundedSender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if tx.send(Tick { session_id }).is_err() {
                    break;
                }
            }
        });

        debug!("ticker: started for session {}", session_id);
        Self { session_id, handle }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("ticker: stopped for session {}", self.session_id);
    }
}

/// Holds the ticker for whichever session is currently on screen.
pub struct TickerSlot {
    period: Duration,
    tx: mpsc::UnboundedSender<Tick>,
    current: Option<ElapsedTicker>,
}

impl TickerSlot {
    pub fn new(period: Duration, tx: mpsc::UnboundedSender<Tick>) -> Self {
        Self {
            period,
            tx,
            current: None,
        }
    }

    /// Make the running ticker match `active`: start, replace or stop it.
    pub fn sync(&mut self, active: Option<Uuid>) {
        let running = self.current.as_ref().map(ElapsedTicker::session_id);
        if running == active {
            return;
        }

        // Drop first so the old task is aborted before a new one starts.
        self.current = None;
        if let Some(session_id) = active {
            self.current = Some(ElapsedTicker::spawn(session_id, self.period, self.tx.clone()));
        }
    }

    pub fn running_for(&self) -> Option<Uuid> {
        self.current.as_ref().map(ElapsedTicker::session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(10);

    #[tokio::test]
    async fn test_ticker_sends_tagged_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let session_id = Uuid::new_v4();
        let _ticker = ElapsedTicker::spawn(session_id, PERIOD, tx);

        let tick = time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(tick.session_id, session_id);
    }

    #[tokio::test]
    async fn test_dropping_ticker_stops_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = ElapsedTicker::spawn(Uuid::new_v4(), PERIOD, tx);
        drop(ticker);

        // The aborted task drops its sender, which closes the channel.
        let drained = time::timeout(Duration::from_secs(1), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn test_slot_follows_active_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = TickerSlot::new(PERIOD, tx);
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        slot.sync(Some(first));
        assert_eq!(slot.running_for(), Some(first));

        slot.sync(Some(second));
        assert_eq!(slot.running_for(), Some(second));

        slot.sync(None);
        assert_eq!(slot.running_for(), None);

        // Let any in-flight ticks land, then make sure nothing else arrives.
        time::sleep(PERIOD * 3).await;
        while rx.try_recv().is_ok() {}
        time::sleep(PERIOD * 5).await;
        assert!(rx.try_recv().is_err());
    }
}
