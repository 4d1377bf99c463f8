// src/application/services/editor/autosave.rs
use std::time::Duration;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Instant, interval_at, sleep},
};

/// How long the indicator stays lit after each tick.
pub const AUTOSAVE_PULSE: Duration = Duration::from_secs(1);

/// Purely cosmetic "autosaving" flag: lights up for `pulse` every `period`
/// while the draft has a title or content. Nothing is persisted.
pub struct AutosaveIndicator {
    active: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl AutosaveIndicator {
    pub fn spawn(mut has_content: watch::Receiver<bool>, period: Duration, pulse: Duration) -> Self {
        let (tx, active) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                // editor dropped
                if has_content.has_changed().is_err() {
                    break;
                }
                if *has_content.borrow_and_update() {
                    tx.send_replace(true);
                    sleep(pulse).await;
                    tx.send_replace(false);
                }
            }
        });
        Self { active, task }
    }

    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.active.clone()
    }
}

impl Drop for AutosaveIndicator {
    fn drop(&mut self) {
        self.task.abort();
    }
}
