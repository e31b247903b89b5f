//! Transient notices.
//!
//! A notice stays visible for a fixed duration and then clears itself.
//! Each `show` bumps a generation counter; a timer only clears the notice
//! it was scheduled for, so an older timer never hides a newer notice.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use roster_core::constants::NOTICE_DISPLAY_DURATION;
use tokio::time::Instant;

/// Tone of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// Message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Text to display.
    pub text: String,
    /// Tone.
    pub kind: NoticeKind,
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notice>,
    generation: u64,
}

/// Holder of the current notice.
#[derive(Clone, Debug)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    display_for: Duration,
}

impl Notifier {
    /// Notifier with the standard display duration.
    pub fn new() -> Self {
        Self::with_duration(NOTICE_DISPLAY_DURATION)
    }

    /// Notifier whose notices clear after `display_for`.
    pub fn with_duration(display_for: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            display_for,
        }
    }

    /// Replace the current notice and schedule its clearing.
    ///
    /// Outside a tokio runtime the notice stays until replaced or dismissed.
    pub fn show(&self, text: impl Into<String>, kind: NoticeKind) {
        let generation = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            slot.current = Some(Notice {
                text: text.into(),
                kind,
            });
            slot.generation
        };

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let deadline = Instant::now() + self.display_for;
        let slot = Arc::clone(&self.slot);
        drop(handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut slot = slot.lock();
            if slot.generation == generation {
                slot.current = None;
            }
        }));
    }

    /// Show a success notice.
    pub fn success(&self, text: impl Into<String>) {
        self.show(text, NoticeKind::Success);
    }

    /// Show an error notice.
    pub fn error(&self, text: impl Into<String>) {
        self.show(text, NoticeKind::Error);
    }

    /// Clear immediately.
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.current = None;
    }

    /// The notice currently visible, if any.
    pub fn current(&self) -> Option<Notice> {
        self.slot.lock().current.clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
