// ScanShelf - app/notify.rs
//
// Sink for user-facing notices ("Deleted 3 scans."). Injected into the
// catalog so the host decides where notices end up.

use std::sync::Mutex;

/// Receives user-facing notices.
pub trait Notifier {
    fn notice(&self, message: &str);
}

/// Prints notices to stdout, one per line. Used by the command-line shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notice(&self, message: &str) {
        println!("{message}");
    }
}

/// Keeps every notice in memory, for hosts that render them later.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    notices: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for CollectingNotifier {
    fn notice(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notice(&self, message: &str) {
        (**self).notice(message)
    }
}

/// Notice text for a completed bulk delete: "Deleted 1 scan." / "Deleted 4 scans."
pub fn deleted_notice(count: usize) -> String {
    use crate::util::constants::{ITEM_PLURAL, ITEM_SINGULAR};
    let noun = if count == 1 { ITEM_SINGULAR } else { ITEM_PLURAL };
    format!("Deleted {count} {noun}.")
}
