//! # Notifications
//!
//! User-facing notices for failed cart operations.
//!
//! Cart operations report *what* went wrong as a [`CartError`]; this module
//! decides *what the shopper reads*. Keeping the wording here lets the cart
//! logic be tested without a UI and the wording be tested without services.
//!
//! ## Notice Mapping
//! ```text
//! ┌───────────────────┬──────────────────────────────┬─────────┐
//! │ Failure           │ Message                      │ Level   │
//! ├───────────────────┼──────────────────────────────┼─────────┤
//! │ OutOfStock        │ Requested amount is out of   │ warning │
//! │ (add or update)   │ stock                        │         │
//! │ anything on add   │ Failed to add product        │ error   │
//! │ anything on remove│ Failed to remove product     │ error   │
//! │ anything on update│ Failed to update product     │ error   │
//! │                   │ amount                       │         │
//! └───────────────────┴──────────────────────────────┴─────────┘
//! ```

use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartError;

pub const OUT_OF_STOCK_MESSAGE: &str = "Requested amount is out of stock";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add product";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove product";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update product amount";

/// The cart operation a notice is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::Add => ADD_FAILED_MESSAGE,
            CartOperation::Remove => REMOVE_FAILED_MESSAGE,
            CartOperation::UpdateAmount => UPDATE_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add_product"),
            CartOperation::Remove => write!(f, "remove_product"),
            CartOperation::UpdateAmount => write!(f, "update_product_amount"),
        }
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NoticeLevel {
    /// The shopper can fix it (pick a smaller amount).
    Warning,
    /// Something outside the shopper's control failed.
    Error,
}

/// A short message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// The notice shown when `operation` fails with `err`.
    pub fn for_failure(operation: CartOperation, err: &CartError) -> Self {
        match err {
            CartError::OutOfStock { .. } => Notice::warning(OUT_OF_STOCK_MESSAGE),
            _ => Notice::error(operation.failure_message()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Warning => write!(f, "warning: {}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Fire-and-forget sink for notices (toast area, status line, log).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that buffers notices until a caller drains them.
///
/// ## Usage
/// ```rust
/// use rocketshoes_core::{Notice, NoticeLog, Notifier};
///
/// let log = NoticeLog::new();
/// log.notify(Notice::error("Failed to remove product"));
///
/// assert_eq!(log.drain().len(), 1);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every buffered notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    /// Copies the buffered notices without removing them.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.notices.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.lock().push(notice);
    }
}
