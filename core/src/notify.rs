//! Session-scoped notification channel.
//!
//! Any part of the application may enqueue a user-visible message without
//! threading a channel reference through the component tree: the channel is
//! installed once per session via [`Notifications::scope`] and reached with
//! [`Notifications::current`], mirroring task-local request correlation.
//! Accessing it outside the scope is a programming-contract violation and
//! fails fast rather than dropping messages silently.
//!
//! Entries expire on a per-kind timer or on manual dismissal; dismissal is
//! idempotent, so a timer firing after a manual dismiss is a no-op and can
//! never resurrect or reorder entries.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tokio::task_local;
use tracing::debug;
use uuid::Uuid;

use crate::classify::Classified;
use crate::config::NotifyConfig;

task_local! {
    static NOTIFICATIONS: Notifications;
}

/// Severity of a notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// An operation completed as requested.
    Success,
    /// An operation failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    Info,
}

/// Opaque identifier of a posted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntryId(Uuid);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One queued user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Unique token identifying this entry for dismissal.
    pub id: EntryId,
    /// Severity used by the renderer.
    pub kind: Kind,
    /// Human-facing text.
    pub message: String,
    /// When the entry was posted.
    pub created_at: DateTime<Utc>,
}

struct Inner {
    queue: Mutex<Vec<Entry>>,
    config: NotifyConfig,
    clock: Arc<dyn Clock + Send + Sync>,
}

/// Handle to the session's notification queue. Cloning is cheap and every
/// clone addresses the same queue.
#[derive(Clone)]
pub struct Notifications {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Notifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifications")
            .field("entries", &self.entries().len())
            .finish_non_exhaustive()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NotifyConfig::default())
    }
}

impl Notifications {
    /// Create a channel with the given expiry configuration.
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    /// Create a channel with an injected clock, for deterministic timestamps.
    #[must_use]
    pub fn with_clock(config: NotifyConfig, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            inner: Arc::new(Inner {
                queue: Mutex::new(Vec::new()),
                config,
                clock,
            }),
        }
    }

    /// Run `fut` with this channel installed as the session's provider.
    ///
    /// Task-local values are not inherited by spawned tasks; re-enter the
    /// scope when moving work onto a new task.
    pub async fn scope<Fut>(channel: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        NOTIFICATIONS.scope(channel, fut).await
    }

    /// The channel installed by the enclosing [`Notifications::scope`].
    ///
    /// # Panics
    /// Panics when called outside a provider scope. That is a wiring bug in
    /// the caller, not a runtime data error, and must surface immediately
    /// instead of dropping user-facing messages.
    #[must_use]
    pub fn current() -> Self {
        NOTIFICATIONS.try_with(Self::clone).unwrap_or_else(|_| {
            panic!("Notifications::current() called outside Notifications::scope")
        })
    }

    /// Post a message and schedule its auto-expiry.
    ///
    /// Entries are appended in post order; the renderer shows them in that
    /// order and removals never reorder the survivors.
    ///
    /// # Panics
    /// The expiry timer is spawned onto the ambient Tokio runtime, so this
    /// panics outside one — the same contract as every other timer in the
    /// application.
    pub fn post(&self, kind: Kind, message: impl Into<String>) -> EntryId {
        let entry = Entry {
            id: EntryId(Uuid::new_v4()),
            kind,
            message: message.into(),
            created_at: self.inner.clock.utc(),
        };
        let id = entry.id;
        debug!(%id, ?kind, "notification posted");
        self.lock_queue().push(entry);

        let ttl = self.inner.config.ttl(kind);
        let channel = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            channel.dismiss(id);
        });
        id
    }

    /// Remove an entry. Idempotent: dismissing an entry that already expired
    /// or was dismissed leaves the queue untouched.
    pub fn dismiss(&self, id: EntryId) {
        let mut queue = self.lock_queue();
        let before = queue.len();
        queue.retain(|entry| entry.id != id);
        if queue.len() < before {
            debug!(%id, "notification dismissed");
        }
    }

    /// Snapshot of the active entries, in post order.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.lock_queue().clone()
    }

    /// Post a success message.
    pub fn success(&self, message: impl Into<String>) -> EntryId {
        self.post(Kind::Success, message)
    }

    /// Post an error message.
    pub fn error(&self, message: impl Into<String>) -> EntryId {
        self.post(Kind::Error, message)
    }

    /// Post a warning message.
    pub fn warning(&self, message: impl Into<String>) -> EntryId {
        self.post(Kind::Warning, message)
    }

    /// Post an info message.
    pub fn info(&self, message: impl Into<String>) -> EntryId {
        self.post(Kind::Info, message)
    }

    /// Surface a classified exchange: successes post as success, everything
    /// else as error, always with the classified human-facing message.
    pub fn report(&self, outcome: &Classified) -> EntryId {
        let kind = if outcome.is_success() {
            Kind::Success
        } else {
            Kind::Error
        };
        self.post(kind, outcome.message())
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        self.inner
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
