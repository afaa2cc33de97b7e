//! OrderSystem - the subject customers subscribe to.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

/// Announcement printed once every order has been handed to a worker.
pub const ALL_READY_ANNOUNCEMENT: &str = "Customers are notified when their orders are ready.";

/// Receives order notifications.
///
/// `update` takes `&self`; observers that record messages need interior
/// mutability.
pub trait OrderObserver: Send + Sync {
    /// Identity used to de-duplicate attachments.
    fn observer_id(&self) -> String;

    /// Display name for logs.
    fn name(&self) -> &str;

    fn update(&self, message: &str);
}

/// Registry of observers with broadcast delivery.
///
/// Observers are kept in attach order and delivered to in that order.
#[derive(Default)]
pub struct OrderSystem {
    observers: RwLock<Vec<Arc<dyn OrderObserver>>>,
}

impl OrderSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer. Attaching the same observer id twice is a no-op.
    pub fn attach(&self, observer: Arc<dyn OrderObserver>) {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = observer.observer_id();
        if observers.iter().any(|o| o.observer_id() == id) {
            debug!(observer = observer.name(), "observer already attached");
            return;
        }
        debug!(observer = observer.name(), "observer attached");
        observers.push(observer);
    }

    /// Detaches an observer by id. Unknown observers are ignored.
    pub fn detach(&self, observer: &dyn OrderObserver) {
        let id = observer.observer_id();
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|o| o.observer_id() != id);
    }

    /// Delivers `message` to every attached observer.
    ///
    /// Returns how many observers received it.
    pub fn notify(&self, message: &str) -> usize {
        let observers = self.snapshot();
        for observer in &observers {
            observer.update(message);
        }
        observers.len()
    }

    /// Delivers `message` to the single observer with `observer_id`.
    ///
    /// Returns false when no attached observer has that id.
    pub fn notify_one(&self, observer_id: &str, message: &str) -> bool {
        match self
            .snapshot()
            .into_iter()
            .find(|o| o.observer_id() == observer_id)
        {
            Some(observer) => {
                observer.update(message);
                true
            }
            None => false,
        }
    }

    /// Logs and returns the "all ready" announcement. Sends nothing.
    pub fn notify_all_ready(&self) -> String {
        info!(observers = self.observer_count(), "{}", ALL_READY_ANNOUNCEMENT);
        ALL_READY_ANNOUNCEMENT.to_string()
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // Clone out so observers run without the lock held.
    fn snapshot(&self) -> Vec<Arc<dyn OrderObserver>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
