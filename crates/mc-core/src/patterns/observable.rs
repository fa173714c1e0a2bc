//! Observer / Observable pattern used for change notification.
//!
//! * An **Observable** notifies its registered **Observer**s every time
//!   its state has been replaced.
//! * Observers react in [`Observer::on_change`], typically by invalidating
//!   whatever they derived from the observable (rendered cells, labels).
//!
//! Registration and notification work through `&self`: the observer list
//! lives behind a `RefCell`, so an owner can publish from a non-`mut`
//! method and observers are held weakly.

use std::cell::RefCell;
use std::sync::{Arc, Weak};

/// An object that can notify interested parties when it changes.
pub trait Observable {
    /// Register an observer to receive future change notifications.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Remove a previously registered observer.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Notify all currently registered observers that this object has changed.
    fn notify_observers(&self);
}

/// An object that reacts to changes in the [`Observable`]s it subscribed to.
pub trait Observer: Send + Sync {
    /// Called once per committed state change of an observed object.
    fn on_change(&self);
}

/// Adapts any `Fn()` closure into an [`Observer`].
///
/// ```
/// use std::sync::{Arc, Weak};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use mc_core::patterns::observable::{ChangeNotifier, FnObserver, Observer};
///
/// let hits = Arc::new(AtomicU32::new(0));
/// let counter = hits.clone();
/// let observer = Arc::new(FnObserver::new(move || {
///     counter.fetch_add(1, Ordering::Relaxed);
/// }));
/// let notifier = ChangeNotifier::new();
/// notifier.subscribe(Arc::downgrade(&observer) as Weak<dyn Observer>);
/// notifier.notify();
/// assert_eq!(hits.load(Ordering::Relaxed), 1);
/// ```
pub struct FnObserver<F> {
    callback: F,
}

impl<F> FnObserver<F>
where
    F: Fn() + Send + Sync,
{
    /// Wrap `callback`.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Observer for FnObserver<F>
where
    F: Fn() + Send + Sync,
{
    fn on_change(&self) {
        (self.callback)()
    }
}

/// Observer-list management that can be embedded in any observable type.
pub struct ChangeNotifier {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl ChangeNotifier {
    /// Create a notifier with no observers.
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn subscribe(&self, observer: Weak<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Remove an observer (by pointer equality of the `Weak`).
    pub fn unsubscribe(&self, observer: &Weak<dyn Observer>) {
        self.observers
            .borrow_mut()
            .retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Number of observers that are still alive.
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Notify all live observers exactly once, pruning dead references.
    pub fn notify(&self) {
        // Upgrade first so that an observer may (un)subscribe from inside
        // `on_change` without a double borrow.
        let live: Vec<Arc<dyn Observer>> = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|w| w.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.on_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingObserver {
        count: AtomicU32,
    }

    impl Observer for CountingObserver {
        fn on_change(&self) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn counting() -> Arc<CountingObserver> {
        Arc::new(CountingObserver {
            count: AtomicU32::new(0),
        })
    }

    #[test]
    fn subscribe_and_notify() {
        let obs = counting();
        let notifier = ChangeNotifier::new();
        notifier.subscribe(Arc::downgrade(&obs) as Weak<dyn Observer>);
        notifier.notify();
        assert_eq!(obs.count.load(Ordering::Relaxed), 1);
        notifier.notify();
        assert_eq!(obs.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn dead_observer_pruned() {
        let notifier = ChangeNotifier::new();
        {
            let obs = counting();
            notifier.subscribe(Arc::downgrade(&obs) as Weak<dyn Observer>);
            assert_eq!(notifier.observer_count(), 1);
        }
        notifier.notify();
        assert_eq!(notifier.observers.borrow().len(), 0);
        assert_eq!(notifier.observer_count(), 0);
    }

    #[test]
    fn unsubscribe() {
        let obs = counting();
        let weak = Arc::downgrade(&obs) as Weak<dyn Observer>;
        let notifier = ChangeNotifier::new();
        notifier.subscribe(weak.clone());
        notifier.unsubscribe(&weak);
        notifier.notify();
        assert_eq!(obs.count.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn closure_observer() {
        let hits = Arc::new(AtomicU32::new(0));
        let inner = hits.clone();
        let obs = Arc::new(FnObserver::new(move || {
            inner.fetch_add(1, Ordering::Relaxed);
        }));
        let notifier = ChangeNotifier::new();
        notifier.subscribe(Arc::downgrade(&obs) as Weak<dyn Observer>);
        notifier.notify();
        notifier.notify();
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }
}
