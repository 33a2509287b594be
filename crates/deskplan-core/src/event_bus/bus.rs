//! Event Bus implementation.
//!
//! Provides the EventBus struct used by a workspace to notify observers of
//! state changes. Each workspace owns its bus; share it with `Arc` when
//! several components need to observe the same workspace.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Arc<dyn Fn(AppEvent) + Send + Sync>;

/// Broadcast channel capacity; slow async receivers lag past this.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Error types for event bus operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Event distribution for one workspace
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    handlers: RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus whose async receivers buffer up to `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of async receivers that will receive the event,
    /// or [`EventBusError::NoSubscribers`] when nobody is listening.
    ///
    /// Handlers run on the publishing thread after the handler table lock
    /// is released, so a handler may subscribe or unsubscribe.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        let matching: Vec<EventHandler> = self
            .handlers
            .read()
            .values()
            .filter(|(filter, _)| filter.matches(&event))
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        let handled = !matching.is_empty();
        for handler in matching {
            handler(event.clone());
        }

        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) if handled || self.subscriber_count() > 0 => Ok(0),
            Err(_) => Err(EventBusError::NoSubscribers),
        }
    }

    /// Publish and ignore the absence of subscribers.
    pub fn notify(&self, event: AppEvent) {
        tracing::trace!("event: {}", event.description());
        // nobody listening is fine here
        let _ = self.publish(event);
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler is called on the publishing thread, so it should
    /// return quickly.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, (filter, Arc::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Get a receiver for polling events from an async task
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Number of active handler subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{LayoutEvent, ObjectEvent, SelectionEvent};
    use crate::model::{ObjectCategory, ObjectId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn added(id: &str) -> AppEvent {
        AppEvent::Objects(ObjectEvent::Added {
            id: ObjectId::from(id),
            category: ObjectCategory::Monitor,
        })
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert!(matches!(
            bus.publish(AppEvent::Layout(LayoutEvent::Cleared)),
            Err(EventBusError::NoSubscribers)
        ));
        // notify swallows the error
        bus.notify(AppEvent::Layout(LayoutEvent::Cleared));
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let objects = Arc::new(AtomicUsize::new(0));
        let selection = Arc::new(AtomicUsize::new(0));

        let oc = objects.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Objects]),
            move |_| {
                oc.fetch_add(1, Ordering::SeqCst);
            },
        );
        let sc = selection.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Selection]),
            move |_| {
                sc.fetch_add(1, Ordering::SeqCst);
            },
        );

        bus.publish(added("a")).ok();
        bus.publish(added("b")).ok();
        bus.publish(AppEvent::Selection(SelectionEvent::Cleared)).ok();

        assert_eq!(objects.load(Ordering::SeqCst), 2);
        assert_eq!(selection.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_can_subscribe_during_dispatch() {
        let bus = Arc::new(EventBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe(EventFilter::All, move |_| {
            inner.subscribe(EventFilter::All, |_| {});
        });
        bus.publish(added("a")).ok();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_receiver_counts_as_listener() {
        let bus = EventBus::with_capacity(4);
        let _receiver = bus.receiver();
        assert_eq!(bus.publish(added("a")).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        bus.publish(added("m1")).ok();

        match receiver.recv().await {
            Ok(AppEvent::Objects(ObjectEvent::Added { id, .. })) => assert_eq!(id.as_str(), "m1"),
            other => panic!("Wrong event received: {:?}", other),
        }
    }
}
