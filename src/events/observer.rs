//! Observer seam between the engine and a presentation layer.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use super::event::GameEvent;
use crate::core::Snapshot;

/// Receives every event together with the snapshot taken once the command
/// (or tick) that produced it has been fully applied.
///
/// Implemented for closures, for [`ChannelObserver`] and for
/// [`EventLog`].
pub trait SessionObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot);
}

impl<F> SessionObserver for F
where
    F: FnMut(&GameEvent, &Snapshot),
{
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot) {
        self(event, snapshot);
    }
}

/// Forwards events into an `mpsc` channel, e.g. to a UI thread.
#[derive(Clone, Debug)]
pub struct ChannelObserver(pub Sender<GameEvent>);

impl From<Sender<GameEvent>> for ChannelObserver {
    fn from(sender: Sender<GameEvent>) -> Self {
        Self(sender)
    }
}

impl SessionObserver for ChannelObserver {
    fn on_event(&mut self, event: &GameEvent, _snapshot: &Snapshot) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.0.send(event.clone());
    }
}

/// Recording observer.
///
/// Cloning shares the underlying buffer, so one handle can be subscribed
/// while another is kept for inspection.
///
/// ```
/// use aita_engine::events::EventLog;
///
/// let log = EventLog::new();
/// let handle = log.clone();
/// assert!(handle.is_empty());
/// # drop(log);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Names of recorded events, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(GameEvent::name).collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SessionObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent, _snapshot: &Snapshot) {
        self.events.borrow_mut().push(event.clone());
    }
}
