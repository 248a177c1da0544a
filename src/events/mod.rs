//! Event notification.
//!
//! The engine does not re-render anything. After each successful command
//! it returns a fresh snapshot and also pushes one [`GameEvent`] per change
//! to every subscribed [`SessionObserver`].

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{ChannelObserver, EventLog, SessionObserver};
