//! Event module: the closed set of message types.
//!
//! This module contains:
//! - [`Message`]: Trait implemented by every concrete message type
//! - [`Event`]: Erased container carried through the dispatcher queue
//! - [`EventKind`]: One tag per message type
//! - [`EventSet`]: Bitflag set of kinds used by catalogs

mod messages;
mod set;

pub use messages::{ComponentEvt1, ComponentEvt2, Event, Message, StateEvt1, StateEvt2, StateEvt3};
pub use set::{EventKind, EventSet};
