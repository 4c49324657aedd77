//! # Typed Dispatch
//!
//! Statically-checked event routing for single-threaded programs.
//!
//! Participants declare which message types they accept. A dispatcher bound
//! to a fixed list of participants queues messages in a uniform container
//! and hands each one only to the participants that declared it.
//!
//! ## Core Concepts
//!
//! - **Catalogs**: Each participant type declares its accepted kinds as a constant
//! - **Closed universe**: Messages outside a dispatcher's universe do not compile
//! - **Silent gating**: Participants that did not declare a message never see it
//! - **Dispatch references**: Rebindable handles that forward to one sub-state
//!
//! ## Example
//!
//! ```rust,ignore
//! use typed_dispatch::{Component, ComponentEvt1, Dispatcher, StateEvt1, StateMachine};
//!
//! let mut component = Component;
//! let mut machine = StateMachine::new();
//! let mut dispatcher = Dispatcher::new((&mut component, &mut machine));
//!
//! dispatcher.push(ComponentEvt1);
//! dispatcher.push(StateEvt1);
//! while dispatcher.dispatch_top() {}
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod dispatch;
pub mod event;
pub mod participant;
pub mod trace;

// Re-exports for convenience
pub use catalog::{can_receive, Catalog, Incoming, Universe};
pub use dispatch::{ComponentList, DispatchRef, Dispatcher, MessageQueue, Slot};
pub use event::{ComponentEvt1, ComponentEvt2, Event, EventKind, EventSet, Message, StateEvt1, StateEvt2, StateEvt3};
pub use participant::{Component, Participant, State1, State2, State3, StateMachine, Substates};
pub use trace::{LogSink, Recorder, Silent, TraceConfig, TraceEntry, TraceSink};
