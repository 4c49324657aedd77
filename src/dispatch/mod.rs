//! Dispatch: routing events from a queue to participants.
//!
//! # Architecture
//!
//! ```text
//!   push(M) ──▶ ┌──────────────┐  dispatch_top  ┌─────────────────┐
//!               │ MessageQueue │ ─────────────▶ │  ComponentList  │
//!               └──────────────┘   (Event)      │ (&mut P, ...)   │
//!                                               └────────┬────────┘
//!   dispatch(M) ───────────────────────────────────────▶ │ catalog gate
//!                                                        ▼
//!                                               Participant::on_event
//!                                                        │
//!                                                        ▼ (state machine)
//!                                                   DispatchRef ──▶ sub-state
//! ```

mod dispatcher;
mod queue;
mod reference;

pub use dispatcher::{ComponentList, Dispatcher};
pub use queue::MessageQueue;
pub use reference::{DispatchRef, Slot};
