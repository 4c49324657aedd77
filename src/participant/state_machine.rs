//! StateMachine: three sub-states rotated by the state events.
//!
//! ```text
//!             state_evt_1              state_evt_2
//!   ┌────────┐ ──────────▶ ┌────────┐ ──────────▶ ┌────────┐
//!   │ state1 │             │ state2 │             │ state3 │
//!   └────────┘ ◀────────── └────────┘             └────────┘
//!       ▲       state_evt_3                           │
//!       └─────────────────────────────────────────────┘
//!                         state_evt_3
//! ```
//!
//! The successor depends only on the event: every `state_evt_1` leads to
//! state2, every `state_evt_2` to state3 and every `state_evt_3` to state1.
//! Before moving, the event is delivered to the sub-state that was active
//! when it arrived, which handles it only if its catalog declares it.

use super::Participant;
use crate::catalog::{Catalog, Universe};
use crate::dispatch::{DispatchRef, Slot};
use crate::event::{Event, EventSet, Message};
use crate::trace::{TraceEntry, TraceSink};

/// First sub-state. Handles `state_evt_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State1 {
    hits: u64,
}

/// Second sub-state. Handles `state_evt_2` and `state_evt_3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State2 {
    hits: u64,
}

/// Third sub-state. Handles `state_evt_3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State3 {
    hits: u64,
}

macro_rules! impl_substate {
    ($ty:ident, $name:literal, $incoming:expr, $($variant:ident)|+) => {
        impl $ty {
            /// Number of events this sub-state has handled.
            pub const fn hits(&self) -> u64 {
                self.hits
            }
        }

        impl Catalog for $ty {
            const NAME: &'static str = $name;
            const INCOMING: EventSet = $incoming;
        }

        impl Participant for $ty {
            fn on_event(&mut self, event: &Event, sink: &mut dyn TraceSink) {
                if matches!(event, $(Event::$variant(_))|+) {
                    self.hits = self.hits.wrapping_add(1);
                    sink.record(TraceEntry::handled(Self::NAME, event.kind()));
                }
            }
        }
    };
}

impl_substate!(State1, "state1", EventSet::STATE_EVT_1, StateEvt1);
impl_substate!(
    State2,
    "state2",
    EventSet::STATE_EVT_2.join(EventSet::STATE_EVT_3),
    StateEvt2 | StateEvt3
);
impl_substate!(State3, "state3", EventSet::STATE_EVT_3, StateEvt3);

/// The sub-states owned by a [`StateMachine`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substates {
    /// Initial state.
    pub state1: State1,
    /// Reached by `state_evt_1`.
    pub state2: State2,
    /// Reached by `state_evt_2`.
    pub state3: State3,
}

impl Universe for Substates {
    const EVENTS: EventSet = StateMachine::INCOMING;
}

impl Slot<State1> for Substates {
    fn slot(&mut self) -> &mut State1 {
        &mut self.state1
    }
}

impl Slot<State2> for Substates {
    fn slot(&mut self) -> &mut State2 {
        &mut self.state2
    }
}

impl Slot<State3> for Substates {
    fn slot(&mut self) -> &mut State3 {
        &mut self.state3
    }
}

/// A participant that cycles through three sub-states.
#[derive(Debug)]
pub struct StateMachine {
    states: Substates,
    active: DispatchRef<Substates>,
    transitions: u64,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self {
            states: Substates::default(),
            active: DispatchRef::bind::<State1>(),
            transitions: 0,
        }
    }
}

impl StateMachine {
    /// Create a machine with state1 active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the active sub-state.
    pub const fn active(&self) -> &'static str {
        self.active.target()
    }

    /// Check whether sub-state `S` is active.
    pub fn is_active<S: 'static>(&self) -> bool {
        self.active.is_bound_to::<S>()
    }

    /// The owned sub-states.
    pub const fn states(&self) -> &Substates {
        &self.states
    }

    /// Number of transitions taken since construction.
    pub const fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Deliver `msg` to the active sub-state, then rebind to `S`.
    fn advance<M, S>(&mut self, msg: M, sink: &mut dyn TraceSink)
    where
        M: Message,
        S: Participant + 'static,
        Substates: Slot<S>,
    {
        self.active.deliver(&mut self.states, msg, sink);

        let from = self.active.target();
        self.active = DispatchRef::bind::<S>();
        self.transitions = self.transitions.wrapping_add(1);
        sink.record(TraceEntry::transition(Self::NAME, from, S::NAME));
    }
}

impl Catalog for StateMachine {
    const NAME: &'static str = "state_machine";
    const INCOMING: EventSet = EventSet::STATE_EVT_1
        .join(EventSet::STATE_EVT_2)
        .join(EventSet::STATE_EVT_3);
}

impl Participant for StateMachine {
    fn on_event(&mut self, event: &Event, sink: &mut dyn TraceSink) {
        match *event {
            Event::StateEvt1(msg) => {
                sink.record(TraceEntry::handled(Self::NAME, event.kind()));
                self.advance::<_, State2>(msg, sink);
            }
            Event::StateEvt2(msg) => {
                sink.record(TraceEntry::handled(Self::NAME, event.kind()));
                self.advance::<_, State3>(msg, sink);
            }
            Event::StateEvt3(msg) => {
                sink.record(TraceEntry::handled(Self::NAME, event.kind()));
                self.advance::<_, State1>(msg, sink);
            }
            Event::ComponentEvt1(_) | Event::ComponentEvt2(_) => {}
        }
    }
}
