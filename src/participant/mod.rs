//! Participants: state-holding objects that consume events.
//!
//! A participant declares what it accepts through [`Catalog`] and handles
//! events through [`Participant::on_event`]. Two participants ship with the
//! crate:
//! - [`Component`]: A stateless reactive component
//! - [`StateMachine`]: A three-state rotating machine

mod component;
mod state_machine;

pub use component::Component;
pub use state_machine::{State1, State2, State3, StateMachine, Substates};

use crate::catalog::{Catalog, Declares, Incoming};
use crate::event::{Event, Message};
use crate::trace::TraceSink;

/// An object that reacts to events.
///
/// Callers only hand a participant events its catalog declares. The
/// handler matches on the concrete message type and ignores anything else.
pub trait Participant: Catalog {
    /// Handle one event.
    fn on_event(&mut self, event: &Event, sink: &mut dyn TraceSink);
}

/// Deliver `msg` straight to `participant`.
///
/// Unlike dispatcher fan-out, which skips participants silently, this
/// fails `cargo build` when `P`'s catalog does not declare `M`.
///
/// ```
/// use typed_dispatch::{participant::on_event, StateEvt1, StateMachine, trace::Silent};
///
/// let mut machine = StateMachine::new();
/// on_event(&mut machine, StateEvt1, &mut Silent);
/// assert_eq!(machine.active(), "state2");
/// ```
///
/// ```compile_fail
/// use typed_dispatch::{participant::on_event, ComponentEvt1, StateMachine, trace::Silent};
///
/// on_event(&mut StateMachine::new(), ComponentEvt1, &mut Silent);
/// ```
pub fn on_event<P: Participant, M: Message>(participant: &mut P, msg: M, sink: &mut dyn TraceSink) {
    let () = <Incoming<P> as Declares<M>>::OK;
    participant.on_event(&msg.into(), sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ComponentEvt2, EventKind, StateEvt2};
    use crate::trace::Recorder;

    #[test]
    fn test_direct_delivery() {
        let mut component = Component;
        let mut machine = StateMachine::new();
        let mut sink = Recorder::new();

        on_event(&mut component, ComponentEvt2, &mut sink);
        on_event(&mut machine, StateEvt2, &mut sink);

        assert_eq!(sink.handled_by("component"), vec![EventKind::ComponentEvt2]);
        assert_eq!(sink.handled_by("state_machine"), vec![EventKind::StateEvt2]);
        assert_eq!(machine.active(), "state3");
    }
}
