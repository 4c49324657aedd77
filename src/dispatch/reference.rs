//! Dispatch reference: a rebindable handle to one sub-state.
//!
//! A [`DispatchRef`] never owns its target. It names a sub-state type `S`
//! living inside a host `H` (located through [`Slot`]) and carries one
//! forwarding function per event kind:
//!
//! ```text
//!   kind index:   0     1     2      3      4
//!              ┌─────┬─────┬──────┬──────┬──────┐
//!   table      │ nop │ nop │ fwd  │ nop  │ fwd  │   fwd = host.slot().on_event(..)
//!              └─────┴─────┴──────┴──────┴──────┘
//! ```
//!
//! A slot forwards only when the kind is in the host's universe and in
//! `S`'s catalog. Changing the target means binding a fresh reference.

use crate::catalog::{Declares, Universe};
use crate::event::{Event, EventKind, EventSet, Message};
use crate::participant::Participant;
use crate::trace::TraceSink;
use std::any::TypeId;
use std::fmt;

/// Locates a sub-state of type `S` inside a host.
pub trait Slot<S> {
    /// Borrow the sub-state.
    fn slot(&mut self) -> &mut S;
}

type Forward<H> = fn(&mut H, &Event, &mut dyn TraceSink);

/// Non-owning handle plus forwarding table for one sub-state of `H`.
pub struct DispatchRef<H> {
    target: &'static str,
    target_id: TypeId,
    accepts: EventSet,
    table: [Forward<H>; EventKind::COUNT],
}

impl<H: Universe> DispatchRef<H> {
    /// Bind a reference to the `S` sub-state of the host.
    pub fn bind<S>() -> Self
    where
        H: Slot<S>,
        S: Participant + 'static,
    {
        let accepts = H::EVENTS & S::INCOMING;
        let mut table = [ignore::<H> as Forward<H>; EventKind::COUNT];
        for kind in accepts.kinds() {
            table[kind.index()] = forward::<H, S>;
        }

        Self {
            target: S::NAME,
            target_id: TypeId::of::<S>(),
            accepts,
            table,
        }
    }

    /// Deliver `msg` to the bound sub-state of `host`.
    ///
    /// Message types outside `H`'s universe fail `cargo build`. Types inside
    /// it that the target does not declare are dropped.
    ///
    /// ```
    /// use typed_dispatch::{DispatchRef, State1, StateEvt1, Substates, trace::Silent};
    ///
    /// let reference = DispatchRef::<Substates>::bind::<State1>();
    /// let mut host = Substates::default();
    /// reference.deliver(&mut host, StateEvt1, &mut Silent);
    /// assert_eq!(host.state1.hits(), 1);
    /// ```
    ///
    /// ```compile_fail
    /// use typed_dispatch::{ComponentEvt1, DispatchRef, State1, Substates, trace::Silent};
    ///
    /// let reference = DispatchRef::<Substates>::bind::<State1>();
    /// let mut host = Substates::default();
    /// reference.deliver(&mut host, ComponentEvt1, &mut Silent);
    /// ```
    #[inline]
    pub fn deliver<M: Message>(&self, host: &mut H, msg: M, sink: &mut dyn TraceSink) {
        let () = <H as Declares<M>>::OK;
        (self.table[M::KIND.index()])(host, &msg.into(), sink);
    }
}

impl<H> DispatchRef<H> {
    /// Name of the bound sub-state.
    pub const fn target(&self) -> &'static str {
        self.target
    }

    /// Check whether the reference is bound to sub-state type `S`.
    pub fn is_bound_to<S: 'static>(&self) -> bool {
        self.target_id == TypeId::of::<S>()
    }

    /// Check whether a message of `kind` reaches the target.
    pub const fn forwards(&self, kind: EventKind) -> bool {
        self.accepts.has(kind)
    }
}

impl<H> Clone for DispatchRef<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for DispatchRef<H> {}

impl<H> fmt::Debug for DispatchRef<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchRef")
            .field("target", &self.target)
            .field("accepts", &self.accepts)
            .finish_non_exhaustive()
    }
}

fn forward<H: Slot<S>, S: Participant>(host: &mut H, event: &Event, sink: &mut dyn TraceSink) {
    host.slot().on_event(event, sink);
}

fn ignore<H>(_host: &mut H, _event: &Event, _sink: &mut dyn TraceSink) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::event::{ComponentEvt2, StateEvt1, StateEvt2, StateEvt3};
    use crate::trace::{Recorder, TraceEntry};

    #[derive(Default)]
    struct Left {
        seen: Vec<EventKind>,
    }

    impl Catalog for Left {
        const NAME: &'static str = "left";
        const INCOMING: EventSet = EventSet::STATE_EVT_1.join(EventSet::COMPONENT_EVT_2);
    }

    impl Participant for Left {
        fn on_event(&mut self, event: &Event, sink: &mut dyn TraceSink) {
            self.seen.push(event.kind());
            sink.record(TraceEntry::handled(Self::NAME, event.kind()));
        }
    }

    #[derive(Default)]
    struct Right {
        seen: Vec<EventKind>,
    }

    impl Catalog for Right {
        const NAME: &'static str = "right";
        const INCOMING: EventSet = EventSet::STATE_EVT_2;
    }

    impl Participant for Right {
        fn on_event(&mut self, event: &Event, _sink: &mut dyn TraceSink) {
            self.seen.push(event.kind());
        }
    }

    #[derive(Default)]
    struct Host {
        left: Left,
        right: Right,
    }

    // `ComponentEvt2` is declared by `Left` but not tracked by the host.
    impl Universe for Host {
        const EVENTS: EventSet = EventSet::STATE_EVT_1
            .join(EventSet::STATE_EVT_2)
            .join(EventSet::STATE_EVT_3);
    }

    impl Slot<Left> for Host {
        fn slot(&mut self) -> &mut Left {
            &mut self.left
        }
    }

    impl Slot<Right> for Host {
        fn slot(&mut self) -> &mut Right {
            &mut self.right
        }
    }

    #[test]
    fn test_deliver_declared_message() {
        let mut host = Host::default();
        let mut sink = Recorder::new();
        let reference = DispatchRef::<Host>::bind::<Left>();

        reference.deliver(&mut host, StateEvt1, &mut sink);

        assert_eq!(host.left.seen, vec![EventKind::StateEvt1]);
        assert!(host.right.seen.is_empty());
        assert_eq!(sink.handled_by("left"), vec![EventKind::StateEvt1]);
    }

    #[test]
    fn test_undeclared_message_is_dropped() {
        let mut host = Host::default();
        let mut sink = Recorder::new();
        let reference = DispatchRef::<Host>::bind::<Left>();

        reference.deliver(&mut host, StateEvt2, &mut sink);
        reference.deliver(&mut host, StateEvt3, &mut sink);

        assert!(host.left.seen.is_empty());
        assert!(host.right.seen.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_table_limited_to_host_universe() {
        let reference = DispatchRef::<Host>::bind::<Left>();

        assert!(reference.forwards(EventKind::StateEvt1));
        assert!(!reference.forwards(EventKind::ComponentEvt2));
        assert!(!reference.forwards(EventKind::StateEvt2));
        assert!(!reference.forwards(ComponentEvt2::KIND));
    }

    #[test]
    fn test_rebinding_switches_target() {
        let mut host = Host::default();
        let mut sink = Recorder::new();

        let mut reference = DispatchRef::<Host>::bind::<Left>();
        assert!(reference.is_bound_to::<Left>());
        assert_eq!(reference.target(), "left");

        let previous = reference;
        reference = DispatchRef::bind::<Right>();
        reference.deliver(&mut host, StateEvt2, &mut sink);

        assert!(reference.is_bound_to::<Right>());
        assert!(!reference.is_bound_to::<Left>());
        assert_eq!(host.right.seen, vec![EventKind::StateEvt2]);
        assert_eq!(previous.target(), "left");
    }
}
