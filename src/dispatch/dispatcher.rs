//! Dispatcher: queue plus a fixed list of participants.
//!
//! The dispatcher's universe is the union of its participants' catalogs.
//! Pushing or dispatching a message type outside that union does not
//! compile. Inside the union, each message reaches only the participants
//! whose catalog declares it, in component-list order.

use super::queue::MessageQueue;
use crate::catalog::{Declares, Universe};
use crate::event::{Event, EventSet, Message};
use crate::participant::Participant;
use crate::trace::{LogSink, TraceSink};

/// A fixed, ordered list of borrowed participants.
///
/// Implemented for tuples of `&mut P` with one to four members.
pub trait ComponentList: Universe {
    /// Number of participants in the list.
    const LEN: usize;

    /// Offer `event` to each participant in order.
    ///
    /// Participants that do not declare the event's kind are skipped.
    fn fan_out(&mut self, event: &Event, sink: &mut dyn TraceSink);
}

/// Hand `event` to `participant` if its catalog declares the kind.
#[inline]
fn offer<P: Participant>(participant: &mut P, event: &Event, sink: &mut dyn TraceSink) {
    if P::INCOMING.has(event.kind()) {
        participant.on_event(event, sink);
    }
}

macro_rules! impl_component_list {
    ($len:expr; $($p:ident . $idx:tt),+) => {
        impl<$($p: Participant),+> Universe for ($(&mut $p,)+) {
            const EVENTS: EventSet = EventSet::empty()$(.join($p::INCOMING))+;
        }

        impl<$($p: Participant),+> ComponentList for ($(&mut $p,)+) {
            const LEN: usize = $len;

            fn fan_out(&mut self, event: &Event, sink: &mut dyn TraceSink) {
                $( offer(&mut *self.$idx, event, sink); )+
            }
        }
    };
}

impl_component_list!(1; A.0);
impl_component_list!(2; A.0, B.1);
impl_component_list!(3; A.0, B.1, C.2);
impl_component_list!(4; A.0, B.1, C.2, D.3);

/// Routes queued messages to the participants that declare them.
///
/// # Example
///
/// ```
/// use typed_dispatch::{Component, ComponentEvt1, Dispatcher, StateEvt1, StateMachine};
/// use typed_dispatch::trace::Recorder;
///
/// let mut component = Component;
/// let mut machine = StateMachine::new();
/// let mut dispatcher = Dispatcher::with_sink((&mut component, &mut machine), Recorder::new());
///
/// dispatcher.push(ComponentEvt1);
/// dispatcher.push(StateEvt1);
/// assert_eq!(dispatcher.drain(), 2);
/// assert!(!dispatcher.dispatch_top());
///
/// drop(dispatcher);
/// assert_eq!(machine.active(), "state2");
/// ```
#[derive(Debug)]
pub struct Dispatcher<C, S = LogSink> {
    queue: MessageQueue<Event>,
    components: C,
    sink: S,
}

impl<C: ComponentList> Dispatcher<C> {
    /// Create a dispatcher that logs through `tracing` at INFO level.
    pub fn new(components: C) -> Self {
        Self::with_sink(components, LogSink::default())
    }
}

impl<C: ComponentList, S: TraceSink> Dispatcher<C, S> {
    /// Create a dispatcher with an explicit trace sink.
    pub fn with_sink(components: C, sink: S) -> Self {
        Self {
            queue: MessageQueue::new(),
            components,
            sink,
        }
    }

    /// Kinds this dispatcher accepts.
    pub const fn universe(&self) -> EventSet {
        C::EVENTS
    }

    /// Queue a message for later dispatch.
    pub fn push<M: Message>(&mut self, msg: M) {
        let () = <C as Declares<M>>::OK;
        self.queue.push(msg.into());
        tracing::trace!(event = %M::KIND, queued = self.queue.len(), "push");
    }

    /// Deliver a message immediately, bypassing the queue.
    ///
    /// ```
    /// use typed_dispatch::{Component, ComponentEvt2, Dispatcher, trace::Silent};
    ///
    /// let mut component = Component;
    /// let mut dispatcher = Dispatcher::with_sink((&mut component,), Silent);
    /// dispatcher.dispatch(ComponentEvt2);
    /// ```
    ///
    /// A message no bound participant declares fails `cargo build`:
    ///
    /// ```compile_fail
    /// use typed_dispatch::{Component, Dispatcher, StateEvt2, trace::Silent};
    ///
    /// let mut component = Component;
    /// let mut dispatcher = Dispatcher::with_sink((&mut component,), Silent);
    /// dispatcher.dispatch(StateEvt2);
    /// ```
    pub fn dispatch<M: Message>(&mut self, msg: M) {
        let () = <C as Declares<M>>::OK;
        self.components.fan_out(&msg.into(), &mut self.sink);
    }

    /// Dispatch the oldest queued message.
    ///
    /// Returns `false` without doing anything if the queue is empty.
    pub fn dispatch_top(&mut self) -> bool {
        let Some(event) = self.queue.pop_front() else {
            return false;
        };
        tracing::trace!(event = %event.kind(), remaining = self.queue.len(), "dispatch_top");
        self.components.fan_out(&event, &mut self.sink);
        true
    }

    /// Dispatch until the queue is empty.
    ///
    /// Returns the number of messages dispatched.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.dispatch_top() {
            count += 1;
        }
        count
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no messages are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<C, S> Dispatcher<C, S> {
    /// The bound participants.
    pub const fn components(&self) -> &C {
        &self.components
    }

    /// The trace sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the dispatcher, returning its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
