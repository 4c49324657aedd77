//! Catalog: which message types a participant may receive.
//!
//! Every participant type declares its receivable kinds as an [`EventSet`]
//! constant. The default is the empty set, so a type that does not override
//! [`Catalog::INCOMING`] receives nothing.
//!
//! Constructs that accept messages (a participant, a component list, a state
//! machine's sub-state host) expose their accepted kinds through
//! [`Universe`]. Handing such a construct a message outside its universe
//! fails `cargo build` of the calling crate. The check is a constant
//! evaluated when the generic call is instantiated, so `cargo check` alone
//! does not report it:
//!
//! ```compile_fail
//! use typed_dispatch::{Component, Dispatcher, StateEvt1, trace::Silent};
//!
//! let mut component = Component;
//! let mut dispatcher = Dispatcher::with_sink((&mut component,), Silent);
//! dispatcher.push(StateEvt1);
//! ```

use crate::event::{EventKind, EventSet, Message};
use std::marker::PhantomData;

/// Compile-time declaration of the messages a participant type accepts.
pub trait Catalog {
    /// Name used in trace output.
    const NAME: &'static str;

    /// Kinds this type accepts.
    const INCOMING: EventSet = EventSet::empty();
}

/// The set of message kinds a construct accepts as a whole.
pub trait Universe {
    /// Accepted kinds.
    const EVENTS: EventSet;
}

/// The universe declared by participant `P`'s catalog.
pub struct Incoming<P>(PhantomData<fn() -> P>);

impl<P: Catalog> Universe for Incoming<P> {
    const EVENTS: EventSet = P::INCOMING;
}

/// Check whether participant type `P` declares `kind`.
#[inline]
pub const fn can_receive<P: Catalog>(kind: EventKind) -> bool {
    P::INCOMING.has(kind)
}

/// Compile-time membership of message type `M` in a universe.
///
/// Referencing [`Declares::OK`] from a generic function forces the
/// assertion to be evaluated for each instantiation.
pub(crate) trait Declares<M: Message>: Universe {
    const OK: ();
}

impl<U: Universe, M: Message> Declares<M> for U {
    const OK: () = assert!(
        U::EVENTS.has(M::KIND),
        "message type is not part of the declared universe"
    );
}
