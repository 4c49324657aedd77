//! Concrete message types and the closed [`Event`] sum type.

use super::set::EventKind;
use std::fmt;

/// A concrete message type that can travel through a dispatcher.
///
/// Each message type knows its [`EventKind`] at compile time and converts
/// into the erased [`Event`] container.
pub trait Message: Clone + fmt::Debug + Into<Event> + 'static {
    /// Kind of this message type.
    const KIND: EventKind;

    /// Recover this concrete type from an erased event.
    ///
    /// Returns `None` when the event holds a different message type.
    fn recover(event: &Event) -> Option<&Self>;
}

/// First event handled by the reactive component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentEvt1;

/// Second event handled by the reactive component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentEvt2;

/// Moves the state machine to state 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateEvt1;

/// Moves the state machine to state 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateEvt2;

/// Moves the state machine back to state 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateEvt3;

/// One erased message.
///
/// This is the element type of the dispatcher queue. Exactly one variant
/// exists per message type, so recovering the concrete type is a single
/// `match`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// See [`ComponentEvt1`].
    ComponentEvt1(ComponentEvt1),
    /// See [`ComponentEvt2`].
    ComponentEvt2(ComponentEvt2),
    /// See [`StateEvt1`].
    StateEvt1(StateEvt1),
    /// See [`StateEvt2`].
    StateEvt2(StateEvt2),
    /// See [`StateEvt3`].
    StateEvt3(StateEvt3),
}

impl Event {
    /// Kind of the message held by this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ComponentEvt1(_) => EventKind::ComponentEvt1,
            Self::ComponentEvt2(_) => EventKind::ComponentEvt2,
            Self::StateEvt1(_) => EventKind::StateEvt1,
            Self::StateEvt2(_) => EventKind::StateEvt2,
            Self::StateEvt3(_) => EventKind::StateEvt3,
        }
    }
}

macro_rules! impl_message {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Event {
                #[inline]
                fn from(msg: $ty) -> Self {
                    Self::$ty(msg)
                }
            }

            impl Message for $ty {
                const KIND: EventKind = EventKind::$ty;

                #[inline]
                fn recover(event: &Event) -> Option<&Self> {
                    match event {
                        Event::$ty(msg) => Some(msg),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_message!(ComponentEvt1, ComponentEvt2, StateEvt1, StateEvt2, StateEvt3);
