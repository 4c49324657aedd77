//! Event kinds and the bitflag sets used by catalogs.
//!
//! Every message type has exactly one [`EventKind`], and every kind owns one
//! bit of an [`EventSet`]. All membership queries are `const fn` so that
//! catalogs can be checked while the crate is being compiled.

use bitflags::bitflags;
use std::fmt;

/// Identifies one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// [`ComponentEvt1`](super::ComponentEvt1)
    ComponentEvt1,
    /// [`ComponentEvt2`](super::ComponentEvt2)
    ComponentEvt2,
    /// [`StateEvt1`](super::StateEvt1)
    StateEvt1,
    /// [`StateEvt2`](super::StateEvt2)
    StateEvt2,
    /// [`StateEvt3`](super::StateEvt3)
    StateEvt3,
}

impl EventKind {
    /// Number of distinct kinds.
    pub const COUNT: usize = 5;

    /// All kinds in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ComponentEvt1,
        Self::ComponentEvt2,
        Self::StateEvt1,
        Self::StateEvt2,
        Self::StateEvt3,
    ];

    /// Stable position of this kind, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-bit set containing only this kind.
    #[inline]
    pub const fn set(self) -> EventSet {
        match self {
            Self::ComponentEvt1 => EventSet::COMPONENT_EVT_1,
            Self::ComponentEvt2 => EventSet::COMPONENT_EVT_2,
            Self::StateEvt1 => EventSet::STATE_EVT_1,
            Self::StateEvt2 => EventSet::STATE_EVT_2,
            Self::StateEvt3 => EventSet::STATE_EVT_3,
        }
    }

    /// Short name used in trace output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ComponentEvt1 => "component_evt_1",
            Self::ComponentEvt2 => "component_evt_2",
            Self::StateEvt1 => "state_evt_1",
            Self::StateEvt2 => "state_evt_2",
            Self::StateEvt3 => "state_evt_3",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of event kinds.
    ///
    /// Catalogs and dispatcher universes are expressed as `EventSet`
    /// constants and combined with bitwise OR.
    ///
    /// # Example
    /// ```
    /// use typed_dispatch::{EventKind, EventSet};
    /// let set = EventSet::STATE_EVT_2 | EventSet::STATE_EVT_3;
    /// assert!(set.has(EventKind::StateEvt3));
    /// assert!(!set.has(EventKind::StateEvt1));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct EventSet: u8 {
        /// First component event
        const COMPONENT_EVT_1 = 0b0000_0001;
        /// Second component event
        const COMPONENT_EVT_2 = 0b0000_0010;
        /// First state-machine event
        const STATE_EVT_1 = 0b0000_0100;
        /// Second state-machine event
        const STATE_EVT_2 = 0b0000_1000;
        /// Third state-machine event
        const STATE_EVT_3 = 0b0001_0000;
    }
}

impl EventSet {
    /// Check whether `kind` belongs to this set.
    #[inline]
    pub const fn has(self, kind: EventKind) -> bool {
        self.bits() & kind.set().bits() != 0
    }

    /// Union of two sets, usable in constant expressions.
    #[inline]
    pub const fn join(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits() | other.bits())
    }

    /// Iterate over the kinds in this set, in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl From<EventKind> for EventSet {
    #[inline]
    fn from(kind: EventKind) -> Self {
        kind.set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_each_kind_owns_one_bit() {
        let mut seen = EventSet::empty();
        for kind in EventKind::ALL {
            assert_eq!(kind.set().bits().count_ones(), 1);
            assert!(!seen.intersects(kind.set()));
            seen |= kind.set();
        }
        assert_eq!(seen, EventSet::all());
    }

    #[test]
    fn test_join_and_has() {
        const JOINED: EventSet = EventSet::STATE_EVT_1.join(EventSet::COMPONENT_EVT_2);

        assert!(JOINED.has(EventKind::StateEvt1));
        assert!(JOINED.has(EventKind::ComponentEvt2));
        assert!(!JOINED.has(EventKind::StateEvt2));
        assert!(!EventSet::empty().has(EventKind::ComponentEvt1));
    }

    #[test]
    fn test_kinds_iterates_in_order() {
        let set = EventSet::STATE_EVT_3 | EventSet::COMPONENT_EVT_1;
        let kinds: Vec<_> = set.kinds().collect();
        assert_eq!(kinds, vec![EventKind::ComponentEvt1, EventKind::StateEvt3]);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(EventKind::StateEvt2.to_string(), "state_evt_2");
    }
}
