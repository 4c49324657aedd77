//! Component: a reactive participant with no state of its own.

use super::Participant;
use crate::catalog::Catalog;
use crate::event::{Event, EventSet};
use crate::trace::{TraceEntry, TraceSink};

/// Reacts to the two component events and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Component;

impl Catalog for Component {
    const NAME: &'static str = "component";
    const INCOMING: EventSet = EventSet::COMPONENT_EVT_1.join(EventSet::COMPONENT_EVT_2);
}

impl Participant for Component {
    fn on_event(&mut self, event: &Event, sink: &mut dyn TraceSink) {
        match event {
            Event::ComponentEvt1(_) | Event::ComponentEvt2(_) => {
                sink.record(TraceEntry::handled(Self::NAME, event.kind()));
            }
            _ => {}
        }
    }
}
