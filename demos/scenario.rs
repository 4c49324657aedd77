//! Scenario: Drive a component and a state machine through one dispatcher.
//!
//! Set `DISPATCH_TRACE` to `off` or a level name (`info`, `debug`, ...) to
//! control the trace output.

use tracing_subscriber::EnvFilter;
use typed_dispatch::{
    Component, ComponentEvt1, ComponentEvt2, Dispatcher, StateEvt1, StateEvt2, StateEvt3,
    StateMachine, TraceConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = TraceConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.level.into()))
        .with_target(false)
        .try_init()?;

    let mut component = Component;
    let mut machine = StateMachine::new();
    let mut dispatcher = Dispatcher::with_sink((&mut component, &mut machine), config.sink());

    dispatcher.push(ComponentEvt1);
    dispatcher.push(ComponentEvt2);
    dispatcher.push(StateEvt1);
    dispatcher.push(StateEvt3);
    dispatcher.push(StateEvt1);
    dispatcher.push(StateEvt2);
    dispatcher.push(StateEvt3);

    let dispatched = dispatcher.drain();
    drop(dispatcher);

    println!("Dispatched {dispatched} events");
    println!("Active state: {}", machine.active());
    println!("Transitions:  {}", machine.transitions());

    Ok(())
}
