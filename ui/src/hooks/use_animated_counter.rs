use crate::host;
use crate::state::counter::{AnimatedCounter, COUNT_DURATION_MS};
use dioxus::prelude::*;
use std::rc::Rc;

/// Drives a displayed value from 0 to `target`, restarting from zero
/// whenever `target` changes. The frame loop is cancelled on unmount.
pub fn use_animated_counter(target: u64) -> Signal<u64> {
    let value = use_signal(|| 0u64);

    let counter = use_hook(|| {
        Rc::new(AnimatedCounter::new(
            host::default_host(),
            Box::new(move |v| {
                let mut value = value;
                value.set(v);
            }),
        ))
    });

    use_effect({
        let counter = Rc::clone(&counter);
        use_reactive!(|target| {
            counter.start(target, COUNT_DURATION_MS);
        })
    });

    use_drop({
        let counter = Rc::clone(&counter);
        move || counter.cancel()
    });

    value
}
