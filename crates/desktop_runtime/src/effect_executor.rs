//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the executor that drains queued effects in dispatch order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Effects dispatched while this batch runs land in a fresh queue.
        let batch = take_queued(runtime);
        run_batch(runtime, batch);
    });
}

fn take_queued(runtime: DesktopRuntimeContext) -> Vec<RuntimeEffect> {
    runtime
        .effects
        .try_update(std::mem::take)
        .unwrap_or_default()
}

fn run_batch(runtime: DesktopRuntimeContext, batch: Vec<RuntimeEffect>) {
    let Some(host) = runtime.host.try_get_value() else {
        return;
    };
    for effect in batch {
        host.run_runtime_effect(runtime, effect);
    }
}
