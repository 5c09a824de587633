//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the session-scoped window registry, the runtime effect queue, hosted-content
//! sessions and the viewport signal. UI composition stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::ApplicationId;
use leptos::*;

use crate::{
    catalog::{AppCatalog, WindowManagerConfig},
    content::HostedContentState,
    effect_executor,
    host::DesktopHostContext,
    model::Viewport,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    registry::WindowRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading registry state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser helpers for viewport queries and effect execution.
    pub host: StoredValue<DesktopHostContext>,
    /// Long-lived owner for hosted content that must outlive a frame's rendered subtree.
    pub owner: Owner,
    /// Reactive window registry.
    pub registry: RwSignal<WindowRegistry>,
    /// Browser viewport, refreshed on window resize.
    pub viewport: RwSignal<Viewport>,
    /// Queue of effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Mounted content per window.
    pub content: StoredValue<HostedContentState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = DesktopAction>) {
        for action in actions {
            self.dispatch.call(action);
        }
    }

    pub fn open_app(&self, app_id: ApplicationId) {
        self.dispatch_action(DesktopAction::open(app_id));
    }

    pub fn config(&self) -> WindowManagerConfig {
        self.registry.with_untracked(WindowRegistry::config)
    }
}

fn load_catalog() -> AppCatalog {
    match AppCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("desktop catalog rejected, starting with no apps: {err}");
            AppCatalog::default()
        }
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().desktop_viewport();
        if runtime.viewport.get_untracked() != viewport {
            runtime.viewport.set(viewport);
        }
    });
    on_cleanup(move || resize_listener.remove());

    on_cleanup(move || end_session(runtime));
}

/// Closes every window and unmounts its content. Bound to the provider's lifetime.
fn end_session(runtime: DesktopRuntimeContext) {
    let released = runtime
        .registry
        .try_update(|registry| reduce_desktop(registry, DesktopAction::EndSession))
        .unwrap_or_default();
    runtime.content.try_update_value(|content| {
        for effect in &released {
            content.apply(effect);
        }
        let leftover = content.release_all();
        if leftover > 0 {
            logging::warn!("{leftover} hosted content sessions outlived their windows");
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components for one desktop session.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = Rc::new(load_catalog());
    let config = catalog.config();
    let host = DesktopHostContext::new(config.fallback_viewport);
    let owner = Owner::current().expect("DesktopProvider owner");
    let registry = create_rw_signal(WindowRegistry::new(catalog));
    let viewport = create_rw_signal(host.desktop_viewport());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let content = store_value(HostedContentState::new(config.content_chrome_height));
    let host = store_value(host);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut next = registry.get_untracked();
        let new_effects = reduce_desktop(&mut next, action);
        if registry.with_untracked(|current| *current != next) {
            registry.set(next);
        }
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        owner,
        registry,
        viewport,
        effects,
        content,
        dispatch,
    };

    provide_context(runtime);
    install_runtime_orchestration(runtime);

    logging::log!(
        "desktop session started with {} apps",
        registry.with_untracked(|registry| registry.catalog().apps().len())
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
