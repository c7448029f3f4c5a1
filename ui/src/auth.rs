//! Authentication context and hooks for the UI.

use api::SessionState;
use dioxus::prelude::*;

use crate::context::make_app_context;

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Hard-navigate the browser to `path`. No-op off the web.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "redirect requested off the web, ignoring");
    }
}

/// Provider component that owns the application services and session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(SessionState::default);
    let app = use_context_provider(|| std::rc::Rc::new(make_app_context()));
    use_context_provider(|| auth_state);

    // Resurrect a stored session on mount
    let resume_app = app.clone();
    let _ = use_resource(move || {
        let app = resume_app.clone();
        async move {
            let state = app.session.resume().await;
            auth_state.set(state);
        }
    });

    // React to the transport's global 401 signal: tear everything down and
    // land on the sign-in page, whatever view the user was on.
    let invalidation_app = app.clone();
    use_effect(move || {
        let app = invalidation_app.clone();
        let mut invalidations = app.client.subscribe_invalidations();
        spawn(async move {
            while invalidations.changed().await.is_ok() {
                tracing::warn!("session invalidated, returning to sign-in");
                app.session.invalidate().await;
                app.inventory.clear().await;
                auth_state.set(SessionState {
                    user: None,
                    loading: false,
                });
                redirect_to("/login");
            }
        });
    });

    rsx! {
        {children}
    }
}
