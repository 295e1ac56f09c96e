use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{pages::LeavePage, state::config};

pub const ROUTE_PATHS: &[&str] = &["/", "/leave"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let (_, set_config) = config::use_config();

    create_effect(move |_| {
        spawn_local(async move {
            config::refresh_runtime_config(set_config).await;
        });
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=LeavePage/>
                <Route path="/leave" view=LeavePage/>
            </Routes>
        </Router>
    }
}
