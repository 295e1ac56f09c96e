use crate::components::common::{Button, ButtonVariant};
use crate::state::config::use_config;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (config, _) = use_config();
    let title = move || config.get().title();

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">{title}</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-4">
                            <a
                                href="/leave"
                                aria-current="page"
                                class="text-fg px-3 py-2 rounded-md text-sm font-semibold bg-action-ghost-bg-hover"
                            >
                                "Leaves"
                            </a>
                        </nav>
                        <Button variant={ButtonVariant::Primary}>"Apply for Leave"</Button>
                        <span
                            data-testid="user-avatar"
                            class="flex h-11 w-11 items-center justify-center rounded-full bg-amber-800 text-sm font-bold text-white"
                        >
                            "JD"
                        </span>
                    </div>
                </div>
            </div>
        </header>
    }
}

pub const FOOTER_TEXT: &str =
    "\u{a9} 2023 ZenX Connect - AI Powered Enterprise Suite. All rights reserved.";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-6">
            <p class="text-center text-xs text-fg-muted">{FOOTER_TEXT}</p>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}
