use crate::components::common::{Button, ButtonVariant};
use leptos::*;

#[component]
pub fn AiInsightBanner(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 p-6 rounded-2xl bg-gradient-to-br from-orange-500 to-orange-400 text-white">
            <div class="flex items-center gap-2">
                <i class="fas fa-wand-magic-sparkles text-lg"></i>
                <p class="font-display font-bold">{"AI Insight"}</p>
            </div>
            <p class="text-sm leading-relaxed opacity-95" data-testid="ai-insight">{text}</p>
            <Button variant={ButtonVariant::Secondary} class="w-full">{"Schedule Sync"}</Button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::leave::repository::AI_INSIGHT_TEXT;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_fixed_insight_and_sync_button() {
        let html = render_to_string(|| view! { <AiInsightBanner text={AI_INSIGHT_TEXT} /> });
        assert!(html.contains("Based on your team"));
        assert!(html.contains("October 24th is the best day for your team outing"));
        assert!(html.contains("No one has leaves planned yet!"));
        assert!(html.contains("Schedule Sync"));
        assert!(html.contains("type=\"button\""));
    }
}
