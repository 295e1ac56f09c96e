use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeaveFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            {subtitle.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}
