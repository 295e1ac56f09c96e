use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-elevated hover:bg-action-ghost-bg-hover text-fg border border-border shadow-sm",
            ButtonVariant::Ghost => "bg-transparent text-action-primary-bg hover:underline",
        }
    }
}

/// Presentational button. Always `type="button"` and carries no handler.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!(
                "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 {} {}",
                variant.classes(),
                class
            )
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variant_includes_primary_class() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("bg-action-primary-bg"));
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert!(ButtonVariant::Secondary.classes().contains("border-border"));
        assert!(ButtonVariant::Ghost.classes().contains("bg-transparent"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_as_plain_button_with_extra_classes() {
        let html = render_to_string(|| {
            view! { <Button variant={ButtonVariant::Secondary} class="w-full">{"Sync"}</Button> }
        });
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("w-full"));
        assert!(html.contains("Sync"));
        assert!(!html.contains("disabled"));
    }
}
