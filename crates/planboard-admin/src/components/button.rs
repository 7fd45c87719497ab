//! Button component

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            Self::Secondary => "bg-gray-700 hover:bg-gray-600 text-white",
            Self::Danger => "bg-red-600 hover:bg-red-700 text-white",
            Self::Ghost => "bg-transparent hover:bg-gray-700 text-gray-300",
        }
    }
}

/// Compact buttons sit inside table cells
fn size_class(compact: bool) -> &'static str {
    if compact {
        "px-2 py-1 rounded text-xs"
    } else {
        "px-3 py-2 rounded-lg text-sm"
    }
}

fn button_class(variant: ButtonVariant, compact: bool, extra: &str) -> String {
    format!(
        "{} font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed inline-flex items-center justify-center {} {}",
        size_class(compact),
        variant.class(),
        extra
    )
    .trim_end()
    .to_string()
}

#[component]
pub fn Button(
    #[prop(into, optional)] variant: Option<ButtonVariant>,
    #[prop(into, optional)] disabled: Option<Signal<bool>>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] compact: bool,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant.unwrap_or_default(), compact, class.unwrap_or(""));

    view! {
        <button
            class=class
            title=title
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                // Table rows may listen for clicks too
                ev.stop_propagation();
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_button_class() {
        let class = button_class(ButtonVariant::Primary, true, "");
        assert!(class.starts_with("px-2 py-1 rounded text-xs"));
        assert!(class.ends_with("bg-blue-600 hover:bg-blue-700 text-white"));
    }

    #[test]
    fn test_default_variant_and_extra_class() {
        let class = button_class(ButtonVariant::default(), false, "w-full");
        assert!(class.contains("px-3 py-2"));
        assert!(class.ends_with("w-full"));
    }
}
