use dioxus::prelude::*;

/// Dashboard stat card: an icon, a big value and a label.
///
/// `value` is pre-formatted by the caller; while a widget is still
/// loading, pass a placeholder such as "...".
#[component]
pub fn StatCard(
    icon: String,
    label: String,
    value: String,
    #[props(default = "#0066cc".to_string())] accent: String,
) -> Element {
    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); display: flex; align-items: center; gap: 14px;",
            div { style: "font-size: 32px;", "{icon}" }
            div {
                div { style: format!("font-size: 26px; font-weight: 700; color: {};", accent),
                    "{value}"
                }
                div { style: "font-size: 13px; color: #777;", "{label}" }
            }
        }
    }
}
