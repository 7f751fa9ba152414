use dioxus::prelude::*;

/// Modal shell with an overlay, a titled header and a close button.
///
/// The caller owns the open/closed state; render the component only while
/// the modal should be visible. Clicking the overlay closes the modal,
/// clicks inside the panel do not.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1000; padding: 16px;",
            onclick: move |_| on_close.call(()),

            div {
                style: "background: white; border-radius: 12px; max-width: 560px; width: 100%; max-height: 90vh; overflow-y: auto; box-shadow: 0 8px 32px rgba(0,0,0,0.25);",
                onclick: move |e| e.stop_propagation(),

                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 20px; border-bottom: 1px solid #e0e0e0;",
                    h2 { style: "margin: 0; font-size: 18px; color: #333;", "{title}" }
                    button {
                        style: "border: none; background: none; font-size: 20px; cursor: pointer; color: #666; padding: 4px 8px;",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { style: "padding: 20px;", {children} }
            }
        }
    }
}

/// Confirmation dialog for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { title, on_close: move |_| on_cancel.call(()),
            p { style: "margin: 0 0 20px 0; font-size: 15px; color: #444;", "{message}" }
            div { style: "display: flex; gap: 12px; justify-content: flex-end;",
                button {
                    style: "padding: 10px 18px; border-radius: 8px; border: 1px solid #ddd; background: #f5f5f5; color: #333; cursor: pointer;",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    style: "padding: 10px 18px; border-radius: 8px; border: none; background: #c62828; color: white; cursor: pointer; font-weight: 600;",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
