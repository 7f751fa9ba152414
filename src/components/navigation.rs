use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #f0f0f0; border-top: 1px solid #ddd;";

    let button_style = |active: bool| {
        if active {
            "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #0066cc; color: #ffffff;"
        } else {
            "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #ffffff; color: #333;"
        }
    };

    rsx! {
        div { style: "{nav_style}",

            button {
                style: button_style(matches!(current_screen, Screen::Home)),
                onclick: move |_| on_navigate.call(Screen::Home),
                "🏠 Home"
            }

            button {
                style: button_style(matches!(
                    current_screen,
                    Screen::Cats | Screen::CatDetail(_)
                )),
                onclick: move |_| on_navigate.call(Screen::Cats),
                "🐱 Cats"
            }

            button {
                style: button_style(matches!(current_screen, Screen::Adopters)),
                onclick: move |_| on_navigate.call(Screen::Adopters),
                "👤 Adopters"
            }

            button {
                style: button_style(matches!(current_screen, Screen::Adoptions)),
                onclick: move |_| on_navigate.call(Screen::Adoptions),
                "📋 Adoptions"
            }

            button {
                style: button_style(matches!(current_screen, Screen::Sterilizations)),
                onclick: move |_| on_navigate.call(Screen::Sterilizations),
                "🏥 Sterilizations"
            }
        }
    }
}
