use crate::config;
use crate::notify;
use crate::session;
use dioxus::prelude::*;
use shelter_auth::LoginForm;

#[component]
pub fn LoginScreen() -> Element {
    rsx! {
        div { style: "min-height: 100vh; background: #f5f5f5; display: flex; align-items: center; justify-content: center; padding: 16px;",

            div { style: "background: white; border-radius: 16px; box-shadow: 0 4px 24px rgba(0,0,0,0.1); padding: 32px; max-width: 420px; width: 100%;",

                h1 { style: "color: #0066cc; text-align: center; margin: 0 0 8px 0; font-size: 28px; font-weight: 700;",
                    "🐱 Gatil"
                }
                p { style: "text-align: center; color: #777; margin: 0 0 24px 0; font-size: 14px;",
                    "Cat shelter management"
                }

                LoginForm {
                    base_url: config::get().api_base_url.clone(),
                    on_success: move |response| {
                        session::login(response);
                        notify::success("Welcome back!");
                    },
                }
            }
        }
    }
}
