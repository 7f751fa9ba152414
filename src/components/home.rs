use crate::api;
use crate::models::{AdoptionState, AdoptionStatus, SterilizationStatus};
use crate::notify;
use crate::services::{adoption_service, cat_service, sterilization_service};
use crate::session;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_crud_components::StatCard;

/// Formats a stat that may still be loading
fn stat_value(value: Option<usize>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "...".to_string(),
    }
}

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut cats_total = use_signal(|| None::<usize>);
    let mut cats_available = use_signal(|| None::<usize>);
    let mut adoptions_pending = use_signal(|| None::<usize>);
    let mut adoptions_completed = use_signal(|| None::<usize>);
    let mut sterilizations_scheduled = use_signal(|| None::<usize>);

    // Each widget loads independently; a failed one keeps its
    // placeholder instead of blocking the rest.
    use_effect(move || {
        spawn(async move {
            match load_count(|c| async move { cat_service::count_cats(&c, None).await }).await {
                Some(n) => cats_total.set(Some(n)),
                None => {}
            }
        });
        spawn(async move {
            match load_count(|c| async move {
                cat_service::count_cats(&c, Some(AdoptionState::NotAdopted)).await
            })
            .await
            {
                Some(n) => cats_available.set(Some(n)),
                None => {}
            }
        });
        spawn(async move {
            match load_count(|c| async move {
                adoption_service::count_adoptions(&c, Some(AdoptionStatus::Pending)).await
            })
            .await
            {
                Some(n) => adoptions_pending.set(Some(n)),
                None => {}
            }
        });
        spawn(async move {
            match load_count(|c| async move {
                adoption_service::count_adoptions(&c, Some(AdoptionStatus::Completed)).await
            })
            .await
            {
                Some(n) => adoptions_completed.set(Some(n)),
                None => {}
            }
        });
        spawn(async move {
            match load_count(|c| async move {
                sterilization_service::count_sterilizations(
                    &c,
                    Some(SterilizationStatus::Scheduled),
                )
                .await
            })
            .await
            {
                Some(n) => sterilizations_scheduled.set(Some(n)),
                None => {}
            }
        });
    });

    let user_name = session::current_user()
        .map(|user| user.name)
        .unwrap_or_default();

    rsx! {
        div { style: "padding: 16px; max-width: 800px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            h1 { style: "color: #0066cc; text-align: center; margin-bottom: 4px; margin-top: 32px; font-size: 28px; font-weight: 700;",
                "🐱 Gatil"
            }
            p { style: "text-align: center; color: #777; margin: 0 0 24px 0; font-size: 14px;",
                "Hello, {user_name}"
            }

            // Stat cards
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px; margin-bottom: 24px;",
                StatCard {
                    icon: "🐱",
                    label: "Cats in shelter",
                    value: stat_value(cats_total()),
                }
                StatCard {
                    icon: "🏠",
                    label: "Available for adoption",
                    value: stat_value(cats_available()),
                    accent: "#2e7d32",
                }
                StatCard {
                    icon: "⏳",
                    label: "Adoptions pending",
                    value: stat_value(adoptions_pending()),
                    accent: "#ff8c00",
                }
                StatCard {
                    icon: "💚",
                    label: "Adoptions completed",
                    value: stat_value(adoptions_completed()),
                    accent: "#2e7d32",
                }
                StatCard {
                    icon: "🏥",
                    label: "Sterilizations scheduled",
                    value: stat_value(sterilizations_scheduled()),
                    accent: "#7b1fa2",
                }
            }

            // Quick Actions
            div { class: "card", style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 16px 0; font-size: 18px; color: #333;", "Quick actions" }
                div { style: "display: flex; flex-direction: column; gap: 12px;",
                    button {
                        class: "btn-primary",
                        style: "padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::Cats),
                        "🐱 Manage cats"
                    }
                    button {
                        class: "btn-success",
                        style: "padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::Adoptions),
                        "📋 Manage adoptions"
                    }
                    button {
                        style: "padding: 16px; font-size: 16px; background: #7b1fa2; color: white; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::Sterilizations),
                        "🏥 Sterilization schedule"
                    }
                }
            }

            // Sign out
            div { class: "card", style: "margin-bottom: 16px;",
                button {
                    class: "btn-secondary",
                    style: "width: 100%; padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                    onclick: move |_| {
                        crate::session::logout();
                        notify::success("Signed out");
                    },
                    "🚪 Sign out"
                }
            }

            // Info Card
            div { style: "background: #f8f9fa; padding: 16px; margin: 16px 0; border-radius: 8px; border: 1px solid #e0e0e0;",
                h3 { style: "margin: 0 0 12px 0; font-size: 14px; color: #666; font-weight: 600;",
                    "ℹ️ System info"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "API: {crate::config::get().api_base_url}"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "OS: {std::env::consts::OS}"
                }
            }
        }
    }
}

/// Runs one widget's count request; stat failures keep the placeholder
/// and only auth errors escalate to the shared handler.
async fn load_count<F, Fut>(count: F) -> Option<usize>
where
    F: FnOnce(std::sync::Arc<api::ApiClient>) -> Fut,
    Fut: std::future::Future<Output = Result<usize, crate::error::AppError>>,
{
    let client = match api::connect() {
        Ok(client) => std::sync::Arc::new(client),
        Err(e) => {
            log::warn!("Stat load failed: {}", e);
            return None;
        }
    };
    match count(client).await {
        Ok(n) => Some(n),
        Err(e) => {
            if e.is_auth_error() {
                notify::handle_error(&e);
            } else {
                log::warn!("Stat load failed: {}", e);
            }
            None
        }
    }
}
