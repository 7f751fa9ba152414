use crate::error::AppError;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Toasts currently on screen
pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

const DISMISS_AFTER_SECS: u64 = 5;

pub fn success(message: impl Into<String>) {
    push(ToastLevel::Success, message.into());
}

/// Shared error sink for every call site: logs the technical error,
/// shows the user-facing message and forces logout on 401/403.
pub fn handle_error(err: &AppError) {
    log::error!("{}", err);
    if err.is_auth_error() {
        crate::session::force_logout();
    }
    push(ToastLevel::Error, err.user_message());
}

fn push(level: ToastLevel, message: String) {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    TOASTS.write().push(Toast { id, level, message });

    // Auto-dismiss
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
        TOASTS.write().retain(|toast| toast.id != id);
    });
}

#[component]
pub fn ToastHost() -> Element {
    rsx! {
        div { style: "position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;",
            for toast in TOASTS() {
                {
                    let (colors, icon) = match toast.level {
                        ToastLevel::Success => ("background: #d4edda; color: #155724;", "✅"),
                        ToastLevel::Error => ("background: #f8d7da; color: #721c24;", "⚠️"),
                    };
                    rsx! {
                        div {
                            key: "{toast.id}",
                            style: format!(
                                "padding: 12px 16px; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,0.2); font-size: 14px; max-width: 360px; {}",
                                colors,
                            ),
                            "{icon} {toast.message}"
                        }
                    }
                }
            }
        }
    }
}
