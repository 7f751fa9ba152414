use crate::models::{Credentials, LoginResponse};
use crate::service::AuthService;
use dioxus::prelude::*;

/// Props for the LoginForm component
#[derive(Props, Clone, PartialEq)]
pub struct LoginFormProps {
    /// API base URL to authenticate against
    pub base_url: String,
    /// Callback when authentication succeeds
    pub on_success: EventHandler<LoginResponse>,
    /// Callback when authentication fails
    #[props(default)]
    pub on_error: Option<EventHandler<String>>,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<LoginLabels>,
}

/// Custom labels for the login UI
#[derive(Clone, PartialEq, Default)]
pub struct LoginLabels {
    pub email_label: String,
    pub email_placeholder: String,
    pub password_label: String,
    pub submit_button: String,
    pub submitting: String,
    pub email_required: String,
    pub email_invalid: String,
    pub password_required: String,
}

/// Bearer-token login form
///
/// Renders email/password fields with client-side validation, posts the
/// credentials through [`AuthService`] and reports the issued token via
/// `on_success`. Persisting the session is left to the application.
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);
    let mut server_error = use_signal(|| None::<String>);

    let labels = props.labels.clone().unwrap_or_else(|| LoginLabels {
        email_label: "Email".to_string(),
        email_placeholder: "you@shelter.org".to_string(),
        password_label: "Password".to_string(),
        submit_button: "🔐 Sign in".to_string(),
        submitting: "🔄 Signing in...".to_string(),
        email_required: "Email is required".to_string(),
        email_invalid: "Enter a valid email address".to_string(),
        password_required: "Password is required".to_string(),
    });

    let email_error = {
        let value = email();
        let value = value.trim();
        if value.is_empty() {
            Some(labels.email_required.clone())
        } else if !value.contains('@') || !value.contains('.') {
            Some(labels.email_invalid.clone())
        } else {
            None
        }
    };
    let password_error = if password().is_empty() {
        Some(labels.password_required.clone())
    } else {
        None
    };
    let form_valid = email_error.is_none() && password_error.is_none();

    let submit = {
        let base_url = props.base_url.clone();
        let on_success = props.on_success;
        let on_error = props.on_error;

        move |_| {
            // A failed attempt reveals every field error
            submitted.set(true);
            server_error.set(None);
            if !form_valid || submitting() {
                return;
            }

            submitting.set(true);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            let base_url = base_url.clone();

            spawn(async move {
                let service = AuthService::new(base_url);
                match service.login(&credentials).await {
                    Ok(response) => {
                        log::info!("Login successful for {}", response.user.email);
                        submitting.set(false);
                        on_success.call(response);
                    }
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        submitting.set(false);
                        server_error.set(Some(e.to_string()));
                        if let Some(handler) = on_error {
                            handler.call(e.to_string());
                        }
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "shelter-login",

            if let Some(error) = server_error() {
                div { style: "padding: 12px; background: #f8d7da; border-radius: 8px; color: #721c24; margin-bottom: 16px; font-size: 14px;",
                    "⚠️ {error}"
                }
            }

            div { style: "margin-bottom: 16px;",
                label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                    "{labels.email_label}"
                }
                input {
                    r#type: "email",
                    class: "input",
                    placeholder: "{labels.email_placeholder}",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                    autofocus: true,
                }
                if submitted() {
                    if let Some(error) = email_error.clone() {
                        div { style: "color: #c33; font-size: 13px; margin-top: 4px;", "{error}" }
                    }
                }
            }

            div { style: "margin-bottom: 20px;",
                label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                    "{labels.password_label}"
                }
                input {
                    r#type: "password",
                    class: "input",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if submitted() {
                    if let Some(error) = password_error.clone() {
                        div { style: "color: #c33; font-size: 13px; margin-top: 4px;", "{error}" }
                    }
                }
            }

            button {
                class: "btn-primary",
                style: "width: 100%; padding: 14px; font-size: 16px; font-weight: 600;",
                disabled: submitting(),
                onclick: submit,
                if submitting() {
                    "{labels.submitting}"
                } else {
                    "{labels.submit_button}"
                }
            }
        }
    }
}
