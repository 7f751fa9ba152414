//! # Shelter Auth
//!
//! A reusable bearer-token authentication library for REST backends.
//!
//! This crate provides:
//! - Credential login against a `/auth/login` endpoint
//! - Session persistence under two fixed storage keys
//! - A Dioxus login form component with client-side validation
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on authentication. It does **not**:
//! - Attach the token to API requests (handled by the application)
//! - Decide when a session is forcibly ended (handled by the application)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use shelter_auth::{AuthService, Credentials, LoginForm, SessionStorage};
//!
//! // Programmatic usage
//! let service = AuthService::new("https://api.example.org".to_string());
//! let response = service.login(&credentials).await?;
//! SessionStorage::new("./data").save(&response.token, &response.user)?;
//!
//! // UI component usage
//! LoginForm {
//!     base_url: "https://api.example.org".to_string(),
//!     on_success: move |response| {
//!         // Persist the session and flip the app state
//!     },
//! }
//! ```

pub mod component;
pub mod models;
pub mod service;
pub mod storage;

pub use component::{LoginForm, LoginFormProps, LoginLabels};
pub use models::{Credentials, LoginResponse, SessionState, UserProfile};
pub use service::{AuthError, AuthService};
pub use storage::{SessionStorage, PROFILE_KEY, TOKEN_KEY};
