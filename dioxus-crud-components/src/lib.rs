//! Reusable presentational components for Dioxus CRUD screens.
//!
//! Rendering shells only: the modal, pagination bar, stat card and
//! confirm dialog carry no business logic and no HTTP concerns. State
//! (open/closed, current page, values) lives in the calling screen.

pub mod modal;
pub mod pagination;
pub mod stat_card;

pub use modal::{ConfirmDialog, Modal};
pub use pagination::PaginationBar;
pub use stat_card::StatCard;
