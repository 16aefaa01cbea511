//! UI Components
//!
//! Reusable Leptos components.

mod action_menu;
mod form_card;
mod forms_table;
mod layout;
mod modal;
mod skeleton;
mod status_badge;
mod toaster;

pub use action_menu::ActionMenu;
pub use form_card::FormCards;
pub use forms_table::{FormLinks, FormsTable};
pub use layout::Layout;
pub use modal::{ConfirmColor, ConfirmModal};
pub use skeleton::DashboardSkeleton;
pub use status_badge::StatusBadge;
pub use toaster::Toaster;
