//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod expense_modal;
pub mod layout;
pub mod loading;
pub mod sidebar;
pub mod toast;

pub use expense_modal::AddExpenseModal;
pub use layout::Layout;
pub use loading::{ListSkeleton, Loading};
pub use sidebar::Sidebar;
pub use toast::Toast;
