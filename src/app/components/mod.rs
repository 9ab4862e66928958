//! Shared UI components for the portfolio page.

pub mod layout;
pub mod modal;
pub mod nav;
pub mod theme;
pub mod toast;

pub use layout::Layout;
pub use modal::Modal;
pub use nav::Nav;
pub use theme::ThemeToggle;
pub use toast::Toast;
