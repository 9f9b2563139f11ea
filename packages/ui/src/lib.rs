//! This crate contains all shared UI for the workspace.

pub mod analytics;

mod auth;
pub use auth::{
    redirect_to_login, session_id_from_fragment, sign_out, use_auth, AuthProvider, AuthState,
    SignInButton, SignOutButton,
};

mod browser;
pub use browser::confirm;

mod footer;
pub use footer::Footer;

mod header;
pub use header::Header;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider};
