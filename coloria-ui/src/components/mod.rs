//! Shared UI components

pub mod app_layout;
pub mod auth;
pub mod button;
pub mod generator;
pub mod helpers;
pub mod icons;
pub mod library;
pub mod modal;
pub mod text_input;
pub mod utils;

pub use app_layout::{AppLayoutView, Sidebar};
pub use auth::{LoginView, SignUpForm, SignUpView};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use generator::GeneratorView;
pub use helpers::{ConfirmDialogView, ErrorDisplay, LoadingSpinner, NotificationToast};
pub use library::{ImageCard, ImageViewer, LibraryToolbar, LibraryView, PaginationControls};
pub use modal::Modal;
pub use text_input::{InputKind, TextInput};
pub use utils::format_long_date;
