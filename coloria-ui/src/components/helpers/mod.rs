mod confirm_dialog;
mod error_display;
mod loading_spinner;
mod notification;

pub use confirm_dialog::ConfirmDialogView;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use notification::NotificationToast;
