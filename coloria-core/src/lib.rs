pub mod archive;
pub mod auth;
pub mod bulk;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod filename;
pub mod gateway;
pub mod generation;
pub mod http;
pub mod models;
pub mod supabase;
pub mod upload;

pub use controller::LibraryController;
pub use error::LibraryError;
pub use gateway::{GatewayError, ImageGateway};
pub use models::{ImageDownloadInfo, NewImageRecord, SavedImageRecord};
