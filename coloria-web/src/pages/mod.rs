mod generator;
mod layout;
mod library;
mod login;
mod signup;

pub use generator::Generator;
pub use layout::{AppShell, AuthShell, Home};
pub use library::Library;
pub use login::Login;
pub use signup::SignUp;
