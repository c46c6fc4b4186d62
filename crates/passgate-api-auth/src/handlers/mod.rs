//! HTTP request handlers.

mod login;
mod protected;
mod register;

pub use login::login_handler;
pub use protected::{me_handler, protected_handler};
pub use register::register_handler;
