#[cfg(feature = "server")]
pub(crate) mod auth;

mod session;
pub use session::*;
