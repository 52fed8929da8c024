pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod feature_flags;
pub mod fetch;
pub mod models;
pub mod readiness;
pub mod role;
pub mod sources;

pub use config::*;
pub use dashboard::*;
pub use display::*;
pub use error::*;
pub use feature_flags::*;
pub use fetch::*;
pub use models::*;
pub use readiness::*;
pub use role::*;
pub use sources::*;
