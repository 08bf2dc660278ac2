//! Typed client for an exchange's betting API over JSON/HTTP.
//!
//! ```ignore
//! let session = Session::from_config(&Config::load("config.toml")?)?;
//! let sports = session.list_event_types(None).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

pub use config::Config;
pub use error::BettingError;
pub use session::Session;
pub use transport::{HttpTransport, Transport, TransportError};
