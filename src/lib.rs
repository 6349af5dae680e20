pub mod adapters;
pub mod board;
pub mod config;
pub mod error;
pub mod notifier;
pub mod ports;
pub mod render;
#[cfg(not(target_arch = "wasm32"))]
pub mod session;
pub mod types;

#[cfg(feature = "web")]
pub mod web;

pub use board::{Action, Board};
pub use config::BoardConfig;
pub use error::ApiError;
