//! `cartkit-demo` — a terminal session over the cart dispatcher.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::DemoConfig;
pub use error::DemoError;
pub use session::{Outcome, Session, render_cart, render_catalog};
