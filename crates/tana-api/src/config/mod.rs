//! Config module

mod constants;
mod env;

pub use constants::{BIND_HOST, DEFAULT_PORT};
pub use env::Config;
