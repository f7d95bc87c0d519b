mod error;
pub mod models;
mod server;
pub mod services;
pub mod state;

pub use error::WebError;
pub use server::{router, run};
