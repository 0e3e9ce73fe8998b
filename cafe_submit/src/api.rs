mod client;
mod models;

#[cfg(test)]
pub mod fake;

pub use client::{HttpTransport, Response, Transport, TransportError};
pub use models::{Cafe, Rejection};
