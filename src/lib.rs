//! Response header container that keeps framework and application code from
//! overwriting security-sensitive headers or writing `Set-Cookie` directly.

pub mod config;
pub(crate) mod errors;
pub mod header;

pub use errors::HeaderError;
pub use header::{Cookie, Header, SameSite};
