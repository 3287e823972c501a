//! Request guards run at the start of handlers.
//!
//! - `auth` resolves the calling user from the token cookies
//! - `cookie` builds and clears those cookies

pub mod auth;
pub mod cookie;

#[cfg(test)]
mod test;
