//! Entry-point API

pub mod builder;

pub use builder::{Jwt, JwtBuilder};
