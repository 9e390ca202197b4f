#![doc = include_str!("../README.md")]
#![warn(
    unreachable_pub,
    missing_debug_implementations,
    missing_docs,
    clippy::pedantic
)]

pub mod admin;
pub mod api;
pub mod auth;
mod client;
pub mod config;
pub mod errors;
pub mod file;
pub mod filesystem;
pub mod list;
pub mod misc;
pub mod patreon;
pub mod path;
pub mod range;
pub(crate) mod serde;
pub mod subscription;
pub mod user;

pub(crate) type Result<T> = core::result::Result<T, errors::Error>;

pub use client::*;
pub use config::Config;
pub use errors::Error;
