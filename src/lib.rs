#![cfg_attr(not(test), no_std)]

pub mod api;
pub mod config;
pub mod constants;
pub mod feed;
pub mod intent;
pub mod secret;
pub mod topic;

pub use config::{Config, Feeds, CONFIG};
pub use feed::Feed;
pub use secret::Secret;
