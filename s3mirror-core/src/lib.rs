#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]

pub mod age;
pub mod config;
pub mod credentials;
pub mod error;
pub mod location;
pub mod logging;
