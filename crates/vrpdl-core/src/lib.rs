pub mod config;
pub mod logging;

pub mod batch;
pub mod error;
pub mod fetch;
pub mod links;
pub mod progress;
pub mod storage;
pub mod target;
