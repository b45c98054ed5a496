pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod storage;
pub mod utils;
