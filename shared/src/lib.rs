// Data models shared between the indicator engine and any presentation layer.

pub mod models;
pub mod utils;
