pub mod config;
pub mod logging;

pub mod checksum;
pub mod fetch;
pub mod harvest;
pub mod links;
pub mod records;
pub mod storage;
pub mod url_model;
