pub mod catalog;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod import;
pub mod output;
pub mod parser;
pub mod records;
pub mod source;
