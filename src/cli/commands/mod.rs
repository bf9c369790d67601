pub mod add;
pub mod backup;
pub mod calc;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod fields;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
