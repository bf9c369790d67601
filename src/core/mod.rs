pub mod add;
pub mod backup;
pub mod calc;
pub mod calculator;
pub mod del;
pub mod detail;
pub mod edit;
pub mod fields;
pub mod form;
pub mod list;
pub mod log;
pub mod query;
pub mod show;
pub mod store;
