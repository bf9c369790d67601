//! Derived-field computations. Every function degrades to `None` on
//! missing or unusable input instead of failing.

pub mod display;
pub mod gestation;
pub mod numeric;
pub mod profit;
pub mod rates;
