pub mod breeding;
pub(crate) mod choice;
pub mod feeding;
pub mod health;
pub mod inventory;
pub mod livestock;
pub mod production;
pub mod record;
pub mod species;

pub use record::{FarmRecord, Record, RecordKind};
