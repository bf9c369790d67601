use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_record, require_record};
use crate::errors::AppResult;
use crate::models::record::{FarmRecord, Record};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete exactly one record and return it.
    pub fn apply(pool: &mut DbPool, id: &str) -> AppResult<Record> {
        let record = require_record(pool, id)?;
        delete_record(pool, record.id())?;

        audit(
            &pool.conn,
            "del",
            record.id(),
            &format!("Deleted {} record dated {}", record.kind(), record.date_str()),
        );

        Ok(record)
    }
}
