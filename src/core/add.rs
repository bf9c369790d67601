use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, next_id};
use crate::errors::AppResult;
use crate::core::form::{FormAction, FormState, submit_with};
use crate::models::record::{FarmRecord, Record, RecordKind};
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Fill a new form from `key=value` assignments, validate it and store
    /// the record. Without an explicit id the next free one is generated.
    pub fn apply(
        pool: &mut DbPool,
        kind: RecordKind,
        id: Option<&str>,
        assignments: &[String],
    ) -> AppResult<Record> {
        let actions = assignments
            .iter()
            .map(|a| FormAction::parse_assignment(a))
            .collect::<AppResult<Vec<_>>>()?;

        let id = match id {
            Some(id) => id.trim().to_string(),
            None => next_id(pool, kind)?,
        };

        let form = FormState::new(kind).with_id(id);
        let record = submit_with(&form, actions)?;

        insert_record(pool, &record)?;

        audit(
            &pool.conn,
            "add",
            record.id(),
            &format!("Added {} record dated {}", kind, record.date_str()),
        );
        success(format!("Added {} record {}.", kind, record.id()));

        Ok(record)
    }
}
