use crate::core::form::{FormAction, FormState, submit_with};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{require_record, update_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::{FarmRecord, Record};
use crate::ui::messages::{info, success};

pub struct EditLogic;

impl EditLogic {
    /// Re-open an existing record in the form, apply the assignments and
    /// save the result under the same id.
    pub fn apply(pool: &mut DbPool, id: &str, assignments: &[String]) -> AppResult<Record> {
        if assignments.is_empty() {
            return Err(AppError::InvalidField(
                "Nothing to do: specify at least one --field key=value".into(),
            ));
        }

        let current = require_record(pool, id)?;
        let actions = assignments
            .iter()
            .map(|a| FormAction::parse_assignment(a))
            .collect::<AppResult<Vec<_>>>()?;

        let form = FormState::from_record(&current);
        let updated = submit_with(&form, actions)?;

        if updated == current {
            info(format!("Record {} is unchanged.", id));
            return Ok(updated);
        }

        update_record(pool, &updated)?;

        audit(
            &pool.conn,
            "edit",
            updated.id(),
            &format!("Updated fields: {}", changed_keys(assignments)),
        );
        success(format!("Record {} updated.", updated.id()));

        Ok(updated)
    }
}

fn changed_keys(assignments: &[String]) -> String {
    assignments
        .iter()
        .filter_map(|a| a.split_once('=').map(|(k, _)| k.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
