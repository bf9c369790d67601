use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::query::{FilterSet, RecordQuery, SortKey, SortOrder, SortSpec};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        kind,
        search,
        filters,
        sort,
        asc,
        desc,
        period,
    } = cmd
    {
        let query = RecordQuery::new()
            .with_search(search.clone().unwrap_or_default())
            .with_filters(FilterSet::parse_pairs(filters.as_slice())?)
            .with_sort(resolve_sort(cfg, *sort, *asc, *desc)?);

        let pool = DbPool::new(&cfg.database)?;
        ListLogic::print(&pool, cfg, *kind, &query, period.as_deref())?;
    }
    Ok(())
}

/// Command-line flags win over the configured default.
fn resolve_sort(cfg: &Config, key: Option<SortKey>, asc: bool, desc: bool) -> AppResult<SortSpec> {
    let key = match key {
        Some(k) => k,
        None => SortKey::parse(&cfg.default_sort).ok_or_else(|| {
            AppError::Config(format!("unknown default_sort '{}'", cfg.default_sort))
        })?,
    };

    let order = if asc {
        SortOrder::Asc
    } else if desc || cfg.default_sort_desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };

    Ok(SortSpec::new(key, order))
}
