//! Search, categorical filters and sorting over an in-memory record list.
//!
//! Filters are ANDed across dimensions and ORed within one dimension; an
//! empty selection does not filter. Sorting happens after filtering and
//! is stable. The source collection is never touched.

use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::choice::normalize;
use crate::models::record::{FarmRecord, RecordKind};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Date,
    Id,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(SortKey::Date),
            "id" => Some(SortKey::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    /// Newest first.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            order: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Same key flips the direction, a different key starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.order.flipped())
        } else {
            Self::new(key, SortOrder::Asc)
        }
    }

    fn compare<R: FarmRecord>(&self, a: &R, b: &R) -> Ordering {
        let ord = match self.key {
            SortKey::Date => a.date().cmp(&b.date()),
            SortKey::Id => a.id().cmp(b.id()),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Selected values per categorical dimension. Dimensions are stored
/// lowercase, values in the separator-free form used by choice fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSet(BTreeMap<String, BTreeSet<String>>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `dim=value` pairs as given on the command line.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> AppResult<Self> {
        let mut set = Self::new();
        for p in pairs {
            let p = p.as_ref();
            let (dim, value) = p
                .split_once('=')
                .ok_or_else(|| AppError::InvalidFilter(format!("expected dim=value, got '{p}'")))?;
            if dim.trim().is_empty() || value.trim().is_empty() {
                return Err(AppError::InvalidFilter(p.to_string()));
            }
            set.select(dim, value);
        }
        Ok(set)
    }

    pub fn select(&mut self, dim: &str, value: &str) {
        self.0
            .entry(dim.trim().to_lowercase())
            .or_default()
            .insert(normalize(value));
    }

    pub fn deselect(&mut self, dim: &str, value: &str) {
        let dim = dim.trim().to_lowercase();
        if let Some(values) = self.0.get_mut(&dim) {
            values.remove(&normalize(value));
            if values.is_empty() {
                self.0.remove(&dim);
            }
        }
    }

    /// Multi-select chip behaviour.
    pub fn toggle(&mut self, dim: &str, value: &str) {
        if self.is_selected(dim, value) {
            self.deselect(dim, value);
        } else {
            self.select(dim, value);
        }
    }

    pub fn is_selected(&self, dim: &str, value: &str) -> bool {
        self.0
            .get(&dim.trim().to_lowercase())
            .is_some_and(|v| v.contains(&normalize(value)))
    }

    pub fn clear(&mut self, dim: &str) {
        self.0.remove(&dim.trim().to_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Reject dimensions the record kind does not expose.
    pub fn validate(&self, kind: RecordKind) -> AppResult<()> {
        for dim in self.dimensions() {
            if !kind.dimensions().contains(&dim) {
                return Err(AppError::InvalidFilter(format!(
                    "'{dim}' is not a filter for {kind} (use one of: {})",
                    kind.dimensions().join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn matches<R: FarmRecord>(&self, record: &R) -> bool {
        self.0.iter().all(|(dim, selected)| {
            selected.is_empty()
                || record
                    .dimension(dim)
                    .is_some_and(|v| selected.contains(&normalize(&v)))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordQuery {
    pub search: String,
    pub filters: FilterSet,
    pub sort: SortSpec,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    fn matches_search<R: FarmRecord>(&self, record: &R) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }

    pub fn matches<R: FarmRecord>(&self, record: &R) -> bool {
        self.matches_search(record) && self.filters.matches(record)
    }
}

/// Filter then sort, returning references into `records` in view order.
pub fn apply_query<'a, R: FarmRecord>(records: &'a [R], query: &RecordQuery) -> Vec<&'a R> {
    let mut out: Vec<&R> = records.iter().filter(|r| query.matches(*r)).collect();
    out.sort_by(|a, b| query.sort.compare(*a, *b));
    out
}

/// Caches the ordered view of a store and re-derives it only when the
/// query, the store or its revision changed.
#[derive(Debug, Default)]
pub struct MemoizedView {
    key: Option<(RecordQuery, u64, u64)>,
    indices: Vec<usize>,
    computations: usize,
}

impl MemoizedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the view has been re-derived.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn view<'a, R: FarmRecord>(
        &mut self,
        store: &'a RecordStore<R>,
        query: &RecordQuery,
    ) -> Vec<&'a R> {
        let fresh = matches!(
            &self.key,
            Some((q, id, rev)) if q == query && *id == store.store_id() && *rev == store.revision()
        );

        if !fresh {
            let records = store.records();
            let mut indices: Vec<usize> = (0..records.len())
                .filter(|&i| query.matches(&records[i]))
                .collect();
            indices.sort_by(|&a, &b| query.sort.compare(&records[a], &records[b]));

            self.indices = indices;
            self.key = Some((query.clone(), store.store_id(), store.revision()));
            self.computations += 1;
        }

        let records = store.records();
        self.indices.iter().map(|&i| &records[i]).collect()
    }
}
