use rfarmlog::core::query::{
    FilterSet, MemoizedView, RecordQuery, SortKey, SortOrder, SortSpec, apply_query,
};
use rfarmlog::core::store::RecordStore;
use rfarmlog::models::{FarmRecord, Record, RecordKind};

mod common;
use common::{animal, record};

fn herd() -> Vec<Record> {
    vec![
        animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14"),
        animal("B002", "Billy", "Goat", "Male", "2022-05-01"),
        animal("C003", "Clover", "Sheep", "Female", "2020-11-30"),
        animal("D004", "Daisy", "Goat", "Female", "2023-01-15"),
    ]
}

fn ids(view: &[&Record]) -> Vec<String> {
    view.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = herd();
    let q = RecordQuery::new().with_search("a00");
    assert_eq!(ids(&apply_query(&records, &q)), vec!["A001"]);

    let q = RecordQuery::new().with_search("BILL");
    assert_eq!(ids(&apply_query(&records, &q)), vec!["B002"]);

    let q = RecordQuery::new().with_search("zzz");
    assert!(apply_query(&records, &q).is_empty());
}

#[test]
fn empty_query_returns_everything() {
    let records = herd();
    let view = apply_query(&records, &RecordQuery::new());
    assert_eq!(view.len(), records.len());
}

#[test]
fn filters_or_within_and_across_dimensions() {
    let records = herd();

    let mut f = FilterSet::new();
    f.select("species", "Goat");
    f.select("species", "Sheep");
    let q = RecordQuery::new()
        .with_filters(f.clone())
        .with_sort(SortSpec::new(SortKey::Id, SortOrder::Asc));
    assert_eq!(ids(&apply_query(&records, &q)), vec!["B002", "C003", "D004"]);

    f.select("sex", "female");
    let q = q.with_filters(f);
    assert_eq!(ids(&apply_query(&records, &q)), vec!["C003", "D004"]);
}

#[test]
fn toggling_a_filter_twice_restores_the_result() {
    let records = herd();
    let base = RecordQuery::new().with_sort(SortSpec::new(SortKey::Id, SortOrder::Asc));
    let before = ids(&apply_query(&records, &base));

    let mut f = FilterSet::new();
    f.toggle("species", "Goat");
    assert!(f.is_selected("species", "goat"));
    f.toggle("species", "Goat");
    assert!(f.is_empty());

    f.select("sex", "Male");
    f.select("sex", "Female");
    f.clear("sex");
    assert!(f.is_empty());

    let after = ids(&apply_query(&records, &base.clone().with_filters(f)));
    assert_eq!(before, after);
}

#[test]
fn sort_toggle_flips_then_resets_on_new_key() {
    let s = SortSpec::default();
    assert_eq!(s, SortSpec::new(SortKey::Date, SortOrder::Desc));

    let s = s.toggle(SortKey::Date);
    assert_eq!(s.order, SortOrder::Asc);

    let s = s.toggle(SortKey::Id);
    assert_eq!(s, SortSpec::new(SortKey::Id, SortOrder::Asc));

    let s = s.toggle(SortKey::Id);
    assert_eq!(s.order, SortOrder::Desc);
}

#[test]
fn sort_toggle_reorders_the_herd() {
    let records = herd();
    let by_date = SortSpec::new(SortKey::Date, SortOrder::Desc);

    let desc = ids(&apply_query(&records, &RecordQuery::new().with_sort(by_date)));
    assert_eq!(desc, vec!["D004", "B002", "A001", "C003"]);

    let flipped = by_date.toggle(SortKey::Date);
    let asc = ids(&apply_query(&records, &RecordQuery::new().with_sort(flipped)));
    assert_eq!(asc, vec!["C003", "A001", "B002", "D004"]);

    let back = flipped.toggle(SortKey::Date);
    assert_eq!(
        ids(&apply_query(&records, &RecordQuery::new().with_sort(back))),
        desc
    );
}

#[test]
fn sorting_by_date_both_directions() {
    let records = herd();

    let q = RecordQuery::new().with_sort(SortSpec::new(SortKey::Date, SortOrder::Asc));
    assert_eq!(
        ids(&apply_query(&records, &q)),
        vec!["C003", "A001", "B002", "D004"]
    );

    let q = RecordQuery::new().with_sort(SortSpec::new(SortKey::Date, SortOrder::Desc));
    assert_eq!(
        ids(&apply_query(&records, &q)),
        vec!["D004", "B002", "A001", "C003"]
    );
}

#[test]
fn query_never_touches_the_source() {
    let records = herd();
    let snapshot = records.clone();

    let mut f = FilterSet::new();
    f.select("sex", "Male");
    let q = RecordQuery::new()
        .with_search("b")
        .with_filters(f)
        .with_sort(SortSpec::new(SortKey::Id, SortOrder::Desc));
    let _ = apply_query(&records, &q);

    assert_eq!(records, snapshot);
}

#[test]
fn parse_pairs_and_validate_dimensions() {
    let f = FilterSet::parse_pairs(&["species=Goat", "status=active"]).unwrap();
    assert!(f.is_selected("species", "goat"));
    assert!(f.validate(RecordKind::Livestock).is_ok());
    assert!(f.validate(RecordKind::Inventory).is_err());

    assert!(FilterSet::parse_pairs(&["species"]).is_err());
    assert!(FilterSet::parse_pairs(&["=Goat"]).is_err());
}

#[test]
fn inventory_filters_on_derived_stock_status() {
    let items = vec![
        record(
            RecordKind::Inventory,
            "IN-0001",
            &[
                ("name", "Hay bales"),
                ("category", "Feed"),
                ("quantity", "4"),
                ("purchase_date", "2024-02-01"),
                ("reorder_level", "10"),
            ],
        ),
        record(
            RecordKind::Inventory,
            "IN-0002",
            &[
                ("name", "Ivermectin"),
                ("category", "Medicine"),
                ("quantity", "20"),
                ("purchase_date", "2024-02-03"),
                ("reorder_level", "5"),
            ],
        ),
    ];

    let q = RecordQuery::new().with_filters(FilterSet::parse_pairs(&["stock=low"]).unwrap());
    assert_eq!(ids(&apply_query(&items, &q)), vec!["IN-0001"]);
}

#[test]
fn memoized_view_recomputes_only_on_change() {
    let mut store = RecordStore::from_records(herd()).unwrap();
    let mut view = MemoizedView::new();
    let q = RecordQuery::new().with_search("b");

    assert_eq!(view.view(&store, &q).len(), 2);
    assert_eq!(view.view(&store, &q).len(), 2);
    assert_eq!(view.computations(), 1);

    let q2 = q.clone().with_sort(SortSpec::new(SortKey::Id, SortOrder::Asc));
    view.view(&store, &q2);
    assert_eq!(view.computations(), 2);

    store
        .insert(animal("E005", "Bramble", "Swine", "Female", "2023-06-01"))
        .unwrap();
    assert_eq!(view.view(&store, &q2).len(), 3);
    assert_eq!(view.computations(), 3);
}

#[test]
fn one_view_over_two_stores_at_the_same_revision() {
    let big = RecordStore::from_records(herd()).unwrap();
    let bo = animal("Z009", "Bo", "Goat", "Male", "2022-02-02");
    let mut small = RecordStore::from_records(vec![bo.clone()]).unwrap();
    while small.revision() < big.revision() {
        small.update(bo.clone()).unwrap();
    }
    assert_eq!(small.revision(), big.revision());
    let mut view = MemoizedView::new();
    let q = RecordQuery::new().with_sort(SortSpec::new(SortKey::Id, SortOrder::Desc));

    assert_eq!(ids(&view.view(&big, &q)), vec!["D004", "C003", "B002", "A001"]);
    assert_eq!(ids(&view.view(&small, &q)), vec!["Z009"]);
    assert_eq!(view.computations(), 2);

    let copy = big.clone();
    assert_eq!(copy.revision(), big.revision());
    assert_ne!(copy.store_id(), big.store_id());
    assert_eq!(view.view(&copy, &q).len(), 4);
    assert_eq!(view.computations(), 3);
}

#[test]
fn filter_values_ignore_case_and_separators() {
    let feeding = record(
        RecordKind::Feeding,
        "FD-0001",
        &[
            ("feed_type", "Hay"),
            ("date", "2024-04-02"),
            ("quantity_kg", "200"),
            ("strategy", "free-choice"),
            ("purpose", "Maintenance"),
        ],
    );
    let records = vec![feeding];

    for value in ["free-choice", "Free Choice", "FREE_CHOICE"] {
        let filters = FilterSet::parse_pairs(&[format!("strategy={value}")]).unwrap();
        assert!(filters.is_selected("strategy", "free choice"));
        let q = RecordQuery::new().with_filters(filters);
        assert_eq!(ids(&apply_query(&records, &q)), vec!["FD-0001"]);
    }

    let grazing = FilterSet::parse_pairs(&["strategy=grazing"]).unwrap();
    let q = RecordQuery::new().with_filters(grazing);
    assert!(apply_query(&records, &q).is_empty());
}
