use chrono::NaiveDate;
use rfarmlog::db::migrate::applied_migrations;
use rfarmlog::db::pool::DbPool;
use rfarmlog::db::queries::{
    delete_record, insert_record, load_record, load_records, load_records_in_range, next_id,
    update_record,
};
use rfarmlog::errors::AppError;
use rfarmlog::models::{FarmRecord, Record, RecordKind};

mod common;
use common::animal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn migrations_are_recorded_once() {
    let pool = DbPool::in_memory().unwrap();
    let applied = applied_migrations(&pool.conn).unwrap();
    assert_eq!(applied.len(), 2);

    rfarmlog::db::initialize::init_db(&pool.conn).unwrap();
    assert_eq!(applied_migrations(&pool.conn).unwrap().len(), 2);
}

#[test]
fn records_round_trip_through_sqlite() {
    let pool = DbPool::in_memory().unwrap();
    let a = animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14");

    insert_record(&pool, &a).unwrap();
    assert_eq!(load_record(&pool, "A001").unwrap(), Some(a.clone()));
    assert!(matches!(
        insert_record(&pool, &a),
        Err(AppError::DuplicateRecord(_))
    ));

    let renamed = animal("A001", "Belle", "Dairy Cow", "Female", "2021-03-14");
    update_record(&pool, &renamed).unwrap();
    let Some(Record::Livestock(loaded)) = load_record(&pool, "A001").unwrap() else {
        panic!("expected livestock");
    };
    assert_eq!(loaded.name, "Belle");

    delete_record(&pool, "A001").unwrap();
    assert_eq!(load_record(&pool, "A001").unwrap(), None);
    assert!(matches!(
        delete_record(&pool, "A001"),
        Err(AppError::RecordNotFound(_))
    ));
}

#[test]
fn next_id_follows_the_highest_number() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(next_id(&pool, RecordKind::Livestock).unwrap(), "LV-0001");

    insert_record(&pool, &animal("LV-0007", "Bella", "Goat", "Female", "2021-03-14")).unwrap();
    insert_record(&pool, &animal("LV-0003", "Billy", "Goat", "Male", "2021-03-14")).unwrap();
    assert_eq!(next_id(&pool, RecordKind::Livestock).unwrap(), "LV-0008");
    assert_eq!(next_id(&pool, RecordKind::Health).unwrap(), "HL-0001");
}

#[test]
fn next_id_handles_very_large_existing_ids() {
    let pool = DbPool::in_memory().unwrap();
    insert_record(
        &pool,
        &animal("LV-4294967295", "Bella", "Goat", "Female", "2021-03-14"),
    )
    .unwrap();
    assert_eq!(
        next_id(&pool, RecordKind::Livestock).unwrap(),
        "LV-4294967296"
    );

    insert_record(
        &pool,
        &animal("LV-18446744073709551615", "Billy", "Goat", "Male", "2021-03-14"),
    )
    .unwrap();
    assert!(matches!(
        next_id(&pool, RecordKind::Livestock),
        Err(AppError::InvalidField(_))
    ));
}

#[test]
fn load_by_kind_and_range() {
    let pool = DbPool::in_memory().unwrap();
    for (id, birth) in [("A", "2021-03-14"), ("B", "2022-05-01"), ("C", "2022-12-31")] {
        insert_record(&pool, &animal(id, id, "Goat", "Female", birth)).unwrap();
    }

    let all = load_records(&pool, RecordKind::Livestock).unwrap();
    let ids: Vec<&str> = all.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert!(load_records(&pool, RecordKind::Breeding).unwrap().is_empty());

    let in_2022 =
        load_records_in_range(&pool, RecordKind::Livestock, d("2022-01-01"), d("2022-12-31"))
            .unwrap();
    assert_eq!(in_2022.len(), 2);
}

#[test]
fn unreadable_records_reports_bad_payloads() {
    let pool = DbPool::in_memory().unwrap();
    insert_record(
        &pool,
        &animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14"),
    )
    .unwrap();
    assert!(rfarmlog::db::stats::unreadable_records(&pool).unwrap().is_empty());

    pool.conn
        .execute(
            "INSERT INTO records (id, kind, record_date, payload, created_at, updated_at)
             VALUES ('X9', 'livestock', '2024-01-01', '{not json', '', '')",
            [],
        )
        .unwrap();

    assert_eq!(
        rfarmlog::db::stats::unreadable_records(&pool).unwrap(),
        vec!["X9".to_string()]
    );
}
