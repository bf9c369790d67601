use predicates::str::contains;
use rfarmlog::config::Config;
use rfarmlog::export::ExportTable;
use rfarmlog::models::RecordKind;
use std::fs;

mod common;
use common::{add, init_db, record, rfl, setup_test_db, temp_out};

fn production_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    add(
        &db_path,
        "production",
        "PR-0001",
        &[
            "animal_id=Herd 1",
            "date=2024-05-01",
            "product=Milk",
            "quantity=300",
            "head_count=12",
            "sale_price=1800",
            "market_price=1750",
        ],
    );
    add(
        &db_path,
        "production",
        "PR-0002",
        &[
            "animal_id=Steer 4",
            "date=2024-06-01",
            "product=Meat",
            "quantity=250",
            "weight_gain_kg=60",
            "sale_date=2024-07-31",
        ],
    );
    db_path
}

#[test]
fn test_export_csv_includes_derived_columns() {
    let db_path = production_db("export_csv_derived");
    let out = temp_out("export_csv_derived", "csv");

    rfl()
        .args([
            "--db",
            &db_path,
            "export",
            "--kind",
            "production",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("id,animal_id,date,product"));
    assert!(header.contains("profit"));
    assert!(header.contains("production_rate"));

    let first = lines.next().expect("first row");
    assert!(first.starts_with("PR-0001"));
    assert!(first.contains("50.00"));
    assert!(first.contains("25.00"));

    let second = lines.next().expect("second row");
    assert!(second.contains("1.00"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = production_db("export_json_range");
    let out = temp_out("export_json_range", "json");

    rfl()
        .args([
            "--db",
            &db_path,
            "export",
            "--kind",
            "production",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2024-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let items = json.as_array().expect("array");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["record"]["id"], "PR-0002");
    assert_eq!(items[0]["record"]["kind"], "production");
    assert_eq!(items[0]["derived"]["weight_gain_rate"], "1.00");
    assert_eq!(items[0]["derived"]["profit"], "--");
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = production_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    rfl()
        .args([
            "--db",
            &db_path,
            "export",
            "--kind",
            "production",
            "--format",
            "xlsx",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = production_db("export_existing");
    let out = temp_out("export_existing", "csv");
    fs::write(&out, "keep me").unwrap();

    rfl()
        .args([
            "--db", &db_path, "export", "--kind", "production", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rfl()
        .args([
            "--db",
            &db_path,
            "export",
            "--kind",
            "production",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = production_db("export_relative");

    rfl()
        .args([
            "--db",
            &db_path,
            "export",
            "--kind",
            "production",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_table_inventory_metrics() {
    let cfg = Config::default();
    let items = vec![record(
        RecordKind::Inventory,
        "IN-0001",
        &[
            ("name", "Hay bales"),
            ("category", "Feed"),
            ("quantity", "40"),
            ("purchase_date", "2024-02-01"),
            ("unit_cost", "3.5"),
        ],
    )];

    let table = ExportTable::build(RecordKind::Inventory, &items, &cfg);
    let col = |name: &str| table.headers.iter().position(|h| h == name).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][col("stock")], "In Stock");
    assert_eq!(table.rows[0][col("total_value")], "140.00");
    assert_eq!(table.rows[0][col("reorder_level")], "");
}
