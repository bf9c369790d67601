#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfarmlog::core::form::{FormAction, FormState, submit_with};
use rfarmlog::models::{Record, RecordKind};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfl() -> Command {
    cargo_bin_cmd!("rfarmlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfarmlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Init a fresh DB in test mode.
pub fn init_db(db_path: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// `add <kind> --id <id> -f k=v ...` against the test DB.
pub fn add(db_path: &str, kind: &str, id: &str, fields: &[&str]) {
    let mut args = vec!["--db", db_path, "add", kind, "--id", id];
    for f in fields {
        args.push("-f");
        args.push(f);
    }
    rfl().args(args).assert().success();
}

/// Init DB and add a small herd plus breeding records.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add(
        db_path,
        "livestock",
        "A001",
        &[
            "tag=A001",
            "name=Bella",
            "species=Dairy Cow",
            "sex=Female",
            "birth_date=2021-03-14",
            "purpose=Dairy",
        ],
    );
    add(
        db_path,
        "livestock",
        "B002",
        &[
            "tag=B002",
            "name=Billy",
            "species=goat",
            "sex=Male",
            "birth_date=2022-05-01",
            "purpose=Meat",
        ],
    );
    add(
        db_path,
        "breeding",
        "BR-0001",
        &[
            "animal_id=A001",
            "species=Dairy Cow",
            "method=Artificial",
            "service_date=2023-12-20",
            "status=Pregnant",
        ],
    );
}

/// Build a record in memory through the form, as the CLI does.
pub fn record(kind: RecordKind, id: &str, fields: &[(&str, &str)]) -> Record {
    let form = FormState::new(kind).with_id(id);
    submit_with(&form, fields.iter().map(|(k, v)| FormAction::set(k, v)))
        .expect("valid record fields")
}

pub fn animal(id: &str, name: &str, species: &str, sex: &str, birth: &str) -> Record {
    record(
        RecordKind::Livestock,
        id,
        &[
            ("tag", id),
            ("name", name),
            ("species", species),
            ("sex", sex),
            ("birth_date", birth),
            ("purpose", "Dairy"),
        ],
    )
}
