mod common;

use std::path::{Path, PathBuf};

use actix_web::rt;
use chrono::NaiveDate;
use common::memory_store;
use hrms_lite::db::{Store, StoreError, init_db};
use hrms_lite::model::{AttendanceStatus, NewEmployee};

fn new_employee(id: &str, email: &str) -> NewEmployee {
    NewEmployee {
        employee_id: id.to_string(),
        full_name: format!("Employee {id}"),
        email: email.to_string(),
        department: "Ops".to_string(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn temp_db(tag: &str) -> (PathBuf, String) {
    let mut path = std::env::temp_dir();
    path.push(format!("hrms-lite-{tag}-{}.sqlite", std::process::id()));
    remove_db_files(&path);
    let url = format!("sqlite://{}", path.display());
    (path, url)
}

fn remove_db_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[actix_web::test]
async fn schema_creation_is_idempotent() {
    let store = memory_store().await;
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();

    store.init_schema().await.unwrap();

    assert_eq!(store.list_employees().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn init_db_creates_file_and_tables() {
    let (path, url) = temp_db("store");
    let store = init_db(&url).await.unwrap();
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();
    store.pool().close().await;

    // reopening keeps the data and does not fail on existing tables
    let store = init_db(&url).await.unwrap();
    assert_eq!(store.list_employees().await.unwrap()[0].employee_id, "E1");
    store.pool().close().await;

    remove_db_files(&path);
}

#[actix_web::test]
async fn concurrent_writes_on_different_employees_all_succeed() {
    let (path, url) = temp_db("concurrent");
    let store = init_db(&url).await.unwrap();

    let ids: Vec<String> = (0..40).map(|i| format!("C{i:02}")).collect();
    for id in &ids {
        store
            .insert_employee(&new_employee(id, &format!("{}@corp.io", id.to_lowercase())))
            .await
            .unwrap();
    }

    let marks: Vec<_> = ids
        .iter()
        .map(|id| {
            let store = store.clone();
            let id = id.clone();
            rt::spawn(async move { store.mark_attendance(&id, day(1), AttendanceStatus::Present).await })
        })
        .collect();
    for handle in marks {
        handle.await.unwrap().unwrap();
    }

    // half the employees are deleted while the other half get a second day
    let mixed: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let store = store.clone();
            let id = id.clone();
            rt::spawn(async move {
                if i % 2 == 0 {
                    store.delete_employee(&id).await.map(|_| ())
                } else {
                    store.mark_attendance(&id, day(2), AttendanceStatus::Absent).await
                }
            })
        })
        .collect();
    for handle in mixed {
        handle.await.unwrap().unwrap();
    }

    let summary = store.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_employees, 20);
    assert_eq!(summary.total_attendance_records, 40);
    assert_eq!(summary.present_days_per_employee.len(), 20);

    store.pool().close().await;
    remove_db_files(&path);
}

#[actix_web::test]
async fn conflicts_are_classified_per_entity() {
    let store = memory_store().await;
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();

    let err = store
        .insert_employee(&new_employee("E2", "e1@corp.io"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmployee));

    store
        .mark_attendance("E1", day(1), AttendanceStatus::Present)
        .await
        .unwrap();
    let err = store
        .mark_attendance("E1", day(1), AttendanceStatus::Absent)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateAttendance));

    let err = store
        .mark_attendance("NOPE", day(1), AttendanceStatus::Present)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EmployeeNotFound));
}

#[actix_web::test]
async fn store_is_usable_after_a_rolled_back_conflict() {
    let store = memory_store().await;
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();
    assert!(store
        .insert_employee(&new_employee("E1", "again@corp.io"))
        .await
        .is_err());

    // the single pooled connection must not be left inside an open transaction
    store
        .insert_employee(&new_employee("E2", "e2@corp.io"))
        .await
        .unwrap();
    assert_eq!(store.list_employees().await.unwrap().len(), 2);
}

#[actix_web::test]
async fn delete_reports_removed_attendance() {
    let store = memory_store().await;
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();
    for d in 1..=3 {
        store
            .mark_attendance("E1", day(d), AttendanceStatus::Present)
            .await
            .unwrap();
    }

    assert_eq!(store.delete_employee("E1").await.unwrap(), 3);
    assert!(matches!(
        store.delete_employee("E1").await.unwrap_err(),
        StoreError::EmployeeNotFound
    ));

    let summary = store.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_attendance_records, 0);
    assert!(summary.present_days_per_employee.is_empty());
}

#[actix_web::test]
async fn list_attendance_filters_by_day() {
    let store: Store = memory_store().await;
    store
        .insert_employee(&new_employee("E1", "e1@corp.io"))
        .await
        .unwrap();
    store
        .mark_attendance("E1", day(1), AttendanceStatus::Present)
        .await
        .unwrap();
    store
        .mark_attendance("E1", day(2), AttendanceStatus::Absent)
        .await
        .unwrap();

    let all = store.list_attendance("E1", None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].att_date, day(2));
    assert_eq!(all[0].status, AttendanceStatus::Absent);

    let one = store.list_attendance("E1", Some(day(1))).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].status, AttendanceStatus::Present);
}
