// ==========================================
// 员工仓储集成测试
// ==========================================
// 职责: 验证读-改-写全流程、id 唯一性、并发写入串行化
// ==========================================

mod test_helpers;

use hrm_desk::config::{IngestionConfig, SheetReadConfig};
use hrm_desk::domain::{EmployeeDraft, EmployeePatch};
use hrm_desk::engine::ExcelEngine;
use hrm_desk::logging;
use hrm_desk::repository::{EmployeeRepository, RepositoryError};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use test_helpers::{create_test_workspace, masterlist_rows, write_fixture_workbook};

fn repo_for(path: &Path) -> Arc<EmployeeRepository> {
    let engine = ExcelEngine::new(IngestionConfig {
        file_path: path.to_path_buf(),
        ..IngestionConfig::default()
    });
    Arc::new(EmployeeRepository::new(Arc::new(engine)))
}

fn named(id: Option<&str>, name: &str) -> EmployeeDraft {
    EmployeeDraft {
        id: id.map(str::to_string),
        full_name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_nv010_scenario() {
    logging::init_test();
    let (_dir, path) = create_test_workspace();
    let repo = repo_for(&path);

    let created = repo.create(&named(Some("NV010"), "Nguyen Van X")).unwrap();
    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "NV010");

    let updated = repo
        .update(
            "NV010",
            &EmployeePatch {
                full_name: Some("Nguyen Van Y".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.full_name, "Nguyen Van Y");
    assert_eq!(updated.created_at, created.created_at);
    assert_ne!(updated.updated_at, created.updated_at);

    let dup = repo.create(&named(Some("NV010"), "Another"));
    assert!(matches!(dup, Err(RepositoryError::DuplicateId(_))));
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn test_edits_keep_existing_banner_and_rows() {
    logging::init_test();
    let (_dir, path) = create_test_workspace();
    write_fixture_workbook(
        &path,
        "Masterlist",
        &masterlist_rows(&[
            ("#1", "#1", "Nguyễn Văn A", "Nhân viên", "IT"),
            ("#2", "#2", "Trần Thị B", "Trưởng phòng", "Nhân sự"),
        ]),
    )
    .unwrap();

    let repo = repo_for(&path);
    // 数值 id 单元格读取为字符串
    assert!(repo.get_by_id("1").unwrap().is_some());

    let next = repo.create(&named(None, "Lê Văn C")).unwrap();
    assert_eq!(next.id, "3");

    repo.delete("2").unwrap();
    let ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let preview = repo
        .engine()
        .preview(&hrm_desk::config::SheetReadConfig {
            file_path: path.clone(),
            sheet_name: Some("Masterlist".to_string()),
            skip_rows: 0,
            take_rows: 1,
        })
        .unwrap();
    assert_eq!(preview.rows[0][0].to_string(), "DANH SÁCH NHÂN VIÊN");
}

#[test]
fn test_delete_missing_leaves_set_unchanged() {
    logging::init_test();
    let (_dir, path) = create_test_workspace();
    let repo = repo_for(&path);
    repo.create(&named(Some("NV001"), "A")).unwrap();

    let before = std::fs::read(&path).unwrap();
    assert!(matches!(
        repo.delete("NV999"),
        Err(RepositoryError::NotFound { .. })
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_concurrent_creates_do_not_lose_updates() {
    logging::init_test();
    let (_dir, path) = create_test_workspace();
    let repo = repo_for(&path);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                repo.create(&named(Some(&format!("NV{:03}", i)), "Concurrent"))
                    .map(|e| e.id)
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let all = repo.list_all().unwrap();
    let ids: HashSet<String> = all.iter().map(|e| e.id.clone()).collect();
    assert_eq!(all.len(), 8);
    assert_eq!(ids.len(), 8);
}

#[test]
fn test_concurrent_auto_ids_stay_unique() {
    logging::init_test();
    let (_dir, path) = create_test_workspace();
    let repo = repo_for(&path);

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let repo = repo.clone();
            std::thread::spawn(move || repo.create(&named(None, "Auto")).map(|e| e.id))
        })
        .collect();

    let ids: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(repo.list_all().unwrap().len(), 5);
}

#[test]
fn test_source_switch_serializes_with_creates() {
    logging::init_test();
    let (dir, first) = create_test_workspace();
    let second = dir.path().join("second.xlsx");
    let sheet = IngestionConfig::default().sheet_name;
    write_fixture_workbook(
        &first,
        &sheet,
        &masterlist_rows(&[("#1", "X01", "Nguyễn Văn A", "Nhân viên", "IT")]),
    )
    .unwrap();
    write_fixture_workbook(
        &second,
        &sheet,
        &masterlist_rows(&[("#1", "A01", "Phạm Văn D", "Nhân viên", "Kế toán")]),
    )
    .unwrap();

    let repo = repo_for(&first);
    let handles: Vec<_> = (100..108)
        .map(|i| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                repo.create(&named(Some(&format!("NV{}", i)), "Concurrent"))
                    .map(|e| e.id)
                    .map_err(|e| e.to_string())
            })
        })
        .collect();

    let switcher = {
        let repo = repo.clone();
        let source = SheetReadConfig {
            file_path: second.clone(),
            sheet_name: None,
            skip_rows: 5,
            take_rows: 0,
        };
        std::thread::spawn(move || {
            repo.engine()
                .apply_data_source(&source)
                .map_err(|e| e.to_string())
        })
    };
    let created: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    switcher.join().unwrap().unwrap();

    // 每次创建整体落在切换前或切换后的文件中,且只出现一次
    let first_ids: Vec<String> = repo_for(&first)
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    let second_ids: Vec<String> = repo_for(&second)
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert!(first_ids.contains(&"X01".to_string()));
    assert!(second_ids.contains(&"A01".to_string()));
    for id in &created {
        let hits = first_ids.iter().chain(second_ids.iter()).filter(|x| *x == id).count();
        assert_eq!(hits, 1, "{} should be stored exactly once", id);
    }
    assert_eq!(first_ids.len() + second_ids.len(), created.len() + 2);
}
