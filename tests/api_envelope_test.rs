// ==========================================
// API 层集成测试
// ==========================================
// 职责: 经 AppState 调用 API,验证响应信封、错误码与配置持久化
// ==========================================

mod test_helpers;

use hrm_desk::api::ApiResponse;
use hrm_desk::config::{ConfigManager, SheetReadConfig};
use hrm_desk::domain::{EmployeeDraft, EmployeeFilter, ExportOptions};
use hrm_desk::logging;
use serde_json::Value;
use test_helpers::{create_test_state, create_test_workspace, masterlist_rows, write_fixture_workbook};

fn draft(id: &str, name: &str, department: &str) -> EmployeeDraft {
    EmployeeDraft {
        id: Some(id.to_string()),
        full_name: name.to_string(),
        department: Some(department.to_string()),
        ..Default::default()
    }
}

fn envelope<T: serde::Serialize>(response: ApiResponse<T>) -> Value {
    serde_json::to_value(response).unwrap()
}

#[test]
fn test_create_and_duplicate_envelopes() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    let ok = envelope(ApiResponse::from_result(
        state.employee_api.create(&draft("NV010", "Nguyen Van X", "IT")),
    ));
    assert_eq!(ok["success"], true);
    assert_eq!(ok["data"]["id"], "NV010");
    assert_eq!(ok["data"]["fullName"], "Nguyen Van X");

    let dup = envelope(ApiResponse::from_result(
        state.employee_api.create(&draft("NV010", "Someone", "IT")),
    ));
    assert_eq!(dup["success"], false);
    assert_eq!(dup["code"], "DUPLICATE_ID");
    assert!(dup["error"].as_str().unwrap().contains("NV010"));
    assert!(dup.get("data").is_none());
}

#[test]
fn test_missing_employee_envelopes() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    // 查询不到返回成功 + null
    let lookup = envelope(ApiResponse::from_result(state.employee_api.get_by_id("NV404")));
    assert_eq!(lookup["success"], true);
    assert_eq!(lookup["data"], Value::Null);

    let delete = envelope(ApiResponse::from_result(state.employee_api.delete("NV404")));
    assert_eq!(delete["success"], false);
    assert_eq!(delete["code"], "NOT_FOUND");

    let blank = envelope(ApiResponse::from_result(state.employee_api.delete("  ")));
    assert_eq!(blank["code"], "INVALID_INPUT");
}

#[test]
fn test_validation_failure_envelope_and_report() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    let bad = EmployeeDraft {
        id: Some("NV001".to_string()),
        full_name: "   ".to_string(),
        ..Default::default()
    };

    let report = state.employee_api.validate(&bad);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);

    let response = envelope(ApiResponse::from_result(state.employee_api.create(&bad)));
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert!(state.employee_api.get_all().unwrap().is_empty());

    let good = state.employee_api.validate(&draft("NV001", "A", ""));
    assert!(good.is_valid);
    assert!(good.errors.is_empty());
}

#[test]
fn test_statistics_and_filtered_export() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);
    let api = &state.employee_api;

    api.create(&draft("NV001", "Nguyễn Văn A", "IT")).unwrap();
    api.create(&draft("NV002", "Trần Thị B", "IT")).unwrap();
    api.create(&draft("NV003", "Lê Văn C", "Marketing")).unwrap();

    let stats = api.get_statistics().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_department.get("IT"), Some(&2));

    let filter = EmployeeFilter {
        department: Some("IT".to_string()),
        ..Default::default()
    };
    assert_eq!(api.filter(&filter).unwrap().len(), 2);

    let dest = dir.path().join("it.xlsx");
    let summary = api
        .export(
            &dest,
            &ExportOptions {
                filters: Some(filter),
                search_term: Some("trần".to_string()),
            },
        )
        .unwrap();
    assert_eq!(summary.count, 1);
    assert!(dest.exists());

    let live = envelope(ApiResponse::from_result(api.export(&path, &ExportOptions::default())));
    assert_eq!(live["code"], "INVALID_INPUT");
}

#[test]
fn test_toggle_header_mode_persists_config() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    assert!(!state.config_api.get_config_info().unwrap().has_header_row);
    assert!(state.config_api.toggle_header_mode().unwrap());

    let saved = ConfigManager::new(dir.path().join("config.json"))
        .load_file()
        .unwrap();
    assert!(saved.excel.has_header_row);
    assert_eq!(saved.excel.file_path, path);

    assert!(!state.config_api.toggle_header_mode().unwrap());
}

#[test]
fn test_apply_data_source_switches_live_file() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    let other = dir.path().join("other.xlsx");
    write_fixture_workbook(
        &other,
        "Q1",
        &masterlist_rows(&[("#1", "A01", "Phạm Văn D", "Nhân viên", "Kế toán")]),
    )
    .unwrap();

    let source = SheetReadConfig {
        file_path: other.clone(),
        sheet_name: None,
        skip_rows: 5,
        take_rows: 0,
    };
    let preview = state.file_api.read_with_config(&source).unwrap();
    assert_eq!(preview.len(), 1);

    let info = state.config_api.apply_data_source(&source).unwrap();
    assert_eq!(info.sheet_name, "Q1");
    assert_eq!(info.file_path, other);

    let all = state.employee_api.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "A01");
    assert_eq!(all[0].department, "Kế toán");

    let saved = ConfigManager::new(dir.path().join("config.json"))
        .load_file()
        .unwrap();
    assert_eq!(saved.excel.sheet_name, "Q1");
}

#[test]
fn test_app_config_and_samples() {
    logging::init_test();
    let (dir, path) = create_test_workspace();
    let state = create_test_state(&dir, &path);

    let config = state.config_api.get_app_config().unwrap();
    assert_eq!(config.version, hrm_desk::VERSION);
    assert!(!config.departments.is_empty());

    state.config_api.create_sample_without_headers().unwrap();
    assert_eq!(state.employee_api.get_all().unwrap().len(), 3);

    let sheets = envelope(ApiResponse::from_result(state.file_api.get_sheets(&path)));
    assert_eq!(sheets["data"], serde_json::json!(["Masterlist"]));
}
