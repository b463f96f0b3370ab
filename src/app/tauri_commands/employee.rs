use std::path::PathBuf;

use tauri::api::dialog::blocking::FileDialogBuilder;

use crate::api::{ApiResponse, ExportSummary};
use crate::app::state::AppState;
use crate::domain::{
    Employee, EmployeeDraft, EmployeeFilter, EmployeePatch, EmployeeStatistics, ExportOptions,
    ValidationReport,
};
use crate::i18n::{t, t_with_args};

use super::common::{run_blocking, with_success_message};

// ==========================================
// 员工相关命令
// ==========================================

/// 查询全部员工
#[tauri::command(rename_all = "snake_case")]
pub async fn get_all_employees(state: tauri::State<'_, AppState>) -> Result<ApiResponse<Vec<Employee>>, String> {
    let api = state.employee_api.clone();
    Ok(run_blocking("ipc.get_all_employees", move || api.get_all()).await)
}

/// 按 id 查询员工（不存在时 data 为 null）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_employee_by_id(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<ApiResponse<Option<Employee>>, String> {
    let api = state.employee_api.clone();
    Ok(run_blocking("ipc.get_employee_by_id", move || api.get_by_id(&id)).await)
}

/// 新建员工
#[tauri::command(rename_all = "snake_case")]
pub async fn create_employee(
    state: tauri::State<'_, AppState>,
    employee: EmployeeDraft,
) -> Result<ApiResponse<Employee>, String> {
    let api = state.employee_api.clone();
    let response = run_blocking("ipc.create_employee", move || api.create(&employee)).await;
    Ok(with_success_message(response, t("employee.created")))
}

/// 更新员工
#[tauri::command(rename_all = "snake_case")]
pub async fn update_employee(
    state: tauri::State<'_, AppState>,
    id: String,
    employee: EmployeePatch,
) -> Result<ApiResponse<Employee>, String> {
    let api = state.employee_api.clone();
    let response = run_blocking("ipc.update_employee", move || api.update(&id, &employee)).await;
    Ok(with_success_message(response, t("employee.updated")))
}

/// 删除员工
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_employee(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<ApiResponse<()>, String> {
    let api = state.employee_api.clone();
    let response = run_blocking("ipc.delete_employee", move || api.delete(&id)).await;
    Ok(with_success_message(response, t("employee.deleted")))
}

/// 关键字搜索
#[tauri::command(rename_all = "snake_case")]
pub async fn search_employees(
    state: tauri::State<'_, AppState>,
    search_term: String,
) -> Result<ApiResponse<Vec<Employee>>, String> {
    let api = state.employee_api.clone();
    Ok(run_blocking("ipc.search_employees", move || api.search(&search_term)).await)
}

/// 部门/职务过滤
#[tauri::command(rename_all = "snake_case")]
pub async fn filter_employees(
    state: tauri::State<'_, AppState>,
    filters: EmployeeFilter,
) -> Result<ApiResponse<Vec<Employee>>, String> {
    let api = state.employee_api.clone();
    Ok(run_blocking("ipc.filter_employees", move || api.filter(&filters)).await)
}

/// 统计
#[tauri::command(rename_all = "snake_case")]
pub async fn get_statistics(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<EmployeeStatistics>, String> {
    let api = state.employee_api.clone();
    Ok(run_blocking("ipc.get_statistics", move || api.get_statistics()).await)
}

/// 表单预校验
#[tauri::command(rename_all = "snake_case")]
pub fn validate_employee(
    state: tauri::State<'_, AppState>,
    employee: EmployeeDraft,
) -> ApiResponse<ValidationReport> {
    ApiResponse::ok(state.employee_api.validate(&employee))
}

/// 导出（弹出保存对话框,取消时返回 canceled）
#[tauri::command(rename_all = "snake_case")]
pub async fn export_employees(
    state: tauri::State<'_, AppState>,
    options: Option<ExportOptions>,
) -> Result<ApiResponse<ExportSummary>, String> {
    let dest: Option<PathBuf> = tauri::async_runtime::spawn_blocking(|| {
        FileDialogBuilder::new()
            .set_file_name("employees.xlsx")
            .add_filter("Excel Files", &["xlsx"])
            .save_file()
    })
    .await
    .unwrap_or(None);

    let Some(dest) = dest else {
        tracing::info!("导出已取消");
        return Ok(ApiResponse::canceled());
    };

    let api = state.employee_api.clone();
    let options = options.unwrap_or_default();
    let message = t_with_args("employee.exported", &[("path", &dest.display().to_string())]);
    let response = run_blocking("ipc.export_employees", move || api.export(&dest, &options)).await;
    Ok(with_success_message(response, message))
}

/// 备份当前数据文件
#[tauri::command(rename_all = "snake_case")]
pub async fn backup_data(state: tauri::State<'_, AppState>) -> Result<ApiResponse<PathBuf>, String> {
    let api = state.employee_api.clone();
    let response = run_blocking("ipc.backup_data", move || api.backup()).await;
    let message = response
        .data
        .as_ref()
        .map(|p| t_with_args("employee.backup_created", &[("path", &p.display().to_string())]))
        .unwrap_or_default();
    Ok(with_success_message(response, message))
}
