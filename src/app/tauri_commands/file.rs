use std::path::PathBuf;

use tauri::api::dialog::blocking::FileDialogBuilder;

use crate::api::ApiResponse;
use crate::app::state::AppState;
use crate::config::{ConfigInfo, SheetReadConfig};
use crate::domain::Employee;
use crate::engine::PreviewData;
use crate::i18n::t_with_args;

use super::common::{run_blocking, with_success_message};

// ==========================================
// 数据源文件命令
// ==========================================

/// 选择 Excel 文件（取消时返回 canceled）
#[tauri::command(rename_all = "snake_case")]
pub async fn select_file() -> Result<ApiResponse<PathBuf>, String> {
    let picked: Option<PathBuf> = tauri::async_runtime::spawn_blocking(|| {
        FileDialogBuilder::new()
            .add_filter("Excel Files", &["xlsx", "xls"])
            .pick_file()
    })
    .await
    .unwrap_or(None);

    Ok(match picked {
        Some(path) => ApiResponse::ok(path),
        None => ApiResponse::canceled(),
    })
}

/// 列出工作表
#[tauri::command(rename_all = "snake_case")]
pub async fn get_sheets(
    state: tauri::State<'_, AppState>,
    file_path: PathBuf,
) -> Result<ApiResponse<Vec<String>>, String> {
    let api = state.file_api.clone();
    Ok(run_blocking("ipc.get_sheets", move || api.get_sheets(&file_path)).await)
}

/// 原始行预览
#[tauri::command(rename_all = "snake_case")]
pub async fn preview_data(
    state: tauri::State<'_, AppState>,
    config: SheetReadConfig,
) -> Result<ApiResponse<PreviewData>, String> {
    let api = state.file_api.clone();
    Ok(run_blocking("ipc.preview_data", move || api.preview_data(&config)).await)
}

/// 按指定配置读取（不切换数据源）
#[tauri::command(rename_all = "snake_case")]
pub async fn read_with_config(
    state: tauri::State<'_, AppState>,
    config: SheetReadConfig,
) -> Result<ApiResponse<Vec<Employee>>, String> {
    let api = state.file_api.clone();
    Ok(run_blocking("ipc.read_with_config", move || api.read_with_config(&config)).await)
}

/// 提交数据源
#[tauri::command(rename_all = "snake_case")]
pub async fn apply_data_source(
    state: tauri::State<'_, AppState>,
    config: SheetReadConfig,
) -> Result<ApiResponse<ConfigInfo>, String> {
    let api = state.config_api.clone();
    let message = t_with_args(
        "data_source.applied",
        &[("path", &config.file_path.display().to_string())],
    );
    let response = run_blocking("ipc.apply_data_source", move || api.apply_data_source(&config)).await;
    Ok(with_success_message(response, message))
}
