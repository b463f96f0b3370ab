use crate::api::ApiResponse;
use crate::app::state::AppState;
use crate::config::{AppConfigView, ConfigInfo};
use crate::i18n::t;

use super::common::{run_blocking, with_success_message};

// ==========================================
// 配置与调试命令
// ==========================================

/// 应用配置（版本、标题、表单枚举）
#[tauri::command(rename_all = "snake_case")]
pub fn get_app_config(state: tauri::State<'_, AppState>) -> ApiResponse<AppConfigView> {
    ApiResponse::from_result(state.config_api.get_app_config())
}

/// 当前读取配置快照
#[tauri::command(rename_all = "snake_case")]
pub fn get_config_info(state: tauri::State<'_, AppState>) -> ApiResponse<ConfigInfo> {
    ApiResponse::from_result(state.config_api.get_config_info())
}

/// 切换表头模式
#[tauri::command(rename_all = "snake_case")]
pub fn toggle_header_mode(state: tauri::State<'_, AppState>) -> ApiResponse<bool> {
    let response = ApiResponse::from_result(state.config_api.toggle_header_mode());
    let message = match response.data {
        Some(true) => t("header_mode.enabled"),
        _ => t("header_mode.disabled"),
    };
    with_success_message(response, message)
}

/// 生成有表头样例文件
#[tauri::command(rename_all = "snake_case")]
pub async fn create_sample_with_headers(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<()>, String> {
    let api = state.config_api.clone();
    let response = run_blocking("ipc.create_sample_with_headers", move || {
        api.create_sample_with_headers()
    })
    .await;
    Ok(into_message(response))
}

/// 生成无表头样例文件
#[tauri::command(rename_all = "snake_case")]
pub async fn create_sample_without_headers(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<()>, String> {
    let api = state.config_api.clone();
    let response = run_blocking("ipc.create_sample_without_headers", move || {
        api.create_sample_without_headers()
    })
    .await;
    Ok(into_message(response))
}

/// 样例命令只返回消息
fn into_message(response: ApiResponse<String>) -> ApiResponse<()> {
    ApiResponse {
        success: response.success,
        data: None,
        error: response.error,
        code: response.code,
        message: response.data,
        canceled: None,
    }
}
