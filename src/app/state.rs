// ==========================================
// 员工花名册系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ConfigApi, EmployeeApi, FileApi};
use crate::config::ingestion::DEFAULT_FILE_NAME;
use crate::config::{config_keys, ConfigManager, IngestionConfig, Settings};
use crate::engine::ExcelEngine;
use crate::repository::EmployeeRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 配置文件路径
    pub config_path: PathBuf,

    /// Excel 引擎（读取配置持有者）
    pub engine: Arc<ExcelEngine>,

    /// 员工API
    pub employee_api: Arc<EmployeeApi>,

    /// 数据源文件API
    pub file_api: Arc<FileApi>,

    /// 配置API
    pub config_api: Arc<ConfigApi>,
}

impl AppState {
    /// 从配置文件创建 AppState
    ///
    /// # 说明
    /// 1. 加载配置文件并应用环境变量覆写
    /// 2. 默认的相对数据文件路径改到用户数据目录
    /// 3. 创建引擎、仓储与全部 API 实例
    pub fn new(config_path: PathBuf) -> Result<Self, String> {
        tracing::info!("初始化AppState，配置文件: {}", config_path.display());

        let config_manager = ConfigManager::new(config_path);
        let mut settings = config_manager
            .load()
            .map_err(|e| format!("无法加载配置: {:#}", e))?;

        if settings.excel.file_path == IngestionConfig::default().file_path {
            settings.excel.file_path = get_default_excel_path();
        }

        Ok(Self::with_settings(settings, config_manager))
    }

    /// 用已解析的配置创建 AppState（测试/嵌入使用）
    pub fn with_settings(settings: Settings, config_manager: ConfigManager) -> Self {
        tracing::info!(
            file_path = %settings.excel.file_path.display(),
            sheet_name = %settings.excel.sheet_name,
            has_header_row = settings.excel.has_header_row,
            "数据源"
        );

        let config_path = config_manager.path().to_path_buf();
        let engine = Arc::new(ExcelEngine::new(settings.excel.clone()));
        let repo = Arc::new(EmployeeRepository::new(engine.clone()));

        let employee_api = Arc::new(EmployeeApi::new(repo.clone()));
        let file_api = Arc::new(FileApi::new(engine.clone(), repo));
        let config_api = Arc::new(ConfigApi::new(
            engine.clone(),
            settings,
            Arc::new(config_manager),
        ));

        Self {
            config_path,
            engine,
            employee_api,
            file_api,
            config_api,
        }
    }
}

/// 应用数据目录（开发环境使用独立目录，避免污染正式数据）
fn app_data_dir() -> Option<PathBuf> {
    #[cfg(debug_assertions)]
    let name = "hrm-desk-dev";
    #[cfg(not(debug_assertions))]
    let name = "hrm-desk";

    dirs::data_dir().map(|dir| dir.join(name))
}

/// 默认数据文件路径
///
/// 优先级: HRM_DESK_EXCEL_PATH > 用户数据目录 > ./excel/
pub fn get_default_excel_path() -> PathBuf {
    if let Ok(path) = std::env::var(config_keys::EXCEL_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match app_data_dir() {
        Some(dir) => dir.join(DEFAULT_FILE_NAME),
        None => PathBuf::from("excel").join(DEFAULT_FILE_NAME),
    }
}

/// 默认配置文件路径
///
/// 优先级: HRM_DESK_CONFIG_PATH > 用户配置目录 > ./hrm_desk_config.json
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(config_keys::CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("hrm-desk").join("config.json"),
        None => PathBuf::from("hrm_desk_config.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_settings_wires_engine() {
        let dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.excel.file_path = dir.path().join("data.xlsx");

        let state = AppState::with_settings(
            settings,
            ConfigManager::new(dir.path().join("config.json")),
        );

        assert_eq!(state.config_path, dir.path().join("config.json"));
        assert_eq!(
            state.engine.config_info().unwrap().file_path,
            dir.path().join("data.xlsx")
        );
        assert!(state.employee_api.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_default_paths_end_with_expected_names() {
        assert!(get_default_config_path().to_string_lossy().ends_with(".json"));
        assert!(get_default_excel_path()
            .to_string_lossy()
            .ends_with(".xlsx"));
    }
}
