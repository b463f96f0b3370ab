// ==========================================
// 员工花名册系统 - 配置层
// ==========================================
// 职责: 读取配置、应用配置,支持环境变量覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod ingestion;
pub mod settings;

// 重导出核心配置类型
pub use config_manager::{apply_overrides, config_keys, ConfigManager};
pub use ingestion::{ConfigInfo, IngestionConfig, SheetReadConfig};
pub use settings::{AppConfigView, AppInfo, EmployeeRules, Settings, WindowConfig};
