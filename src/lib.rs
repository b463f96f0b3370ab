// ==========================================
// 员工花名册系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + Excel（calamine 读 / rust_xlsxwriter 写）
// 系统定位: 单用户桌面录入工具,数据全集存放在一个工作表中
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "vi");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 读取配置与应用配置
pub mod config;

// 引擎层 - Excel 读写
pub mod engine;

// 数据仓储层 - 员工增删改查
pub mod repository;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CellValue, Employee, EmployeeDraft, EmployeeFilter, EmployeePatch, EmployeeStatistics,
    ExportOptions, RawRecord,
};

// 配置
pub use config::{IngestionConfig, SheetReadConfig};

// 引擎
pub use engine::{EngineError, ExcelEngine, PreviewData};

// 仓储
pub use repository::{EmployeeRepository, RepositoryError};

// API
pub use api::{ApiError, ApiResponse, ConfigApi, EmployeeApi, FileApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Quản lý nhân viên";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
