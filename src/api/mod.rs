// ==========================================
// 员工花名册系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令调用
// ==========================================

pub mod config_api;
pub mod employee_api;
pub mod error;
pub mod file_api;
pub mod response;

// 重导出核心类型
pub use config_api::ConfigApi;
pub use employee_api::{EmployeeApi, ExportSummary};
pub use error::{ApiError, ApiResult};
pub use file_api::FileApi;
pub use response::ApiResponse;
