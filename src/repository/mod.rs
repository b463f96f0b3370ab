// ==========================================
// 员工花名册系统 - 数据仓储层
// ==========================================
// 职责: 员工增删改查、搜索、过滤、统计、导出与备份
// 约束: 只经由 ExcelEngine 访问表格,不直接碰文件
// ==========================================

pub mod employee_repo;
pub mod error;

// 重导出核心仓储
pub use employee_repo::EmployeeRepository;
pub use error::{RepositoryError, RepositoryResult};
