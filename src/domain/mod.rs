// ==========================================
// 员工花名册系统 - 领域模型层
// ==========================================
// 职责: 定义员工实体、单元格值、查询/导出/统计对象与字段校验
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod cell;
pub mod employee;
pub mod query;

// 重导出核心类型
pub use cell::{CellValue, RawRecord};
pub use employee::{fields, Employee, EmployeeDraft, EmployeePatch, MAX_FULL_NAME_LENGTH};
pub use query::{
    matches_search, EmployeeFilter, EmployeeStatistics, ExportOptions, ExportRow,
    ValidationReport, EXPORT_HEADERS,
};
