// ==========================================
// 员工花名册系统 - 查询/导出/统计对象
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::employee::{format_display_date, Employee};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// EmployeeFilter - 精确匹配过滤（条件之间为 AND）
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilter {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl EmployeeFilter {
    /// 空字符串条件视为未设置
    pub fn matches(&self, employee: &Employee) -> bool {
        let check = |criterion: &Option<String>, value: &str| match criterion.as_deref() {
            Some(c) if !c.is_empty() => c == value,
            _ => true,
        };
        check(&self.department, &employee.department) && check(&self.position, &employee.position)
    }
}

/// 关键字搜索：fullName / id / position / department 任一包含（忽略大小写）
pub fn matches_search(employee: &Employee, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        &employee.full_name,
        &employee.id,
        &employee.position,
        &employee.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

// ==========================================
// ExportOptions - 导出选项
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default)]
    pub filters: Option<EmployeeFilter>,
    #[serde(default)]
    pub search_term: Option<String>,
}

// ==========================================
// ExportRow - 导出行（展示口径）
// ==========================================
/// 导出表头（顺序与 ExportRow::to_cells 一致）
pub const EXPORT_HEADERS: [&str; 7] = [
    "STT",
    "Mã NV",
    "Họ và tên",
    "Chức vụ",
    "Phòng ban",
    "Ngày tạo",
    "Ngày cập nhật",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub serial_number: Option<i64>,
    pub id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ExportRow {
    pub fn to_cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::from(self.serial_number),
            CellValue::from(self.id.clone()),
            CellValue::from(self.full_name.clone()),
            CellValue::from(self.position.clone()),
            CellValue::from(self.department.clone()),
            CellValue::from(self.created_at.clone()),
            CellValue::from(self.updated_at.clone()),
        ]
    }
}

impl From<&Employee> for ExportRow {
    fn from(employee: &Employee) -> Self {
        Self {
            serial_number: employee.serial_number,
            id: employee.id.clone(),
            full_name: employee.full_name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            created_at: employee
                .created_at
                .as_ref()
                .map(format_display_date)
                .unwrap_or_default(),
            updated_at: employee
                .updated_at
                .as_ref()
                .map(format_display_date)
                .unwrap_or_default(),
        }
    }
}

// ==========================================
// EmployeeStatistics - 统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatistics {
    pub total: usize,
    pub by_department: BTreeMap<String, usize>,
    pub by_position: BTreeMap<String, usize>,
}

impl EmployeeStatistics {
    /// 空部门/职务不计入分组
    pub fn from_employees(employees: &[Employee]) -> Self {
        let mut stats = EmployeeStatistics {
            total: employees.len(),
            ..Default::default()
        };
        for employee in employees {
            if !employee.department.is_empty() {
                *stats
                    .by_department
                    .entry(employee.department.clone())
                    .or_insert(0) += 1;
            }
            if !employee.position.is_empty() {
                *stats.by_position.entry(employee.position.clone()).or_insert(0) += 1;
            }
        }
        stats
    }
}

// ==========================================
// ValidationReport - 表单预校验结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
