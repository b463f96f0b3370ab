// ==========================================
// 员工花名册系统 - 员工 API
// ==========================================
// 职责: 员工增删改查、搜索、过滤、统计、导出、备份、表单预校验
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{
    Employee, EmployeeDraft, EmployeeFilter, EmployeePatch, EmployeeStatistics, ExportOptions,
    ValidationReport,
};
use crate::repository::EmployeeRepository;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 导出结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub file_path: PathBuf,
    pub count: usize,
}

// ==========================================
// EmployeeApi
// ==========================================
pub struct EmployeeApi {
    repo: Arc<EmployeeRepository>,
}

impl EmployeeApi {
    pub fn new(repo: Arc<EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> ApiResult<Vec<Employee>> {
        Ok(self.repo.list_all()?)
    }

    /// 按 id 查询（不存在返回 None,不算错误）
    pub fn get_by_id(&self, id: &str) -> ApiResult<Option<Employee>> {
        let id = require_id(id)?;
        Ok(self.repo.get_by_id(id)?)
    }

    pub fn create(&self, draft: &EmployeeDraft) -> ApiResult<Employee> {
        Ok(self.repo.create(draft)?)
    }

    pub fn update(&self, id: &str, patch: &EmployeePatch) -> ApiResult<Employee> {
        let id = require_id(id)?;
        Ok(self.repo.update(id, patch)?)
    }

    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let id = require_id(id)?;
        Ok(self.repo.delete(id)?)
    }

    pub fn search(&self, term: &str) -> ApiResult<Vec<Employee>> {
        Ok(self.repo.search(term)?)
    }

    pub fn filter(&self, filter: &EmployeeFilter) -> ApiResult<Vec<Employee>> {
        Ok(self.repo.filter(filter)?)
    }

    pub fn get_statistics(&self) -> ApiResult<EmployeeStatistics> {
        Ok(self.repo.statistics()?)
    }

    /// 导出到指定文件
    pub fn export(&self, dest: &Path, options: &ExportOptions) -> ApiResult<ExportSummary> {
        if dest.as_os_str().is_empty() {
            return Err(ApiError::invalid_input("error.export_path_empty"));
        }
        let count = self.repo.export(dest, options)?;
        Ok(ExportSummary {
            file_path: dest.to_path_buf(),
            count,
        })
    }

    pub fn backup(&self) -> ApiResult<PathBuf> {
        Ok(self.repo.backup()?)
    }

    /// 表单预校验（不落盘）
    pub fn validate(&self, draft: &EmployeeDraft) -> ValidationReport {
        ValidationReport::from_errors(draft.validate())
    }
}

fn require_id(id: &str) -> ApiResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::invalid_input("error.id_empty"));
    }
    Ok(id)
}
