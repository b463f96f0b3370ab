use super::core::EmployeeRepository;
use crate::config::SheetReadConfig;
use crate::domain::{
    matches_search, Employee, EmployeeFilter, EmployeeStatistics, ExportOptions, ExportRow,
};
use crate::repository::error::RepositoryResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl EmployeeRepository {
    // ==========================================
    // 查询操作
    // ==========================================

    /// 全部员工（表格顺序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Employee>> {
        self.load_all()
    }

    /// 按 id 查询（不存在返回 None）
    pub fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Employee>> {
        let id = id.trim();
        Ok(self.load_all()?.into_iter().find(|e| e.id == id))
    }

    /// 关键字搜索（空关键字返回全集）
    pub fn search(&self, term: &str) -> RepositoryResult<Vec<Employee>> {
        let employees = self.load_all()?;
        let total = employees.len();
        let hits: Vec<Employee> = employees
            .into_iter()
            .filter(|e| matches_search(e, term))
            .collect();
        debug!(term = %term, total, hits = hits.len(), "搜索完成");
        Ok(hits)
    }

    /// 精确匹配过滤
    pub fn filter(&self, filter: &EmployeeFilter) -> RepositoryResult<Vec<Employee>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }

    /// 统计: 总数 + 按部门/职务分组
    pub fn statistics(&self) -> RepositoryResult<EmployeeStatistics> {
        Ok(EmployeeStatistics::from_employees(&self.load_all()?))
    }

    // ==========================================
    // 导出 / 备份
    // ==========================================

    /// 导出（过滤与搜索同时生效）,返回导出行数
    pub fn export(&self, dest: &Path, options: &ExportOptions) -> RepositoryResult<usize> {
        let rows: Vec<ExportRow> = self
            .load_all()?
            .iter()
            .filter(|e| options.filters.as_ref().map_or(true, |f| f.matches(e)))
            .filter(|e| {
                options
                    .search_term
                    .as_deref()
                    .map_or(true, |term| matches_search(e, term))
            })
            .map(ExportRow::from)
            .collect();

        self.engine().export(&rows, dest)?;
        info!(dest = %dest.display(), rows = rows.len(), "员工已导出");
        Ok(rows.len())
    }

    /// 备份当前数据文件
    pub fn backup(&self) -> RepositoryResult<PathBuf> {
        Ok(self.engine().backup()?)
    }

    /// 按显式配置读取候选文件（不改变当前数据源）
    pub fn read_with_config(&self, source: &SheetReadConfig) -> RepositoryResult<Vec<Employee>> {
        Ok(self
            .engine()
            .read_with_config(source)?
            .iter()
            .map(Employee::from_raw)
            .collect())
    }
}
