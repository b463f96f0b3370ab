// ==========================================
// 员工花名册系统 - 数据源文件 API
// ==========================================
// 职责: 候选文件的工作表列举、原始行预览、按配置读取
// 红线: 只读,不改变当前数据源（提交由 ConfigApi::apply_data_source 完成）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::SheetReadConfig;
use crate::domain::Employee;
use crate::engine::{ExcelEngine, PreviewData};
use crate::repository::EmployeeRepository;
use std::path::Path;
use std::sync::Arc;

pub struct FileApi {
    engine: Arc<ExcelEngine>,
    repo: Arc<EmployeeRepository>,
}

impl FileApi {
    pub fn new(engine: Arc<ExcelEngine>, repo: Arc<EmployeeRepository>) -> Self {
        Self { engine, repo }
    }

    pub fn get_sheets(&self, path: &Path) -> ApiResult<Vec<String>> {
        require_path(path)?;
        Ok(self.engine.list_sheets(path)?)
    }

    pub fn preview_data(&self, source: &SheetReadConfig) -> ApiResult<PreviewData> {
        require_path(&source.file_path)?;
        Ok(self.engine.preview(source)?)
    }

    pub fn read_with_config(&self, source: &SheetReadConfig) -> ApiResult<Vec<Employee>> {
        require_path(&source.file_path)?;
        Ok(self.repo.read_with_config(source)?)
    }
}

pub(crate) fn require_path(path: &Path) -> ApiResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ApiError::invalid_input("error.path_empty"));
    }
    Ok(())
}
