// ==========================================
// 员工花名册系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 校验错误 / 未找到 / 引擎（I/O、格式）错误
// ==========================================

use crate::engine::EngineError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据质量错误 =====
    #[error("数据校验失败: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    #[error("员工编号重复: {0}")]
    DuplicateId(String),

    /// 现有最大数值 id 已到上限,无法自动分配
    #[error("无法在 {0} 之后分配新编号")]
    IdExhausted(String),

    // ===== 查找错误 =====
    #[error("{entity}不存在: {id}")]
    NotFound { entity: String, id: String },

    // ===== 存储错误 =====
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl RepositoryError {
    pub(crate) fn employee_not_found(id: &str) -> Self {
        RepositoryError::NotFound {
            entity: "员工".to_string(),
            id: id.to_string(),
        }
    }

    /// 当前语言下的界面文案
    pub fn user_message(&self) -> String {
        use rust_i18n::t;
        match self {
            RepositoryError::ValidationError(errors) => errors.join(", "),
            RepositoryError::DuplicateId(id) => t!("employee.duplicate_id", id = id).to_string(),
            RepositoryError::IdExhausted(max) => t!("employee.id_exhausted", max = max).to_string(),
            RepositoryError::NotFound { id, .. } => t!("employee.not_found", id = id).to_string(),
            RepositoryError::Engine(e) => e.user_message(),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
