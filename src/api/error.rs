// ==========================================
// 员工花名册系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把仓储/引擎错误转换为界面可读的消息
// 约定: 每个变体有稳定的错误代码,随信封一起返回
// 约定: 变体内的文本已按当前语言本地化
// ==========================================

use crate::engine::EngineError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("{0}")]
    InvalidInput(String),

    #[error("{}", .0.join(", "))]
    ValidationError(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateId(String),

    // ==========================================
    // 文件访问错误
    // ==========================================
    #[error("{0}")]
    ExcelError(String),

    #[error("{0}")]
    IoError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    /// 稳定错误代码（返回给前端）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DuplicateId(_) => "DUPLICATE_ID",
            ApiError::ExcelError(_) => "EXCEL_ERROR",
            ApiError::IoError(_) => "IO_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 按翻译键构造输入错误
    pub(crate) fn invalid_input(key: &str) -> Self {
        ApiError::InvalidInput(rust_i18n::t!(key).to_string())
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.user_message();
        match err {
            EngineError::FileNotFound(_) | EngineError::FileWriteError(_) => {
                ApiError::IoError(message)
            }
            EngineError::SheetNotFound(_)
            | EngineError::NoSheets(_)
            | EngineError::UnsupportedFormat(_)
            | EngineError::ExcelParseError(_)
            | EngineError::ExcelWriteError(_) => ApiError::ExcelError(message),
            EngineError::InvalidConfig(_) | EngineError::ExportTargetIsSource(_) => {
                ApiError::InvalidInput(message)
            }
            EngineError::LockError(_) => ApiError::InternalError(message),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        let message = err.user_message();
        match err {
            RepositoryError::ValidationError(errors) => ApiError::ValidationError(errors),
            RepositoryError::DuplicateId(_) => ApiError::DuplicateId(message),
            RepositoryError::IdExhausted(_) => ApiError::InvalidInput(message),
            RepositoryError::NotFound { .. } => ApiError::NotFound(message),
            RepositoryError::Engine(e) => e.into(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::employee_not_found("NV404").into();
        assert_eq!(api_err.code(), "NOT_FOUND");
        assert!(api_err.to_string().contains("NV404"));

        let api_err: ApiError = RepositoryError::DuplicateId("NV001".into()).into();
        assert_eq!(api_err.code(), "DUPLICATE_ID");
        assert!(api_err.to_string().contains("NV001"));

        let api_err: ApiError =
            RepositoryError::ValidationError(vec!["x".into(), "y".into()]).into();
        assert_eq!(api_err.code(), "VALIDATION_ERROR");
        assert_eq!(api_err.to_string(), "x, y");

        let api_err: ApiError = RepositoryError::IdExhausted(u64::MAX.to_string()).into();
        assert_eq!(api_err.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_engine_error_conversion() {
        let api_err: ApiError = EngineError::FileNotFound("a.xlsx".into()).into();
        assert_eq!(api_err.code(), "IO_ERROR");
        assert!(api_err.to_string().contains("a.xlsx"));

        let api_err: ApiError = RepositoryError::Engine(EngineError::SheetNotFound("S".into())).into();
        assert_eq!(api_err.code(), "EXCEL_ERROR");

        let api_err: ApiError = EngineError::ExportTargetIsSource("live.xlsx".into()).into();
        assert_eq!(api_err.code(), "INVALID_INPUT");
        assert!(api_err.to_string().contains("live.xlsx"));

        let api_err: ApiError = EngineError::LockError("poisoned".into()).into();
        assert_eq!(api_err.code(), "INTERNAL_ERROR");
    }
}
