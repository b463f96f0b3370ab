// ==========================================
// 员工花名册系统 - Excel 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: Display 面向日志；user_message() 经 rust-i18n 生成界面文案
// ==========================================

use thiserror::Error;

/// Excel 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 文件相关错误 =====
    #[error("Excel 文件不存在: {0}")]
    FileNotFound(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("工作簿没有任何工作表: {0}")]
    NoSheets(String),

    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    #[error("写入文件失败: {0}")]
    FileWriteError(String),

    // ===== 解析/写入错误 =====
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("Excel 生成失败: {0}")]
    ExcelWriteError(String),

    // ===== 配置错误 =====
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("导出目标为当前数据文件: {0}")]
    ExportTargetIsSource(String),

    #[error("锁获取失败: {0}")]
    LockError(String),
}

impl EngineError {
    /// 当前语言下的界面文案
    pub fn user_message(&self) -> String {
        use rust_i18n::t;
        let message = match self {
            EngineError::FileNotFound(path) => t!("error.file_not_found", path = path),
            EngineError::SheetNotFound(sheet) => t!("error.sheet_not_found", sheet = sheet),
            EngineError::NoSheets(path) => t!("error.no_sheets", path = path),
            EngineError::UnsupportedFormat(ext) => t!("error.unsupported_format", ext = ext),
            EngineError::FileWriteError(detail) => t!("error.file_write", detail = detail),
            EngineError::ExcelParseError(detail) => t!("error.excel_parse", detail = detail),
            EngineError::ExcelWriteError(detail) => t!("error.excel_write", detail = detail),
            EngineError::InvalidConfig(detail) => t!("error.invalid_config", detail = detail),
            EngineError::ExportTargetIsSource(path) => {
                t!("error.export_target_is_source", path = path)
            }
            EngineError::LockError(detail) => t!("error.internal", detail = detail),
        };
        message.to_string()
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for EngineError {
    fn from(err: calamine::Error) -> Self {
        EngineError::ExcelParseError(err.to_string())
    }
}

// 实现 From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for EngineError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        EngineError::ExcelWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
