// ==========================================
// 员工花名册系统 - 统一响应信封
// ==========================================
// 形状: { success, data?, error?, code?, message?, canceled? }
// 红线: 所有错误在最外层转为 success=false 的信封,不向调用方抛出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
            message: None,
            canceled: None,
        }
    }

    pub fn err(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.to_string()),
            code: Some(err.code().to_string()),
            message: None,
            canceled: None,
        }
    }

    /// 用户取消了文件对话框
    pub fn canceled() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
            code: None,
            message: None,
            canceled: Some(true),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => {
                tracing::error!(code = err.code(), error = %err, "操作失败");
                Self::err(&err)
            }
        }
    }
}

impl<T> From<ApiResult<T>> for ApiResponse<T> {
    fn from(result: ApiResult<T>) -> Self {
        Self::from_result(result)
    }
}
