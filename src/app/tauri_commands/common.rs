use crate::api::{ApiError, ApiResponse, ApiResult};

// ==========================================
// 公共工具：阻塞任务调度、性能统计、信封转换
// ==========================================

/// 在阻塞线程池执行 API 调用（文件 I/O 不占用 UI 线程）
///
/// 任务本身失败（panic/取消）也转换为 success=false 的信封
pub(super) async fn run_blocking<T, F>(op: &'static str, f: F) -> ApiResponse<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    let joined = tauri::async_runtime::spawn_blocking(move || {
        let _perf = crate::perf::PerfGuard::new(op);
        f()
    })
    .await;

    match joined {
        Ok(result) => ApiResponse::from_result(result),
        Err(e) => {
            tracing::error!(op, error = %e, "任务执行失败");
            let detail = format!("{}: {}", op, e);
            let err = ApiError::InternalError(
                rust_i18n::t!("error.internal", detail = detail).to_string(),
            );
            ApiResponse::err(&err)
        }
    }
}

/// 成功时附加本地化消息
pub(super) fn with_success_message<T>(response: ApiResponse<T>, message: String) -> ApiResponse<T> {
    if response.success {
        response.with_message(message)
    } else {
        response
    }
}
