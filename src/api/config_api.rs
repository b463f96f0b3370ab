// ==========================================
// 员工花名册系统 - 配置 API
// ==========================================
// 职责: 应用配置查询、读取配置快照、表头模式切换、数据源提交、调试样例
// 约定: 读取配置变化后写回配置文件（失败只告警,不影响本次操作）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::file_api::require_path;
use crate::config::{AppConfigView, ConfigInfo, ConfigManager, Settings, SheetReadConfig};
use crate::engine::{EngineError, ExcelEngine};
use std::sync::{Arc, RwLock};

pub struct ConfigApi {
    engine: Arc<ExcelEngine>,
    settings: RwLock<Settings>,
    config_manager: Arc<ConfigManager>,
}

impl ConfigApi {
    pub fn new(
        engine: Arc<ExcelEngine>,
        settings: Settings,
        config_manager: Arc<ConfigManager>,
    ) -> Self {
        Self {
            engine,
            settings: RwLock::new(settings),
            config_manager,
        }
    }

    /// 界面所需的应用配置（版本、标题、表单枚举）
    pub fn get_app_config(&self) -> ApiResult<AppConfigView> {
        let settings = self
            .settings
            .read()
            .map_err(|e| ApiError::from(EngineError::LockError(e.to_string())))?;
        Ok(AppConfigView::from(&*settings))
    }

    pub fn get_config_info(&self) -> ApiResult<ConfigInfo> {
        Ok(self.engine.config_info()?)
    }

    /// 切换表头模式,返回新状态
    pub fn toggle_header_mode(&self) -> ApiResult<bool> {
        let enabled = self.engine.toggle_header_mode()?;
        self.persist_ingestion();
        Ok(enabled)
    }

    /// 提交已预览的文件/工作表为当前数据源
    pub fn apply_data_source(&self, source: &SheetReadConfig) -> ApiResult<ConfigInfo> {
        require_path(&source.file_path)?;
        let info = self.engine.apply_data_source(source)?;
        self.persist_ingestion();
        Ok(info)
    }

    pub fn create_sample_with_headers(&self) -> ApiResult<String> {
        Ok(self.engine.create_sample_with_headers()?)
    }

    pub fn create_sample_without_headers(&self) -> ApiResult<String> {
        Ok(self.engine.create_sample_without_headers()?)
    }

    /// best-effort: 把引擎当前读取配置写回配置文件
    fn persist_ingestion(&self) {
        let excel = match self.engine.config() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("读取引擎配置失败,跳过保存: {}", e);
                return;
            }
        };

        let mut settings = match self.settings.write() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("配置锁获取失败,跳过保存: {}", e);
                return;
            }
        };
        settings.excel = excel;

        if let Err(e) = self.config_manager.save(&settings) {
            tracing::warn!(
                path = %self.config_manager.path().display(),
                "配置文件保存失败: {:#}",
                e
            );
        }
    }
}
