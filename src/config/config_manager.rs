// ==========================================
// 员工花名册系统 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、持久化
// 存储: JSON 文件（不存在时使用默认值）
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::settings::Settings;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// 环境变量键
pub mod config_keys {
    pub const EXCEL_PATH: &str = "HRM_DESK_EXCEL_PATH";
    pub const SHEET_NAME: &str = "HRM_DESK_SHEET_NAME";
    pub const SKIP_ROWS: &str = "HRM_DESK_SKIP_ROWS";
    pub const HAS_HEADER_ROW: &str = "HRM_DESK_HAS_HEADER_ROW";
    pub const CONFIG_PATH: &str = "HRM_DESK_CONFIG_PATH";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// # 参数
    /// - path: 配置文件路径（可以不存在）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置: 文件 + 进程环境变量覆写
    pub fn load(&self) -> anyhow::Result<Settings> {
        let mut settings = self.load_file()?;
        apply_overrides(&mut settings, |key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// 只读配置文件（不应用覆写）
    pub fn load_file(&self) -> anyhow::Result<Settings> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "配置文件不存在,使用默认配置");
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("读取配置文件失败: {}", self.path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("配置文件格式错误: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "配置文件已加载");
        Ok(settings)
    }

    /// 保存配置（格式化 JSON）
    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(settings).context("配置序列化失败")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("写入配置文件失败: {}", self.path.display()))?;
        Ok(())
    }
}

/// 应用覆写（lookup 抽象环境变量读取,便于测试）
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(path) = non_empty(config_keys::EXCEL_PATH) {
        settings.excel.file_path = PathBuf::from(path);
    }
    if let Some(sheet) = non_empty(config_keys::SHEET_NAME) {
        settings.excel.sheet_name = sheet;
    }
    if let Some(skip) = non_empty(config_keys::SKIP_ROWS) {
        settings.excel.skip_rows = skip
            .parse::<usize>()
            .with_context(|| format!("{} 不是非负整数: {}", config_keys::SKIP_ROWS, skip))?;
    }
    if let Some(flag) = non_empty(config_keys::HAS_HEADER_ROW) {
        settings.excel.has_header_row = matches!(
            flag.to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        );
    }
    Ok(())
}
