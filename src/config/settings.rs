// ==========================================
// 员工花名册系统 - 应用配置
// ==========================================
// 结构: excel（读取配置）/ window / employee（表单枚举与校验）/ app
// ==========================================

use crate::config::ingestion::IngestionConfig;
use crate::domain::{fields, MAX_FULL_NAME_LENGTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub excel: IngestionConfig,
    pub window: WindowConfig,
    pub employee: EmployeeRules,
    pub app: AppInfo,
}

// ==========================================
// WindowConfig - 窗口尺寸
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            min_width: 800,
            min_height: 600,
        }
    }
}

// ==========================================
// EmployeeRules - 表单枚举（界面提供,不强制）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRules {
    pub required_fields: Vec<String>,
    pub max_name_length: usize,
    pub positions: Vec<String>,
    pub departments: Vec<String>,
    pub statuses: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for EmployeeRules {
    fn default() -> Self {
        Self {
            required_fields: owned(&[fields::FULL_NAME, fields::ID]),
            max_name_length: MAX_FULL_NAME_LENGTH,
            positions: owned(&["Nhân viên", "Trưởng phòng", "Quản lý", "Giám đốc"]),
            departments: owned(&["Nhân sự", "Kế toán", "IT", "Marketing", "Kinh doanh"]),
            statuses: owned(&["Đang làm việc", "Nghỉ phép", "Đã nghỉ việc"]),
        }
    }
}

// ==========================================
// AppInfo - 应用标题/版本
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppInfo {
    pub title: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            title: crate::APP_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

// ==========================================
// AppConfigView - getAppConfig 返回给界面的子集
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigView {
    pub version: String,
    pub title: String,
    pub max_name_length: usize,
    pub positions: Vec<String>,
    pub departments: Vec<String>,
    pub statuses: Vec<String>,
}

impl From<&Settings> for AppConfigView {
    fn from(settings: &Settings) -> Self {
        Self {
            version: settings.app.version.clone(),
            title: settings.app.title.clone(),
            max_name_length: settings.employee.max_name_length,
            positions: settings.employee.positions.clone(),
            departments: settings.employee.departments.clone(),
            statuses: settings.employee.statuses.clone(),
        }
    }
}
