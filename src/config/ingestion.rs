// ==========================================
// 员工花名册系统 - Excel 读取配置
// ==========================================
// 职责: 控制原始行 → 记录的解析方式
// 模式: hasHeaderRow=true  首行为表头,经 headerMapping 改名
//       hasHeaderRow=false 跳过 skipRows 行,按 customHeaders 位置映射
// ==========================================

use crate::domain::fields;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 默认数据文件名
pub const DEFAULT_FILE_NAME: &str = "MASTERLIST_FV.xlsx";

/// 默认工作表
pub const DEFAULT_SHEET_NAME: &str = "Masterlist";

/// 默认跳过的横幅行数
pub const DEFAULT_SKIP_ROWS: usize = 5;

// ==========================================
// IngestionConfig - 进程级读取配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngestionConfig {
    pub file_path: PathBuf,
    pub sheet_name: String,
    pub has_header_row: bool,
    pub custom_headers: Vec<String>,
    /// 表头文字 → 字段名
    pub header_mapping: BTreeMap<String, String>,
    pub skip_rows: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let header_mapping = [
            ("STT", fields::SERIAL_NUMBER),
            ("Mã NV", fields::ID),
            ("Họ và tên", fields::FULL_NAME),
            ("Phòng ban", fields::DEPARTMENT),
        ]
        .into_iter()
        .map(|(label, field)| (label.to_string(), field.to_string()))
        .collect();

        Self {
            file_path: PathBuf::from("excel").join(DEFAULT_FILE_NAME),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            has_header_row: false,
            custom_headers: [
                fields::SERIAL_NUMBER,
                fields::ID,
                fields::FULL_NAME,
                fields::POSITION,
                fields::DEPARTMENT,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            header_mapping,
            skip_rows: DEFAULT_SKIP_ROWS,
        }
    }
}

impl IngestionConfig {
    /// 表头文字 → 字段名（未映射的原样透传）
    pub fn field_for_label<'a>(&'a self, label: &'a str) -> &'a str {
        self.header_mapping
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// 字段名 → 表头文字（反向映射,写回表头行时使用）
    pub fn label_for_field<'a>(&'a self, field: &'a str) -> &'a str {
        self.header_mapping
            .iter()
            .find(|(_, f)| f.as_str() == field)
            .map(|(label, _)| label.as_str())
            .unwrap_or(field)
    }

    /// customHeaders 未列出的审计字段（无表头模式下追加在数据列之后）
    pub fn audit_fields(&self) -> Vec<String> {
        fields::AUDIT
            .iter()
            .filter(|audit| !self.custom_headers.iter().any(|c| c == *audit))
            .map(|audit| audit.to_string())
            .collect()
    }

    /// 无表头模式下的完整列布局: customHeaders + audit_fields
    pub fn positional_fields(&self) -> Vec<String> {
        let mut columns = self.custom_headers.clone();
        columns.extend(self.audit_fields());
        columns
    }

    pub fn snapshot(&self) -> ConfigInfo {
        ConfigInfo {
            has_header_row: self.has_header_row,
            custom_headers: self.custom_headers.clone(),
            header_mapping: self.header_mapping.clone(),
            file_path: self.file_path.clone(),
            sheet_name: self.sheet_name.clone(),
            skip_rows: self.skip_rows,
        }
    }
}

// ==========================================
// ConfigInfo - 当前配置快照（调试用）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfo {
    pub has_header_row: bool,
    pub custom_headers: Vec<String>,
    pub header_mapping: BTreeMap<String, String>,
    pub file_path: PathBuf,
    pub sheet_name: String,
    pub skip_rows: usize,
}

// ==========================================
// SheetReadConfig - 候选文件读取/预览配置
// ==========================================
// sheetName 缺省取第一个工作表；takeRows=0 表示不截断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReadConfig {
    pub file_path: PathBuf,
    #[serde(default)]
    pub sheet_name: Option<String>,
    #[serde(default)]
    pub skip_rows: usize,
    #[serde(default)]
    pub take_rows: usize,
}
