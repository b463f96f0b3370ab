// ==========================================
// 员工花名册系统 - 员工领域模型
// ==========================================
// 红线: id 全集唯一（自然键,查找/更新/删除均按 id）
// 红线: fullName 去空白后非空且不超过 100 字符
// 红线: createdAt 只在创建时写入,更新不得修改
// ==========================================
// 存储收敛规则:
// - id 一律字符串化（数值单元格 1.0 → "1"）
// - serialNumber 为整数或空
// - 时间戳为毫秒精度 RFC 3339 字符串,兼容 Excel 日期序列号
// - 旧数据缺失时间戳时保持为空,读取不补写
// ==========================================

use crate::domain::cell::{CellValue, RawRecord};
use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// fullName 最大长度（字符数,去空白后）
pub const MAX_FULL_NAME_LENGTH: usize = 100;

/// 字段名（与表格列/customHeaders 对齐）
pub mod fields {
    pub const SERIAL_NUMBER: &str = "serialNumber";
    pub const ID: &str = "id";
    pub const FULL_NAME: &str = "fullName";
    pub const POSITION: &str = "position";
    pub const DEPARTMENT: &str = "department";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";

    /// 写回表格时的字段顺序
    pub const ALL: [&str; 7] = [
        SERIAL_NUMBER,
        ID,
        FULL_NAME,
        POSITION,
        DEPARTMENT,
        CREATED_AT,
        UPDATED_AT,
    ];

    /// 审计字段（无表头模式下追加在 customHeaders 之后）
    pub const AUDIT: [&str; 2] = [CREATED_AT, UPDATED_AT];
}

// ==========================================
// Employee - 员工记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub serial_number: Option<i64>, // STT
    pub id: String,                 // Mã NV
    pub full_name: String,          // Họ và tên
    pub position: String,           // Chức vụ
    pub department: String,         // Phòng ban
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ==========================================
// EmployeeDraft - 新建请求
// ==========================================
// id: None 表示由仓储分配；Some("") 属于显式空值,校验失败
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    pub serial_number: Option<i64>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

// ==========================================
// EmployeePatch - 更新请求（仅合并给出的字段）
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default)]
    pub serial_number: Option<i64>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// 当前时间（截断到毫秒,与存储精度一致）
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Employee {
    /// 由新建请求构造（id 已确定）
    pub fn from_draft(draft: &EmployeeDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            serial_number: draft.serial_number,
            id: id.trim().to_string(),
            full_name: draft.full_name.trim().to_string(),
            position: draft.position.clone().unwrap_or_default(),
            department: draft.department.clone().unwrap_or_default(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// 原始行 → 员工（缺失或无法解析的时间戳为 None）
    pub fn from_raw(raw: &RawRecord) -> Self {
        let text = |key: &str| {
            raw.get(key)
                .map(|v| v.to_string().trim().to_string())
                .unwrap_or_default()
        };

        Self {
            serial_number: raw.get(fields::SERIAL_NUMBER).and_then(CellValue::as_i64),
            id: text(fields::ID),
            full_name: text(fields::FULL_NAME),
            position: text(fields::POSITION),
            department: text(fields::DEPARTMENT),
            created_at: raw.get(fields::CREATED_AT).and_then(parse_timestamp),
            updated_at: raw.get(fields::UPDATED_AT).and_then(parse_timestamp),
        }
    }

    /// 员工 → 原始行（字段顺序固定为 fields::ALL）
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(fields::SERIAL_NUMBER, CellValue::from(self.serial_number));
        raw.insert(fields::ID, CellValue::from(self.id.clone()));
        raw.insert(fields::FULL_NAME, CellValue::from(self.full_name.trim()));
        raw.insert(fields::POSITION, CellValue::from(self.position.clone()));
        raw.insert(fields::DEPARTMENT, CellValue::from(self.department.clone()));
        raw.insert(fields::CREATED_AT, timestamp_cell(self.created_at.as_ref()));
        raw.insert(fields::UPDATED_AT, timestamp_cell(self.updated_at.as_ref()));
        raw
    }

    /// 合并更新字段（createdAt 不变,updatedAt 刷新）
    pub fn apply_patch(&mut self, patch: &EmployeePatch, now: DateTime<Utc>) {
        if let Some(serial) = patch.serial_number {
            self.serial_number = Some(serial);
        }
        if let Some(ref id) = patch.id {
            self.id = id.trim().to_string();
        }
        if let Some(ref name) = patch.full_name {
            self.full_name = name.trim().to_string();
        }
        if let Some(ref position) = patch.position {
            self.position = position.clone();
        }
        if let Some(ref department) = patch.department {
            self.department = department.clone();
        }
        self.updated_at = Some(now);
    }

    /// 字段级校验,返回全部错误消息
    pub fn validate(&self) -> Vec<String> {
        validate_fields(&self.id, &self.full_name)
    }

    /// id 的数值视图（用于分配下一个 id）
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse::<u64>().ok()
    }
}

impl EmployeeDraft {
    /// 新建前校验（id 缺省视为合法,由仓储分配）
    pub fn validate(&self) -> Vec<String> {
        match self.id {
            Some(ref id) => validate_fields(id, &self.full_name),
            None => validate_fields("-", &self.full_name),
        }
    }
}

fn validate_fields(id: &str, full_name: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let name = full_name.trim();

    if name.is_empty() {
        errors.push(rust_i18n::t!("validation.full_name_required").to_string());
    }
    if name.chars().count() > MAX_FULL_NAME_LENGTH {
        errors.push(
            rust_i18n::t!("validation.full_name_too_long", max = MAX_FULL_NAME_LENGTH).to_string(),
        );
    }
    if id.trim().is_empty() {
        errors.push(rust_i18n::t!("validation.id_required").to_string());
    }

    errors
}

/// 时间戳 → 存储字符串（2026-01-15T08:30:00.000Z）
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn timestamp_cell(ts: Option<&DateTime<Utc>>) -> CellValue {
    ts.map(|t| CellValue::from(format_timestamp(t)))
        .unwrap_or(CellValue::Empty)
}

/// 单元格 → 时间戳（RFC 3339 字符串或 Excel 日期序列号）
pub fn parse_timestamp(value: &CellValue) -> Option<DateTime<Utc>> {
    match value {
        CellValue::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        }
        CellValue::Int(_) | CellValue::Number(_) => value.as_f64().and_then(excel_serial_to_utc),
        _ => None,
    }
}

/// Excel 日期序列号（1900 日期系统）→ UTC
fn excel_serial_to_utc(serial: f64) -> Option<DateTime<Utc>> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    let naive = epoch.checked_add_signed(chrono::Duration::milliseconds(millis))?;
    Some(Utc.from_utc_datetime(&naive))
}

/// 展示用日期（d/m/yyyy）
pub fn format_display_date(ts: &DateTime<Utc>) -> String {
    ts.format("%-d/%-m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, CellValue)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_raw_stringifies_numeric_id() {
        let record = raw(&[
            ("serialNumber", CellValue::Number(1.0)),
            ("id", CellValue::Number(42.0)),
            ("fullName", CellValue::from("  Nguyễn Văn A ")),
            ("position", CellValue::from("Nhân viên")),
        ]);

        let employee = Employee::from_raw(&record);
        assert_eq!(employee.serial_number, Some(1));
        assert_eq!(employee.id, "42");
        assert_eq!(employee.full_name, "Nguyễn Văn A");
        assert_eq!(employee.position, "Nhân viên");
        assert_eq!(employee.department, "");
    }

    #[test]
    fn test_missing_timestamps_stay_blank() {
        let record = raw(&[("id", CellValue::from("NV001")), ("fullName", CellValue::from("A"))]);

        let first = Employee::from_raw(&record);
        let second = Employee::from_raw(&record);
        assert_eq!(first.created_at, None);
        assert_eq!(first.updated_at, None);
        assert_eq!(first, second);

        // 写回时保持空单元格
        let back = first.to_raw();
        assert_eq!(back.get(fields::CREATED_AT), Some(&CellValue::Empty));
        assert_eq!(back.get(fields::UPDATED_AT), Some(&CellValue::Empty));
    }

    #[test]
    fn test_raw_round_trip_keeps_timestamps() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let employee = Employee {
            serial_number: None,
            id: "NV001".to_string(),
            full_name: "Trần Thị B".to_string(),
            position: "Trưởng phòng".to_string(),
            department: "Nhân sự".to_string(),
            created_at: Some(created),
            updated_at: Some(created + chrono::Duration::milliseconds(1500)),
        };

        let back = Employee::from_raw(&employee.to_raw());
        assert_eq!(back, employee);
    }

    #[test]
    fn test_to_raw_field_order() {
        let employee = Employee::from_draft(
            &EmployeeDraft {
                full_name: "A".to_string(),
                ..Default::default()
            },
            "1".to_string(),
            now_millis(),
        );
        let raw = employee.to_raw();
        let keys: Vec<&str> = raw.keys().collect();
        assert_eq!(keys, fields::ALL.to_vec());
    }

    #[test]
    fn test_validation_rules() {
        let mut draft = EmployeeDraft {
            id: Some("NV001".to_string()),
            full_name: "Lê Văn C".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_empty());

        draft.full_name = "   ".to_string();
        assert_eq!(draft.validate().len(), 1);

        draft.full_name = "x".repeat(MAX_FULL_NAME_LENGTH + 1);
        assert_eq!(draft.validate().len(), 1);

        // 恰好 100 个多字节字符仍合法
        draft.full_name = "ễ".repeat(MAX_FULL_NAME_LENGTH);
        assert!(draft.validate().is_empty());

        draft.id = Some("  ".to_string());
        draft.full_name = String::new();
        assert_eq!(draft.validate().len(), 2);

        draft.id = None;
        draft.full_name = "A".to_string();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_apply_patch_keeps_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let mut employee = Employee::from_draft(
            &EmployeeDraft {
                full_name: "Nguyen Van X".to_string(),
                ..Default::default()
            },
            "NV010".to_string(),
            created,
        );

        let later = created + chrono::Duration::seconds(60);
        employee.apply_patch(
            &EmployeePatch {
                full_name: Some(" Nguyen Van Y ".to_string()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(employee.full_name, "Nguyen Van Y");
        assert_eq!(employee.created_at, Some(created));
        assert_eq!(employee.updated_at, Some(later));
        assert_eq!(employee.id, "NV010");
    }

    #[test]
    fn test_parse_timestamp_accepts_excel_serial() {
        // 45306 = 2024-01-15
        let ts = parse_timestamp(&CellValue::Int(45306)).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert!(parse_timestamp(&CellValue::from("not a date")).is_none());
        assert!(parse_timestamp(&CellValue::Empty).is_none());
    }

    #[test]
    fn test_display_date_format() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        assert_eq!(format_display_date(&ts), "1/2/2024");
    }
}
