// ==========================================
// 员工花名册系统 - 单元格值与原始行
// ==========================================
// 职责: 表格单元格的中立表示（读写两个方向共用）
// 约定: 原始行保持字段插入顺序,写回时按此顺序排列列
// ==========================================

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ==========================================
// CellValue - 单元格值
// ==========================================
// 序列化: Empty → null, 其余为原生 JSON 值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Number(f64),
    String(String),
}

impl CellValue {
    /// 去空白后是否为空
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 数值视图（整数或整数字符串）
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            CellValue::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// 浮点视图（用于 Excel 日期序列号）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 把整数值的浮点数归一为 Int（Excel 数字都以 f64 存储）
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 {
            CellValue::Int(n as i64)
        } else {
            CellValue::Number(n)
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<Option<i64>> for CellValue {
    fn from(v: Option<i64>) -> Self {
        v.map(CellValue::Int).unwrap_or(CellValue::Empty)
    }
}

// ==========================================
// RawRecord - 原始行（字段名 → 单元格值）
// ==========================================
// 红线: 类型尚未收敛为员工模型,收敛在仓储层完成
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, CellValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入字段；已存在则原位覆盖（保持原插入顺序）
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// 字段名（插入顺序）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 所有字段去空白后均为空
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_blank())
    }
}

impl FromIterator<(String, CellValue)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
