// ==========================================
// 员工花名册系统 - 工作簿读取
// ==========================================
// 职责: 工作簿 → 单元格矩阵 → 原始行
// 约定: 矩阵按绝对位置展开（A1 为 [0][0]）,
//       calamine 裁掉的前导空行/空列在此补回,保证 skipRows 与列位置语义
// ==========================================

use crate::config::IngestionConfig;
use crate::domain::{CellValue, RawRecord};
use crate::engine::error::{EngineError, EngineResult};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 单元格矩阵（行内尾部空单元格已去除）
pub type Grid = Vec<Vec<CellValue>>;

pub(crate) type Workbook = Sheets<BufReader<File>>;

/// calamine 支持的扩展名
const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 打开工作簿（文件必须存在）
pub(crate) fn open_workbook(path: &Path) -> EngineResult<Workbook> {
    if !path.exists() {
        return Err(EngineError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(EngineError::UnsupportedFormat(ext));
    }

    crate::perf::record_workbook_read();
    open_workbook_auto(path).map_err(EngineError::from)
}

/// 工作表名称列表（工作簿内顺序）
pub(crate) fn sheet_names(path: &Path) -> EngineResult<Vec<String>> {
    let workbook = open_workbook(path)?;
    Ok(workbook.sheet_names())
}

/// 解析工作表名：显式给出则必须存在,缺省取第一个
pub(crate) fn resolve_sheet(
    workbook: &Workbook,
    path: &Path,
    requested: Option<&str>,
) -> EngineResult<String> {
    let names = workbook.sheet_names();
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => names
            .into_iter()
            .find(|n| n == name)
            .ok_or_else(|| EngineError::SheetNotFound(name.to_string())),
        None => names
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::NoSheets(path.display().to_string())),
    }
}

/// 读取工作表为绝对位置矩阵
pub(crate) fn read_grid(workbook: &mut Workbook, sheet: &str) -> EngineResult<Grid> {
    let range = workbook.worksheet_range(sheet)?;
    if range.is_empty() {
        return Ok(Vec::new());
    }

    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let mut grid: Grid = vec![Vec::new(); row_offset as usize];

    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; col_offset as usize];
        cells.extend(row.iter().map(cell_from_data));
        trim_trailing_empty(&mut cells);
        grid.push(cells);
    }

    Ok(grid)
}

fn trim_trailing_empty(cells: &mut Vec<CellValue>) {
    while matches!(cells.last(), Some(CellValue::Empty)) {
        cells.pop();
    }
}

/// calamine 单元格 → CellValue（日期保留为 Excel 序列号）
pub(crate) fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::from_f64(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::from_f64(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

// ==========================================
// 表头模式: 首个非空行为表头,经 headerMapping 改名
// ==========================================
pub(crate) fn parse_with_header_row(grid: &Grid, config: &IngestionConfig) -> Vec<RawRecord> {
    let Some(header_idx) = grid.iter().position(|row| row.iter().any(|c| !c.is_blank())) else {
        return Vec::new();
    };

    // 空表头列不参与映射
    let headers: Vec<Option<String>> = grid[header_idx]
        .iter()
        .map(|cell| {
            let label = cell.to_string().trim().to_string();
            (!label.is_empty()).then(|| config.field_for_label(&label).to_string())
        })
        .collect();

    let mut records = Vec::new();
    for row in grid.iter().skip(header_idx + 1) {
        let mut record = RawRecord::new();
        for (col_idx, cell) in row.iter().enumerate() {
            if let Some(Some(field)) = headers.get(col_idx) {
                if !cell.is_blank() {
                    record.insert(field.clone(), cell.clone());
                }
            }
        }

        // 跳过完全空白的行
        if record.is_empty() {
            continue;
        }
        records.push(record);
    }

    records
}

// ==========================================
// 无表头模式: 跳过 skip_rows 行,按列位置映射字段
// ==========================================
// 空行判定只看数据列；审计列紧随数据列之后,不影响取舍
pub(crate) fn parse_positional(
    grid: &Grid,
    skip_rows: usize,
    data_fields: &[String],
    audit_fields: &[String],
) -> Vec<RawRecord> {
    let mut records = Vec::new();

    for row in grid.iter().skip(skip_rows) {
        let mut record: RawRecord = data_fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.clone(), row.get(idx).cloned().unwrap_or_default()))
            .collect();

        if record.is_blank() {
            continue;
        }

        for (offset, field) in audit_fields.iter().enumerate() {
            let cell = row.get(data_fields.len() + offset).cloned().unwrap_or_default();
            record.insert(field.clone(), cell);
        }
        records.push(record);
    }

    records
}
