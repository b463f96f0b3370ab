// ==========================================
// 员工花名册系统 - 工作簿写入
// ==========================================
// 职责: 单元格矩阵 → xlsx 文件
// 约定: 整本重写（其他工作表只保留值,不保留格式/公式）
// 约定: 先写同目录临时文件再 rename,失败时原文件保持不变
// ==========================================

use calamine::Reader;
use crate::domain::CellValue;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::reader::{self, Grid};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// 数据表列宽提示（字符宽度）
pub const COLUMN_WIDTHS: [f64; 11] = [
    5.0, 25.0, 30.0, 15.0, 20.0, 15.0, 15.0, 12.0, 15.0, 20.0, 20.0,
];

// ==========================================
// SheetData - 待写出的工作表
// ==========================================
#[derive(Debug, Clone, Default)]
pub(crate) struct SheetData {
    pub name: String,
    pub rows: Grid,
    pub column_widths: Vec<f64>,
    /// 首行加粗+灰底（导出表头）
    pub bold_header: bool,
}

impl SheetData {
    pub fn new(name: impl Into<String>, rows: Grid) -> Self {
        Self {
            name: name.into(),
            rows,
            ..Default::default()
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// 读取工作簿全部工作表（用于整本重写时保留其他工作表）
pub(crate) fn load_all_sheets(path: &Path) -> EngineResult<Vec<SheetData>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut workbook = reader::open_workbook(path)?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let rows = reader::read_grid(&mut workbook, &name)?;
        sheets.push(SheetData::new(name, rows));
    }
    Ok(sheets)
}

/// 替换同名工作表,不存在则追加到末尾
pub(crate) fn upsert_sheet(sheets: &mut Vec<SheetData>, sheet: SheetData) {
    match sheets.iter_mut().find(|s| s.name == sheet.name) {
        Some(slot) => *slot = sheet,
        None => sheets.push(sheet),
    }
}

/// 写出整本工作簿
pub(crate) fn save_workbook(path: &Path, sheets: &[SheetData]) -> EngineResult<()> {
    if sheets.is_empty() {
        return Err(EngineError::InvalidConfig(
            "workbook must contain at least one sheet".to_string(),
        ));
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xCCCCCC));

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.as_str())?;

        for (col, width) in sheet.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let format = (sheet.bold_header && row_idx == 0).then_some(&header_format);
            for (col_idx, cell) in row.iter().enumerate() {
                write_cell(worksheet, row_idx as u32, col_idx as u16, cell, format)?;
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    write_atomically(path, &buffer)?;

    tracing::debug!(
        path = %path.display(),
        sheets = sheets.len(),
        bytes = buffer.len(),
        "工作簿已写出"
    );
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    format: Option<&Format>,
) -> EngineResult<()> {
    match (cell, format) {
        (CellValue::Empty, _) => {}
        (CellValue::String(s), _) if s.is_empty() => {}
        (CellValue::String(s), Some(f)) => {
            worksheet.write_string_with_format(row, col, s.as_str(), f)?;
        }
        (CellValue::String(s), None) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        (CellValue::Int(i), _) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        (CellValue::Number(n), _) => {
            worksheet.write_number(row, col, *n)?;
        }
        (CellValue::Bool(b), _) => {
            worksheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}

/// 同目录临时文件 + rename
fn write_atomically(path: &Path, bytes: &[u8]) -> EngineResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| EngineError::FileWriteError(format!("{}: {}", parent.display(), e)))?;
        }
    }

    let tmp = temp_sibling(path);
    std::fs::write(&tmp, bytes)
        .map_err(|e| EngineError::FileWriteError(format!("{}: {}", tmp.display(), e)))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(EngineError::FileWriteError(format!(
            "{}: {}",
            path.display(),
            e
        )));
    }

    crate::perf::record_workbook_write();
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook.xlsx".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
