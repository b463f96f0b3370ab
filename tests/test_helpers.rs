// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时数据文件、应用状态、夹具工作簿
// ==========================================
#![allow(dead_code)]

use hrm_desk::app::AppState;
use hrm_desk::config::{ConfigManager, Settings};
use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 创建临时目录并返回数据文件路径（文件尚不存在）
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 数据文件路径
pub fn create_test_workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("MASTERLIST_FV.xlsx");
    (dir, path)
}

/// 以默认配置（无表头,skipRows=5）创建 AppState
pub fn create_test_state(dir: &TempDir, data_path: &Path) -> AppState {
    let mut settings = Settings::default();
    settings.excel.file_path = data_path.to_path_buf();
    AppState::with_settings(settings, ConfigManager::new(dir.path().join("config.json")))
}

/// 写出一个只含字符串/数字的单表工作簿
///
/// 单元格以 "#" 开头的按数字写入（"#1" → 1）
pub fn write_fixture_workbook(
    path: &Path,
    sheet: &str,
    rows: &[Vec<&str>],
) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet)?;

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            match cell.strip_prefix('#') {
                Some(num) => {
                    worksheet.write_number(r as u32, c as u16, num.parse::<f64>()?)?;
                }
                None => {
                    worksheet.write_string(r as u32, c as u16, *cell)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// 5 行横幅 + N 行花名册数据（对应默认 skipRows=5）
pub fn masterlist_rows(data: &[(&'static str, &'static str, &'static str, &'static str, &'static str)]) -> Vec<Vec<&'static str>> {
    let mut rows = vec![
        vec!["DANH SÁCH NHÂN VIÊN"],
        vec!["Ngày xuất:", "1/1/2026"],
        vec![],
        vec![],
        vec!["STT", "Mã NV", "Họ và tên", "Chức vụ", "Phòng ban"],
    ];
    for (serial, id, name, position, department) in data {
        rows.push(vec![*serial, *id, *name, *position, *department]);
    }
    rows
}
