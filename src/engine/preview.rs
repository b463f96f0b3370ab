// ==========================================
// 员工花名册系统 - 数据预览
// ==========================================
// 职责: 候选文件/工作表的有界原始行样本（不解释表头）
// ==========================================

use crate::config::SheetReadConfig;
use crate::domain::CellValue;
use crate::engine::reader::Grid;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    /// 截取的行（已补齐为 shown_columns 宽）
    pub rows: Vec<Vec<CellValue>>,
    /// 源工作表总行数（含跳过的行）
    pub total_rows: usize,
    /// 源工作表最宽行的列数
    pub total_columns: usize,
    pub shown_rows: usize,
    pub shown_columns: usize,
    /// 实际使用的配置（sheetName 已解析）
    pub config: SheetReadConfig,
}

/// 从矩阵截取预览（take_rows=0 表示不截断）
pub(crate) fn build_preview(grid: &Grid, config: SheetReadConfig) -> PreviewData {
    let total_rows = grid.len();
    let total_columns = grid.iter().map(Vec::len).max().unwrap_or(0);

    let take = if config.take_rows > 0 {
        config.take_rows
    } else {
        usize::MAX
    };
    let mut rows: Vec<Vec<CellValue>> = grid
        .iter()
        .skip(config.skip_rows)
        .take(take)
        .cloned()
        .collect();

    let shown_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(shown_columns, CellValue::Empty);
    }

    PreviewData {
        shown_rows: rows.len(),
        rows,
        total_rows,
        total_columns,
        shown_columns,
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(skip_rows: usize, take_rows: usize) -> SheetReadConfig {
        SheetReadConfig {
            file_path: PathBuf::from("x.xlsx"),
            sheet_name: Some("Masterlist".to_string()),
            skip_rows,
            take_rows,
        }
    }

    fn grid() -> Grid {
        vec![
            vec![CellValue::from("banner")],
            vec![CellValue::Int(1), CellValue::from("NV001")],
            vec![CellValue::Int(2), CellValue::from("NV002"), CellValue::from("C")],
            vec![
                CellValue::Int(3),
                CellValue::from("NV003"),
                CellValue::from("C"),
                CellValue::from("D"),
            ],
        ]
    }

    #[test]
    fn test_skip_and_take() {
        let preview = build_preview(&grid(), config(1, 2));
        assert_eq!(preview.total_rows, 4);
        assert_eq!(preview.total_columns, 4);
        assert_eq!(preview.shown_rows, 2);
        // 列数取截取片段的最宽行
        assert_eq!(preview.shown_columns, 3);
        assert!(preview.rows.iter().all(|r| r.len() == 3));
        assert_eq!(preview.rows[0][2], CellValue::Empty);
    }

    #[test]
    fn test_zero_take_means_all() {
        let preview = build_preview(&grid(), config(1, 0));
        assert_eq!(preview.shown_rows, 3);
        assert_eq!(preview.shown_columns, 4);
    }

    #[test]
    fn test_skip_past_end() {
        let preview = build_preview(&grid(), config(10, 5));
        assert_eq!(preview.shown_rows, 0);
        assert_eq!(preview.shown_columns, 0);
        assert_eq!(preview.total_rows, 4);
    }
}
