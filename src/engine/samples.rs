// ==========================================
// 员工花名册系统 - 调试用样例文件
// ==========================================
// 用途: 人工验证两种解析模式（覆盖写入当前数据文件）
// 无表头样例: 5 行横幅（含标题行）+ 3 行数据,对应 skipRows=5
// 有表头样例: 首行表头 + 3 行数据（字段集与花名册不同）
// ==========================================

use crate::domain::CellValue;
use crate::engine::reader::Grid;

fn row(cells: &[&str]) -> Vec<CellValue> {
    cells.iter().map(|c| CellValue::from(*c)).collect()
}

fn data_row(serial: i64, cells: &[&str]) -> Vec<CellValue> {
    let mut out = vec![CellValue::Int(serial)];
    out.extend(cells.iter().map(|c| CellValue::from(*c)));
    out
}

/// 无表头样例（export_date 为 d/m/yyyy 展示日期）
pub(crate) fn sample_without_headers(export_date: &str) -> Grid {
    vec![
        row(&["DANH SÁCH NHÂN VIÊN CÔNG TY ABC"]),
        row(&["Ngày xuất:", export_date]),
        row(&["Tổng số nhân viên:", "3"]),
        row(&[""]),
        row(&["STT", "Mã NV", "Họ và tên", "Chức vụ", "Phòng ban"]),
        data_row(1, &["NV001", "Nguyễn Văn A", "Nhân viên", "IT"]),
        data_row(2, &["NV002", "Trần Thị B", "Trưởng phòng", "Nhân sự"]),
        data_row(3, &["NV003", "Lê Văn C", "Nhân viên", "Marketing"]),
    ]
}

/// 有表头样例
pub(crate) fn sample_with_headers() -> Grid {
    vec![
        row(&[
            "Họ và tên",
            "Email",
            "Số điện thoại",
            "Phòng ban",
            "Chức vụ",
            "Ngày bắt đầu",
            "Lương",
            "Trạng thái",
        ]),
        row(&[
            "Nguyễn Văn A",
            "a@company.com",
            "0123456789",
            "IT",
            "Nhân viên",
            "2024-01-15",
            "15000000",
            "Đang làm việc",
        ]),
        row(&[
            "Trần Thị B",
            "b@company.com",
            "0987654321",
            "Nhân sự",
            "Trưởng phòng",
            "2024-02-01",
            "20000000",
            "Đang làm việc",
        ]),
        row(&[
            "Lê Văn C",
            "c@company.com",
            "0111222333",
            "Marketing",
            "Nhân viên",
            "2024-03-10",
            "12000000",
            "Nghỉ phép",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_occupies_default_skip_rows() {
        let grid = sample_without_headers("1/1/2026");
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[1][1], CellValue::from("1/1/2026"));
        assert_eq!(grid[5][0], CellValue::Int(1));
        assert_eq!(grid[5][1], CellValue::from("NV001"));
    }

    #[test]
    fn test_header_sample_shape() {
        let grid = sample_with_headers();
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|r| r.len() == 8));
    }
}
