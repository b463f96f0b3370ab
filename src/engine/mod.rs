// ==========================================
// 员工花名册系统 - Excel 引擎层
// ==========================================
// 职责: 工作簿读写、数据源预览、导出与备份
// 红线: 引擎只认原始行（RawRecord）,不做员工业务校验
// ==========================================

pub mod error;
pub mod excel_engine;
pub mod preview;
pub mod reader;
pub mod samples;
pub mod writer;


pub use error::{EngineError, EngineResult};
pub use excel_engine::{ExcelEngine, EXPORT_SHEET_NAME};
pub use preview::PreviewData;
pub use reader::Grid;
pub use writer::COLUMN_WIDTHS;
