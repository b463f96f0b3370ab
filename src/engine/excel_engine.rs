// ==========================================
// 员工花名册系统 - Excel 读写引擎
// ==========================================
// 职责: 磁盘表格 ⇄ 内存原始行（双向）+ 工作表列举/预览/导出/备份
// 红线: 写入为整表替换（非增量）,调用方传入的是全集
// 红线: 默认读取时文件/工作表缺失自动补建,返回空集
// ==========================================
// 配置: 引擎持有 IngestionConfig（RwLock）,模式切换返回新状态
// 并发: 写锁串行化 读-改-写 周期、数据源切换、表头切换与样例生成
// 并发: 写锁不可重入,持锁期间只调用 *_with 方法
// ==========================================

use crate::config::{ConfigInfo, IngestionConfig, SheetReadConfig};
use crate::domain::{CellValue, ExportRow, RawRecord, EXPORT_HEADERS};
use crate::engine::error::{EngineError, EngineResult};
use calamine::Reader;
use crate::engine::preview::{build_preview, PreviewData};
use crate::engine::reader::{self, Grid};
use crate::engine::samples;
use crate::engine::writer::{self, SheetData, COLUMN_WIDTHS};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};

/// 导出文件的工作表名
pub const EXPORT_SHEET_NAME: &str = "Employees";

// ==========================================
// ExcelEngine
// ==========================================
pub struct ExcelEngine {
    config: RwLock<IngestionConfig>,
    write_lock: Mutex<()>,
}

impl ExcelEngine {
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            config: RwLock::new(config),
            write_lock: Mutex::new(()),
        }
    }

    /// 获取数据文件写锁
    pub(crate) fn lock_writes(&self) -> EngineResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| EngineError::LockError(e.to_string()))
    }

    // ==========================================
    // 配置
    // ==========================================

    /// 当前配置副本
    pub fn config(&self) -> EngineResult<IngestionConfig> {
        self.config
            .read()
            .map(|c| c.clone())
            .map_err(|e| EngineError::LockError(e.to_string()))
    }

    /// 当前配置快照
    pub fn config_info(&self) -> EngineResult<ConfigInfo> {
        Ok(self.config()?.snapshot())
    }

    /// 切换表头模式,返回切换后的 hasHeaderRow
    pub fn toggle_header_mode(&self) -> EngineResult<bool> {
        let _guard = self.lock_writes()?;
        let mut config = self
            .config
            .write()
            .map_err(|e| EngineError::LockError(e.to_string()))?;
        config.has_header_row = !config.has_header_row;
        info!(has_header_row = config.has_header_row, "表头模式已切换");
        Ok(config.has_header_row)
    }

    /// 把已预览的文件/工作表提交为当前数据源（无表头模式）
    pub fn apply_data_source(&self, source: &SheetReadConfig) -> EngineResult<ConfigInfo> {
        let workbook = reader::open_workbook(&source.file_path)?;
        let sheet = reader::resolve_sheet(&workbook, &source.file_path, source.sheet_name.as_deref())?;
        drop(workbook);

        let _guard = self.lock_writes()?;
        let mut config = self
            .config
            .write()
            .map_err(|e| EngineError::LockError(e.to_string()))?;
        config.file_path = source.file_path.clone();
        config.sheet_name = sheet;
        config.skip_rows = source.skip_rows;
        config.has_header_row = false;

        info!(
            file_path = %config.file_path.display(),
            sheet_name = %config.sheet_name,
            skip_rows = config.skip_rows,
            "数据源已切换"
        );
        Ok(config.snapshot())
    }

    // ==========================================
    // 读取
    // ==========================================

    /// 按当前配置读取全部原始行
    pub fn read_all(&self) -> EngineResult<Vec<RawRecord>> {
        let _guard = self.lock_writes()?;
        let config = self.config()?;
        self.read_all_with(&config)
    }

    /// 按给定配置快照读取（调用方持有写锁）
    pub(crate) fn read_all_with(&self, config: &IngestionConfig) -> EngineResult<Vec<RawRecord>> {
        let path = config.file_path.as_path();

        if !path.exists() {
            warn!(path = %path.display(), "数据文件不存在,创建空工作簿");
            writer::save_workbook(path, &[SheetData::empty(config.sheet_name.as_str())])?;
            return Ok(Vec::new());
        }

        let mut workbook = reader::open_workbook(path)?;
        if !workbook.sheet_names().contains(&config.sheet_name) {
            drop(workbook);
            warn!(sheet = %config.sheet_name, "工作表不存在,追加空工作表");
            let mut sheets = writer::load_all_sheets(path)?;
            sheets.push(SheetData::empty(config.sheet_name.as_str()));
            writer::save_workbook(path, &sheets)?;
            return Ok(Vec::new());
        }

        let grid = reader::read_grid(&mut workbook, &config.sheet_name)?;
        let records = if config.has_header_row {
            debug!("解析策略: 表头模式");
            reader::parse_with_header_row(&grid, config)
        } else {
            debug!(skip_rows = config.skip_rows, "解析策略: 无表头模式");
            reader::parse_positional(
                &grid,
                config.skip_rows,
                &config.custom_headers,
                &config.audit_fields(),
            )
        };

        info!(
            sheet = %config.sheet_name,
            records = records.len(),
            "已读取数据"
        );
        Ok(records)
    }

    /// 按显式配置读取（无表头模式,takeRows>0 时截断）
    pub fn read_with_config(&self, source: &SheetReadConfig) -> EngineResult<Vec<RawRecord>> {
        let config = self.config()?;
        let mut workbook = reader::open_workbook(&source.file_path)?;
        let sheet = reader::resolve_sheet(&workbook, &source.file_path, source.sheet_name.as_deref())?;
        let grid = reader::read_grid(&mut workbook, &sheet)?;

        let mut records =
            reader::parse_positional(&grid, source.skip_rows, &config.custom_headers, &[]);
        if source.take_rows > 0 {
            records.truncate(source.take_rows);
        }

        debug!(
            file_path = %source.file_path.display(),
            sheet = %sheet,
            records = records.len(),
            "已按指定配置读取"
        );
        Ok(records)
    }

    /// 工作表名称列表
    pub fn list_sheets(&self, path: &Path) -> EngineResult<Vec<String>> {
        reader::sheet_names(path)
    }

    /// 原始行预览
    pub fn preview(&self, source: &SheetReadConfig) -> EngineResult<PreviewData> {
        let mut workbook = reader::open_workbook(&source.file_path)?;
        let sheet = reader::resolve_sheet(&workbook, &source.file_path, source.sheet_name.as_deref())?;
        let grid = reader::read_grid(&mut workbook, &sheet)?;

        let echo = SheetReadConfig {
            sheet_name: Some(sheet),
            ..source.clone()
        };
        Ok(build_preview(&grid, echo))
    }

    // ==========================================
    // 写入
    // ==========================================

    /// 用全集整表替换当前工作表
    pub fn write_all(&self, records: &[RawRecord]) -> EngineResult<()> {
        let _guard = self.lock_writes()?;
        let config = self.config()?;
        self.write_all_with(&config, records)
    }

    /// 按给定配置快照写入（调用方持有写锁）
    pub(crate) fn write_all_with(
        &self,
        config: &IngestionConfig,
        records: &[RawRecord],
    ) -> EngineResult<()> {
        let path = config.file_path.as_path();

        let mut sheets = writer::load_all_sheets(path)?;
        let rows = if config.has_header_row {
            layout_with_header_row(records, config)
        } else {
            let banner: Grid = sheets
                .iter()
                .find(|s| s.name == config.sheet_name)
                .map(|s| s.rows.iter().take(config.skip_rows).cloned().collect())
                .unwrap_or_default();
            layout_positional(records, config, banner)
        };

        let mut sheet = SheetData::new(config.sheet_name.as_str(), rows);
        sheet.column_widths = COLUMN_WIDTHS.to_vec();
        writer::upsert_sheet(&mut sheets, sheet);
        writer::save_workbook(path, &sheets)?;

        info!(
            sheet = %config.sheet_name,
            records = records.len(),
            "已写入数据"
        );
        Ok(())
    }

    /// 导出到新文件（不得覆盖当前数据文件）
    pub fn export(&self, rows: &[ExportRow], dest: &Path) -> EngineResult<()> {
        let config = self.config()?;
        if same_file(dest, &config.file_path) {
            return Err(EngineError::ExportTargetIsSource(dest.display().to_string()));
        }

        let mut grid: Grid = Vec::with_capacity(rows.len() + 1);
        grid.push(EXPORT_HEADERS.iter().map(|h| CellValue::from(*h)).collect());
        grid.extend(rows.iter().map(ExportRow::to_cells));

        let mut sheet = SheetData::new(EXPORT_SHEET_NAME, grid);
        sheet.bold_header = true;
        writer::save_workbook(dest, &[sheet])?;

        info!(dest = %dest.display(), rows = rows.len(), "已导出");
        Ok(())
    }

    /// 备份当前数据文件到同目录（backup_<时间戳>_<文件名>）
    pub fn backup(&self) -> EngineResult<PathBuf> {
        let _guard = self.lock_writes()?;
        let config = self.config()?;
        let path = config.file_path.as_path();
        if !path.exists() {
            return Err(EngineError::FileNotFound(path.display().to_string()));
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ");
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let backup_path = path.with_file_name(format!("backup_{}_{}", timestamp, file_name));

        std::fs::copy(path, &backup_path)
            .map_err(|e| EngineError::FileWriteError(format!("{}: {}", backup_path.display(), e)))?;

        info!(backup = %backup_path.display(), "已创建备份");
        Ok(backup_path)
    }

    // ==========================================
    // 调试样例
    // ==========================================

    /// 生成无表头样例（覆盖当前数据文件）
    pub fn create_sample_without_headers(&self) -> EngineResult<String> {
        let _guard = self.lock_writes()?;
        let config = self.config()?;
        let today = chrono::Local::now().format("%-d/%-m/%Y").to_string();
        let sheet = SheetData::new(
            config.sheet_name.as_str(),
            samples::sample_without_headers(&today),
        );
        writer::save_workbook(&config.file_path, &[sheet])?;
        Ok(rust_i18n::t!("sample.created_without_headers").to_string())
    }

    /// 生成有表头样例（覆盖当前数据文件）
    pub fn create_sample_with_headers(&self) -> EngineResult<String> {
        let _guard = self.lock_writes()?;
        let config = self.config()?;
        let sheet = SheetData::new(config.sheet_name.as_str(), samples::sample_with_headers());
        writer::save_workbook(&config.file_path, &[sheet])?;
        Ok(rust_i18n::t!("sample.created_with_headers").to_string())
    }
}

/// 表头布局: 首条记录的字段顺序决定列,表头文字取反向映射
fn layout_with_header_row(records: &[RawRecord], config: &IngestionConfig) -> Grid {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let keys: Vec<&str> = first.keys().collect();

    let mut grid: Grid = Vec::with_capacity(records.len() + 1);
    grid.push(
        keys.iter()
            .map(|k| CellValue::from(config.label_for_field(k)))
            .collect(),
    );
    for record in records {
        grid.push(
            keys.iter()
                .map(|k| record.get(k).cloned().unwrap_or_default())
                .collect(),
        );
    }
    grid
}

/// 无表头布局: 保留横幅行（不足 skipRows 补空行）,数据按 positional_fields 排列
fn layout_positional(records: &[RawRecord], config: &IngestionConfig, mut banner: Grid) -> Grid {
    banner.resize(config.skip_rows, Vec::new());
    let columns = config.positional_fields();

    let mut grid = banner;
    grid.reserve(records.len());
    for record in records {
        grid.push(
            columns
                .iter()
                .map(|c| record.get(c).cloned().unwrap_or_default())
                .collect(),
        );
    }
    grid
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}
