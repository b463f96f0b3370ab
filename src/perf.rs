use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
    static WORKBOOK_READS: Cell<u64> = Cell::new(0);
    static WORKBOOK_WRITES: Cell<u64> = Cell::new(0);
}

/// 记录一次工作簿打开（仅在 PerfGuard 作用域内计数）
pub fn record_workbook_read() {
    bump(&WORKBOOK_READS);
}

/// 记录一次工作簿落盘
pub fn record_workbook_write() {
    bump(&WORKBOOK_WRITES);
}

fn bump(counter: &'static std::thread::LocalKey<Cell<u64>>) {
    let active = PERF_DEPTH.with(|d| d.get() > 0);
    if !active {
        return;
    }
    counter.with(|c| c.set(c.get().saturating_add(1)));
}

/// 性能统计 Guard：记录 elapsed_ms + 工作簿读取次数 + 写入次数
///
/// 使用方式：
/// ```ignore
/// let _perf = hrm_desk::perf::PerfGuard::new("list_employees");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    reads_start: u64,
    writes_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            op,
            start: Instant::now(),
            reads_start: WORKBOOK_READS.with(|c| c.get()),
            writes_start: WORKBOOK_WRITES.with(|c| c.get()),
        }
    }

    /// 当前作用域内的（读取, 写入）次数
    pub fn counts(&self) -> (u64, u64) {
        (
            WORKBOOK_READS.with(|c| c.get()).saturating_sub(self.reads_start),
            WORKBOOK_WRITES.with(|c| c.get()).saturating_sub(self.writes_start),
        )
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let (workbook_reads, workbook_writes) = self.counts();

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            workbook_reads,
            workbook_writes,
            "done"
        );

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
