// ==========================================
// 员工花名册系统 - 员工数据仓储
// ==========================================
// 红线: id 全集唯一,所有写入都是读全集 → 改内存 → 整表写回
// 红线: 写入周期由 write_lock 串行化,避免并发命令丢失更新
// ==========================================

mod core;
mod queries;


pub use core::EmployeeRepository;
