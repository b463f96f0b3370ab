use crate::config::IngestionConfig;
use crate::domain::employee::now_millis;
use crate::domain::{Employee, EmployeeDraft, EmployeePatch, RawRecord};
use crate::engine::ExcelEngine;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::info;

// ==========================================
// EmployeeRepository - 员工仓储
// ==========================================
// 存储: 工作簿中的一张工作表（经 ExcelEngine 读写）
// 并发: 写操作持有引擎写锁,读与写共用同一份配置快照
pub struct EmployeeRepository {
    engine: Arc<ExcelEngine>,
}

impl EmployeeRepository {
    pub fn new(engine: Arc<ExcelEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<ExcelEngine> {
        &self.engine
    }

    /// 读取全集并收敛为员工
    pub(super) fn load_all(&self) -> RepositoryResult<Vec<Employee>> {
        let records = self.engine.read_all()?;
        Ok(records.iter().map(Employee::from_raw).collect())
    }

    /// 按配置快照读取（调用方持有写锁）
    fn load_with(&self, config: &IngestionConfig) -> RepositoryResult<Vec<Employee>> {
        let records = self.engine.read_all_with(config)?;
        Ok(records.iter().map(Employee::from_raw).collect())
    }

    /// 按配置快照整表写回（调用方持有写锁）
    fn persist_with(
        &self,
        config: &IngestionConfig,
        employees: &[Employee],
    ) -> RepositoryResult<()> {
        let records: Vec<RawRecord> = employees.iter().map(Employee::to_raw).collect();
        self.engine.write_all_with(config, &records)?;
        Ok(())
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 新建员工
    ///
    /// # 说明
    /// - 显式给出 id 时不得与现有记录重复
    /// - 未给出 id 时分配 max(数值 id) + 1
    pub fn create(&self, draft: &EmployeeDraft) -> RepositoryResult<Employee> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(RepositoryError::ValidationError(errors));
        }

        let _guard = self.engine.lock_writes()?;
        let config = self.engine.config()?;
        let mut employees = self.load_with(&config)?;

        let id = match draft.id.as_deref().map(str::trim) {
            Some(id) => {
                if employees.iter().any(|e| e.id == id) {
                    return Err(RepositoryError::DuplicateId(id.to_string()));
                }
                id.to_string()
            }
            None => next_id(&employees)?,
        };

        let employee = Employee::from_draft(draft, id, now_millis());
        employees.push(employee.clone());
        self.persist_with(&config, &employees)?;

        info!(id = %employee.id, total = employees.len(), "员工已创建");
        Ok(employee)
    }

    /// 更新员工（合并给出的字段,createdAt 保持不变）
    pub fn update(&self, id: &str, patch: &EmployeePatch) -> RepositoryResult<Employee> {
        let id = id.trim();
        let _guard = self.engine.lock_writes()?;
        let config = self.engine.config()?;
        let mut employees = self.load_with(&config)?;

        let idx = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RepositoryError::employee_not_found(id))?;

        let mut updated = employees[idx].clone();
        let now = tick_after(now_millis(), updated.updated_at.as_ref());
        updated.apply_patch(patch, now);

        let errors = updated.validate();
        if !errors.is_empty() {
            return Err(RepositoryError::ValidationError(errors));
        }
        let collides = employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != idx && e.id == updated.id);
        if collides {
            return Err(RepositoryError::DuplicateId(updated.id));
        }

        employees[idx] = updated.clone();
        self.persist_with(&config, &employees)?;

        info!(id = %id, new_id = %updated.id, "员工已更新");
        Ok(updated)
    }

    /// 删除员工
    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let id = id.trim();
        let _guard = self.engine.lock_writes()?;
        let config = self.engine.config()?;
        let mut employees = self.load_with(&config)?;

        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(RepositoryError::employee_not_found(id));
        }

        self.persist_with(&config, &employees)?;
        info!(id = %id, total = employees.len(), "员工已删除");
        Ok(())
    }
}

/// 下一个数值 id（非数值 id 不参与；空集从 1 开始；超出 u64 上限报错）
pub(super) fn next_id(employees: &[Employee]) -> RepositoryResult<String> {
    let max = employees
        .iter()
        .filter_map(Employee::numeric_id)
        .max()
        .unwrap_or(0);
    max.checked_add(1)
        .map(|next| next.to_string())
        .ok_or_else(|| RepositoryError::IdExhausted(max.to_string()))
}

/// 保证 updatedAt 严格递增（毫秒精度下同一毫秒内的连续更新）
fn tick_after(now: DateTime<Utc>, previous: Option<&DateTime<Utc>>) -> DateTime<Utc> {
    match previous {
        Some(previous) if now <= *previous => *previous + Duration::milliseconds(1),
        _ => now,
    }
}
