// ==========================================
// 员工花名册系统 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// 约定: 所有命令返回 { success, data?, error?, message?, canceled? } 信封
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod config;
mod employee;
mod file;

pub use config::*;
pub use employee::*;
pub use file::*;
