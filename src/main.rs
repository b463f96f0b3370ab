// ==========================================
// 员工花名册系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + Excel
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use hrm_desk::app::tauri_commands::*;
    use hrm_desk::app::{get_default_config_path, AppState};

    // 初始化日志系统
    hrm_desk::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", hrm_desk::APP_NAME);
    tracing::info!("系统版本: {}", hrm_desk::VERSION);
    tracing::info!("==================================================");

    let config_path = get_default_config_path();
    tracing::info!("使用配置文件: {}", config_path.display());

    let app_state = match AppState::new(config_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("无法初始化AppState: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    let result = tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 员工相关命令 (11个)
            // ==========================================
            get_all_employees,
            get_employee_by_id,
            create_employee,
            update_employee,
            delete_employee,
            search_employees,
            filter_employees,
            export_employees,
            backup_data,
            get_statistics,
            validate_employee,

            // ==========================================
            // 配置与调试命令 (5个)
            // ==========================================
            get_app_config,
            get_config_info,
            toggle_header_mode,
            create_sample_with_headers,
            create_sample_without_headers,

            // ==========================================
            // 数据源文件命令 (5个)
            // ==========================================
            select_file,
            get_sheets,
            preview_data,
            read_with_config,
            apply_data_source,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("启动Tauri应用失败: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", hrm_desk::APP_NAME);
    println!("系统版本: {}", hrm_desk::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use hrm_desk::app::AppState;");
}
