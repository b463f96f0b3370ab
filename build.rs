fn main() {
    // 仅桌面壳需要 Tauri 构建步骤（读取 tauri.conf.json）
    #[cfg(feature = "tauri-app")]
    tauri_build::build();
}
