use temp_dir::TempDir;

use optback::config::ConfigManager;

#[test]
fn test_default_settings_written_on_first_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let manager = ConfigManager::from_path(path.clone()).unwrap();

    // 初回起動でデフォルト設定がファイルに書き出されること
    assert!(path.exists());
    assert_eq!(manager.get_settings().default_input, "˙´¬¬ø");
    assert!(manager.get_settings().dark_mode);
}

#[test]
fn test_settings_survive_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    // 設定を変更して保存
    {
        let mut manager = ConfigManager::from_path(path.clone()).unwrap();
        let mut settings = manager.get_settings().clone();
        settings.share_base_url = "https://example.org/".to_string();
        settings.default_input = "´¨ ∫å†å".to_string();
        settings.dark_mode = false;
        manager.update_settings(settings).unwrap();
    }

    // 別のマネージャーで読み直しても同じ値になること
    let manager = ConfigManager::from_path(path).unwrap();
    assert_eq!(manager.get_settings().share_base_url, "https://example.org/");
    assert_eq!(manager.get_settings().default_input, "´¨ ∫å†å");
    assert!(!manager.get_settings().dark_mode);
}

#[test]
fn test_save_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.json");

    let manager = ConfigManager::from_path(path.clone()).unwrap();
    manager.save().unwrap();

    assert!(path.exists());
}
