use eframe::egui;
use log::error;

use optback::app::App;
use optback::share;
use optback::ui::constants;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ロガーを初期化する
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    log::info!("Starting OptBack application");

    // 共有リンクが引数で渡されていれば入力を復元する
    let restored_input = std::env::args().nth(1).and_then(|arg| {
        let restored = share::restore_from_link(&arg);
        if restored.is_none() {
            log::warn!("Could not restore input text from argument '{}'", arg);
        }
        restored
    });

    // アプリケーションの設定を作成
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            constants::DEFAULT_WIDTH,
            constants::DEFAULT_HEIGHT,
        )),
        vsync: true,
        min_window_size: Some(egui::vec2(400.0, 300.0)),
        resizable: true,
        ..Default::default()
    };

    // アプリケーションを実行
    let result = eframe::run_native(
        constants::APP_TITLE,
        options,
        Box::new(move |cc| {
            Box::new(App::new(cc, restored_input).expect("Failed to create app"))
        }),
    );

    if let Err(err) = result {
        error!("Application error: {}", err);
        return Err(Box::new(err));
    }

    Ok(())
}
