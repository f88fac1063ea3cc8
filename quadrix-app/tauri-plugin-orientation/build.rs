const COMMANDS: &[&str] = &["start", "stop", "fullscreen_on", "fullscreen_off"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .build();
}
