const COMMANDS: &[&str] = &["get_launch_props"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .build();
}
