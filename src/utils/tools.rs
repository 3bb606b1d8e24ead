use log::info;

/// Version d'une dépendance, injectée à la compilation par `build.rs`.
fn dependency_version(version: Option<&'static str>) -> &'static str {
    match version {
        Some(v) if !v.is_empty() => v,
        _ => "Unknown",
    }
}

/// Affiche la version du compilateur et des dépendances graphiques.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependencies");
    info!("  GL    version: {}", dependency_version(option_env!("GL")));
    info!("  GLFW  version: {}", dependency_version(option_env!("GLFW")));
    info!("  IMGUI version: {}", dependency_version(option_env!("IMGUI")));
}
