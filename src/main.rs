use anyhow::Result;
use log::{info, warn};
use std::fmt::Debug;

use launch_countdown::countdown::{Countdown, CountdownConfig};
use launch_countdown::narration_engine::{CommandNarrator, NarrationSettings};
use launch_countdown::navigation::SystemNavigator;
use launch_countdown::physic_engine::{config::PhysicConfig, LaunchPhysicEngine};
use launch_countdown::renderer_engine::{Renderer, RendererConfig};
use launch_countdown::simulator::{PHYSIC_CONFIG_PATH, RENDERER_CONFIG_PATH};
use launch_countdown::utils::show_rust_core_dependencies;
use launch_countdown::window_engine::{GlfwWindowEngine, WindowEngine, WindowSettings};
use launch_countdown::Simulator;

const COUNTDOWN_CONFIG_PATH: &str = "assets/config/countdown.toml";
const NARRATION_CONFIG_PATH: &str = "assets/config/narration.toml";

/// Charge une configuration ; valeurs par défaut (avec avertissement) en cas d'échec.
fn load_config<T, F>(path: &str, loader: F) -> T
where
    T: Default + Debug,
    F: FnOnce(&str) -> Result<T>,
{
    match loader(path) {
        Ok(config) => {
            info!("Config loaded from {}:\n{:#?}", path, config);
            config
        }
        Err(e) => {
            warn!("⚠️ Could not load {} ({:#}), using defaults", path, e);
            T::default()
        }
    }
}

/// Main entry point for the launch countdown show.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting launch countdown...");
    show_rust_core_dependencies();

    let physic_config = load_config(PHYSIC_CONFIG_PATH, PhysicConfig::from_file);
    let countdown_config = load_config(COUNTDOWN_CONFIG_PATH, CountdownConfig::from_file);
    let narration_settings = load_config(NARRATION_CONFIG_PATH, NarrationSettings::from_file);
    let renderer_config = load_config(RENDERER_CONFIG_PATH, RendererConfig::from_file);

    // 1. Window & GL context
    let window_engine = GlfwWindowEngine::init(&WindowSettings {
        width: renderer_config.window_width,
        height: renderer_config.window_height,
        title: renderer_config.title.clone(),
        vsync: renderer_config.vsync,
    })?;
    let (fb_width, fb_height) = window_engine.get_framebuffer_size();

    // 2. Renderer (le contexte GL est prêt)
    let renderer_engine = Renderer::new(fb_width, fb_height, &renderer_config)?;

    // 3. Simulation, narration, navigation
    let physic_engine = LaunchPhysicEngine::new(&physic_config, fb_width as f32, fb_height as f32);
    let countdown = Countdown::new(countdown_config);
    let narrator = CommandNarrator::new(narration_settings);
    let navigator = SystemNavigator::new();

    let mut simulator = Simulator::new(
        renderer_engine,
        physic_engine,
        countdown,
        narrator,
        navigator,
        window_engine,
    );
    info!("🎬 Press LAUNCH (or Space) to start the countdown");

    let result = simulator.run();
    simulator.close();
    result
}
