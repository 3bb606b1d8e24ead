#![cfg(feature = "interactive_tests")]

use launch_countdown::countdown::Countdown;
use launch_countdown::physic_engine::config::PhysicConfig;
use launch_countdown::physic_engine::physic_engine_launch::PhysicEngineTestHelpers;
use launch_countdown::physic_engine::LaunchPhysicEngine;
use launch_countdown::renderer_engine::{Renderer, RendererConfig};
use launch_countdown::window_engine::{GlfwWindowEngine, WindowEngine, WindowSettings};
use launch_countdown::Simulator;
mod helpers;
use helpers::{
    call_log, DummyNarrator, DummyNavigator, RecordingNarrator, RecordingNavigator, TestRenderer,
};

fn window_settings() -> WindowSettings {
    WindowSettings {
        width: 800,
        height: 600,
        title: "Test Simulator".into(),
        vsync: false,
    }
}

fn physic(window: &GlfwWindowEngine) -> LaunchPhysicEngine {
    let (w, h) = window.get_framebuffer_size();
    LaunchPhysicEngine::with_seed(&PhysicConfig::default(), w as f32, h as f32, 42)
}

#[test]
fn test_renderer_called_by_simulator() -> anyhow::Result<()> {
    let log = call_log();
    let window_engine = GlfwWindowEngine::init(&window_settings())?;
    let physic_engine = physic(&window_engine);

    let mut sim = Simulator::new(
        TestRenderer::new(log.clone()),
        physic_engine,
        Countdown::default(),
        DummyNarrator,
        DummyNavigator,
        window_engine,
    );
    assert!(sim.step());
    sim.close();

    let calls: Vec<String> = log
        .borrow()
        .iter()
        .filter(|c| !c.starts_with("renderer.set_window_size"))
        .cloned()
        .collect();
    assert_eq!(calls, vec!["renderer.render_frame", "renderer.close"]);
    Ok(())
}

#[test]
fn test_simulator_with_real_renderer() -> anyhow::Result<()> {
    let window_engine = GlfwWindowEngine::init(&window_settings())?;
    let (w, h) = window_engine.get_framebuffer_size();
    let renderer = Renderer::new(w, h, &RendererConfig::default())?;
    let physic_engine = physic(&window_engine);

    let mut sim = Simulator::new(
        renderer,
        physic_engine,
        Countdown::default(),
        DummyNarrator,
        DummyNavigator,
        window_engine,
    );
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.frames(), 10);
    assert_eq!(sim.renderer_engine().frames(), 10);
    sim.close();
    Ok(())
}

#[test]
fn test_start_from_simulator_reaches_narrator() -> anyhow::Result<()> {
    let log = call_log();
    let window_engine = GlfwWindowEngine::init(&window_settings())?;
    let physic_engine = physic(&window_engine);

    let mut sim = Simulator::new(
        TestRenderer::new(log.clone()),
        physic_engine,
        Countdown::default(),
        RecordingNarrator::new(log.clone()),
        RecordingNavigator::new(log.clone()),
        window_engine,
    );
    sim.start_countdown();
    sim.start_countdown();
    sim.step();
    sim.close();

    let calls = log.borrow();
    assert_eq!(
        calls.iter().filter(|c| c.as_str() == "narrator.speak:10").count(),
        1
    );
    assert!(sim.scheduler().countdown().is_started());
    Ok(())
}
