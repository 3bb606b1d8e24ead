use glfw::{Action, CursorMode, Key};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::countdown::Countdown;
use crate::narration_engine::Narrator;
use crate::navigation::Navigator;
use crate::physic_engine::{config::PhysicConfig, PhysicEngine, Vec2};
use crate::renderer_engine::{RendererConfig, RendererEngine};
use crate::scheduler::FrameScheduler;
use crate::window_engine::WindowEngine;

pub const PHYSIC_CONFIG_PATH: &str = "assets/config/physic.toml";
pub const RENDERER_CONFIG_PATH: &str = "assets/config/renderer.toml";

/// Lissage de la moyenne exponentielle des FPS
const FPS_EMA_ALPHA: f32 = 0.15;
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle principale : évènements fenêtre → orchestrateur → rendu → HUD.
pub struct Simulator<R, P, N, V, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    N: Narrator,
    V: Navigator,
    W: WindowEngine,
{
    renderer_engine: R,
    scheduler: FrameScheduler<P, N, V>,
    window_engine: W,

    frames: u64,
    last_time: Instant,
    content_scale: (f32, f32),

    fps_avg: f32,
    last_log: Instant,
    particles_drawn: usize,
    first_frame: bool,
}

impl<R, P, N, V, W> Simulator<R, P, N, V, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    N: Narrator,
    V: Navigator,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        physic_engine: P,
        countdown: Countdown,
        narrator: N,
        navigator: V,
        mut window_engine: W,
    ) -> Self {
        if renderer_engine.config().show_custom_cursor {
            window_engine.set_cursor_mode(CursorMode::Hidden);
        }
        let content_scale = window_engine.get_content_scale();

        Self {
            renderer_engine,
            scheduler: FrameScheduler::new(physic_engine, countdown, narrator, navigator),
            window_engine,
            frames: 0,
            last_time: Instant::now(),
            content_scale,
            fps_avg: 0.0,
            last_log: Instant::now(),
            particles_drawn: 0,
            first_frame: true,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.last_time = Instant::now();
        while self.step() {}
        Ok(())
    }

    /// Une frame complète. Renvoie `false` quand la fenêtre doit se fermer.
    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() || !self.scheduler.is_running() {
            return false;
        }

        self.handle_window_events();

        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        let report = self.scheduler.advance(delta);
        if report.redirected() && self.renderer_engine.config().close_on_redirect {
            info!("👋 Redirect issued, closing window");
            self.window_engine.set_should_close(true);
        }

        self.particles_drawn = self
            .renderer_engine
            .render_frame(self.scheduler.physic_engine(), self.scheduler.elapsed());

        self.draw_hud();
        self.update_fps(delta);

        self.window_engine.swap_buffers();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }
        true
    }

    fn handle_window_events(&mut self) {
        self.window_engine.poll_events();

        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();
        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(w, h) => {
                    self.renderer_engine.set_window_size(w, h);
                    self.scheduler
                        .physic_engine_mut()
                        .set_window_size(w as f32, h as f32);
                    self.content_scale = self.window_engine.get_content_scale();
                    info!("🖥️ Window resized: {} x {}", w, h);
                }
                glfw::WindowEvent::CursorPos(x, y) => {
                    let pointer = Vec2::new(
                        x as f32 * self.content_scale.0,
                        y as f32 * self.content_scale.1,
                    );
                    self.scheduler.physic_engine_mut().set_pointer(Some(pointer));
                    self.renderer_engine.set_pointer(pointer.x, pointer.y);
                }
                glfw::WindowEvent::CursorEnter(false) => {
                    self.scheduler.physic_engine_mut().set_pointer(None);
                }
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window_engine.set_should_close(true);
                }
                glfw::WindowEvent::Key(Key::Space | Key::Enter, _, Action::Press, _) => {
                    self.start_countdown();
                }
                glfw::WindowEvent::Key(Key::S, _, Action::Press, _) => {
                    self.reload_shaders();
                }
                glfw::WindowEvent::Key(Key::R, _, Action::Press, _) => {
                    self.reload_config();
                }
                _ => {}
            }
            let imgui_system = self.window_engine.get_imgui_system_mut();
            imgui_system
                .glfw
                .handle_event(&mut imgui_system.context, &event);
        }
    }

    fn draw_hud(&mut self) {
        let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
        let ui = imgui_system.glfw.frame(window, &mut imgui_system.context);
        let actions = self.renderer_engine.hud().draw(
            ui,
            self.scheduler.physic_engine(),
            self.scheduler.countdown(),
        );
        let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
        imgui_system.glfw.draw(&mut imgui_system.context, window);

        self.scheduler
            .physic_engine_mut()
            .set_hovering(actions.hovering_button);
        if actions.launch_clicked {
            self.start_countdown();
        }
    }

    fn update_fps(&mut self, delta: f32) {
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        self.fps_avg = if self.frames <= 1 {
            fps
        } else {
            FPS_EMA_ALPHA * fps + (1.0 - FPS_EMA_ALPHA) * self.fps_avg
        };

        if self.last_log.elapsed() >= FPS_LOG_INTERVAL {
            info!(
                "📊 FPS moyen (EMA): {:.2} | particles drawn: {} | phase: {:?}",
                self.fps_avg,
                self.particles_drawn,
                self.scheduler.phase()
            );
            self.last_log = Instant::now();
        }
    }

    pub fn start_countdown(&mut self) {
        if !self.scheduler.start() {
            debug!("Launch ignored, countdown already running");
        }
    }

    pub fn reload_config(&mut self) {
        match PhysicConfig::from_file(PHYSIC_CONFIG_PATH) {
            Ok(physic_config) => {
                if self
                    .scheduler
                    .physic_engine_mut()
                    .reload_config(&physic_config)
                {
                    info!("✅ Physic config reloaded");
                }
            }
            Err(e) => warn!("⚠️ Physic config not reloaded: {:#}", e),
        }
        match RendererConfig::from_file(RENDERER_CONFIG_PATH) {
            Ok(renderer_config) => {
                self.renderer_engine.apply_config(&renderer_config);
                info!("✅ Renderer config reloaded");
            }
            Err(e) => warn!("⚠️ Renderer config not reloaded: {:#}", e),
        }
    }

    pub fn reload_shaders(&mut self) {
        match self.renderer_engine.reload_shaders() {
            Ok(()) => info!("✅ Shaders reloaded successfully"),
            Err(e) => warn!("❌ Shader reload failed:\n{:#}", e),
        }
    }

    pub fn close(&mut self) {
        self.scheduler.close();
        self.renderer_engine.close();
        info!("🏁 Simulator closed after {} frames", self.frames);
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn scheduler(&self) -> &FrameScheduler<P, N, V> {
        &self.scheduler
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
