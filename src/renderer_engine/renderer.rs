use anyhow::{anyhow, Result};
use log::{debug, info};

use crate::physic_engine::PhysicEngine;
use crate::renderer_engine::{
    background::ShaderBackground, config::RendererConfig, hud::Hud,
    particle_renderer::ParticleRenderer, RendererEngine,
};

/// Renderer OpenGL du show.
///
/// Ordre de dessin : clear → fond shader → confettis → étincelles →
/// explosions. Le HUD imgui passe par-dessus.
pub struct Renderer {
    config: RendererConfig,
    background: ShaderBackground,
    particles: ParticleRenderer,
    hud: Hud,

    window_size: (i32, i32),
    frames: u64,
}

impl Renderer {
    /// Le contexte OpenGL doit être courant (cf. `GlfwWindowEngine::init`).
    pub fn new(width: i32, height: i32, config: &RendererConfig) -> Result<Self> {
        if !gl::CreateProgram::is_loaded() {
            return Err(anyhow!("OpenGL functions not loaded, create the window first"));
        }

        let (background, particles) = unsafe {
            gl::Viewport(0, 0, width, height);
            (
                ShaderBackground::new(width as f32, height as f32),
                ParticleRenderer::new(),
            )
        };
        info!(
            "🎨 Renderer ready ({}x{}), background shader {}",
            width,
            height,
            if background.is_enabled() { "enabled" } else { "disabled" }
        );

        Ok(Self {
            config: config.clone(),
            background,
            particles,
            hud: Hud::new(config),
            window_size: (width, height),
            frames: 0,
        })
    }

    pub fn background(&self) -> &ShaderBackground {
        &self.background
    }

    pub fn particle_renderer(&self) -> &ParticleRenderer {
        &self.particles
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RendererEngine for Renderer {
    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size = (width, height);
        self.background
            .uniforms
            .set_resolution(width as f32, height as f32);
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
        debug!("🖥️ Renderer resized: {} x {}", width, height);
    }

    fn set_pointer(&mut self, x: f32, y: f32) {
        self.background.uniforms.set_pointer(x, y);
    }

    fn render_frame<P: PhysicEngine>(&mut self, physic: &P, elapsed: f32) -> usize {
        self.frames += 1;
        let [r, g, b] = self.config.clear_color;
        let window_size = (self.window_size.0 as f32, self.window_size.1 as f32);

        unsafe {
            // imgui laisse le scissor actif après son propre rendu
            gl::Disable(gl::SCISSOR_TEST);
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            if self.config.background_enabled {
                self.background.uniforms.set_time(elapsed);
                self.background.render();
            }

            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            self.particles
                .render(window_size, |kind| physic.particles(kind))
        }
    }

    fn reload_shaders(&mut self) -> Result<()> {
        info!("🔄 Reloading shaders...");
        let background = unsafe { self.background.reload() };
        let particles = unsafe { self.particles.reload() };
        match (background, particles) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Err(e_bg), Err(e_part)) => Err(anyhow!("{:#}\n{:#}", e_bg, e_part)),
        }
    }

    fn apply_config(&mut self, config: &RendererConfig) {
        self.config = config.clone();
        self.hud.apply_config(config);
    }

    fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn hud(&self) -> &Hud {
        &self.hud
    }

    fn close(&mut self) {
        unsafe {
            self.particles.close();
            self.background.close();
        }
        info!("🎨 Renderer closed after {} frames", self.frames);
    }
}
