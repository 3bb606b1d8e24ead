use crate::physic_engine::PhysicEngine;
use crate::renderer_engine::{config::RendererConfig, hud::Hud};

use anyhow::Result;

/// Rendu d'une frame du show : fond animé puis couches de particules.
/// Le HUD imgui est dessiné ensuite par le simulateur via `hud()`.
pub trait RendererEngine {
    fn set_window_size(&mut self, width: i32, height: i32);

    /// Dernière position du pointeur, en pixels framebuffer (`y` vers le bas).
    fn set_pointer(&mut self, x: f32, y: f32);

    /// Dessine la frame ; renvoie le nombre de particules envoyées au GPU.
    fn render_frame<P: PhysicEngine>(&mut self, physic: &P, elapsed: f32) -> usize;

    fn reload_shaders(&mut self) -> Result<()>;

    fn apply_config(&mut self, config: &RendererConfig);
    fn config(&self) -> &RendererConfig;

    fn hud(&self) -> &Hud;

    fn close(&mut self);
}
