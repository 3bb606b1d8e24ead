pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod renderer;
pub use self::renderer::Renderer;

pub mod background;
pub use self::background::{BackgroundUniforms, ShaderBackground};
pub mod particle_renderer;
pub use self::particle_renderer::{ParticleLayer, ParticleRenderer};
pub mod hud;
pub use self::hud::{Hud, HudActions};

pub mod config;
pub use self::config::RendererConfig;

pub mod shader;
pub mod tools;
pub use self::tools::show_opengl_context_info;

pub mod types;
pub use self::types::ParticleGPU;
