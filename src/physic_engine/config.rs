use serde::Deserialize;

use crate::physic_engine::types::REFERENCE_FRAME_RATE;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicConfig {
    /// Graine du générateur aléatoire (`None` : graine OS)
    pub seed: Option<u64>,

    pub frame_rate: f32,
    /// Nombre maximum de frames rattrapées par appel à `update`
    pub max_catch_up_frames: u32,

    pub confetti_count: usize,
    pub sparks_per_trail: usize,
    pub spark_decay: f32,
    pub particles_per_explosion: usize,
    pub explosion_decay: f32,

    pub rocket_prelaunch_speed: f32,
    pub rocket_launch_speed: f32,
    pub rocket_boost_factor: f32,

    pub cursor_smoothing: f32,
    pub tilt_max_degrees: f32,
    pub tilt_min_width: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: REFERENCE_FRAME_RATE,
            max_catch_up_frames: 240,
            confetti_count: 300,
            sparks_per_trail: 6,
            spark_decay: 0.03,
            particles_per_explosion: 40,
            explosion_decay: 0.02,
            rocket_prelaunch_speed: 0.6,
            rocket_launch_speed: 1.0,
            // > 1.0 : la vitesse ne peut que croître une fois la fusée lancée
            rocket_boost_factor: 1.04,
            cursor_smoothing: 0.25,
            tilt_max_degrees: 15.0,
            tilt_min_width: 768.0,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<Self>(&text)?.sanitized())
    }

    /// Durée d'une frame fixe, en secondes.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Ramène les valeurs incohérentes dans leur domaine de validité.
    pub fn sanitized(mut self) -> Self {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            self.frame_rate = REFERENCE_FRAME_RATE;
        }
        self.max_catch_up_frames = self.max_catch_up_frames.max(1);
        self.spark_decay = self.spark_decay.max(f32::EPSILON);
        self.explosion_decay = self.explosion_decay.max(f32::EPSILON);
        self.rocket_boost_factor = self.rocket_boost_factor.max(1.0);
        self.cursor_smoothing = self.cursor_smoothing.clamp(0.0, 1.0);
        self
    }
}
