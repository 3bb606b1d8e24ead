use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::physic_engine::{
    config::PhysicConfig,
    confetti::ConfettiPool,
    cursor::{CursorFollower, Tilt},
    effects::ScreenEffects,
    explosions::ExplosionsPool,
    particle::Particle,
    rocket::Rocket,
    sparks::SparksPool,
    types::{ParticleKind, UpdateResult, Vec2},
    PhysicEngine,
};

/// Moteur physique du show de lancement.
///
/// Possède les trois pools de particules, la fusée, le curseur et les effets
/// d'écran. Le hasard passe par un `StdRng` injectable (graine fixe en test).
#[derive(Debug)]
pub struct LaunchPhysicEngine {
    config: PhysicConfig,
    rng: StdRng,

    width: f32,
    height: f32,

    confetti: ConfettiPool,
    sparks: SparksPool,
    explosions: ExplosionsPool,

    rocket: Rocket,
    cursor: CursorFollower,
    pointer: Option<Vec2>,
    effects: ScreenEffects,

    frame_accumulator: f32,
}

impl LaunchPhysicEngine {
    /// Graine issue de la config, sinon graine OS.
    pub fn new(config: &PhysicConfig, width: f32, height: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, width, height, rng)
    }

    pub fn with_rng(config: &PhysicConfig, width: f32, height: f32, mut rng: StdRng) -> Self {
        let config = config.clone().sanitized();
        let confetti = ConfettiPool::new(config.confetti_count, width, height, &mut rng);

        info!(
            "🎉 Physic engine ready: {} confetti, {} sparks/trail, {} particles/explosion ({}x{})",
            config.confetti_count,
            config.sparks_per_trail,
            config.particles_per_explosion,
            width,
            height
        );

        Self {
            sparks: SparksPool::new(config.sparks_per_trail, config.spark_decay),
            explosions: ExplosionsPool::new(config.particles_per_explosion, config.explosion_decay),
            rocket: Rocket::new(&config),
            cursor: CursorFollower::new(config.cursor_smoothing),
            pointer: None,
            effects: ScreenEffects::default(),
            frame_accumulator: 0.0,
            confetti,
            width,
            height,
            rng,
            config,
        }
    }

    /// Simule exactement une frame fixe.
    ///
    /// Ordre : fusée (qui sème étincelles et gerbes) puis mise à jour de
    /// chaque pool ; le rendu, lui, n'intervient qu'après `update`.
    pub fn step_frame(&mut self) -> UpdateResult {
        let mut result = UpdateResult {
            frames: 1,
            ..Default::default()
        };

        let frame = self
            .rocket
            .step_frame(self.width, self.height, self.config.rocket_boost_factor);
        if let Some(origin) = frame.trail_origin {
            result.sparks_spawned += self.sparks.spawn(origin, &mut self.rng);
        }
        for burst in &frame.bursts {
            self.explosions.spawn(*burst, &mut self.rng);
        }
        result.explosions_triggered = frame.bursts.len();

        self.confetti.update(self.width, self.height, &mut self.rng);
        self.sparks.update();
        self.explosions.update();

        self.cursor.step_frame();
        self.effects.step(self.config.frame_dt());

        result
    }

    /// Déclenche une gerbe manuellement (ex. clic de test).
    pub fn spawn_explosion(&mut self, origin: Vec2) -> usize {
        self.explosions.spawn(origin, &mut self.rng)
    }

    pub fn confetti(&self) -> &ConfettiPool {
        &self.confetti
    }

    pub fn sparks(&self) -> &SparksPool {
        &self.sparks
    }

    pub fn explosions(&self) -> &ExplosionsPool {
        &self.explosions
    }

    pub fn rocket_mut(&mut self) -> &mut Rocket {
        &mut self.rocket
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl PhysicEngine for LaunchPhysicEngine {
    fn set_window_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        debug!("Physic surface resized: {} x {}", width, height);
    }

    fn window_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
        match pointer {
            Some(p) => self.cursor.set_target(p),
            None => self.cursor.hide(),
        }
    }

    fn set_hovering(&mut self, hovering: bool) {
        self.cursor.hovering = hovering && self.cursor.visible;
    }

    fn update(&mut self, dt: f32) -> UpdateResult {
        let frame_dt = self.config.frame_dt();
        self.frame_accumulator += dt.max(0.0);

        let pending = (self.frame_accumulator / frame_dt).floor() as u32;
        let frames = pending.min(self.config.max_catch_up_frames);
        if frames < pending {
            debug!("⏱ Dropping {} late physic frames", pending - frames);
            self.frame_accumulator = 0.0;
        } else {
            self.frame_accumulator -= frames as f32 * frame_dt;
        }

        let mut result = UpdateResult::default();
        for _ in 0..frames {
            result.merge(self.step_frame());
        }
        result
    }

    fn flash(&mut self) {
        self.effects.trigger_flash();
    }

    fn ignite_rocket(&mut self) {
        self.rocket.ignite();
        self.effects.trigger_shockwave();
        self.effects.trigger_shake();
    }

    fn light_rocket_fire(&mut self) {
        self.rocket.light_fire();
    }

    fn launch_rocket(&mut self) {
        self.rocket.launch(self.config.rocket_launch_speed);
    }

    fn boost_rocket(&mut self, counter: u32) -> f32 {
        self.rocket.apply_countdown_boost(counter)
    }

    fn particles(&self, kind: ParticleKind) -> &[Particle] {
        match kind {
            ParticleKind::Confetti => self.confetti.particles(),
            ParticleKind::Sparks => self.sparks.particles(),
            ParticleKind::Explosions => self.explosions.particles(),
        }
    }

    fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    fn cursor(&self) -> &CursorFollower {
        &self.cursor
    }

    fn tilt(&self) -> Tilt {
        match self.pointer {
            Some(p) => Tilt::from_pointer(
                p,
                self.width,
                self.height,
                self.config.tilt_max_degrees,
                self.config.tilt_min_width,
            ),
            None => Tilt::REST,
        }
    }

    fn effects(&self) -> &ScreenEffects {
        &self.effects
    }

    fn reload_config(&mut self, new_config: &PhysicConfig) -> bool {
        let new_config = new_config.clone().sanitized();
        let pools_changed = new_config.confetti_count != self.config.confetti_count
            || new_config.sparks_per_trail != self.config.sparks_per_trail
            || new_config.spark_decay != self.config.spark_decay
            || new_config.particles_per_explosion != self.config.particles_per_explosion
            || new_config.explosion_decay != self.config.explosion_decay;

        if pools_changed {
            info!("Reinitializing particle pools after config change");
            self.confetti = ConfettiPool::new(
                new_config.confetti_count,
                self.width,
                self.height,
                &mut self.rng,
            );
            self.sparks = SparksPool::new(new_config.sparks_per_trail, new_config.spark_decay);
            self.explosions = ExplosionsPool::new(
                new_config.particles_per_explosion,
                new_config.explosion_decay,
            );
        }
        self.cursor.set_smoothing(new_config.cursor_smoothing);
        self.config = new_config;
        pools_changed
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.sparks = SparksPool::new(self.config.sparks_per_trail, self.config.spark_decay);
        self.explosions = ExplosionsPool::new(
            self.config.particles_per_explosion,
            self.config.explosion_decay,
        );
        debug!("LaunchPhysicEngine closed and reset.");
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn with_seed(config: &PhysicConfig, width: f32, height: f32, seed: u64) -> Self;
    fn particles_count(&self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for LaunchPhysicEngine {
    fn with_seed(config: &PhysicConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn particles_count(&self) -> usize {
        ParticleKind::ALL
            .iter()
            .map(|kind| self.particles(*kind).len())
            .sum()
    }
}
