use rand::Rng;

use crate::physic_engine::{
    particle::Particle,
    particles_pool::FadingPool,
    types::{rgb8, Color, Vec2},
};

/// Palette des pétards : rouge, or, bleu, vert, blanc
pub const EXPLOSION_COLORS: [Color; 5] = [
    rgb8(255, 50, 50),
    rgb8(255, 200, 50),
    rgb8(50, 150, 255),
    rgb8(50, 255, 120),
    rgb8(255, 255, 255),
];

/// Gerbes d'explosion radiales.
///
/// Chaque particule part du centre dans une direction uniforme sur `[0, 2π)`
/// à une vitesse constante de `[2, 6)` px/frame.
#[derive(Debug, Clone)]
pub struct ExplosionsPool {
    pool: FadingPool,
    per_explosion: usize,
}

impl ExplosionsPool {
    pub fn new(per_explosion: usize, decay: f32) -> Self {
        Self {
            pool: FadingPool::with_capacity(decay, per_explosion * 32),
            per_explosion,
        }
    }

    /// Déclenche une gerbe centrée sur `origin`. Retourne le nombre de particules créées.
    pub fn spawn(&mut self, origin: Vec2, rng: &mut impl Rng) -> usize {
        let n = self.per_explosion;
        self.pool.extend((0..n).map(|_| {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(2.0..6.0);
            Particle {
                pos: origin,
                vel: Vec2::from_angle(angle) * speed,
                color: EXPLOSION_COLORS[rng.random_range(0..EXPLOSION_COLORS.len())],
                alpha: 1.0,
                size: rng.random_range(2.0..6.0),
            }
        }));
        n
    }

    pub fn update(&mut self) -> usize {
        self.pool.update()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn decay(&self) -> f32 {
        self.pool.decay()
    }
}
