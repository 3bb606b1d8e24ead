use rand::Rng;

use crate::physic_engine::{
    particle::Particle,
    particles_pool::FadingPool,
    types::{rgb8, Color, Vec2},
};

/// Couleur unique des étincelles (`rgba(255,200,50,α)`)
pub const SPARK_COLOR: Color = rgb8(255, 200, 50);

/// Traînée d'étincelles laissée par la fusée.
#[derive(Debug, Clone)]
pub struct SparksPool {
    pool: FadingPool,
    per_trail: usize,
}

impl SparksPool {
    pub fn new(per_trail: usize, decay: f32) -> Self {
        Self {
            pool: FadingPool::with_capacity(decay, per_trail * 64),
            per_trail,
        }
    }

    /// Ajoute une bouffée d'étincelles autour de `origin` (dispersion ±20 px),
    /// projetées vers le haut.
    pub fn spawn(&mut self, origin: Vec2, rng: &mut impl Rng) -> usize {
        let n = self.per_trail;
        self.pool.extend((0..n).map(|_| Particle {
            pos: Vec2::new(origin.x + rng.random_range(-20.0..20.0), origin.y),
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-4.0..-1.0)),
            color: SPARK_COLOR,
            alpha: 1.0,
            size: rng.random_range(2.0..6.0),
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
