use rand::Rng;

use crate::physic_engine::{
    particle::Particle,
    types::{rgb8, Color, Vec2},
};

/// Palette des confettis (`#FFD700 #FF4C4C #4CFF8F #4CA6FF #FF8F4C #FFFFFF`)
pub const CONFETTI_COLORS: [Color; 6] = [
    rgb8(0xFF, 0xD7, 0x00),
    rgb8(0xFF, 0x4C, 0x4C),
    rgb8(0x4C, 0xFF, 0x8F),
    rgb8(0x4C, 0xA6, 0xFF),
    rgb8(0xFF, 0x8F, 0x4C),
    rgb8(0xFF, 0xFF, 0xFF),
];

/// Marge sous le bord bas avant recyclage d'un confetti
pub const CONFETTI_WRAP_MARGIN: f32 = 20.0;
/// Ordonnée de réapparition (juste au-dessus de l'écran)
pub const CONFETTI_RESPAWN_Y: f32 = -10.0;

/// Pluie de confettis permanente.
///
/// Un confetti ne meurt jamais : lorsqu'il sort par le bas, il est replacé
/// au-dessus de l'écran avec une nouvelle abscisse aléatoire. `vel.x` porte
/// l'inclinaison (dérive horizontale), `vel.y` la vitesse de chute.
#[derive(Debug, Clone, Default)]
pub struct ConfettiPool {
    pieces: Vec<Particle>,
}

impl ConfettiPool {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let mut pool = Self {
            pieces: Vec::with_capacity(count),
        };
        pool.spawn(count, width, height, rng);
        pool
    }

    /// Ajoute `count` confettis répartis sur toute la largeur, au-dessus de l'écran.
    pub fn spawn(&mut self, count: usize, width: f32, height: f32, rng: &mut impl Rng) {
        self.pieces.extend((0..count).map(|_| Self::random_piece(width, height, rng)));
    }

    fn random_piece(width: f32, height: f32, rng: &mut impl Rng) -> Particle {
        Particle {
            pos: Vec2::new(random_below(rng, width), -random_below(rng, height)),
            vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(1.0..4.0)),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            alpha: 1.0,
            size: rng.random_range(3.0..11.0),
        }
    }

    /// Avance d'une frame ; recycle les confettis sortis par le bas.
    pub fn update(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        for p in &mut self.pieces {
            p.pos += p.vel;
            if p.pos.y > height + CONFETTI_WRAP_MARGIN {
                p.pos.y = CONFETTI_RESPAWN_Y;
                p.pos.x = random_below(rng, width);
            }
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.pieces
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Tirage uniforme dans `[0, bound)`, tolérant une borne nulle (fenêtre minimisée).
fn random_below(rng: &mut impl Rng, bound: f32) -> f32 {
    if bound > 0.0 {
        rng.random_range(0.0..bound)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let pool = ConfettiPool::new(300, 800.0, 600.0, &mut rng);
        assert_eq!(pool.len(), 300);
        for p in pool.particles() {
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!(p.pos.y <= 0.0 && p.pos.y > -600.0);
            assert!((3.0..11.0).contains(&p.size));
            assert!((1.0..4.0).contains(&p.vel.y));
            assert!((-2.0..2.0).contains(&p.vel.x));
            assert!(CONFETTI_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn test_zero_sized_window_does_not_panic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut pool = ConfettiPool::new(10, 0.0, 0.0, &mut rng);
        pool.update(0.0, 0.0, &mut rng);
        assert_eq!(pool.len(), 10);
    }
}
