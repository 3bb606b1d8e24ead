use crate::physic_engine::types::{Color, Vec2};

/// Particule 2D élémentaire partagée par les trois pools.
///
/// Les coordonnées sont en pixels écran, origine en haut à gauche, `y` vers le bas.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Opacité dans `[0, 1]`
    pub alpha: f32,
    pub size: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: Color::ONE,
            alpha: 1.0,
            size: 1.0,
        }
    }
}

impl Particle {
    /// Avance d'une frame : intègre la vitesse puis retire `decay` à l'alpha.
    ///
    /// L'alpha est borné à `[0, 1]`.
    #[inline(always)]
    pub fn step(&mut self, decay: f32) {
        self.pos += self.vel;
        self.alpha = (self.alpha - decay).clamp(0.0, 1.0);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}
