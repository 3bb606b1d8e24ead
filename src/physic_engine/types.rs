pub use glam::{Vec2, Vec3 as Color};

/// Fréquence de référence : toutes les constantes « par frame » du moteur
/// (décroissance d'alpha, vitesses, lissage du curseur) sont exprimées pour
/// une frame fixe de `1 / 60` seconde.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Convertit une couleur 8 bits (`255, 200, 50`) en couleur normalisée.
pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Forme de rendu d'une particule
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleShape {
    /// Disque plein de rayon `size`
    #[default]
    Circle = 0,
    /// Rectangle `size × 1.5·size` (confettis)
    Rect = 1,
}

/// Les trois pools de particules du moteur, chacun rendu sur sa propre couche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Confetti,
    Sparks,
    Explosions,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Confetti,
        ParticleKind::Sparks,
        ParticleKind::Explosions,
    ];

    pub fn shape(&self) -> ParticleShape {
        match self {
            ParticleKind::Confetti => ParticleShape::Rect,
            ParticleKind::Sparks | ParticleKind::Explosions => ParticleShape::Circle,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ParticleKind::Confetti => "Confetti layer",
            ParticleKind::Sparks => "Rocket spark trail",
            ParticleKind::Explosions => "Firecracker explosions",
        }
    }
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'un appel à `PhysicEngine::update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Nombre de frames fixes simulées pendant l'appel
    pub frames: u32,
    /// Nombre de gerbes d'explosion déclenchées
    pub explosions_triggered: usize,
    /// Nombre d'étincelles ajoutées à la traînée de la fusée
    pub sparks_spawned: usize,
}

impl UpdateResult {
    pub fn merge(&mut self, other: UpdateResult) {
        self.frames += other.frames;
        self.explosions_triggered += other.explosions_triggered;
        self.sparks_spawned += other.sparks_spawned;
    }
}
