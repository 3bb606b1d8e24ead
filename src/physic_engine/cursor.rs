use crate::physic_engine::types::Vec2;

/// Échelle appliquée à la carte lorsqu'elle est inclinée
pub const TILT_SCALE: f32 = 1.02;

/// Curseur lumineux : un point suit le pointeur instantanément, un halo le
/// rattrape avec un lissage exponentiel.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    /// Dernière position connue du pointeur (le point)
    pub target: Vec2,
    /// Position lissée du halo
    pub pos: Vec2,
    pub visible: bool,
    /// Survol d'un élément cliquable
    pub hovering: bool,
    smoothing: f32,
}

impl CursorFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            pos: Vec2::ZERO,
            visible: false,
            hovering: false,
            smoothing,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
        self.visible = true;
    }

    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    /// Une frame : le halo parcourt `smoothing` de la distance restante.
    pub fn step_frame(&mut self) {
        self.pos += (self.target - self.pos) * self.smoothing;
    }
}

/// Inclinaison 3D de la carte centrale vers le pointeur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl Tilt {
    /// Carte à plat
    pub const REST: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    /// Inclinaison pour un pointeur en `pointer` dans une fenêtre `width × height`.
    ///
    /// Désactivée (carte à plat) sur les écrans plus étroits que `min_width`.
    pub fn from_pointer(pointer: Vec2, width: f32, height: f32, max_deg: f32, min_width: f32) -> Tilt {
        if width < min_width || width <= 0.0 || height <= 0.0 {
            return Tilt::REST;
        }
        Tilt {
            rotate_x_deg: -((pointer.y - height / 2.0) / height) * max_deg,
            rotate_y_deg: ((pointer.x - width / 2.0) / width) * max_deg,
            scale: TILT_SCALE,
        }
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::REST
    }
}
