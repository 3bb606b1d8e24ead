#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::{config::PhysicConfig, types::Vec2};

/// Au-delà de cette fraction de hauteur, la fusée accélère et sème des explosions
pub const BOOST_HEIGHT_RATIO: f32 = 0.5;
/// Grande explosion en haut d'écran
pub const GRAND_EXPLOSION_RATIO: f32 = 1.2;
/// Bouquet final (trois gerbes)
pub const FINALE_RATIO: f32 = 1.3;
/// Fin de l'animation
pub const STOP_RATIO: f32 = 1.6;

/// Ordonnée des gerbes du bouquet final
pub const FINALE_Y: f32 = 200.0;
/// Écart horizontal et ordonnée des gerbes latérales du bouquet
pub const FINALE_SIDE_OFFSET: f32 = 120.0;
pub const FINALE_SIDE_Y: f32 = 250.0;

/// Paliers d'accélération appliqués à chaque tick du compte à rebours
pub const BOOST_AT_FIVE: f32 = 0.18;
pub const BOOST_AT_TWO: f32 = 0.4;
pub const BOOST_AT_ZERO: f32 = 1.5;

/// Ce qu'une frame de la fusée demande au moteur de générer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RocketFrame {
    /// Point d'émission de la traînée d'étincelles
    pub trail_origin: Option<Vec2>,
    /// Centres des gerbes d'explosion à déclencher
    pub bursts: Vec<Vec2>,
}

/// État de la fusée.
///
/// `y` est le décalage vertical (≤ 0) du haut de la fusée par rapport au bas
/// de l'écran : la fusée est dessinée en `h + y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub visible: bool,
    pub shaking: bool,
    /// Flamme allumée
    pub fire: bool,
    /// Physique active (mise à jour à chaque frame)
    pub launching: bool,
    /// Sortie de l'écran : plus aucune mise à jour
    pub finished: bool,

    pub y: f32,
    pub speed: f32,
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new(&PhysicConfig::default())
    }
}

impl Rocket {
    /// Fusée cachée, au repos sur le bord bas
    pub fn new(config: &PhysicConfig) -> Self {
        Self {
            visible: false,
            shaking: false,
            fire: false,
            launching: false,
            finished: false,
            y: 0.0,
            speed: config.rocket_prelaunch_speed,
        }
    }

    /// Mise à feu : la fusée apparaît et tremble sur son pas de tir.
    pub fn ignite(&mut self) {
        self.visible = true;
        self.shaking = true;
    }

    pub fn light_fire(&mut self) {
        self.fire = true;
    }

    /// Décollage : fin du tremblement, la physique démarre.
    pub fn launch(&mut self, initial_speed: f32) {
        self.shaking = false;
        self.launching = true;
        self.finished = false;
        self.speed = initial_speed;
        self.y = 0.0;
    }

    /// Accélération déclenchée par un tick du compte à rebours.
    ///
    /// Les paliers se cumulent : à `0`, les trois s'appliquent.
    /// Sans effet tant que la fusée n'a pas décollé. Retourne l'incrément appliqué.
    pub fn apply_countdown_boost(&mut self, counter: u32) -> f32 {
        if !self.launching {
            return 0.0;
        }
        let mut boost = 0.0;
        if counter <= 5 {
            boost += BOOST_AT_FIVE;
        }
        if counter <= 2 {
            boost += BOOST_AT_TWO;
        }
        if counter == 0 {
            boost += BOOST_AT_ZERO;
        }
        self.speed += boost;
        boost
    }

    /// Position écran du haut de la fusée.
    #[inline]
    pub fn screen_top(&self, height: f32) -> f32 {
        height + self.y
    }

    /// Altitude parcourue en pixels
    #[inline]
    pub fn altitude(&self) -> f32 {
        self.y.abs()
    }

    /// Avance la fusée d'une frame et retourne les effets à générer.
    pub fn step_frame(&mut self, width: f32, height: f32, boost_factor: f32) -> RocketFrame {
        let mut frame = RocketFrame::default();
        if !self.launching || self.finished {
            return frame;
        }
        let center_x = width / 2.0;

        // Passé la moitié de l'écran : accélération continue
        if self.altitude() > height * BOOST_HEIGHT_RATIO {
            self.speed *= boost_factor;
            frame.bursts.push(Vec2::new(center_x, height / 2.0));
        }

        self.y -= self.speed;

        frame.trail_origin = Some(Vec2::new(center_x, self.screen_top(height)));

        if self.altitude() > height * GRAND_EXPLOSION_RATIO {
            frame.bursts.push(Vec2::new(center_x, FINALE_Y));
        }

        if self.altitude() >= height * STOP_RATIO {
            self.finished = true;
            #[cfg(debug_assertions)]
            debug!("🚀 Rocket left the screen at speed {:.2}", self.speed);
        }

        if self.altitude() > height * FINALE_RATIO {
            frame.bursts.push(Vec2::new(center_x, FINALE_Y));
            frame
                .bursts
                .push(Vec2::new(center_x - FINALE_SIDE_OFFSET, FINALE_SIDE_Y));
            frame
                .bursts
                .push(Vec2::new(center_x + FINALE_SIDE_OFFSET, FINALE_SIDE_Y));
        }

        frame
    }
}
