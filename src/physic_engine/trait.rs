use crate::physic_engine::{
    config::PhysicConfig,
    cursor::{CursorFollower, Tilt},
    effects::ScreenEffects,
    particle::Particle,
    rocket::Rocket,
    types::{ParticleKind, UpdateResult, Vec2},
};

/// 🔧 Trait `PhysicEngine`
///
/// Interface de la simulation visuelle du show : pools de particules, fusée,
/// curseur et effets d'écran. Aucune dépendance au GPU : le renderer lit
/// l'état via les accesseurs, ce qui permet de tester la simulation sans
/// contexte OpenGL.
///
/// Le temps est découpé en frames fixes (`PhysicConfig::frame_dt`) ; `update`
/// accumule le `dt` réel et rejoue le nombre de frames correspondant.
pub trait PhysicEngine {
    /// Ajuste la surface de simulation (redimensionnement de la fenêtre).
    fn set_window_size(&mut self, width: f32, height: f32);

    fn window_size(&self) -> (f32, f32);

    /// Dernière position du pointeur, `None` quand il quitte la fenêtre.
    fn set_pointer(&mut self, pointer: Option<Vec2>);

    fn set_hovering(&mut self, hovering: bool);

    /// Met à jour la simulation sur un intervalle `dt` (secondes).
    fn update(&mut self, dt: f32) -> UpdateResult;

    // --- Réactions aux évènements du compte à rebours ---
    fn flash(&mut self);
    fn ignite_rocket(&mut self);
    fn light_rocket_fire(&mut self);
    fn launch_rocket(&mut self);
    fn boost_rocket(&mut self, counter: u32) -> f32;

    // --- Lecture de l'état pour le rendu ---
    fn particles(&self, kind: ParticleKind) -> &[Particle];
    fn rocket(&self) -> &Rocket;
    fn cursor(&self) -> &CursorFollower;
    fn tilt(&self) -> Tilt;
    fn effects(&self) -> &ScreenEffects;

    fn reload_config(&mut self, config: &PhysicConfig) -> bool;
    fn get_config(&self) -> &PhysicConfig;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}
