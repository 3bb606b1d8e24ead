use crate::physic_engine::types::Vec2;

pub const FLASH_DURATION: f32 = 0.3;
pub const SHAKE_DURATION: f32 = 0.2;
pub const SHOCKWAVE_DURATION: f32 = 0.7;
/// Amplitude max du tremblement d'écran, en pixels
pub const SHAKE_AMPLITUDE: f32 = 6.0;
/// Amplitude du tremblement de la fusée sur le pas de tir
pub const ROCKET_JITTER: f32 = 2.0;

/// Effets plein écran temporisés : flash, tremblement, onde de choc.
///
/// Chaque effet est un simple compte à rebours en secondes ; `0` = inactif.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenEffects {
    flash: f32,
    shake: f32,
    shockwave_age: Option<f32>,
    /// Horloge interne servant à animer les oscillations
    clock: f32,
}

impl ScreenEffects {
    pub fn trigger_flash(&mut self) {
        self.flash = FLASH_DURATION;
    }

    pub fn trigger_shake(&mut self) {
        self.shake = SHAKE_DURATION;
    }

    pub fn trigger_shockwave(&mut self) {
        self.shockwave_age = Some(0.0);
    }

    pub fn step(&mut self, dt: f32) {
        self.clock += dt;
        self.flash = (self.flash - dt).max(0.0);
        self.shake = (self.shake - dt).max(0.0);
        self.shockwave_age = self
            .shockwave_age
            .map(|age| age + dt)
            .filter(|age| *age < SHOCKWAVE_DURATION);
    }

    /// Opacité du flash blanc, de 1 (déclenchement) à 0.
    pub fn flash_alpha(&self) -> f32 {
        self.flash / FLASH_DURATION
    }

    /// Décalage à appliquer à toute la scène pendant le tremblement.
    pub fn shake_offset(&self) -> Vec2 {
        if self.shake <= 0.0 {
            return Vec2::ZERO;
        }
        let amplitude = SHAKE_AMPLITUDE * (self.shake / SHAKE_DURATION);
        Vec2::new((self.clock * 97.0).sin(), (self.clock * 113.0).cos()) * amplitude
    }

    /// Avancement de l'onde de choc dans `[0, 1)`, `None` si inactive.
    pub fn shockwave_progress(&self) -> Option<f32> {
        self.shockwave_age.map(|age| age / SHOCKWAVE_DURATION)
    }

    /// Petit tremblement de la fusée quand elle vibre au sol.
    pub fn rocket_jitter(&self) -> Vec2 {
        Vec2::new((self.clock * 151.0).sin(), (self.clock * 173.0).sin()) * ROCKET_JITTER
    }

    pub fn is_idle(&self) -> bool {
        self.flash <= 0.0 && self.shake <= 0.0 && self.shockwave_age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_fades_out() {
        let mut fx = ScreenEffects::default();
        fx.trigger_flash();
        assert_eq!(fx.flash_alpha(), 1.0);
        fx.step(0.15);
        assert!((fx.flash_alpha() - 0.5).abs() < 1e-4);
        fx.step(0.2);
        assert_eq!(fx.flash_alpha(), 0.0);
    }

    #[test]
    fn test_shockwave_expires() {
        let mut fx = ScreenEffects::default();
        fx.trigger_shockwave();
        fx.step(0.35);
        let progress = fx.shockwave_progress().unwrap();
        assert!((progress - 0.5).abs() < 1e-4);
        fx.step(0.4);
        assert!(fx.shockwave_progress().is_none());
        assert!(fx.is_idle());
    }

    #[test]
    fn test_shake_offset_is_zero_when_idle() {
        let mut fx = ScreenEffects::default();
        assert_eq!(fx.shake_offset(), Vec2::ZERO);
        fx.trigger_shake();
        fx.step(0.01);
        assert!(fx.shake_offset().length() <= SHAKE_AMPLITUDE * 1.5);
        fx.step(SHAKE_DURATION);
        assert_eq!(fx.shake_offset(), Vec2::ZERO);
    }
}
