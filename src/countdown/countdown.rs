use log::{debug, info};

use crate::countdown::config::CountdownConfig;

/// Tolérance temporelle : `advance(1.0)` doit déclencher un tick à 1 s pile
/// malgré les erreurs d'arrondi des sommes de `f32`.
const TIME_EPSILON: f32 = 1e-4;

/// Phases du compte à rebours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// En attente du clic de lancement
    #[default]
    Idle,
    /// Le compteur décroît
    Counting,
    /// Compteur à 1 : séquence fusée en cours
    Launching,
    /// Compteur à 0 : timer annulé, redirection programmée
    Redirecting,
}

/// Évènements émis par le compte à rebours, dans l'ordre chronologique.
#[derive(Debug, Clone, PartialEq)]
pub enum CountdownEvent {
    /// Démarrage accepté ; `value` est la valeur initiale annoncée
    Started { value: u32 },
    /// Le compteur vient de passer à `value`
    Tick { value: u32 },
    /// Compteur à 1 : la fusée apparaît, onde de choc et tremblement
    Ignition,
    /// La flamme s'allume
    RocketFire,
    /// La fusée décolle
    RocketLaunch,
    /// Compteur à 0 : le timer est annulé
    Finished,
    /// Naviguer vers `url` (émis une seule fois)
    Redirect { url: String },
}

/// Évènement différé (équivalent d'un `setTimeout`)
#[derive(Debug, Clone, PartialEq)]
struct PendingEvent {
    remaining: f32,
    event: CountdownEvent,
}

/// Machine à états du compte à rebours.
///
/// Pilotée exclusivement par `advance(dt)` : aucun timer système, ce qui
/// permet de la dérouler de façon synchrone en test.
#[derive(Debug, Clone)]
pub struct Countdown {
    config: CountdownConfig,
    counter: u32,
    phase: CountdownPhase,
    started: bool,
    timer_active: bool,
    tick_accumulator: f32,
    pending: Vec<PendingEvent>,
    redirect_issued: bool,
    since_finished: Option<f32>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(CountdownConfig::default())
    }
}

impl Countdown {
    pub fn new(config: CountdownConfig) -> Self {
        let config = config.sanitized();
        Self {
            counter: config.start_value,
            phase: CountdownPhase::Idle,
            started: false,
            timer_active: false,
            tick_accumulator: 0.0,
            pending: Vec::new(),
            redirect_issued: false,
            since_finished: None,
            config,
        }
    }

    /// Lancement par l'utilisateur. Seul le premier appel est pris en compte.
    pub fn start(&mut self) -> Option<CountdownEvent> {
        if self.started {
            debug!("Countdown already started, ignoring activation");
            return None;
        }
        self.started = true;
        self.timer_active = true;
        self.phase = CountdownPhase::Counting;
        info!("⏳ Countdown started from {}", self.counter);
        Some(CountdownEvent::Started {
            value: self.counter,
        })
    }

    /// Fait avancer l'horloge du compte à rebours de `dt` secondes.
    ///
    /// Les ticks et les évènements différés échus pendant l'intervalle sont
    /// émis dans l'ordre chronologique ; un grand `dt` équivaut donc à une
    /// suite de petits pas.
    pub fn advance(&mut self, dt: f32) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        let mut budget = dt.max(0.0);

        while let Some(next) = self.time_to_next_event() {
            if next > budget + TIME_EPSILON {
                break;
            }
            let step = next.clamp(0.0, budget);
            self.elapse(step);
            budget -= step;

            self.fire_due_pending(&mut events);
            if self.timer_active && self.tick_accumulator >= self.config.tick_interval - TIME_EPSILON {
                self.tick_accumulator = 0.0;
                self.tick(&mut events);
            }
        }
        self.elapse(budget);
        events
    }

    /// Secondes avant le prochain tick ou évènement différé, `None` si rien n'est programmé.
    pub fn time_to_next_event(&self) -> Option<f32> {
        let next_tick = self
            .timer_active
            .then(|| self.config.tick_interval - self.tick_accumulator);
        let next_pending = self.pending.iter().map(|p| p.remaining).reduce(f32::min);
        match (next_tick, next_pending) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn elapse(&mut self, step: f32) {
        if self.timer_active {
            self.tick_accumulator += step;
        }
        for p in &mut self.pending {
            p.remaining -= step;
        }
        if let Some(t) = self.since_finished.as_mut() {
            *t += step;
        }
    }

    fn fire_due_pending(&mut self, events: &mut Vec<CountdownEvent>) {
        // `retain` conserve l'ordre de programmation pour des échéances égales
        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.remaining <= TIME_EPSILON {
                due.push(p.event.clone());
                false
            } else {
                true
            }
        });
        for event in due {
            if let CountdownEvent::Redirect { url } = &event {
                if self.redirect_issued {
                    continue;
                }
                self.redirect_issued = true;
                info!("🌐 Redirecting to {}", url);
            }
            events.push(event);
        }
    }

    fn schedule(&mut self, delay: f32, event: CountdownEvent) {
        self.pending.push(PendingEvent {
            remaining: delay,
            event,
        });
    }

    fn tick(&mut self, events: &mut Vec<CountdownEvent>) {
        self.counter = self.counter.saturating_sub(1);
        debug!("⏳ Countdown tick: {}", self.counter);
        events.push(CountdownEvent::Tick {
            value: self.counter,
        });

        if self.counter == 1 {
            self.phase = CountdownPhase::Launching;
            events.push(CountdownEvent::Ignition);
            self.schedule(self.config.fire_delay, CountdownEvent::RocketFire);
            self.schedule(self.config.launch_delay, CountdownEvent::RocketLaunch);
        }

        if self.counter == 0 {
            self.timer_active = false;
            self.phase = CountdownPhase::Redirecting;
            self.since_finished = Some(0.0);
            events.push(CountdownEvent::Finished);
            self.schedule(
                self.config.redirect_delay,
                CountdownEvent::Redirect {
                    url: self.config.redirect_url.clone(),
                },
            );
        }
    }

    // --- Accesseurs ---

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Texte affiché au centre de l'anneau
    pub fn display_value(&self) -> String {
        self.counter.to_string()
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn redirect_issued(&self) -> bool {
        self.redirect_issued
    }

    pub fn redirect_url(&self) -> &str {
        &self.config.redirect_url
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Fraction de l'anneau encore visible, de 1 (départ) à 0.
    pub fn ring_progress(&self) -> f32 {
        self.counter as f32 / self.config.start_value as f32
    }

    /// Équivalent du `stroke-dashoffset` de l'anneau SVG.
    pub fn ring_dash_offset(&self) -> f32 {
        let circumference = self.config.ring_circumference;
        circumference - self.ring_progress() * circumference
    }

    /// Secondes écoulées depuis la fin du compte à rebours (fondu du compteur).
    pub fn time_since_finished(&self) -> Option<f32> {
        self.since_finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_countdown_ignores_time() {
        let mut countdown = Countdown::default();
        assert!(countdown.advance(5.0).is_empty());
        assert_eq!(countdown.counter(), 10);
        assert_eq!(countdown.phase(), CountdownPhase::Idle);
    }

    #[test]
    fn test_start_only_once() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.start(), Some(CountdownEvent::Started { value: 10 }));
        assert_eq!(countdown.start(), None);
    }

    #[test]
    fn test_small_steps_tick_after_one_second() {
        let mut countdown = Countdown::default();
        countdown.start();
        let mut ticks = 0;
        for _ in 0..59 {
            ticks += countdown.advance(1.0 / 60.0).len();
        }
        assert_eq!(ticks, 0);
        let events = countdown.advance(1.0 / 60.0 + 0.001);
        assert_eq!(events, vec![CountdownEvent::Tick { value: 9 }]);
    }

    #[test]
    fn test_time_to_next_event() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.time_to_next_event(), None);
        countdown.start();
        countdown.advance(0.25);
        let next = countdown.time_to_next_event().unwrap_or_default();
        assert!((next - 0.75).abs() < 1e-4);

        countdown.advance(9.75);
        // Seule la redirection reste programmée
        let next = countdown.time_to_next_event().unwrap_or_default();
        assert!((next - 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_ring_progress() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.ring_progress(), 1.0);
        assert_eq!(countdown.ring_dash_offset(), 0.0);
        countdown.start();
        countdown.advance(5.0);
        assert_eq!(countdown.counter(), 5);
        assert!((countdown.ring_dash_offset() - 377.0).abs() < 1e-3);
    }
}
