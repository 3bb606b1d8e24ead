use log::{debug, info, warn};

use crate::countdown::{Countdown, CountdownEvent, CountdownPhase};
use crate::narration_engine::{utterance_for, Narrator};
use crate::navigation::Navigator;
use crate::physic_engine::{PhysicEngine, UpdateResult};

/// Résultat d'un pas de l'orchestrateur
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Évènements du compte à rebours traités pendant ce pas
    pub events: Vec<CountdownEvent>,
    pub update: UpdateResult,
}

impl FrameReport {
    pub fn redirected(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, CountdownEvent::Redirect { .. }))
    }
}

/// Orchestrateur headless du show.
///
/// Relie le compte à rebours aux moteurs (physique, narration, navigation).
/// Aucune dépendance à la fenêtre ni au GPU : le `Simulator` l'alimente avec
/// le `dt` réel, les tests avec un `dt` synthétique.
pub struct FrameScheduler<P, N, V>
where
    P: PhysicEngine,
    N: Narrator,
    V: Navigator,
{
    physic_engine: P,
    countdown: Countdown,
    narrator: N,
    navigator: V,

    elapsed: f32,
    running: bool,
    redirect_count: usize,
}

impl<P, N, V> FrameScheduler<P, N, V>
where
    P: PhysicEngine,
    N: Narrator,
    V: Navigator,
{
    pub fn new(physic_engine: P, countdown: Countdown, narrator: N, navigator: V) -> Self {
        Self {
            physic_engine,
            countdown,
            narrator,
            navigator,
            elapsed: 0.0,
            running: true,
            redirect_count: 0,
        }
    }

    /// Clic sur le bouton de lancement. Renvoie `false` si déjà lancé.
    pub fn start(&mut self) -> bool {
        match self.countdown.start() {
            Some(CountdownEvent::Started { value }) => {
                self.narrator.speak(&utterance_for(value));
                true
            }
            _ => false,
        }
    }

    /// Avance tout le show de `dt` secondes.
    ///
    /// L'intervalle est découpé aux échéances du compte à rebours : physique et
    /// narration avancent jusqu'à l'évènement, qui est ensuite traité. Le
    /// résultat ne dépend donc pas de la taille des pas.
    pub fn advance(&mut self, dt: f32) -> FrameReport {
        if !self.running {
            return FrameReport::default();
        }
        let dt = dt.max(0.0);
        self.elapsed += dt;

        let mut report = FrameReport::default();
        let mut budget = dt;
        loop {
            let step = match self.countdown.time_to_next_event() {
                Some(next) if next < budget => next.max(0.0),
                _ => budget,
            };
            self.narrator.update(step);
            report.update.merge(self.physic_engine.update(step));
            budget -= step;

            let events = self.countdown.advance(step);
            for event in &events {
                self.dispatch(event);
            }
            let stalled = events.is_empty() && step <= 0.0;
            report.events.extend(events);
            if budget <= 0.0 || stalled {
                break;
            }
        }
        report
    }

    fn dispatch(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::Started { value } => {
                self.narrator.speak(&utterance_for(*value));
            }
            CountdownEvent::Tick { value } => {
                self.narrator.speak(&utterance_for(*value));
                self.physic_engine.flash();
                let speed = self.physic_engine.boost_rocket(*value);
                debug!("🚀 Rocket speed after tick {}: {:.2}", value, speed);
            }
            CountdownEvent::Ignition => self.physic_engine.ignite_rocket(),
            CountdownEvent::RocketFire => self.physic_engine.light_rocket_fire(),
            CountdownEvent::RocketLaunch => {
                info!("🚀 Lift-off!");
                self.physic_engine.launch_rocket();
            }
            CountdownEvent::Finished => self.narrator.cancel(),
            CountdownEvent::Redirect { url } => {
                self.redirect_count += 1;
                if let Err(e) = self.navigator.navigate(url) {
                    warn!("⚠️ Redirect to {} failed: {:#}", url, e);
                }
            }
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Temps total simulé, en secondes
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn redirect_count(&self) -> usize {
        self.redirect_count
    }

    pub fn phase(&self) -> CountdownPhase {
        self.countdown.phase()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_engine_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn navigator(&self) -> &V {
        &self.navigator
    }

    pub fn close(&mut self) {
        self.running = false;
        self.narrator.close();
        self.physic_engine.close();
    }
}
