use launch_countdown::narration_engine::Narrator;
use launch_countdown::navigation::Navigator;
use launch_countdown::physic_engine::{ParticleKind, PhysicEngine};
use launch_countdown::renderer_engine::{Hud, RendererConfig, RendererEngine};
use std::cell::RefCell;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<String>>>;

#[allow(dead_code)]
pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(vec![]))
}

/// Narrateur qui consigne ses appels au lieu de parler.
#[allow(dead_code)]
pub struct RecordingNarrator {
    log: CallLog,
}

#[allow(dead_code)]
impl RecordingNarrator {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&mut self, text: &str) {
        self.log.borrow_mut().push(format!("narrator.speak:{}", text));
    }

    fn cancel(&mut self) {
        self.log.borrow_mut().push("narrator.cancel".into());
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("narrator.close".into());
    }
}

/// Navigateur qui consigne les URL visitées ; peut simuler un échec.
#[allow(dead_code)]
pub struct RecordingNavigator {
    log: CallLog,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.log.borrow_mut().push(format!("navigator.navigate:{}", url));
        if self.fail {
            anyhow::bail!("no browser available");
        }
        Ok(())
    }
}

#[allow(dead_code)]
pub struct DummyNarrator;

impl Narrator for DummyNarrator {
    fn speak(&mut self, _text: &str) {}
    fn cancel(&mut self) {}
}

#[allow(dead_code)]
pub struct DummyNavigator;

impl Navigator for DummyNavigator {
    fn navigate(&mut self, _url: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Entrées du journal commençant par `prefix`
#[allow(dead_code)]
pub fn calls_with_prefix(log: &CallLog, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|call| call.starts_with(prefix))
        .cloned()
        .collect()
}

/// Renderer sans GPU : consigne les appels et compte les particules visibles.
#[allow(dead_code)]
pub struct TestRenderer {
    log: CallLog,
    config: RendererConfig,
    hud: Hud,
}

#[allow(dead_code)]
impl TestRenderer {
    pub fn new(log: CallLog) -> Self {
        let config = RendererConfig {
            show_custom_cursor: false,
            ..Default::default()
        };
        Self {
            log,
            hud: Hud::new(&config),
            config,
        }
    }
}

impl RendererEngine for TestRenderer {
    fn set_window_size(&mut self, width: i32, height: i32) {
        self.log
            .borrow_mut()
            .push(format!("renderer.set_window_size:{}x{}", width, height));
    }

    fn set_pointer(&mut self, _x: f32, _y: f32) {}

    fn render_frame<P: PhysicEngine>(&mut self, physic: &P, _elapsed: f32) -> usize {
        self.log.borrow_mut().push("renderer.render_frame".into());
        ParticleKind::ALL
            .iter()
            .map(|kind| physic.particles(*kind).iter().filter(|p| p.is_alive()).count())
            .sum()
    }

    fn reload_shaders(&mut self) -> anyhow::Result<()> {
        self.log.borrow_mut().push("renderer.reload_shaders".into());
        Ok(())
    }

    fn apply_config(&mut self, config: &RendererConfig) {
        self.hud.apply_config(config);
        self.config = config.clone();
    }

    fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn hud(&self) -> &Hud {
        &self.hud
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}
