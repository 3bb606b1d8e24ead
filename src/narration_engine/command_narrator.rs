use log::{debug, info, warn};
use std::collections::VecDeque;
use std::process::{Child, Command, Stdio};

use crate::narration_engine::{settings::NarrationSettings, Narrator};

/// Énoncé programmé, prononcé à l'expiration de `remaining`
#[derive(Debug, Clone, PartialEq)]
struct QueuedUtterance {
    remaining: f32,
    text: String,
}

/// Narration via une commande de synthèse vocale externe (`espeak`, `say`).
///
/// Un seul processus de parole vit à la fois. Si la commande est introuvable,
/// la voix est désactivée (un seul avertissement) ; les énoncés restent
/// journalisés.
#[derive(Debug)]
pub struct CommandNarrator {
    settings: NarrationSettings,
    queue: VecDeque<QueuedUtterance>,
    current: Option<Child>,
    voice_available: bool,
}

impl CommandNarrator {
    pub fn new(settings: NarrationSettings) -> Self {
        let voice_available = settings.enabled && settings.command.is_some();
        if !voice_available {
            info!("🔇 Narration voice disabled, utterances will only be logged");
        }
        Self {
            settings,
            queue: VecDeque::new(),
            current: None,
            voice_available,
        }
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_speaking(&self) -> bool {
        self.current.is_some()
    }

    pub fn voice_available(&self) -> bool {
        self.voice_available
    }

    fn stop_current(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Le processus a pu se terminer entre-temps : erreurs ignorées
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn reap_finished(&mut self) {
        let finished = match self.current.as_mut() {
            Some(child) => !matches!(child.try_wait(), Ok(None)),
            None => false,
        };
        if finished {
            self.current = None;
        }
    }

    fn say_now(&mut self, text: &str) {
        info!("🗣️ {}", text);
        if !self.voice_available {
            return;
        }
        let Some(command) = self.settings.command.clone() else {
            return;
        };

        self.stop_current();
        match Command::new(&command)
            .args(self.settings.effective_args())
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => self.current = Some(child),
            Err(e) => {
                warn!(
                    "⚠️ Speech command '{}' unavailable ({}), narration voice disabled",
                    command, e
                );
                self.voice_available = false;
            }
        }
    }
}

impl Narrator for CommandNarrator {
    fn speak(&mut self, text: &str) {
        self.stop_current();
        self.queue.push_back(QueuedUtterance {
            remaining: self.settings.delay,
            text: text.to_string(),
        });
        if self.settings.delay <= 0.0 {
            self.update(0.0);
        }
    }

    fn cancel(&mut self) {
        self.stop_current();
    }

    fn update(&mut self, dt: f32) {
        self.reap_finished();
        for queued in &mut self.queue {
            queued.remaining -= dt;
        }
        while self.queue.front().is_some_and(|q| q.remaining <= 0.0) {
            if let Some(queued) = self.queue.pop_front() {
                self.say_now(&queued.text);
            }
        }
    }

    fn close(&mut self) {
        self.stop_current();
        if !self.queue.is_empty() {
            debug!("Dropping {} queued utterances", self.queue.len());
        }
        self.queue.clear();
    }
}

impl Drop for CommandNarrator {
    fn drop(&mut self) {
        self.stop_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_settings() -> NarrationSettings {
        NarrationSettings {
            command: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_speak_waits_for_delay() {
        let mut narrator = CommandNarrator::new(silent_settings());
        narrator.speak("10");
        assert_eq!(narrator.pending_len(), 1);
        narrator.update(0.1);
        assert_eq!(narrator.pending_len(), 1);
        narrator.update(0.1);
        assert_eq!(narrator.pending_len(), 0);
    }

    #[test]
    fn test_cancel_keeps_queued_utterance() {
        let mut narrator = CommandNarrator::new(silent_settings());
        narrator.speak("Launch!");
        narrator.cancel();
        assert_eq!(narrator.pending_len(), 1);
        narrator.close();
        assert_eq!(narrator.pending_len(), 0);
    }

    #[test]
    fn test_missing_command_disables_voice() {
        let mut narrator = CommandNarrator::new(NarrationSettings {
            command: Some("definitely-not-a-speech-synthesizer".into()),
            delay: 0.0,
            ..Default::default()
        });
        assert!(narrator.voice_available());
        narrator.speak("3");
        assert!(!narrator.voice_available());
        assert!(!narrator.is_speaking());
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_command_is_spawned() {
        let mut narrator = CommandNarrator::new(NarrationSettings {
            command: Some("true".into()),
            args: vec![],
            delay: 0.0,
            ..Default::default()
        });
        narrator.speak("9");
        assert!(narrator.voice_available());
        assert!(narrator.is_speaking());
        assert_eq!(narrator.pending_len(), 0);

        // Un nouvel énoncé remplace le processus courant
        narrator.speak("8");
        assert!(narrator.is_speaking());
        narrator.close();
        assert!(!narrator.is_speaking());
    }
}
