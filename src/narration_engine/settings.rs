use serde::Deserialize;

/// Débit de parole de référence des synthétiseurs (mots/minute)
pub const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Paramètres de la narration vocale.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NarrationSettings {
    pub enabled: bool,
    /// Commande de synthèse vocale (`espeak`, `say`...). `None` : log seulement.
    pub command: Option<String>,
    /// Arguments additionnels ; le texte est toujours passé en dernier.
    /// Si vide, les arguments de débit par défaut de la commande sont utilisés.
    pub args: Vec<String>,
    /// Débit relatif (1.0 = normal)
    pub rate: f32,
    /// Délai entre la demande et la prise de parole, en secondes
    pub delay: f32,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_command().map(str::to_string),
            args: Vec::new(),
            rate: 0.85,
            delay: 0.15,
        }
    }
}

impl NarrationSettings {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Arguments effectifs passés avant le texte.
    pub fn effective_args(&self) -> Vec<String> {
        if !self.args.is_empty() {
            return self.args.clone();
        }
        let wpm = (BASE_WORDS_PER_MINUTE * self.rate).round() as u32;
        match self.command.as_deref() {
            Some("espeak") | Some("espeak-ng") => vec!["-s".into(), wpm.to_string()],
            Some("say") => vec!["-r".into(), wpm.to_string()],
            _ => Vec::new(),
        }
    }
}

/// Synthétiseur disponible par défaut selon la plateforme.
pub fn default_command() -> Option<&'static str> {
    match std::env::consts::OS {
        "macos" => Some("say"),
        "linux" | "freebsd" | "openbsd" | "netbsd" => Some("espeak"),
        _ => None,
    }
}
