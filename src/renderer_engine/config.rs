use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Fond animé par shader ; sinon simple couleur de clear
    pub background_enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// Texte affiché sous l'anneau pendant le compte à rebours
    pub redirect_text: String,
    /// Curseur lumineux (point + halo) à la place du curseur système
    pub show_custom_cursor: bool,
    /// Ferme la fenêtre une fois la redirection lancée
    pub close_on_redirect: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    pub clear_color: [f32; 3],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            background_enabled: true,
            title: "Get Ready for Launch".to_string(),
            subtitle: "Your journey begins in...".to_string(),
            redirect_text: "Redirecting you to Careeryatraa...".to_string(),
            show_custom_cursor: true,
            close_on_redirect: true,
            window_width: 1024,
            window_height: 800,
            vsync: true,
            clear_color: [0.04, 0.05, 0.12],
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
