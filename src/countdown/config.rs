use serde::Deserialize;

pub const DEFAULT_REDIRECT_URL: &str = "https://careeryatraa.com/";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountdownConfig {
    /// Valeur affichée au démarrage
    pub start_value: u32,
    /// Intervalle entre deux ticks, en secondes
    pub tick_interval: f32,
    /// Délai entre la mise à feu (compteur à 1) et l'allumage de la flamme
    pub fire_delay: f32,
    /// Délai entre la mise à feu et le décollage effectif
    pub launch_delay: f32,
    /// Délai entre la fin du compte à rebours et la redirection
    pub redirect_delay: f32,
    pub redirect_url: String,
    /// Circonférence de l'anneau de progression (rayon 120 → ≈ 754)
    pub ring_circumference: f32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start_value: 10,
            tick_interval: 1.0,
            fire_delay: 0.4,
            launch_delay: 0.9,
            redirect_delay: 1.5,
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            ring_circumference: 754.0,
        }
    }
}

impl CountdownConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<Self>(&text)?.sanitized())
    }

    pub fn sanitized(mut self) -> Self {
        // Le compte à rebours doit au moins passer par 1 (mise à feu) puis 0
        self.start_value = self.start_value.max(1);
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            self.tick_interval = 1.0;
        }
        self.fire_delay = self.fire_delay.max(0.0);
        self.launch_delay = self.launch_delay.max(self.fire_delay);
        self.redirect_delay = self.redirect_delay.max(0.0);
        self
    }
}
