/// Interface commune des moteurs de narration (synthèse vocale).
///
/// - `speak` interrompt l'énoncé en cours puis programme le nouveau ;
/// - `cancel` n'interrompt que l'énoncé **en cours** : un énoncé encore en
///   attente de son délai sera quand même prononcé.
pub trait Narrator {
    fn speak(&mut self, text: &str);

    fn cancel(&mut self);

    /// Fait avancer les délais internes de `dt` secondes.
    fn update(&mut self, _dt: f32) {}

    /// Arrêt complet : énoncé courant et énoncés en attente.
    fn close(&mut self) {
        self.cancel();
    }
}
