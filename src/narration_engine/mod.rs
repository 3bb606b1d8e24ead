pub mod r#trait;
pub use r#trait::Narrator;

pub mod command_narrator;
pub use self::command_narrator::CommandNarrator;

pub mod settings;
pub use self::settings::NarrationSettings;

pub mod utterance;
pub use self::utterance::utterance_for;
