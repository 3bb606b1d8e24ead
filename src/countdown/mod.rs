pub mod config;
pub use self::config::CountdownConfig;

#[allow(clippy::module_inception)]
pub mod countdown;
pub use self::countdown::{Countdown, CountdownEvent, CountdownPhase};
