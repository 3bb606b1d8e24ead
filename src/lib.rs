pub mod simulator;
pub use simulator::Simulator;
pub mod scheduler;
pub use scheduler::{FrameReport, FrameScheduler};

// Countdown
pub mod countdown;
pub use countdown::{Countdown, CountdownEvent, CountdownPhase};
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
// Narration & navigation
pub mod narration_engine;
pub use narration_engine::Narrator;
pub mod navigation;
pub use navigation::Navigator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Window engine
pub mod window_engine;

// Utilities
pub mod utils;
