pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Color, ParticleKind, ParticleShape, UpdateResult, Vec2};

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::PhysicConfig;

pub mod particles_pool;
pub use self::particles_pool::FadingPool;

pub mod confetti;
pub use self::confetti::ConfettiPool;
pub mod explosions;
pub use self::explosions::ExplosionsPool;
pub mod sparks;
pub use self::sparks::SparksPool;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod cursor;
pub mod effects;

pub mod physic_engine_launch;
pub use self::physic_engine_launch::LaunchPhysicEngine;
