pub mod r#trait;
pub use r#trait::{ImguiSystem, WindowEngine, WindowEvents, WindowSettings};

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;
