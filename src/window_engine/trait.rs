use anyhow::Result;
use glfw::CursorMode;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct ImguiSystem {
    pub context: imgui::Context,
    pub glfw: imgui_glfw_rs::ImguiGLFW,
}

/// Paramètres de création de la fenêtre
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

pub trait WindowEngine {
    fn init(settings: &WindowSettings) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self);
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
    fn get_framebuffer_size(&self) -> (i32, i32);
    /// Rapport pixels framebuffer / coordonnées fenêtre (écrans HiDPI)
    fn get_content_scale(&self) -> (f32, f32);
    fn set_cursor_mode(&mut self, mode: CursorMode);
    fn get_events(&self) -> &WindowEvents;
    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem;

    // Fenêtre et imgui empruntés ensemble pour le rendu du HUD
    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem);
}
