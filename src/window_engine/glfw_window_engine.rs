use super::r#trait::{ImguiSystem, WindowEngine, WindowEvents, WindowSettings};
use anyhow::{anyhow, Result};
use glfw::{Context, CursorMode};
use imgui::Context as ImContext;
use imgui_glfw_rs::ImguiGLFW;
use log::{debug, info};

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::utils::CenterWindow;

/// Police optionnelle du HUD ; la police embarquée d'imgui sert de repli
const HUD_FONT_PATH: &str = "assets/fonts/hud.ttf";
const HUD_FONT_SIZE: f32 = 18.0;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
}

fn build_imgui_context() -> ImContext {
    let mut imgui = ImContext::create();
    imgui.set_ini_filename(None);

    let font_config = imgui::FontConfig {
        size_pixels: HUD_FONT_SIZE,
        oversample_h: 2,
        oversample_v: 2,
        ..Default::default()
    };
    match std::fs::read(HUD_FONT_PATH) {
        Ok(font_data) => {
            imgui.fonts().add_font(&[imgui::FontSource::TtfData {
                data: &font_data,
                size_pixels: HUD_FONT_SIZE,
                config: Some(font_config),
            }]);
        }
        Err(e) => {
            debug!("HUD font '{}' not found ({}), using default font", HUD_FONT_PATH, e);
            imgui.fonts().add_font(&[imgui::FontSource::DefaultFontData {
                config: Some(font_config),
            }]);
        }
    }
    imgui.fonts().build_rgba32_texture();
    imgui.style_mut().use_dark_colors();
    imgui
}

impl WindowEngine for GlfwWindowEngine {
    fn init(settings: &WindowSettings) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| anyhow!("Impossible d'initialiser GLFW: {:?}", e))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(
                settings.width,
                settings.height,
                &settings.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_cursor_enter_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.center_on_primary_monitor();

        glfw.set_swap_interval(if settings.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        info!("✅ OpenGL context ready for '{}'", settings.title);

        gl::load_with(|s| {
            window
                .get_proc_address(s)
                .map_or(std::ptr::null(), |f| f as *const _)
        });

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
            gl::Enable(gl::PROGRAM_POINT_SIZE);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let mut imgui = build_imgui_context();
        let imgui_glfw = ImguiGLFW::new(&mut imgui, &mut window)
            .map_err(|e| anyhow!("Impossible d'initialiser imgui-glfw: {:?}", e))?;

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system: ImguiSystem {
                context: imgui,
                glfw: imgui_glfw,
            },
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn get_content_scale(&self) -> (f32, f32) {
        let (w, h) = self.window.get_size();
        let (fb_w, fb_h) = self.window.get_framebuffer_size();
        if w <= 0 || h <= 0 {
            return (1.0, 1.0);
        }
        (fb_w as f32 / w as f32, fb_h as f32 / h as f32)
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.window.set_cursor_mode(mode);
    }

    fn get_events(&self) -> &WindowEvents {
        &self.events
    }

    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem {
        &mut self.imgui_system
    }

    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem) {
        (&mut self.window, &mut self.imgui_system)
    }
}
