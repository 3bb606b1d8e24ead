use log::{error, info, warn};
use std::ptr;

use crate::cstr;
use crate::renderer_engine::shader::{try_compile_shader_program, ShaderSources};

pub const BACKGROUND_SHADERS: ShaderSources = ShaderSources {
    name: "background",
    vertex_path: "assets/shaders/background/fullscreen_quad.vert.glsl",
    fragment_path: "assets/shaders/background/cosmic_fbm.frag.glsl",
    vertex_fallback: include_str!("../../assets/shaders/background/fullscreen_quad.vert.glsl"),
    fragment_fallback: include_str!("../../assets/shaders/background/cosmic_fbm.frag.glsl"),
};

/// Quad plein écran en triangle strip
const QUAD_VERTICES: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// Valeurs des uniforms du fond animé.
///
/// `mouse` est exprimé dans le repère de `gl_FragCoord` (origine en bas à
/// gauche) : l'ordonnée du pointeur est retournée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
}

impl BackgroundUniforms {
    /// Pointeur initialement au centre
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            time: 0.0,
            resolution: [width, height],
            mouse: [width / 2.0, height / 2.0],
        }
    }

    pub fn set_time(&mut self, elapsed: f32) {
        self.time = elapsed;
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    /// Pointeur en coordonnées fenêtre (`y` vers le bas).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.mouse = [x, self.resolution[1] - y];
    }
}

/// Fond animé : bruit fractal, rendu en un draw call.
///
/// Un échec de compilation désactive le fond (la couleur de clear reste
/// visible) sans interrompre le show.
pub struct ShaderBackground {
    program: u32,
    vao: u32,
    vbo: u32,
    loc_time: i32,
    loc_resolution: i32,
    loc_mouse: i32,
    pub uniforms: BackgroundUniforms,
}

impl ShaderBackground {
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn new(width: f32, height: f32) -> Self {
        let (mut vao, mut vbo) = (0u32, 0u32);
        gl::GenVertexArrays(1, &mut vao);
        gl::GenBuffers(1, &mut vbo);
        gl::BindVertexArray(vao);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            std::mem::size_of_val(&QUAD_VERTICES) as isize,
            QUAD_VERTICES.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, 0, ptr::null());
        gl::EnableVertexAttribArray(0);
        gl::BindVertexArray(0);

        let mut background = Self {
            program: 0,
            vao,
            vbo,
            loc_time: -1,
            loc_resolution: -1,
            loc_mouse: -1,
            uniforms: BackgroundUniforms::new(width, height),
        };
        let (vertex_src, fragment_src) = BACKGROUND_SHADERS.load();
        match try_compile_shader_program(&vertex_src, &fragment_src) {
            Ok(program) => background.install_program(program),
            Err(e) => error!("❌ Background shader disabled:\n{:#}", e),
        }
        background
    }

    unsafe fn install_program(&mut self, program: u32) {
        if self.program != 0 {
            gl::DeleteProgram(self.program);
        }
        self.program = program;
        self.loc_time = gl::GetUniformLocation(program, cstr!("u_time"));
        self.loc_resolution = gl::GetUniformLocation(program, cstr!("u_resolution"));
        self.loc_mouse = gl::GetUniformLocation(program, cstr!("u_mouse"));
    }

    pub fn is_enabled(&self) -> bool {
        self.program != 0
    }

    /// Recompile depuis le disque ; en cas d'échec l'ancien programme est conservé.
    ///
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn reload(&mut self) -> anyhow::Result<()> {
        let (vertex_src, fragment_src) = BACKGROUND_SHADERS.load();
        match try_compile_shader_program(&vertex_src, &fragment_src) {
            Ok(program) => {
                self.install_program(program);
                info!("✅ Background shader reloaded");
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Background shader reload failed, keeping previous program");
                Err(e)
            }
        }
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn render(&self) {
        if !self.is_enabled() {
            return;
        }
        let u = &self.uniforms;
        gl::UseProgram(self.program);
        gl::Uniform1f(self.loc_time, u.time);
        gl::Uniform2f(self.loc_resolution, u.resolution[0], u.resolution[1]);
        gl::Uniform2f(self.loc_mouse, u.mouse[0], u.mouse[1]);
        gl::BindVertexArray(self.vao);
        gl::DrawArrays(gl::TRIANGLE_STRIP, 0, 4);
        gl::BindVertexArray(0);
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn close(&mut self) {
        if self.program != 0 {
            gl::DeleteProgram(self.program);
            self.program = 0;
        }
        if self.vbo != 0 {
            gl::DeleteBuffers(1, &self.vbo);
            self.vbo = 0;
        }
        if self.vao != 0 {
            gl::DeleteVertexArrays(1, &self.vao);
            self.vao = 0;
        }
    }
}
