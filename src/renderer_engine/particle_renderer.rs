use log::{debug, error, info, warn};

use crate::cstr;
use crate::physic_engine::{Particle, ParticleKind};
use crate::renderer_engine::shader::{try_compile_shader_program, ShaderSources};
use crate::renderer_engine::types::ParticleGPU;

pub const PARTICLE_SHADERS: ShaderSources = ShaderSources {
    name: "particles",
    vertex_path: "assets/shaders/particles/particles.vert.glsl",
    fragment_path: "assets/shaders/particles/particles.frag.glsl",
    vertex_fallback: include_str!("../../assets/shaders/particles/particles.vert.glsl"),
    fragment_fallback: include_str!("../../assets/shaders/particles/particles.frag.glsl"),
};

/// Couche de rendu d'un pool de particules : un VAO/VBO par pool, rempli à
/// chaque frame.
pub struct ParticleLayer {
    pub kind: ParticleKind,
    vao: u32,
    vbo: u32,
    /// Capacité actuelle du VBO, en particules
    capacity: usize,
    staging: Vec<ParticleGPU>,
}

impl ParticleLayer {
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn new(kind: ParticleKind) -> Self {
        let (mut vao, mut vbo) = (0u32, 0u32);
        gl::GenVertexArrays(1, &mut vao);
        gl::GenBuffers(1, &mut vbo);
        gl::BindVertexArray(vao);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        ParticleGPU::setup_vertex_attribs();
        gl::BindVertexArray(0);

        debug!("🎮 Particle layer ready: {}", kind.description());
        Self {
            kind,
            vao,
            vbo,
            capacity: 0,
            staging: Vec::new(),
        }
    }

    /// Copie les particules vers le GPU ; renvoie le nombre de sommets écrits.
    ///
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn upload(&mut self, particles: &[Particle]) -> usize {
        let shape = self.kind.shape();
        self.staging.clear();
        self.staging.extend(
            particles
                .iter()
                .filter(|p| p.is_alive())
                .map(|p| ParticleGPU::from_particle(p, shape)),
        );
        let count = self.staging.len();
        if count == 0 {
            return 0;
        }

        let bytes: &[u8] = bytemuck::cast_slice(&self.staging);
        gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
        if count > self.capacity {
            // Capacité arrondie à la puissance de deux supérieure
            self.capacity = count.next_power_of_two();
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.capacity * std::mem::size_of::<ParticleGPU>()) as isize,
                std::ptr::null(),
                gl::STREAM_DRAW,
            );
        }
        gl::BufferSubData(
            gl::ARRAY_BUFFER,
            0,
            bytes.len() as isize,
            bytes.as_ptr() as *const _,
        );
        count
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant et le programme particules actif.
    pub unsafe fn draw(&self, count: usize) {
        if count == 0 {
            return;
        }
        gl::BindVertexArray(self.vao);
        gl::DrawArrays(gl::POINTS, 0, count as i32);
        gl::BindVertexArray(0);
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn close(&mut self) {
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

/// Programme partagé + une couche par pool (confettis, étincelles, explosions).
///
/// Si le programme ne compile pas, les particules ne sont plus dessinées
/// mais le reste du show continue.
pub struct ParticleRenderer {
    program: u32,
    loc_size: i32,
    layers: Vec<ParticleLayer>,
}

impl ParticleRenderer {
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn new() -> Self {
        let layers = ParticleKind::ALL
            .iter()
            .map(|kind| ParticleLayer::new(*kind))
            .collect();
        let mut renderer = Self {
            program: 0,
            loc_size: -1,
            layers,
        };
        let (vertex_src, fragment_src) = PARTICLE_SHADERS.load();
        match try_compile_shader_program(&vertex_src, &fragment_src) {
            Ok(program) => renderer.install_program(program),
            Err(e) => error!("❌ Particle shader disabled:\n{:#}", e),
        }
        renderer
    }

    unsafe fn install_program(&mut self, program: u32) {
        if self.program != 0 {
            gl::DeleteProgram(self.program);
        }
        self.program = program;
        self.loc_size = gl::GetUniformLocation(program, cstr!("uSize"));
    }

    pub fn is_enabled(&self) -> bool {
        self.program != 0
    }

    pub fn layers(&self) -> &[ParticleLayer] {
        &self.layers
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn reload(&mut self) -> anyhow::Result<()> {
        let (vertex_src, fragment_src) = PARTICLE_SHADERS.load();
        match try_compile_shader_program(&vertex_src, &fragment_src) {
            Ok(program) => {
                self.install_program(program);
                info!("✅ Particle shader reloaded");
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Particle shader reload failed, keeping previous program");
                Err(e)
            }
        }
    }

    /// Envoie puis dessine chaque couche, dans l'ordre confettis → étincelles
    /// → explosions. `particles_of` fournit le contenu de chaque pool.
    ///
    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn render<'a, F>(&mut self, window_size: (f32, f32), particles_of: F) -> usize
    where
        F: Fn(ParticleKind) -> &'a [Particle],
    {
        if !self.is_enabled() {
            return 0;
        }
        gl::UseProgram(self.program);
        gl::Uniform2f(self.loc_size, window_size.0, window_size.1);

        let mut drawn = 0;
        for layer in &mut self.layers {
            let count = layer.upload(particles_of(layer.kind));
            layer.draw(count);
            drawn += count;
        }
        drawn
    }

    /// # Safety
    /// Nécessite un contexte OpenGL courant.
    pub unsafe fn close(&mut self) {
        for layer in &mut self.layers {
            layer.close();
        }
        if self.program != 0 {
            gl::DeleteProgram(self.program);
            self.program = 0;
        }
    }
}
