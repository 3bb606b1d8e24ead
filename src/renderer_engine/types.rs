use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

use crate::physic_engine::{Particle, ParticleShape};

/// Sommet envoyé au GPU pour une particule (dessinée en `GL_POINTS`).
///
/// | Location | Type   | Champs                     |
/// |:--------:|:-------|:---------------------------|
/// | `0`      | `vec2` | `pos_x`, `pos_y`           |
/// | `1`      | `vec3` | `col_r`, `col_g`, `col_b`  |
/// | `2`      | `vec3` | `alpha`, `size`, `shape`   |
///
/// **Stride total** : `8 × f32 = 32 octets`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleGPU {
    pub pos_x: f32,
    pub pos_y: f32,

    pub col_r: f32,
    pub col_g: f32,
    pub col_b: f32,

    pub alpha: f32,
    pub size: f32,
    /// `ParticleShape` encodée en flottant (0 = cercle, 1 = rectangle)
    pub shape: f32,
}

impl ParticleGPU {
    pub fn from_particle(p: &Particle, shape: ParticleShape) -> Self {
        Self {
            pos_x: p.pos.x,
            pos_y: p.pos.y,
            col_r: p.color.x,
            col_g: p.color.y,
            col_b: p.color.z,
            alpha: p.alpha,
            size: p.size,
            shape: shape as u32 as f32,
        }
    }

    /// Déclare les attributs de sommets.
    ///
    /// ⚠️ Pré-requis : le VAO et le VBO doivent être liés.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, pos_x) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, col_r) as *const _,
            );
            gl::EnableVertexAttribArray(1);

            gl::VertexAttribPointer(
                2,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, alpha) as *const _,
            );
            gl::EnableVertexAttribArray(2);
        }
    }
}
