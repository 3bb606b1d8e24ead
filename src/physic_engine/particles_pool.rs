use crate::physic_engine::particle::Particle;

/// Pool de particules éphémères : l'alpha décroît d'un pas fixe à chaque
/// frame et les particules éteintes sont retirées.
///
/// Sert de socle aux étincelles et aux explosions, qui ne diffèrent que par
/// leur génération et leur pas de décroissance.
#[derive(Debug, Clone)]
pub struct FadingPool {
    particles: Vec<Particle>,
    decay: f32,
}

impl FadingPool {
    pub fn new(decay: f32) -> Self {
        Self {
            particles: Vec::new(),
            decay,
        }
    }

    pub fn with_capacity(decay: f32, capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            decay,
        }
    }

    #[inline]
    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn extend(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Avance d'une frame puis retire les particules dont l'alpha est ≤ 0.
    ///
    /// Après l'appel, toutes les particules restantes ont un alpha > 0.
    /// Retourne le nombre de particules retirées.
    pub fn update(&mut self) -> usize {
        let before = self.particles.len();
        let decay = self.decay;
        self.particles.retain_mut(|p| {
            p.step(decay);
            p.is_alive()
        });
        before - self.particles.len()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
