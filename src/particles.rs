pub const PARTICLE_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    pub size: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.size, self.size, self.delay, self.duration
        )
    }
}

pub fn spawn_field(rng: &mut fastrand::Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|id| Particle {
            id,
            left: rng.f64() * 100.0,
            delay: rng.f64() * 5.0,
            duration: 15.0 + rng.f64() * 10.0,
            size: 2.0 + rng.f64() * 4.0,
        })
        .collect()
}
