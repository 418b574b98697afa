use rand::Rng;
use raylib::prelude::*;
use tracing::trace;
use crate::constants::*;

/// A decorative glyph that drifts upwards and fades out.
#[derive(Debug, Clone)]
pub struct Floater {
    pub glyph: &'static str,
    origin: Vector2,
    drift: f32,
    duration: f32,
    age: f32,
}

impl Floater {
    fn new(x: f32, y: f32, glyph: &'static str) -> Self {
        let mut rng = rand::rng();
        Self {
            glyph,
            origin: Vector2::new(x - FLOAT_ANCHOR, y - FLOAT_ANCHOR),
            drift: (rng.random::<f32>() - 0.5) * FLOAT_DRIFT,
            duration: FLOAT_MIN_DURATION + rng.random::<f32>() * FLOAT_DURATION_SPREAD,
            age: 0.0,
        }
    }

    #[cfg(test)]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[cfg(test)]
    pub fn drift(&self) -> f32 {
        self.drift
    }

    /// Animation progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        (self.age / self.duration).min(1.0)
    }

    pub fn position(&self) -> Vector2 {
        let t = self.progress();
        let eased = 1.0 - (1.0 - t).powi(2);
        Vector2::new(self.origin.x + self.drift * eased, self.origin.y - FLOAT_RISE * t)
    }

    pub fn opacity(&self) -> f32 {
        1.0 - self.progress()
    }

    fn is_expired(&self) -> bool {
        self.age >= self.duration + FLOAT_REMOVAL_GRACE
    }
}

pub struct FloatSpawner {
    floaters: Vec<Floater>,
    burst: usize,
}

impl FloatSpawner {
    pub fn new(burst: usize) -> Self {
        Self {
            floaters: Vec::new(),
            burst: burst.clamp(BURST_MIN as usize, BURST_MAX as usize),
        }
    }

    pub fn spawn(&mut self, x: f32, y: f32, glyph: &'static str) {
        self.floaters.push(Floater::new(x, y, glyph));
    }

    /// Scatters a batch of glyphs around the middle of `stage`.
    pub fn bouquet_burst(&mut self, stage: Rectangle) -> usize {
        let mut rng = rand::rng();
        let cx = stage.x + stage.width / 2.0;
        let cy = stage.y + stage.height / 2.0 - 10.0;

        for _ in 0..self.burst {
            let x = cx + (rng.random::<f32>() - 0.5) * 160.0;
            let y = cy + (rng.random::<f32>() - 0.2) * 60.0;
            self.spawn(x, y, random_glyph(&mut rng));
        }
        trace!("Bouquet burst of {} glyphs", self.burst);
        self.burst
    }

    /// A few glyphs where the stage was touched.
    pub fn cluster(&mut self, x: f32, y: f32) -> usize {
        let mut rng = rand::rng();
        let count = rng.random_range(1..=CLUSTER_MAX);
        for _ in 0..count {
            let jitter = Vector2::new(rng.random_range(-16.0..16.0), rng.random_range(-16.0..16.0));
            self.spawn(x + jitter.x, y + jitter.y, random_glyph(&mut rng));
        }
        count
    }

    pub fn update(&mut self, dt: f32) {
        for floater in self.floaters.iter_mut() {
            floater.age += dt;
        }
        self.floaters.retain(|f| !f.is_expired());
    }

    pub fn floaters(&self) -> &[Floater] {
        &self.floaters
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.floaters.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.floaters.is_empty()
    }
}

fn random_glyph(rng: &mut impl Rng) -> &'static str {
    BOUQUET_GLYPHS[rng.random_range(0..BOUQUET_GLYPHS.len())]
}
