use clap::ValueEnum;
use tracing::info;
use crate::engine::{Engine, ItemView, Viewport};
use crate::fade::engine::FadeEngine;
use crate::photos::PhotoSet;
use crate::track::engine::TrackEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CarouselKind {
    /// Continuous horizontal track with a seamless loop
    Track,
    /// One photo at a time with a fade-in
    Fade,
}

/// Owns the carousel engine for the whole session and makes sure it is set
/// up only once, however often the photos panel is opened.
pub struct CarouselController {
    kind: CarouselKind,
    engine: Box<dyn Engine>,
    initialized: bool,
}

impl CarouselController {
    pub fn new(kind: CarouselKind) -> Self {
        let engine: Box<dyn Engine> = match kind {
            CarouselKind::Track => Box::new(TrackEngine::new()),
            CarouselKind::Fade => Box::new(FadeEngine::new()),
        };
        Self { kind, engine, initialized: false }
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns `true` when this call did the initialization.
    pub fn ensure_initialized(&mut self, photos: &PhotoSet, viewport: Viewport) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        info!("Starting {:?} carousel over {} photos", self.kind, photos.len());
        self.engine.initialize(photos, viewport);
        true
    }

    pub fn update(&mut self, dt: f32, photos: &PhotoSet) {
        if self.initialized {
            self.engine.update(dt, photos);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.initialized {
            self.engine.resize(viewport);
        }
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<usize> {
        self.engine.current()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn views(&self) -> Vec<ItemView> {
        self.engine.views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn snapshot(controller: &CarouselController) -> (Option<usize>, bool, Vec<ItemView>) {
        (controller.current(), controller.is_running(), controller.views())
    }

    #[test]
    fn initialization_runs_once() {
        for kind in [CarouselKind::Track, CarouselKind::Fade] {
            let photos = PhotoSet::loaded(&[(400.0, 300.0), (300.0, 400.0)]);
            let viewport = Viewport::new(1000.0, 600.0);

            let mut once = CarouselController::new(kind);
            assert!(once.ensure_initialized(&photos, viewport));
            let mut twice = CarouselController::new(kind);
            twice.ensure_initialized(&photos, viewport);
            assert!(!twice.ensure_initialized(&photos, viewport));

            for _ in 0..200 {
                once.update(DT, &photos);
                twice.update(DT, &photos);
                // Re-opening the panel mid-loop changes nothing
                twice.ensure_initialized(&photos, viewport);
            }
            assert_eq!(snapshot(&once), snapshot(&twice));
        }
    }

    #[test]
    fn nothing_moves_before_initialization() {
        let photos = PhotoSet::loaded(&[(400.0, 300.0)]);
        let mut controller = CarouselController::new(CarouselKind::Track);
        for _ in 0..100 {
            controller.update(DT, &photos);
        }
        assert!(!controller.is_initialized());
        assert!(!controller.is_running());
        assert!(controller.views().is_empty());
    }

    #[test]
    fn empty_photos_start_no_loop() {
        let photos = PhotoSet::default();
        let mut controller = CarouselController::new(CarouselKind::Fade);
        controller.ensure_initialized(&photos, Viewport::new(800.0, 600.0));
        controller.update(DT, &photos);
        assert!(controller.is_initialized());
        assert!(!controller.is_running());
    }
}
