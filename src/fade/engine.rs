use raylib::prelude::*;
use tracing::{debug, info, warn};
use crate::constants::*;
use crate::engine::{Engine, ItemView, Viewport};
use crate::fade::state::FadeState;
use crate::photos::PhotoSet;
use crate::timer::Timer;

pub struct FadeEngine {
    state: FadeState,

    photos: Vec<(usize, f32, f32)>,
    index: usize,
    visible: Option<usize>,
    viewport: Viewport,

    opacity: f32,
    fade: Option<ease::Tween>,

    timer: Timer,
}

impl FadeEngine {
    pub fn new() -> Self {
        Self {
            state: FadeState::Idle,
            photos: Vec::new(),
            index: 0,
            visible: None,
            viewport: Viewport::new(0.0, 0.0),
            opacity: 0.0,
            fade: None,
            timer: Timer::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> FadeState {
        self.state
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Restarts the fade-in from fully transparent, even for the photo
    /// that is already on screen.
    fn reset_fade(&mut self) {
        self.opacity = 0.0;
        self.fade = Some(ease::Tween::new(ease::linear_none, 0.0, 1.0, FADE_IN_DURATION));
    }

    fn display(&mut self) {
        self.visible = Some(self.index);
        self.reset_fade();
        self.timer.arm(FADE_DWELL);
        self.state = FadeState::Showing;
    }

    fn advance(&mut self) {
        self.index += 1;
        if self.index >= self.photos.len() {
            self.visible = None;
            self.fade = None;
            self.timer.arm(FADE_RESET_PAUSE);
            self.state = FadeState::Resetting;
        } else {
            self.display();
        }
    }

    /// Size of a photo scaled down to fit the viewport, never scaled up.
    fn fitted(&self, width: f32, height: f32) -> (f32, f32) {
        let max_width = self.viewport.width * FIT_RATIO;
        let max_height = self.viewport.height * FIT_RATIO;
        let scale = (max_width / width).min(max_height / height).min(1.0);
        (width * scale, height * scale)
    }
}

impl Engine for FadeEngine {
    fn initialize(&mut self, photos: &PhotoSet, viewport: Viewport) {
        self.viewport = viewport;
        if photos.is_empty() {
            debug!("No photos, fade carousel not started");
            return;
        }
        self.visible = None;
        self.opacity = 0.0;
        self.state = FadeState::Loading;
    }

    fn update(&mut self, dt: f32, photos: &PhotoSet) {
        if let Some(tween) = self.fade.as_mut() {
            self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        }

        match self.state {
            FadeState::Loading => {
                if photos.all_settled() {
                    self.photos = photos.usable();
                    if self.photos.is_empty() {
                        warn!("No photo could be loaded, carousel stays idle");
                        self.state = FadeState::Idle;
                        return;
                    }
                    info!("Fade carousel ready with {} photos", self.photos.len());
                    self.index = 0;
                    self.display();
                }
            }
            FadeState::Showing => {
                if self.timer.tick(dt) {
                    self.advance();
                }
            }
            FadeState::Resetting => {
                if self.timer.tick(dt) {
                    debug!("Fade carousel starting over");
                    self.index = 0;
                    self.display();
                }
            }
            FadeState::Idle | FadeState::Stopped => {}
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        // Photos are centred when drawn; nothing to recompute
        self.viewport = viewport;
    }

    fn stop(&mut self) {
        self.timer.cancel();
        if self.state != FadeState::Idle {
            self.state = FadeState::Stopped;
        }
    }

    #[cfg(test)]
    fn current(&self) -> Option<usize> {
        self.visible.map(|i| self.photos[i].0)
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    fn views(&self) -> Vec<ItemView> {
        let Some(i) = self.visible else {
            return Vec::new();
        };
        let (slot, width, height) = self.photos[i];
        let (width, height) = self.fitted(width, height);

        vec![ItemView {
            photo: slot,
            x: (self.viewport.width - width) / 2.0,
            y: (self.viewport.height - height) / 2.0,
            width,
            height,
            scale: 1.0,
            opacity: self.opacity,
            current: true,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const SLACK: f32 = 0.2;

    fn run(engine: &mut FadeEngine, photos: &PhotoSet, seconds: f32) {
        let frames = (seconds / DT).round() as usize;
        for _ in 0..frames {
            engine.update(DT, photos);
        }
    }

    fn started(count: usize) -> (FadeEngine, PhotoSet) {
        let sizes: Vec<(f32, f32)> = (0..count).map(|_| (800.0, 600.0)).collect();
        let set = PhotoSet::loaded(&sizes);
        let mut engine = FadeEngine::new();
        engine.initialize(&set, Viewport::new(1000.0, 600.0));
        engine.update(DT, &set);
        (engine, set)
    }

    #[test]
    fn empty_photo_set_does_nothing() {
        let set = PhotoSet::default();
        let mut engine = FadeEngine::new();
        engine.initialize(&set, Viewport::new(1000.0, 600.0));
        run(&mut engine, &set, 5.0);

        assert_eq!(engine.state(), FadeState::Idle);
        assert!(!engine.is_running());
        assert!(engine.views().is_empty());
    }

    #[test]
    fn starts_hidden_until_photos_settle() {
        let mut set = PhotoSet::pending(1);
        let mut engine = FadeEngine::new();
        engine.initialize(&set, Viewport::new(1000.0, 600.0));
        run(&mut engine, &set, 1.0);
        assert!(engine.views().is_empty());

        set.mark_loaded(0, 640.0, 480.0);
        engine.update(DT, &set);
        assert_eq!(engine.current(), Some(0));
        assert_eq!(engine.state(), FadeState::Showing);
    }

    #[test]
    fn wraps_to_first_photo_after_the_last() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SLACK);

        let mut shown = vec![engine.current()];
        for _ in 0..2 {
            run(&mut engine, &set, FADE_DWELL);
            shown.push(engine.current());
        }
        assert_eq!(shown, vec![Some(0), Some(1), Some(2)]);

        run(&mut engine, &set, FADE_DWELL);
        assert_eq!(engine.state(), FadeState::Resetting);
        assert_eq!(engine.current(), None);

        run(&mut engine, &set, FADE_RESET_PAUSE);
        assert_eq!(engine.current(), Some(0));
        assert!(engine.index() < 3);
    }

    #[test]
    fn keeps_a_single_pending_callback() {
        let (mut engine, set) = started(2);
        for _ in 0..(30.0 / DT) as usize {
            engine.update(DT, &set);
            assert!(engine.is_running());
            assert!(engine.views().len() <= 1);
        }
    }

    #[test]
    fn fade_replays_for_the_same_photo() {
        let (mut engine, set) = started(1);
        run(&mut engine, &set, FADE_IN_DURATION + SLACK);
        assert_eq!(engine.opacity(), 1.0);

        run(&mut engine, &set, FADE_DWELL + FADE_RESET_PAUSE - FADE_IN_DURATION);
        assert_eq!(engine.current(), Some(0));
        assert!(engine.opacity() < 1.0);
    }

    #[test]
    fn large_photos_fit_the_viewport() {
        let set = PhotoSet::loaded(&[(4000.0, 3000.0)]);
        let mut engine = FadeEngine::new();
        engine.initialize(&set, Viewport::new(1000.0, 600.0));
        engine.update(DT, &set);

        let view = engine.views()[0];
        assert!(view.width <= 900.0 + 1e-3);
        assert!(view.height <= 540.0 + 1e-3);
        assert!((view.x + view.width / 2.0 - 500.0).abs() < 1e-3);
    }
}
