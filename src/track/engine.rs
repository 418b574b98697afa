use raylib::prelude::*;
use tracing::{debug, info, warn};
use crate::constants::*;
use crate::engine::{Engine, ItemView, Viewport};
use crate::photos::PhotoSet;
use crate::timer::Timer;
use crate::track::layout::TrackLayout;
use crate::track::slide::ItemStyle;
use crate::track::state::TrackState;

pub struct TrackEngine {
    state: TrackState,

    // Item i shows photo slot photos[i % original_count]. The item space is
    // twice the photo count so the move past the last photo lands on a copy
    // of the first one before snapping back.
    photos: Vec<usize>,
    original_count: usize,
    layout: TrackLayout,
    styles: Vec<ItemStyle>,
    viewport: Viewport,

    index: usize,
    offset: f32,
    slide: Option<ease::Tween>,

    timer: Timer,
}

impl TrackEngine {
    pub fn new() -> Self {
        Self {
            state: TrackState::Idle,
            photos: Vec::new(),
            original_count: 0,
            layout: TrackLayout::default(),
            styles: Vec::new(),
            viewport: Viewport::new(0.0, 0.0),
            index: 0,
            offset: 0.0,
            slide: None,
            timer: Timer::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TrackState {
        self.state
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn item_count(&self) -> usize {
        self.layout.len()
    }

    #[cfg(test)]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    #[cfg(test)]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Builds the doubled item sequence once every photo has settled.
    fn build(&mut self, photos: &PhotoSet) {
        let usable = photos.usable();
        if usable.is_empty() {
            warn!("No photo could be loaded, carousel stays idle");
            self.state = TrackState::Idle;
            return;
        }

        self.original_count = usable.len();
        self.photos = usable.iter().map(|(slot, _, _)| *slot).collect();

        let aspects: Vec<f32> = usable
            .iter()
            .chain(usable.iter())
            .map(|(_, width, height)| if *height > 0.0 { width / height } else { 1.0 })
            .collect();

        self.layout = TrackLayout::new(&aspects, self.viewport.height * ITEM_HEIGHT_RATIO, ITEM_GAP);
        self.layout.compute_targets(self.viewport.width);
        self.styles = vec![ItemStyle::dimmed(); self.layout.len()];

        self.center_instant(0);
        self.timer.arm(SETTLE_DELAY);
        self.state = TrackState::Settling;
        info!("Track carousel ready with {} photos", self.original_count);
    }

    /// Jumps to `index` without animating the track or the item styles.
    fn center_instant(&mut self, index: usize) {
        self.index = index;
        self.slide = None;
        self.offset = self.layout.target(index);
        self.highlight();
        for style in self.styles.iter_mut() {
            style.settle();
        }
    }

    fn highlight(&mut self) {
        for (i, style) in self.styles.iter_mut().enumerate() {
            style.emphasize(i == self.index);
        }
    }

    fn move_next(&mut self) {
        self.index += 1;
        let target = self.layout.target(self.index);
        self.slide = Some(ease::Tween::new(ease::cubic_out, self.offset, target, TRANSITION_DURATION));
        self.highlight();
    }

    fn finish_move(&mut self) {
        self.slide = None;
        self.offset = self.layout.target(self.index);

        if self.index >= self.original_count {
            // Same picture, one loop earlier: invisible jump
            self.center_instant(self.index - self.original_count);
            debug!("Track wrapped back to item {}", self.index);
        }
    }
}

impl Engine for TrackEngine {
    fn initialize(&mut self, photos: &PhotoSet, viewport: Viewport) {
        self.viewport = viewport;
        if photos.is_empty() {
            debug!("No photos, track carousel not started");
            return;
        }
        self.state = TrackState::Loading;
    }

    fn update(&mut self, dt: f32, photos: &PhotoSet) {
        for style in self.styles.iter_mut() {
            style.update(dt);
        }
        if let Some(tween) = self.slide.as_mut() {
            self.offset = tween.apply(dt);
        }

        match self.state {
            TrackState::Loading => {
                if photos.all_settled() {
                    self.build(photos);
                }
            }
            TrackState::Settling => {
                if self.timer.tick(dt) {
                    self.timer.arm(PAUSE_DURATION);
                    self.state = TrackState::Pausing;
                }
            }
            TrackState::Pausing => {
                if self.timer.tick(dt) {
                    self.move_next();
                    self.timer.arm(TRANSITION_DURATION);
                    self.state = TrackState::Moving;
                }
            }
            TrackState::Moving => {
                if self.timer.tick(dt) {
                    self.finish_move();
                    self.timer.arm(PAUSE_DURATION);
                    self.state = TrackState::Pausing;
                }
            }
            TrackState::Idle | TrackState::Stopped => {}
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.layout.is_empty() {
            return;
        }
        // Offsets only; the loop timer keeps its schedule
        self.layout.compute_targets(viewport.width);
        self.center_instant(self.index);
    }

    fn stop(&mut self) {
        self.timer.cancel();
        if self.state != TrackState::Idle {
            self.state = TrackState::Stopped;
        }
    }

    #[cfg(test)]
    fn current(&self) -> Option<usize> {
        if self.original_count == 0 {
            return None;
        }
        Some(self.photos[self.index % self.original_count])
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    fn views(&self) -> Vec<ItemView> {
        if self.original_count == 0 {
            return Vec::new();
        }
        let height = self.layout.item_height();
        let y = (self.viewport.height - height) / 2.0;

        self.styles
            .iter()
            .enumerate()
            .map(|(i, style)| ItemView {
                photo: self.photos[i % self.original_count],
                x: self.layout.left(i) - self.offset,
                y,
                width: self.layout.width(i),
                height,
                scale: style.scale,
                opacity: style.opacity,
                current: i == self.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    // Keeps checks away from phase boundaries
    const SLACK: f32 = 0.25;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 600.0)
    }

    fn photos(count: usize) -> PhotoSet {
        let sizes: Vec<(f32, f32)> = (0..count).map(|i| (400.0 + 100.0 * i as f32, 300.0)).collect();
        PhotoSet::loaded(&sizes)
    }

    fn run(engine: &mut TrackEngine, photos: &PhotoSet, seconds: f32) {
        let frames = (seconds / DT).round() as usize;
        for _ in 0..frames {
            engine.update(DT, photos);
        }
    }

    fn started(count: usize) -> (TrackEngine, PhotoSet) {
        let set = photos(count);
        let mut engine = TrackEngine::new();
        engine.initialize(&set, viewport());
        engine.update(DT, &set);
        (engine, set)
    }

    #[test]
    fn empty_photo_set_does_nothing() {
        let set = PhotoSet::default();
        let mut engine = TrackEngine::new();
        engine.initialize(&set, viewport());
        run(&mut engine, &set, 5.0);

        assert_eq!(engine.state(), TrackState::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.current(), None);
        assert!(engine.views().is_empty());
    }

    #[test]
    fn waits_for_every_photo_to_settle() {
        let mut set = PhotoSet::pending(2);
        let mut engine = TrackEngine::new();
        engine.initialize(&set, viewport());

        set.mark_loaded(0, 400.0, 300.0);
        run(&mut engine, &set, 1.0);
        assert_eq!(engine.state(), TrackState::Loading);
        assert!(!engine.is_running());

        set.mark_failed(1);
        engine.update(DT, &set);
        assert_eq!(engine.state(), TrackState::Settling);
        assert_eq!(engine.original_count(), 1);
    }

    #[test]
    fn doubles_the_item_sequence() {
        let (engine, _) = started(3);
        assert_eq!(engine.original_count(), 3);
        assert_eq!(engine.item_count(), 6);
        assert_eq!(engine.layout.targets().len(), engine.item_count());
        let shown: Vec<usize> = engine.views().iter().map(|v| v.photo).collect();
        assert_eq!(shown, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn loops_back_to_first_photo_after_one_advance_per_photo() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SETTLE_DELAY + SLACK);

        let mut shown = Vec::new();
        for _ in 0..6 {
            run(&mut engine, &set, PAUSE_DURATION + TRANSITION_DURATION);
            shown.push(engine.current().unwrap());
            assert!(engine.index() < engine.original_count());
        }
        assert_eq!(shown, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn advances_ease_between_offsets() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SETTLE_DELAY + PAUSE_DURATION + TRANSITION_DURATION / 2.0);

        assert_eq!(engine.state(), TrackState::Moving);
        let (from, to) = (engine.layout.target(0), engine.layout.target(1));
        assert!(engine.offset() > from.min(to) && engine.offset() < from.max(to));

        run(&mut engine, &set, TRANSITION_DURATION / 2.0 + SLACK);
        assert_eq!(engine.offset(), to);
    }

    #[test]
    fn wrap_snaps_to_the_matching_original_offset() {
        let (mut engine, set) = started(2);
        run(&mut engine, &set, SETTLE_DELAY + SLACK + 2.0 * (PAUSE_DURATION + TRANSITION_DURATION));

        assert_eq!(engine.index(), 0);
        assert_eq!(engine.offset(), engine.layout.target(0));
        assert_eq!(engine.state(), TrackState::Pausing);
    }

    #[test]
    fn never_more_than_one_current_item() {
        let (mut engine, set) = started(4);
        for _ in 0..(20.0 / DT) as usize {
            engine.update(DT, &set);
            let current = engine.views().iter().filter(|v| v.current).count();
            let emphasized = engine.styles.iter().filter(|s| s.is_emphasized()).count();
            assert_eq!(current, 1);
            assert_eq!(emphasized, 1);
        }
    }

    #[test]
    fn resize_recentres_current_item() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SETTLE_DELAY + PAUSE_DURATION + 0.2);

        for width in [800.0_f32, 1000.0, 1333.0, 2560.0] {
            engine.resize(Viewport::new(width, 600.0));
            let current = engine.views().into_iter().find(|v| v.current).unwrap();
            assert!(width >= current.width);
            let centre = current.x + current.width / 2.0;
            assert!((centre - width / 2.0).abs() < 1e-3, "width {width}: centre {centre}");
        }
    }

    #[test]
    fn resize_keeps_loop_schedule() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SETTLE_DELAY + 1.0);
        let before = engine.timer.clone();

        engine.resize(Viewport::new(700.0, 600.0));

        assert_eq!(engine.timer, before);
        assert_eq!(engine.state(), TrackState::Pausing);
    }

    #[test]
    fn stop_cancels_the_loop() {
        let (mut engine, set) = started(3);
        run(&mut engine, &set, SETTLE_DELAY + 0.1);
        engine.stop();
        let index = engine.index();

        run(&mut engine, &set, 10.0);

        assert!(!engine.is_running());
        assert_eq!(engine.state(), TrackState::Stopped);
        assert_eq!(engine.index(), index);
    }
}
