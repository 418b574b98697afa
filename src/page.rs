use raylib::prelude::*;
use tracing::{debug, info};
use crate::audio::{AudioSink, MusicToggle};
use crate::carousel::{CarouselController, CarouselKind};
use crate::constants::*;
use crate::engine::Viewport;
use crate::floating::FloatSpawner;
use crate::panels::{Panel, PanelSwitcher};
use crate::photos::PhotoSet;

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub carousel: CarouselKind,
    pub burst: usize,
    pub message: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselKind::Track,
            burst: BURST_SIZE as usize,
            message: Some(DEFAULT_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Select(Panel),
    ToggleMusic,
    Bouquet,
    StageTap { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Panel(Panel),
    Music,
}

/// Screen regions of the page for a given window size.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub content: Rectangle,
    pub bouquet: Rectangle,
}

impl PageLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let content = Rectangle::new(0.0, NAV_HEIGHT, width, (height - NAV_HEIGHT).max(0.0));
        let bouquet = Rectangle::new(
            content.x + (content.width - BOUQUET_SIZE) / 2.0,
            content.y + (content.height - BOUQUET_SIZE) / 2.0,
            BOUQUET_SIZE,
            BOUQUET_SIZE,
        );
        Self { width, height, content, bouquet }
    }

    pub fn buttons(&self) -> [(NavButton, Rectangle); 4] {
        let height = NAV_HEIGHT - 2.0 * NAV_BUTTON_GAP;
        let slot = |i: usize| {
            Rectangle::new(
                NAV_BUTTON_GAP + i as f32 * (NAV_BUTTON_WIDTH + NAV_BUTTON_GAP),
                NAV_BUTTON_GAP,
                NAV_BUTTON_WIDTH,
                height,
            )
        };
        let music = Rectangle::new(self.width - NAV_BUTTON_GAP - height, NAV_BUTTON_GAP, height, height);
        [
            (NavButton::Panel(Panel::Photos), slot(0)),
            (NavButton::Panel(Panel::Flowers), slot(1)),
            (NavButton::Panel(Panel::Message), slot(2)),
            (NavButton::Music, music),
        ]
    }

    pub fn carousel_viewport(&self) -> Viewport {
        Viewport::new(self.content.width, self.content.height)
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// The whole page: one of each controller, created once per session.
pub struct Page<S> {
    layout: PageLayout,
    panels: PanelSwitcher,
    carousel: CarouselController,
    music: MusicToggle<S>,
    floats: FloatSpawner,
    message: Option<String>,
}

impl<S: AudioSink> Page<S> {
    pub fn new(config: PageConfig, sink: S, width: f32, height: f32) -> Self {
        Self {
            layout: PageLayout::new(width, height),
            panels: PanelSwitcher::new(config.message.is_some()),
            carousel: CarouselController::new(config.carousel),
            music: MusicToggle::new(sink),
            floats: FloatSpawner::new(config.burst),
            message: config.message,
        }
    }

    pub fn handle(&mut self, event: PageEvent, photos: &PhotoSet) {
        match event {
            PageEvent::Select(panel) => {
                let shown = self.panels.show(panel);
                if shown.start_carousel {
                    self.carousel.ensure_initialized(photos, self.layout.carousel_viewport());
                }
            }
            PageEvent::ToggleMusic => {
                self.music.toggle();
            }
            PageEvent::Bouquet => {
                self.floats.bouquet_burst(self.layout.content);
            }
            PageEvent::StageTap { x, y } => {
                self.floats.cluster(x, y);
            }
            PageEvent::Resize { width, height } => {
                debug!("Window resized to {}x{}", width, height);
                self.layout = PageLayout::new(width, height);
                self.carousel.resize(self.layout.carousel_viewport());
            }
        }
    }

    pub fn update(&mut self, dt: f32, photos: &PhotoSet) {
        self.carousel.update(dt, photos);
        self.floats.update(dt);
        self.music.update();
    }

    /// Typed character: '1'..'3' pick a panel, 'm' toggles the music and
    /// space activates the bouquet while it is on screen.
    pub fn char_event(&self, c: char) -> Option<PageEvent> {
        if let Some(panel) = Panel::from_digit(c) {
            return Some(PageEvent::Select(panel));
        }
        match c {
            'm' | 'M' => Some(PageEvent::ToggleMusic),
            ' ' => self.activate_event(),
            _ => None,
        }
    }

    /// Enter or space: triggers the bouquet when the flowers panel is shown.
    pub fn activate_event(&self) -> Option<PageEvent> {
        (self.panels.visible() == Some(Panel::Flowers)).then_some(PageEvent::Bouquet)
    }

    pub fn pointer_event(&self, point: Vector2) -> Option<PageEvent> {
        for (button, rect) in self.layout.buttons() {
            if contains(&rect, point) {
                return Some(match button {
                    NavButton::Panel(panel) => PageEvent::Select(panel),
                    NavButton::Music => PageEvent::ToggleMusic,
                });
            }
        }
        if self.panels.visible() != Some(Panel::Flowers) {
            return None;
        }
        if contains(&self.layout.bouquet, point) {
            Some(PageEvent::Bouquet)
        } else if contains(&self.layout.content, point) {
            Some(PageEvent::StageTap { x: point.x, y: point.y })
        } else {
            None
        }
    }

    /// Applies a typed character right away, so a later key in the same
    /// frame sees the panel it selected.
    pub fn type_char(&mut self, c: char, photos: &PhotoSet) {
        if let Some(event) = self.char_event(c) {
            self.handle(event, photos);
        }
    }

    pub fn activate(&mut self, photos: &PhotoSet) {
        if let Some(event) = self.activate_event() {
            self.handle(event, photos);
        }
    }

    pub fn click(&mut self, point: Vector2, photos: &PhotoSet) {
        if let Some(event) = self.pointer_event(point) {
            self.handle(event, photos);
        }
    }

    /// Stops the carousel loop before the page goes away.
    pub fn shutdown(&mut self) {
        info!("Stopping carousel");
        self.carousel.stop();
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn panels(&self) -> &PanelSwitcher {
        &self.panels
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn music(&self) -> &MusicToggle<S> {
        &self.music
    }

    pub fn floats(&self) -> &FloatSpawner {
        &self.floats
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
