use crate::photos::PhotoSet;

/// Size of the area the carousel draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One photo as it should appear this frame, in viewport coordinates.
/// `x`/`y`/`width`/`height` describe the unscaled box; `scale` applies
/// around its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView {
    pub photo: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub opacity: f32,
    pub current: bool,
}

pub trait Engine {
    /// Prepares the engine for `photos`. An empty set leaves the engine idle.
    fn initialize(&mut self, photos: &PhotoSet, viewport: Viewport);

    /// Advances timers and animations by `dt` seconds.
    fn update(&mut self, dt: f32, photos: &PhotoSet);

    fn resize(&mut self, viewport: Viewport);

    /// Cancels the loop. No advance happens after this.
    fn stop(&mut self);

    /// Photo slot currently shown, if any.
    #[cfg(test)]
    fn current(&self) -> Option<usize>;

    /// Whether a loop callback is pending.
    #[cfg(test)]
    fn is_running(&self) -> bool;

    fn views(&self) -> Vec<ItemView>;
}
