use crate::constants::*;

/// Scale and opacity of one track item, easing towards its emphasis target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub scale: f32,
    pub opacity: f32,
    target_scale: f32,
    target_opacity: f32,
}

impl ItemStyle {
    pub fn dimmed() -> Self {
        Self {
            scale: DIM_SCALE,
            opacity: DIM_OPACITY,
            target_scale: DIM_SCALE,
            target_opacity: DIM_OPACITY,
        }
    }

    pub fn emphasize(&mut self, current: bool) {
        if current {
            self.target_scale = 1.0;
            self.target_opacity = 1.0;
        } else {
            self.target_scale = DIM_SCALE;
            self.target_opacity = DIM_OPACITY;
        }
    }

    pub fn is_emphasized(&self) -> bool {
        self.target_scale == 1.0
    }

    /// Jumps to the target without easing.
    pub fn settle(&mut self) {
        self.scale = self.target_scale;
        self.opacity = self.target_opacity;
    }

    pub fn update(&mut self, dt: f32) {
        // Both properties cover their full range in STYLE_DURATION
        let scale_step = (1.0 - DIM_SCALE) / STYLE_DURATION * dt;
        let opacity_step = (1.0 - DIM_OPACITY) / STYLE_DURATION * dt;
        self.scale = approach(self.scale, self.target_scale, scale_step);
        self.opacity = approach(self.opacity, self.target_opacity, opacity_step);
    }
}

fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}
