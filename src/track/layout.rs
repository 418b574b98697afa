/// Horizontal placement of the track items and the translation that
/// centres each of them.
#[derive(Debug, Default, Clone)]
pub struct TrackLayout {
    lefts: Vec<f32>,
    widths: Vec<f32>,
    targets: Vec<f32>,
    item_height: f32,
}

impl TrackLayout {
    /// Lays items side by side, `gap` pixels apart, all `item_height` tall.
    /// Item widths follow the aspect ratios (width / height).
    pub fn new(aspects: &[f32], item_height: f32, gap: f32) -> Self {
        let mut lefts = Vec::with_capacity(aspects.len());
        let mut widths = Vec::with_capacity(aspects.len());
        let mut cursor = 0.0;

        for aspect in aspects {
            let width = item_height * aspect;
            lefts.push(cursor);
            widths.push(width);
            cursor += width + gap;
        }

        Self {
            targets: vec![0.0; lefts.len()],
            lefts,
            widths,
            item_height,
        }
    }

    /// Translation that puts each item in the middle of `container_width`.
    pub fn compute_targets(&mut self, container_width: f32) {
        self.targets = self
            .lefts
            .iter()
            .zip(&self.widths)
            .map(|(left, width)| left - (container_width - width) / 2.0)
            .collect();
    }

    pub fn len(&self) -> usize {
        self.lefts.len()
    }

    pub fn target(&self, index: usize) -> f32 {
        self.targets[index]
    }

    #[cfg(test)]
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    pub fn left(&self, index: usize) -> f32 {
        self.lefts[index]
    }

    pub fn width(&self, index: usize) -> f32 {
        self.widths[index]
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_placed_left_to_right() {
        let layout = TrackLayout::new(&[1.0, 2.0, 0.5], 100.0, 10.0);
        assert_eq!(layout.left(0), 0.0);
        assert_eq!(layout.left(1), 110.0);
        assert_eq!(layout.left(2), 320.0);
        assert_eq!(layout.width(2), 50.0);
    }

    #[test]
    fn one_target_per_item() {
        let mut layout = TrackLayout::new(&[1.0, 1.5, 1.0, 1.5], 100.0, 10.0);
        layout.compute_targets(800.0);
        assert_eq!(layout.targets().len(), layout.len());
        // 0 - (800 - 100) / 2
        assert_eq!(layout.target(0), -350.0);
    }
}
