#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotStatus {
    Pending,
    Loaded { width: f32, height: f32 },
    Failed,
}

/// Load status of every discovered photo, in display order.
///
/// The carousels only look at this, never at textures, so they can be
/// driven without a window.
#[derive(Debug, Default, Clone)]
pub struct PhotoSet {
    slots: Vec<SlotStatus>,
}

impl PhotoSet {
    pub fn pending(count: usize) -> Self {
        Self { slots: vec![SlotStatus::Pending; count] }
    }

    #[cfg(test)]
    /// Photo set whose photos are all loaded with the given sizes.
    pub fn loaded(sizes: &[(f32, f32)]) -> Self {
        Self {
            slots: sizes
                .iter()
                .map(|&(width, height)| SlotStatus::Loaded { width, height })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn mark_loaded(&mut self, slot: usize, width: f32, height: f32) {
        if let Some(status) = self.slots.get_mut(slot) {
            *status = SlotStatus::Loaded { width, height };
        }
    }

    pub fn mark_failed(&mut self, slot: usize) {
        if let Some(status) = self.slots.get_mut(slot) {
            *status = SlotStatus::Failed;
        }
    }

    /// Every photo has finished loading or failed.
    pub fn all_settled(&self) -> bool {
        self.slots.iter().all(|s| *s != SlotStatus::Pending)
    }

    pub fn next_pending(&self) -> Option<usize> {
        self.slots.iter().position(|s| *s == SlotStatus::Pending)
    }

    /// Slot indices and sizes of the photos that loaded.
    pub fn usable(&self) -> Vec<(usize, f32, f32)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, status)| match *status {
                SlotStatus::Loaded { width, height } => Some((slot, width, height)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_once_nothing_is_pending() {
        let mut set = PhotoSet::pending(2);
        assert!(!set.all_settled());
        assert_eq!(set.next_pending(), Some(0));

        set.mark_loaded(0, 400.0, 300.0);
        set.mark_failed(1);

        assert!(set.all_settled());
        assert_eq!(set.next_pending(), None);
        assert_eq!(set.usable(), vec![(0, 400.0, 300.0)]);
    }

    #[test]
    fn empty_set_is_trivially_settled() {
        assert!(PhotoSet::default().all_settled());
    }
}
