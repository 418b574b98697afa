/// One-shot countdown driven by frame time.
///
/// A timer fires at most once per arming. Loops re-arm it explicitly from
/// the code that handles the expiry, so an owner holds at most one pending
/// callback and can stop the chain with [`Timer::cancel`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timer {
    remaining: Option<f32>,
}

impl Timer {
    pub fn new() -> Self {
        Self { remaining: None }
    }

    pub fn arm(&mut self, seconds: f32) {
        self.remaining = Some(seconds.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advances the countdown and returns `true` on the frame it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining.as_mut() {
            Some(remaining) => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_then_disarms() {
        let mut timer = Timer::new();
        timer.arm(0.5);
        assert!(!timer.tick(0.3));
        assert!(timer.tick(0.3));
        assert!(!timer.is_armed());
        assert!(!timer.tick(10.0));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = Timer::new();
        timer.arm(0.1);
        timer.cancel();
        assert!(!timer.tick(1.0));
    }

    #[test]
    fn rearming_replaces_pending_expiry() {
        let mut timer = Timer::new();
        timer.arm(0.1);
        timer.arm(1.0);
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
    }
}
