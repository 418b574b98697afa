#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FadeState {
    Idle,         // No photos, nothing scheduled
    Loading,      // Waiting for every photo to load or fail
    Showing,      // Current photo fading in, then dwelling
    Resetting,    // Past the last photo, blank pause before index 0
    Stopped,      // Loop cancelled
}
