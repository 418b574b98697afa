#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TrackState {
    Idle,         // No photos, nothing scheduled
    Loading,      // Waiting for every photo to load or fail
    Settling,     // Centered on the first photo, transitions not enabled yet
    Pausing,      // Current photo rests in the centre
    Moving,       // Track translating towards the next photo
    Stopped,      // Loop cancelled
}
