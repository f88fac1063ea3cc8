use crate::models::DeviceOrientation;

/// Collapses raw angle samples into orientation changes.
///
/// Emission is keyed on value, not time: a run of samples that classify the
/// same way yields one change.
#[derive(Debug, Default)]
pub struct OrientationDebouncer {
    last: Option<DeviceOrientation>,
}

impl OrientationDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `angle` and return the orientation if it differs from the last
    /// one returned. The first sample always yields.
    pub fn observe(&mut self, angle: i32) -> Option<DeviceOrientation> {
        let orientation = DeviceOrientation::from_angle(angle);
        if self.last == Some(orientation) {
            return None;
        }
        self.last = Some(orientation);
        Some(orientation)
    }

    pub fn last(&self) -> Option<DeviceOrientation> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DeviceOrientation::*;

    #[test]
    fn test_emits_once_per_run() {
        let mut debouncer = OrientationDebouncer::new();
        let emitted: Vec<_> = [10, 15, 260, 265, 270, 5]
            .into_iter()
            .filter_map(|angle| debouncer.observe(angle))
            .collect();

        assert_eq!(emitted, vec![Portrait, LandscapeLeft, Portrait]);
    }

    #[test]
    fn test_first_sample_always_emits() {
        let mut debouncer = OrientationDebouncer::new();
        assert_eq!(debouncer.last(), None);
        assert_eq!(debouncer.observe(0), Some(Portrait));
        assert_eq!(debouncer.observe(359), None);
        assert_eq!(debouncer.last(), Some(Portrait));
    }

    #[test]
    fn test_direct_switch_between_landscapes() {
        let mut debouncer = OrientationDebouncer::new();
        assert_eq!(debouncer.observe(90), Some(LandscapeRight));
        assert_eq!(debouncer.observe(270), Some(LandscapeLeft));
        assert_eq!(debouncer.observe(280), None);
        assert_eq!(debouncer.observe(100), Some(LandscapeRight));
    }
}
