/// Frame clock driven by the host's refresh timestamps.
///
/// The browser hands every animation callback a monotonic timestamp in
/// milliseconds. Animation reads `elapsed_ms` directly, so the clock only has
/// to keep it from running backwards and count frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed_ms: f64,
    delta_ms: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new host timestamp. Returns the delta since the previous frame.
    /// Timestamps older than the current one are ignored (delta 0).
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let now_ms = if now_ms.is_finite() { now_ms } else { self.elapsed_ms };
        self.delta_ms = if self.frame == 0 {
            0.0
        } else {
            (now_ms - self.elapsed_ms).max(0.0)
        };
        self.elapsed_ms = self.elapsed_ms.max(now_ms);
        self.frame += 1;
        self.delta_ms
    }

    /// Host time of the latest frame, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Milliseconds between the two latest frames.
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Number of frames recorded so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 0.0);
        assert_eq!(clock.elapsed_ms(), 1000.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn accumulates_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        let dt = clock.advance(16.5);
        assert!((dt - 16.5).abs() < 1e-9);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        clock.advance(400.0);
        assert_eq!(clock.elapsed_ms(), 500.0);
        assert_eq!(clock.delta_ms(), 0.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.elapsed_ms(), 500.0);
    }
}
