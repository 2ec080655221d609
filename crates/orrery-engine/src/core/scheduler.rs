use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a self-re-posting frame task.
///
/// Everything runs on one thread, so a `Cell` is enough. Clones observe the
/// same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop before its next tick.
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Frame loop for hosts without a display refresh signal (tests, headless runs).
///
/// Each tick invokes `step` with a synthetic timestamp and re-posts itself
/// until the stop handle is set or the frame budget runs out. Browser hosts use
/// `requestAnimationFrame` with the same `StopHandle` instead.
pub struct FrameLoop<F: FnMut(f64)> {
    step: F,
    stop: StopHandle,
    frame_ms: f64,
    now_ms: f64,
}

impl<F: FnMut(f64)> FrameLoop<F> {
    /// Loop at a fixed synthetic rate, e.g. `1000.0 / 60.0`.
    pub fn new(frame_ms: f64, step: F) -> Self {
        Self {
            step,
            stop: StopHandle::new(),
            frame_ms,
            now_ms: 0.0,
        }
    }

    /// Handle that stops this loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run a single tick. Returns false if the loop has been stopped.
    pub fn tick(&mut self) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        (self.step)(self.now_ms);
        self.now_ms += self.frame_ms;
        true
    }

    /// Tick until stopped or `max_frames` have run. Returns the frames run.
    pub fn run_for(&mut self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.tick() {
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_requested_frames_with_increasing_time() {
        let mut times = Vec::new();
        let mut frame_loop = FrameLoop::new(10.0, |t| times.push(t));
        assert_eq!(frame_loop.run_for(3), 3);
        drop(frame_loop);
        assert_eq!(times, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn stop_handle_halts_loop_from_inside_step() {
        let stop = StopHandle::new();
        let inner = stop.clone();
        let mut count = 0;
        let mut frame_loop = FrameLoop::new(16.0, |_| {
            count += 1;
            if count == 5 {
                inner.stop();
            }
        });
        frame_loop.stop = stop;
        assert_eq!(frame_loop.run_for(100), 5);
        assert!(!frame_loop.tick());
    }

    #[test]
    fn stopped_loop_does_not_tick() {
        let mut frame_loop = FrameLoop::new(16.0, |_| {});
        frame_loop.stop_handle().stop();
        assert_eq!(frame_loop.run_for(10), 0);
    }
}
