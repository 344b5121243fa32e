/// Smoothing factor for the exponential moving average. Low enough that
/// the HUD readout stays legible, high enough to follow real changes.
const SMOOTHING: f32 = 0.05;

/// Smoothed frame statistics feeding the HUD readout.
#[derive(Debug)]
pub struct FrameStats {
    smoothed_fps: f32,
    smoothed_frame_ms: f32,
    frame_count: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            smoothed_fps: 0.0,
            smoothed_frame_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Fold one frame's delta time (seconds) into the averages.
    pub fn record(&mut self, delta: f32) {
        if delta <= 0.0 {
            return;
        }

        let instant_fps = 1.0 / delta;
        let instant_ms = delta * 1000.0;

        if self.frame_count == 0 {
            // Seed the averages so the first readout is not a ramp from zero
            self.smoothed_fps = instant_fps;
            self.smoothed_frame_ms = instant_ms;
        } else {
            self.smoothed_fps = self.smoothed_fps * (1.0 - SMOOTHING) + instant_fps * SMOOTHING;
            self.smoothed_frame_ms = self.smoothed_frame_ms * (1.0 - SMOOTHING) + instant_ms * SMOOTHING;
        }

        self.frame_count += 1;
    }

    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    pub fn frame_ms(&self) -> f32 {
        self.smoothed_frame_ms
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_averages() {
        let mut stats = FrameStats::new();
        stats.record(0.010);

        assert!((stats.fps() - 100.0).abs() < 0.1);
        assert!((stats.frame_ms() - 10.0).abs() < 0.01);
        assert_eq!(stats.frame_count(), 1);
    }

    #[test]
    fn steady_input_converges() {
        let mut stats = FrameStats::new();
        for _ in 0..200 {
            stats.record(1.0 / 60.0);
        }

        assert!((stats.fps() - 60.0).abs() < 0.5);
        assert!((stats.frame_ms() - 1000.0 / 60.0).abs() < 0.2);
    }

    #[test]
    fn smoothing_damps_a_spike() {
        let mut stats = FrameStats::new();
        for _ in 0..100 {
            stats.record(1.0 / 60.0);
        }
        // One long frame should barely dent the average
        stats.record(0.25);

        assert!(stats.fps() > 50.0);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut stats = FrameStats::new();
        stats.record(0.0);
        stats.record(-1.0);

        assert_eq!(stats.frame_count(), 0);
        assert_eq!(stats.fps(), 0.0);
    }
}
