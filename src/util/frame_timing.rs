use web_time::{Duration, Instant};

/// Frames between debug FPS log lines.
const LOG_INTERVAL: u64 = 600;

/// Frame pacing for the native host: optional FPS cap and a smoothed FPS
/// readout.
pub struct FrameTiming {
    /// 0 = unlimited.
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    /// Exponential moving average.
    smoothed_fps: f32,
    /// Weight of the newest sample, 0.0-1.0.
    smoothing: f32,
    frames: u64,
}

impl FrameTiming {
    /// Timer with the given FPS cap (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to draw again.
    pub fn should_render(&self) -> bool {
        self.target_fps == 0
            || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record that a frame was drawn.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        self.smoothed_fps = blend_fps(
            self.smoothed_fps,
            elapsed.as_secs_f32(),
            self.smoothing,
        );
        if self.frames % LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps over {} frames", self.smoothed_fps, self.frames);
        }
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time left until the next frame is due, for scheduling a wake-up.
    pub fn until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }
}

/// Fold one frame time into a smoothed FPS value.
fn blend_fps(smoothed: f32, frame_time: f32, smoothing: f32) -> f32 {
    if frame_time > 0.0 {
        smoothed * (1.0 - smoothing) + smoothing / frame_time
    } else {
        smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_timer_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn blend_moves_toward_sample() {
        let fps = blend_fps(60.0, 1.0 / 30.0, 0.5);
        assert!((fps - 45.0).abs() < 1e-3);
    }

    #[test]
    fn zero_frame_time_keeps_value() {
        assert_eq!(blend_fps(60.0, 0.0, 0.05), 60.0);
    }

    #[test]
    fn end_frame_counts() {
        let mut timing = FrameTiming::new(120);
        timing.end_frame();
        timing.end_frame();
        assert_eq!(timing.frames(), 2);
        assert!(timing.fps() > 0.0);
    }
}
