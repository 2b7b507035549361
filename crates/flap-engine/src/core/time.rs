/// Most logic steps a single frame may run.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

/// Turns variable frame times into a whole number of fixed logic steps.
///
/// The runner feeds every frame's `dt` to [`accumulate`](Self::accumulate)
/// and runs `fixed_update` once per returned step, always with
/// [`dt`](Self::dt) as the delta. Leftover time carries into the next
/// frame.
///
/// Pending time is capped at `MAX_STEPS_PER_FRAME * step`. A frame longer
/// than that (a stall, a debugger pause) runs ten steps and the excess is
/// discarded, so the scene slows down instead of trying to catch up.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    pending: f32,
    discarded: f32,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// If `step` is not a finite, positive number of seconds.
    pub fn new(step: f32) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "FixedTimestep: step must be positive seconds, got {}",
            step
        );
        Self {
            step,
            pending: 0.0,
            discarded: 0.0,
        }
    }

    /// Add one frame's time. Returns the number of fixed steps to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let cap = self.step * MAX_STEPS_PER_FRAME as f32;
        self.pending += frame_dt;
        if self.pending > cap {
            self.discarded += self.pending - cap;
            self.pending = cap;
        }
        let steps = (self.pending / self.step) as u32;
        self.pending -= steps as f32 * self.step;
        steps
    }

    /// Fraction of a step still pending (0.0 to 1.0), for interpolating
    /// between the last two logic states.
    pub fn alpha(&self) -> f32 {
        self.pending / self.step
    }

    /// Seconds per logic step.
    pub fn dt(&self) -> f32 {
        self.step
    }

    /// Total frame time dropped by the per-frame cap.
    pub fn discarded(&self) -> f32 {
        self.discarded
    }
}

/// Frames-per-second counter.
///
/// Counts frames and publishes the count once a full second has accumulated,
/// carrying the leftover time into the next second.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    duration: f32,
    counter: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one presented frame that took `frame_dt` seconds.
    pub fn count_frame(&mut self, frame_dt: f32) {
        self.duration += frame_dt;
        self.counter += 1;
        if self.duration >= 1.0 {
            self.fps = self.counter;
            self.duration -= 1.0;
            self.counter = 0;
        }
    }

    /// Frames counted over the last completed second (0 until one completes).
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0);
        assert_eq!(steps, MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn long_frame_discards_excess() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(4.0), MAX_STEPS_PER_FRAME);
        assert_eq!(ts.discarded(), 1.5);
        assert_eq!(ts.alpha(), 0.0);
        // nothing left over to catch up on
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    #[should_panic(expected = "step must be positive")]
    fn zero_step_panics() {
        FixedTimestep::new(0.0);
    }

    #[test]
    fn alpha_is_between_zero_and_one() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(0.008);
        let a = ts.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {}", a);
    }

    #[test]
    fn fps_zero_until_first_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..10 {
            fps.count_frame(0.05);
        }
        assert_eq!(fps.fps(), 0);
    }

    #[test]
    fn fps_counts_frames_per_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..16 {
            fps.count_frame(0.0625);
        }
        assert_eq!(fps.fps(), 16);
    }

    #[test]
    fn fps_carries_remainder() {
        let mut fps = FpsCounter::new();
        fps.count_frame(0.75);
        fps.count_frame(0.75); // 1.5 s: publishes 2, keeps 0.5
        assert_eq!(fps.fps(), 2);
        fps.count_frame(0.25);
        assert_eq!(fps.fps(), 2);
        fps.count_frame(0.25); // 1.0 s again: 2 frames since last publish
        assert_eq!(fps.fps(), 2);
        fps.count_frame(0.1);
        fps.count_frame(0.1);
        fps.count_frame(0.1);
        fps.count_frame(0.8);
        assert_eq!(fps.fps(), 4);
    }
}
