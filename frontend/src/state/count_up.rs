use std::rc::Rc;
use yew::Reducible;

pub const COUNT_UP_DURATION_MS: f64 = 2000.0;

/// Cubic ease-out, clamped to `[0, 1]`.
pub fn ease_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    start: f64,
    target: f64,
    duration_ms: f64,
    value: f64,
    done: bool,
}

pub enum CountUpAction {
    /// Milliseconds since the animation started.
    Frame(f64),
}

impl CountUp {
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            duration_ms: COUNT_UP_DURATION_MS,
            value: start,
            done: false,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.target;
        }
        let eased = ease_out(elapsed_ms / self.duration_ms);
        self.start + (self.target - self.start) * eased
    }

    pub fn frame(&self, elapsed_ms: f64) -> Self {
        if self.done {
            return *self;
        }
        let done = elapsed_ms >= self.duration_ms;
        Self {
            value: if done { self.target } else { self.value_at(elapsed_ms) },
            done,
            ..*self
        }
    }

    /// The number as rendered: whole units.
    pub fn display(&self) -> u32 {
        self.value.round().max(0.0) as u32
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Reducible for CountUp {
    type Action = CountUpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountUpAction::Frame(elapsed_ms) => Rc::new(self.frame(elapsed_ms)),
        }
    }
}

/// One-shot latch for reveal-on-view: reports the first intersection and
/// ignores everything after it.
#[derive(Default, Debug)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints_and_rises() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(3.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
        let mut last = 0.0;
        for step in 1..=20 {
            let value = ease_out(step as f64 / 20.0);
            assert!(value > last);
            last = value;
        }
    }

    #[test]
    fn counts_from_start_to_target_over_two_seconds() {
        let count = CountUp::new(0.0, 500.0);
        assert_eq!(count.display(), 0);
        let midway = count.frame(1000.0);
        assert!(midway.display() > 250, "ease-out runs ahead of linear");
        assert!(midway.display() < 500);
        assert!(!midway.is_done());
        let finished = midway.frame(COUNT_UP_DURATION_MS);
        assert_eq!(finished.display(), 500);
        assert!(finished.is_done());
    }

    #[test]
    fn late_frames_do_not_move_a_finished_count() {
        let finished = CountUp::new(0.0, 8.0).frame(5000.0);
        assert_eq!(finished.frame(100.0), finished);
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::default();
        let entries = [false, true, false, true, true, false, true];
        let fired = entries.iter().filter(|seen| latch.observe(**seen)).count();
        assert_eq!(fired, 1);
        assert!(latch.fired);
        assert!(!latch.observe(true));
    }

    #[test]
    fn latch_waits_for_an_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.fired);
        assert!(latch.observe(true));
    }
}
