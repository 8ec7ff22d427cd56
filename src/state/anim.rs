//! Per-element animation state machines. The browser side only schedules
//! ticks (timeout chain for typing, one requestAnimationFrame loop for the
//! counter bank); all stepping logic lives here.

/// Pixels of headroom below the viewport top edge before a `.reveal` element
/// becomes active.
pub const REVEAL_MARGIN_PX: f64 = 80.0;

/// Milliseconds between typed characters.
pub const TYPING_DELAY_MS: i32 = 30;

/// A revealed element stays revealed; this only decides when it flips.
pub fn reveal_due(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

/// Typing effect: one character per step until the text is exhausted.
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), index: 0 }
    }

    /// Next character to append, or `None` once the text is exhausted.
    pub fn step(&mut self) -> Option<char> {
        let ch = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(ch)
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }
}

/// Counter animation toward a declared target, clamped exactly at the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    current: u64,
    target: u64,
    step: u64,
}

impl Counter {
    /// `None` when there is no positive target (the element is skipped).
    pub fn new(current: u64, target: u64) -> Option<Self> {
        if target == 0 {
            return None;
        }
        Some(Self { current, target, step: (target / 80).max(1) })
    }

    /// Advance one frame and return the value to display.
    pub fn advance(&mut self) -> u64 {
        self.current = self.current.saturating_add(self.step).min(self.target);
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }
}

/// Bank of active counter animations, advanced once per tick. Starting a key
/// that is already animating is refused, so re-triggering a source event
/// cannot stack two loops on the same element.
pub struct Scheduler<K> {
    entries: Vec<(K, Counter)>,
}

impl<K: PartialEq> Scheduler<K> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register an animation; returns false if the key is already animating.
    pub fn start(&mut self, key: K, counter: Counter) -> bool {
        if self.entries.iter().any(|(k, _)| *k == key) {
            return false;
        }
        self.entries.push((key, counter));
        true
    }

    /// Advance every active animation one frame, reporting each new value,
    /// and drop the ones that reached their target.
    pub fn tick(&mut self, mut apply: impl FnMut(&K, u64)) {
        for (key, counter) in &mut self.entries {
            let value = counter.advance();
            apply(key, value);
        }
        self.entries.retain(|(_, c)| !c.is_done());
    }
}

impl<K: PartialEq> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_threshold_uses_80px_margin() {
        assert!(reveal_due(719.9, 800.0));
        assert!(!reveal_due(720.0, 800.0));
        assert!(reveal_due(-50.0, 800.0));
    }

    #[test]
    fn typewriter_yields_chars_in_order_then_stops() {
        let mut tw = Typewriter::new("Olá");
        assert_eq!(tw.step(), Some('O'));
        assert_eq!(tw.step(), Some('l'));
        assert!(!tw.is_done());
        assert_eq!(tw.step(), Some('á'));
        assert!(tw.is_done());
        assert_eq!(tw.step(), None);
        assert_eq!(tw.step(), None);
    }

    #[test]
    fn counter_skips_zero_target() {
        assert!(Counter::new(0, 0).is_none());
        assert!(Counter::new(5, 0).is_none());
    }

    #[test]
    fn counter_step_is_target_over_80_floored_min_1() {
        let c = Counter::new(0, 40).unwrap();
        assert_eq!(c.step, 1);
        let c = Counter::new(0, 800).unwrap();
        assert_eq!(c.step, 10);
        let c = Counter::new(0, 159).unwrap();
        assert_eq!(c.step, 1);
    }

    #[test]
    fn counter_is_monotonic_and_terminates_exactly_at_target() {
        for target in [1u64, 7, 80, 81, 1000] {
            let mut c = Counter::new(0, target).unwrap();
            let mut prev = 0;
            let mut frames = 0;
            while !c.is_done() {
                let v = c.advance();
                assert!(v >= prev, "non-decreasing for target {}", target);
                assert!(v <= target, "never overshoots target {}", target);
                prev = v;
                frames += 1;
                assert!(frames <= 200, "terminates for target {}", target);
            }
            assert_eq!(prev, target, "lands exactly on target {}", target);
        }
    }

    #[test]
    fn counter_resumes_from_displayed_value() {
        let mut c = Counter::new(90, 100).unwrap();
        assert_eq!(c.advance(), 91);
    }

    #[test]
    fn scheduler_refuses_duplicate_keys() {
        let mut sched = Scheduler::new();
        assert!(sched.start("a", Counter::new(0, 10).unwrap()));
        assert!(!sched.start("a", Counter::new(0, 10).unwrap()));
        assert!(sched.start("b", Counter::new(0, 10).unwrap()));
    }

    #[test]
    fn scheduler_advances_all_and_drains() {
        let mut sched = Scheduler::new();
        sched.start("fast", Counter::new(0, 2).unwrap());
        sched.start("slow", Counter::new(0, 5).unwrap());
        let mut seen = Vec::new();
        sched.tick(|k, v| seen.push((*k, v)));
        assert_eq!(seen, vec![("fast", 1), ("slow", 1)]);
        // "fast" finishes on its second frame and leaves the bank
        sched.tick(|_, _| {});
        seen.clear();
        sched.tick(|k, v| seen.push((*k, v)));
        assert_eq!(seen, vec![("slow", 3)]);
        sched.tick(|_, _| {});
        sched.tick(|_, _| {});
        assert!(sched.is_empty());
    }
}
