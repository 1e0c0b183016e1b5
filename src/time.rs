//! Session clock and the tick-based timers driven by it.
//!
//! The driver reports wall-clock timestamps at whatever rate it runs. [`Clock`]
//! turns the gaps between them into whole ticks; [`Interval`] and [`Debounce`]
//! only ever see tick counts, so every timer is deterministic under test.

/// Base tick rate of the session.
pub const TICKS_PER_SEC: u32 = 10;

#[derive(Debug, Clone)]
pub struct Clock {
    tick_ms: f64,
    /// Gaps longer than this (suspended process, background tab) are cut down.
    catch_up_ms: f64,
    /// Time seen but not yet paid out as a tick.
    pending_ms: f64,
    last_seen_ms: Option<f64>,
    elapsed_ticks: u64,
}

impl Clock {
    pub fn new(ticks_per_sec: u32, catch_up_ms: f64) -> Self {
        Self {
            tick_ms: 1000.0 / ticks_per_sec.max(1) as f64,
            catch_up_ms: catch_up_ms.max(0.0),
            pending_ms: 0.0,
            last_seen_ms: None,
            elapsed_ticks: 0,
        }
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Ticks since the first timestamp.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Ticks needed to cover `ms`, rounded up.
    pub fn ticks_for_ms(&self, ms: u64) -> u32 {
        (ms as f64 / self.tick_ms).ceil() as u32
    }

    /// Record `now_ms` and return how many ticks passed since the previous call.
    /// The first call only sets the origin.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let gap = self
            .last_seen_ms
            .replace(now_ms)
            .map_or(0.0, |prev| (now_ms - prev).clamp(0.0, self.catch_up_ms));

        let available = self.pending_ms + gap;
        let whole = (available / self.tick_ms).floor();
        self.pending_ms = available - whole * self.tick_ms;
        let ticks = whole as u32;
        self.elapsed_ticks += u64::from(ticks);
        ticks
    }
}

/// Repeating timer that fires every `period` ticks.
#[derive(Debug, Clone)]
pub struct Interval {
    period: u32,
    elapsed: u32,
}

impl Interval {
    pub fn new(period_ticks: u32) -> Self {
        Self {
            period: period_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Advance by `ticks`; returns how many times the timer fired.
    pub fn advance(&mut self, ticks: u32) -> u32 {
        let total = self.elapsed as u64 + ticks as u64;
        self.elapsed = (total % self.period as u64) as u32;
        (total / self.period as u64) as u32
    }

    /// Restart the period from zero.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Fires once, `delay` ticks after the most recent [`Debounce::arm`].
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: u32,
    remaining: Option<u32>,
}

impl Debounce {
    pub fn new(delay_ticks: u32) -> Self {
        Self {
            delay: delay_ticks,
            remaining: None,
        }
    }

    /// (Re)start the countdown. Repeated arming coalesces into one firing.
    pub fn arm(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `ticks`; true exactly once when the countdown runs out.
    pub fn advance(&mut self, ticks: u32) -> bool {
        match self.remaining {
            Some(r) if r <= ticks => {
                self.remaining = None;
                true
            }
            Some(r) => {
                self.remaining = Some(r - ticks);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> Clock {
        Clock::new(10, 500.0)
    }

    #[test]
    fn first_update_sets_origin() {
        let mut c = clock();
        assert_eq!(c.update(2_000.0), 0);
        assert_eq!(c.update(2_100.0), 1);
        assert_eq!(c.elapsed_ticks(), 1);
    }

    #[test]
    fn partial_ticks_accumulate() {
        let mut c = clock();
        c.update(0.0);
        assert_eq!(c.update(40.0), 0);
        assert_eq!(c.update(150.0), 1);
        assert_eq!(c.update(200.0), 1);
        assert_eq!(c.elapsed_ticks(), 2);
    }

    #[test]
    fn long_gap_is_cut_to_catch_up_window() {
        let mut c = clock();
        c.update(0.0);
        assert_eq!(c.update(3_600_000.0), 5);

        let mut wide = Clock::new(10, 60_000.0);
        wide.update(0.0);
        assert_eq!(wide.update(10_000.0), 100);
    }

    #[test]
    fn backwards_timestamp_pays_nothing() {
        let mut c = clock();
        c.update(1_000.0);
        assert_eq!(c.update(900.0), 0);
        assert_eq!(c.update(1_000.0), 1);
    }

    #[test]
    fn frame_rate_does_not_change_tick_rate() {
        let mut c = clock();
        c.update(0.0);
        let ticks: u32 = (1..=120).map(|frame| c.update(frame as f64 * 1000.0 / 60.0)).sum();
        assert!((19..=20).contains(&ticks), "two seconds gave {ticks} ticks");
    }

    #[test]
    fn ticks_for_ms_rounds_up() {
        let c = clock();
        assert_eq!(c.tick_ms(), 100.0);
        assert_eq!(c.ticks_for_ms(1_000), 10);
        assert_eq!(c.ticks_for_ms(1_050), 11);
        assert_eq!(c.ticks_for_ms(0), 0);
    }

    #[test]
    fn interval_fires_per_period() {
        let mut iv = Interval::new(10);
        assert_eq!(iv.advance(9), 0);
        assert_eq!(iv.advance(1), 1);
        assert_eq!(iv.advance(35), 3);
        assert_eq!(iv.advance(5), 1);
    }

    #[test]
    fn interval_reset_restarts_period() {
        let mut iv = Interval::new(10);
        iv.advance(9);
        iv.reset();
        assert_eq!(iv.advance(9), 0);
    }

    #[test]
    fn debounce_coalesces_bursts() {
        let mut d = Debounce::new(10);
        d.arm();
        assert!(!d.advance(6));
        d.arm();
        assert!(!d.advance(6));
        assert!(d.advance(4));
        assert!(!d.advance(100));
    }

    #[test]
    fn cancelled_debounce_never_fires() {
        let mut d = Debounce::new(10);
        d.arm();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.advance(100));
    }
}
