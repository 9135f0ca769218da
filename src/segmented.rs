//! # Segmented — Windowed Sieve Engine, Range Enumeration and π(n)
//!
//! Sieves a range one window at a time using only the base primes (≤ √bound),
//! so scratch memory is O(√n) bits instead of O(n).
//!
//! ## Window marking
//!
//! `mark_window` refills a `MarkBuffer` for `[lo, lo + len)` and, for each base
//! prime `p`, strikes every offset whose absolute value is a multiple of `p`,
//! starting from the first multiple `≥ lo`. A base prime that lands inside the
//! window is struck too. Sweeps therefore start at the base bound, never below
//! it, so no prime is reported both as a base prime and as a window survivor.
//!
//! Windows are described by `lo` and a length rather than an exclusive end,
//! so the last window of a sweep can end on `T::MAX` without representing
//! `T::MAX + 1`.
//!
//! ## Sweep
//!
//! `Sweep` owns the base primes and the one `MarkBuffer` that every window is
//! marked into, and walks windows strictly left to right. Each query folds the
//! current window into its own accumulator (a sequence, a counter, a gap
//! tracker) and decides when to stop.

use tracing::{debug, trace};

use crate::sieve::{estimate_prime_count, simple_sieve, MarkBuffer};
use crate::word::{isqrt, SieveWord};

/// Mark `[lo, lo + len)` into `window`: a set bit at offset `i` means `lo + i`
/// has no factor among `base`.
pub fn mark_window<T: SieveWord>(base: &[T], lo: T, len: usize, window: &mut MarkBuffer) {
    window.reset(len);
    for &p in base {
        let step: usize = p.as_();
        let rem: usize = (lo % p).as_();
        let first = if rem == 0 { 0 } else { step - rem };
        for offset in (first..len).step_by(step) {
            window.clear(offset);
        }
    }
}

/// Left-to-right window sweep over `[start, last]` (inclusive).
pub struct Sweep<T: SieveWord> {
    base: Vec<T>,
    width: usize,
    last: T,
    next_lo: Option<T>,
    lo: T,
    window: MarkBuffer,
}

impl<T: SieveWord> Sweep<T> {
    /// Sweep windows of `width` from `start` up to and including `last`.
    ///
    /// `base` must hold every prime up to `√last` and nothing at or above
    /// `start` except possibly `start` itself.
    pub fn new(base: Vec<T>, start: T, width: usize, last: T) -> Self {
        debug_assert!(width > 0, "window width must be positive");
        Sweep {
            base,
            width,
            last,
            next_lo: (start <= last).then_some(start),
            lo: start,
            window: MarkBuffer::with_capacity(width),
        }
    }

    /// A sweep with no windows left: only the base primes.
    pub fn exhausted(base: Vec<T>) -> Self {
        Sweep {
            base,
            width: 1,
            last: T::zero(),
            next_lo: None,
            lo: T::zero(),
            window: MarkBuffer::default(),
        }
    }

    pub fn base_primes(&self) -> &[T] {
        &self.base
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Mark the next window. Returns `false` once the sweep has passed `last`.
    pub fn advance(&mut self) -> bool {
        let Some(lo) = self.next_lo.take() else {
            return false;
        };
        let remaining: usize = (self.last - lo).as_();
        let len = if remaining >= self.width {
            self.width
        } else {
            remaining + 1
        };
        mark_window(&self.base, lo, len, &mut self.window);
        trace!(lo = %lo, len, "window marked");

        self.lo = lo;
        if len == self.width {
            self.next_lo = lo.offset(len).filter(|next| *next <= self.last);
        }
        true
    }

    /// Lowest value of the current window.
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Marks of the current window.
    pub fn window(&self) -> &MarkBuffer {
        &self.window
    }

    /// Number of primes in the current window.
    pub fn count(&self) -> usize {
        self.window.count_ones()
    }

    /// Primes in the current window, ascending.
    pub fn primes(&self) -> impl Iterator<Item = T> + '_ {
        let lo = self.lo;
        self.window.iter_set().filter_map(move |offset| lo.offset(offset))
    }
}

/// Sweep covering `[0, n]` for `n ≥ 2`: base primes up to `⌊√n⌋ + 1`, windows
/// of that width from there on.
fn range_sweep<T: SieveWord>(n: T, query: &'static str) -> Sweep<T> {
    let ssiz = isqrt(n.widen()) + 1;
    // ⌊√T::MAX⌋ + 1 is always representable in T.
    let bound = T::narrow(ssiz).unwrap_or_else(T::max_value);
    let base = simple_sieve(bound);
    debug!(
        query,
        width = T::NAME,
        n = %n,
        window = ssiz,
        base_primes = base.len(),
        "segmented sweep starting"
    );
    Sweep::new(base, bound, ssiz as usize, n)
}

/// All primes `≤ n`, sieved in windows of `⌊√n⌋ + 1`.
///
/// Produces exactly `simple_sieve(n)` while holding one window of marks at a
/// time.
pub fn segmented_sieve<T: SieveWord>(n: T) -> Vec<T> {
    if n.widen() < 2 {
        return Vec::new();
    }
    let mut sweep = range_sweep(n, "segmented_sieve");
    let mut primes = Vec::with_capacity(estimate_prime_count(n.as_()));
    primes.extend_from_slice(sweep.base_primes());
    while sweep.advance() {
        primes.extend(sweep.primes());
    }
    primes
}

/// π(n): the number of primes `≤ n`, without materializing any primes past
/// the base set.
pub fn count_primes<T: SieveWord>(n: T) -> usize {
    if n.widen() < 2 {
        return 0;
    }
    let mut sweep = range_sweep(n, "count_primes");
    let mut count = sweep.base_primes().len();
    while sweep.advance() {
        count += sweep.count();
    }
    count
}

#[cfg(test)]
mod tests {
    //! # Segmented Engine Tests
    //!
    //! - **`mark_window`**: windows that start on, just past, and between
    //!   multiples of the base primes; the seam where a base prime equals `lo`.
    //! - **`Sweep`**: clamping of the final window to `last`, and a sweep that
    //!   ends exactly on `T::MAX` without wrapping.
    //! - **`segmented_sieve` / `count_primes`**: agreement with `simple_sieve`
    //!   for every `n` up to 2000, perfect squares and their neighbours, π(x)
    //!   values from OEIS A000720.

    use super::*;

    fn survivors<T: SieveWord>(base: &[T], lo: T, len: usize) -> Vec<T> {
        let mut window = MarkBuffer::default();
        mark_window(base, lo, len, &mut window);
        window.iter_set().filter_map(|i| lo.offset(i)).collect()
    }

    // ── mark_window ────────────────────────────────────────────────

    #[test]
    fn mark_window_leaves_primes_in_range() {
        let base = simple_sieve(11u32);
        assert_eq!(
            survivors(&base, 100u32, 40),
            vec![101, 103, 107, 109, 113, 127, 131, 137, 139]
        );
    }

    /// `lo` on a multiple of every small prime (210 = 2·3·5·7).
    #[test]
    fn mark_window_starting_on_a_multiple() {
        let base = simple_sieve(7u32);
        assert_eq!(survivors(&base, 210u32, 11), vec![211]);
    }

    /// A base prime equal to `lo` is struck like any other multiple.
    #[test]
    fn mark_window_strikes_base_prime_at_lo() {
        let base = simple_sieve(11u32);
        assert_eq!(survivors(&base, 11u32, 4), vec![13]);
    }

    #[test]
    fn mark_window_empty_window() {
        let base = simple_sieve(11u32);
        assert!(survivors(&base, 50u32, 0).is_empty());
    }

    // ── Sweep ──────────────────────────────────────────────────────

    #[test]
    fn sweep_clamps_last_window() {
        let base = simple_sieve(4u32);
        let mut sweep = Sweep::new(base, 4u32, 4, 13);
        let mut windows = Vec::new();
        while sweep.advance() {
            windows.push((sweep.lo(), sweep.window().len()));
        }
        assert_eq!(windows, vec![(4, 4), (8, 4), (12, 2)]);
    }

    /// One window-sized bitmap serves the whole sweep; nothing grows with n.
    #[test]
    fn sweep_keeps_one_window_sized_buffer() {
        let mut sweep = range_sweep(1_000_000u32, "count_primes");
        let width = sweep.width();
        assert_eq!(width, 1_001);
        let bound = width.div_ceil(64) * 64;
        let mut capacity = None;
        let mut windows = 0;
        while sweep.advance() {
            let cap = sweep.window().capacity();
            assert!(cap <= bound, "capacity {} over {}", cap, bound);
            assert_eq!(*capacity.get_or_insert(cap), cap);
            assert!(sweep.window().len() <= width);
            windows += 1;
        }
        assert!(windows > 900);
    }

    /// The last `u8` window ends on 255 without computing 256.
    #[test]
    fn sweep_ends_on_width_max() {
        let base = simple_sieve(16u8);
        let mut sweep = Sweep::new(base, 16u8, 16, u8::MAX);
        let mut found: Vec<u8> = sweep.base_primes().to_vec();
        let mut last_window = (0u8, 0usize);
        while sweep.advance() {
            last_window = (sweep.lo(), sweep.window().len());
            found.extend(sweep.primes());
        }
        assert_eq!(last_window, (240, 16));
        assert_eq!(found, simple_sieve(u8::MAX));
    }

    #[test]
    fn sweep_with_start_past_last_is_empty() {
        let mut sweep = Sweep::new(vec![2u32, 3], 10, 5, 9);
        assert!(!sweep.advance());
    }

    #[test]
    fn exhausted_sweep_has_only_base() {
        let mut sweep = Sweep::exhausted(vec![2u8, 3, 5]);
        assert!(!sweep.advance());
        assert_eq!(sweep.base_primes(), &[2, 3, 5]);
    }

    // ── segmented_sieve ────────────────────────────────────────────

    #[test]
    fn segmented_below_two_is_empty() {
        assert_eq!(segmented_sieve(0u32), Vec::<u32>::new());
        assert_eq!(segmented_sieve(1u32), Vec::<u32>::new());
    }

    #[test]
    fn segmented_matches_simple_exhaustively() {
        for n in 0u32..=2_000 {
            assert_eq!(segmented_sieve(n), simple_sieve(n), "n = {}", n);
        }
    }

    /// Squares and their neighbours move `⌊√n⌋ + 1` across a prime or a
    /// window boundary.
    #[test]
    fn segmented_matches_simple_around_squares() {
        for r in [11u32, 12, 13, 97, 100, 101, 316] {
            for n in [r * r - 1, r * r, r * r + 1] {
                assert_eq!(segmented_sieve(n), simple_sieve(n), "n = {}", n);
            }
        }
    }

    #[test]
    fn segmented_full_u8_and_u16() {
        assert_eq!(segmented_sieve(u8::MAX), simple_sieve(u8::MAX));
        assert_eq!(segmented_sieve(u16::MAX), simple_sieve(u16::MAX));
    }

    // ── count_primes ───────────────────────────────────────────────

    #[test]
    fn count_primes_known_values() {
        assert_eq!(count_primes(0u32), 0);
        assert_eq!(count_primes(1u32), 0);
        assert_eq!(count_primes(2u32), 1);
        assert_eq!(count_primes(10u32), 4);
        assert_eq!(count_primes(100u32), 25);
        assert_eq!(count_primes(1_000u32), 168);
        assert_eq!(count_primes(1_000_000u32), 78_498);
        assert_eq!(count_primes(10_000_000u64), 664_579);
    }

    #[test]
    fn count_primes_whole_narrow_widths() {
        assert_eq!(count_primes(u8::MAX), 54);
        assert_eq!(count_primes(u16::MAX), 6_542);
    }

    #[test]
    fn count_matches_segmented_length() {
        for n in (2u32..5_000).step_by(37) {
            assert_eq!(count_primes(n), segmented_sieve(n).len(), "n = {}", n);
        }
    }
}
