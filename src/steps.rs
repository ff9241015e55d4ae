//! Bounded step cursor for multi-step lessons.
//!
//! A lesson's steps are the integers `0..=last`. Transitions saturate at
//! the bounds. A lesson may retire one step number: its content was removed
//! but the numeric slot is preserved so existing deep links keep working.
//! The retired slot is skipped by redirecting on every transition — one
//! table entry, not conditionals at call sites.

/// A retired step slot and where to land instead of it.
#[derive(Debug, Clone, Copy)]
pub struct Redirect {
    /// The step number with no content behind it.
    pub retired: usize,
    /// Where `next()` lands when it would hit the retired slot.
    pub forward_to: usize,
    /// Where `prev()` lands when it would hit the retired slot.
    pub back_to: usize,
}

/// Cursor over one lesson's step sequence.
#[derive(Debug, Clone)]
pub struct StepRouter {
    cursor: usize,
    last: usize,
    redirect: Option<Redirect>,
}

impl StepRouter {
    pub fn new(last: usize, redirect: Option<Redirect>) -> Self {
        Self::with_start(0, last, redirect)
    }

    /// Start at an injected step (a deep link from the navigation drawer).
    /// A start on the retired slot is redirected forward immediately.
    pub fn with_start(start: usize, last: usize, redirect: Option<Redirect>) -> Self {
        let mut router = Self {
            cursor: start.min(last),
            last,
            redirect,
        };
        if let Some(r) = router.redirect
            && router.cursor == r.retired
        {
            router.cursor = r.forward_to;
        }
        router
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.last
    }

    /// Advance one step, skipping the retired slot. Saturates at the end.
    pub fn next(&mut self) {
        let mut next = (self.cursor + 1).min(self.last);
        if let Some(r) = self.redirect
            && next == r.retired
        {
            next = r.forward_to;
        }
        self.cursor = next.min(self.last);
    }

    /// Step back one, skipping the retired slot. Saturates at zero.
    pub fn prev(&mut self) {
        let mut prev = self.cursor.saturating_sub(1);
        if let Some(r) = self.redirect
            && prev == r.retired
        {
            prev = r.back_to;
        }
        self.cursor = prev;
    }

    /// Jump straight to a step. The retired slot redirects forward.
    pub fn jump(&mut self, step: usize) {
        let mut step = step.min(self.last);
        if let Some(r) = self.redirect
            && step == r.retired
        {
            step = r.forward_to;
        }
        self.cursor = step;
    }
}

/// Router for the Kubernetes-concepts lesson: steps 0–14, with the old
/// architecture-diagram slot (9) folded into its successor (10).
pub fn kubernetes_router(start: usize) -> StepRouter {
    StepRouter::with_start(
        start,
        crate::content::K8S_LAST_STEP,
        Some(Redirect {
            retired: 9,
            forward_to: 10,
            back_to: 8,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(last: usize) -> StepRouter {
        StepRouter::new(last, None)
    }

    #[test]
    fn next_then_prev_round_trips() {
        // Holds across the retired slot too: 8 → 10 → 8, because the
        // forward and backward replacements bracket the same gap.
        for start in 0..14 {
            if start == 9 {
                continue;
            }
            let mut router = kubernetes_router(start);
            let before = router.cursor();
            router.next();
            router.prev();
            assert_eq!(router.cursor(), before);
        }
    }

    #[test]
    fn forward_skips_retired_slot() {
        let mut router = kubernetes_router(8);
        router.next();
        assert_eq!(router.cursor(), 10);
    }

    #[test]
    fn backward_skips_retired_slot() {
        let mut router = kubernetes_router(10);
        router.prev();
        assert_eq!(router.cursor(), 8);
    }

    #[test]
    fn prev_at_zero_is_idempotent() {
        let mut router = plain(5);
        router.prev();
        assert_eq!(router.cursor(), 0);
        router.prev();
        assert_eq!(router.cursor(), 0);
    }

    #[test]
    fn next_saturates_at_last() {
        let mut router = plain(2);
        router.next();
        router.next();
        assert!(router.is_last());
        router.next();
        assert_eq!(router.cursor(), 2);
    }

    #[test]
    fn deep_link_onto_retired_slot_redirects_forward() {
        let router = kubernetes_router(9);
        assert_eq!(router.cursor(), 10);
    }

    #[test]
    fn plain_router_has_no_skips() {
        let mut router = plain(14);
        for expected in 1..=14 {
            router.next();
            assert_eq!(router.cursor(), expected);
        }
    }

    #[test]
    fn jump_clamps_and_redirects() {
        let mut router = kubernetes_router(0);
        router.jump(9);
        assert_eq!(router.cursor(), 10);
        router.jump(99);
        assert_eq!(router.cursor(), 14);
    }
}
