//! Breadcrumb trail for drill-down navigation.
//!
//! The navigation stack records the *path taken* through the hierarchy,
//! not the hierarchy shape: drill-in pushes one frame, back navigation
//! removes frames. Depth 0 means the root listing is active.

use locnav_core::Breadcrumb;
use smallvec::SmallVec;

/// Outcome of a single back-navigation step.
///
/// Produced by [`NavigationStack::step_back`]; the screen controller maps
/// it onto a scope change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Back was invoked at the root; nothing changes.
    AtRoot,

    /// The last frame was removed; the root listing becomes active.
    ToRoot,

    /// Two frames were removed; navigation re-enters at the returned
    /// frame (the caller pushes it back while switching scope).
    ReEnter(Breadcrumb),
}

/// An ordered trail of visited hierarchy nodes.
///
/// Drill-downs are shallow in practice, so the trail is inline up to four
/// frames deep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    frames: SmallVec<[Breadcrumb; 4]>,
}

impl NavigationStack {
    /// Creates an empty stack (at root).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame; it becomes the new current location.
    pub fn push(&mut self, frame: Breadcrumb) {
        self.frames.push(frame);
    }

    /// Removes the most recent frame, returning it.
    ///
    /// A no-op returning `None` when already at root.
    pub fn pop(&mut self) -> Option<Breadcrumb> {
        self.frames.pop()
    }

    /// Clears all frames, returning to the root state.
    pub fn pop_to_root(&mut self) {
        self.frames.clear();
    }

    /// Returns the current frame, or `None` at root.
    #[must_use]
    pub fn current(&self) -> Option<&Breadcrumb> {
        self.frames.last()
    }

    /// Returns the number of frames (0 = root).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` when at the root (no frames).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the full breadcrumb trail, oldest first.
    #[must_use]
    pub fn trail(&self) -> &[Breadcrumb] {
        &self.frames
    }

    /// Performs one back-navigation step.
    ///
    /// This reproduces the observed behavior of the original screen: at
    /// depth 1 the last frame is dropped and the root listing is restored.
    /// At depth >= 2 the current frame *and* the one below it are dropped
    /// and navigation re-enters at the frame that was below (the caller
    /// re-pushes it when switching scope). The net observable effect
    /// equals a single pop; the two-step sequence is kept deliberately.
    pub fn step_back(&mut self) -> BackOutcome {
        if self.frames.pop().is_none() {
            return BackOutcome::AtRoot;
        }
        match self.frames.pop() {
            None => BackOutcome::ToRoot,
            Some(previous) => BackOutcome::ReEnter(previous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locnav_core::LocationId;

    fn frame(id: &str, name: &str) -> Breadcrumb {
        Breadcrumb::new(LocationId::new(id), name)
    }

    #[test]
    fn test_push_pop_returns_to_root() {
        let mut stack = NavigationStack::new();
        for i in 0..5 {
            stack.push(frame(&i.to_string(), "x"));
        }
        assert_eq!(stack.depth(), 5);
        for _ in 0..5 {
            stack.pop();
        }
        assert!(stack.is_root());
        assert!(stack.current().is_none());
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut stack = NavigationStack::new();
        assert!(stack.pop().is_none());
        assert!(stack.is_root());
    }

    #[test]
    fn test_step_back_at_root() {
        let mut stack = NavigationStack::new();
        assert_eq!(stack.step_back(), BackOutcome::AtRoot);
        assert!(stack.is_root());
    }

    #[test]
    fn test_step_back_at_depth_one_returns_to_root() {
        let mut stack = NavigationStack::new();
        stack.push(frame("42", "Tehran"));
        assert_eq!(stack.step_back(), BackOutcome::ToRoot);
        assert!(stack.is_root());
    }

    #[test]
    fn test_step_back_pops_two_and_reenters_one() {
        // After re-entry the trail is one frame shorter, the same result a
        // single pop would give; the two-step sequence mirrors the
        // original screen's back handler.
        let mut stack = NavigationStack::new();
        stack.push(frame("42", "Tehran"));
        stack.push(frame("7", "District1"));

        let outcome = stack.step_back();
        assert_eq!(outcome, BackOutcome::ReEnter(frame("42", "Tehran")));
        // Both frames removed; the caller re-pushes the returned one.
        assert!(stack.is_root());
    }

    #[test]
    fn test_step_back_depth_three() {
        let mut stack = NavigationStack::new();
        stack.push(frame("1", "A"));
        stack.push(frame("2", "B"));
        stack.push(frame("3", "C"));

        let outcome = stack.step_back();
        assert_eq!(outcome, BackOutcome::ReEnter(frame("2", "B")));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Some(&frame("1", "A")));
    }

    #[test]
    fn test_trail_order_is_oldest_first() {
        let mut stack = NavigationStack::new();
        stack.push(frame("1", "A"));
        stack.push(frame("2", "B"));
        let names: Vec<&str> = stack
            .trail()
            .iter()
            .map(|b| b.display_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B"]);
    }
}
