/// Raw state of a single button plus the edge memory needed to derive
/// pressed/held/released for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    is_down: bool,
    was_down: bool,
    just_updated: bool,
}

/// Conceptual per-button phase, derived from `(is_down, was_down)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Up,
    Pressed,
    Held,
    Released,
}

impl ButtonPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Pressed => "pressed",
            Self::Held => "held",
            Self::Released => "released",
        }
    }
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            is_down: false,
            was_down: false,
            just_updated: false,
        }
    }

    /// Record a raw down/up report. The previous raw value shifts into
    /// `was_down`, so several reports in one frame leave `was_down` one
    /// report behind rather than at the frame start.
    pub fn apply(&mut self, is_down: bool) {
        self.was_down = self.is_down;
        self.is_down = is_down;
        self.just_updated = true;
    }

    /// Frame-boundary commit. A button still down with no fresh report is
    /// re-applied as down, which turns a press into a hold.
    pub fn commit_frame(&mut self) {
        if self.is_down && !self.just_updated {
            self.apply(true);
        }
        self.just_updated = false;
    }

    pub fn just_updated(&self) -> bool {
        self.just_updated
    }

    pub fn is_up(&self) -> bool {
        !self.is_down
    }

    pub fn is_down(&self) -> bool {
        self.is_down
    }

    pub fn is_held(&self) -> bool {
        self.is_down && self.was_down
    }

    pub fn was_pressed(&self) -> bool {
        self.is_down && !self.was_down
    }

    pub fn was_released(&self) -> bool {
        !self.is_down && self.was_down
    }

    pub fn phase(&self) -> ButtonPhase {
        match (self.is_down, self.was_down) {
            (false, false) => ButtonPhase::Up,
            (true, false) => ButtonPhase::Pressed,
            (true, true) => ButtonPhase::Held,
            (false, true) => ButtonPhase::Released,
        }
    }
}

/// Fixed-size, zero-indexed button storage. Sized once at construction.
#[derive(Debug, Clone)]
pub struct ButtonArray {
    buttons: Box<[ButtonState]>,
}

impl ButtonArray {
    pub fn new(len: usize) -> Self {
        Self {
            buttons: vec![ButtonState::new(); len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Bounds-checked lookup. Negative or too-large indices yield `None`.
    pub fn get(&self, index: i32) -> Option<&ButtonState> {
        usize::try_from(index).ok().and_then(|i| self.buttons.get(i))
    }

    pub fn get_mut(&mut self, index: i32) -> Option<&mut ButtonState> {
        usize::try_from(index).ok().and_then(|i| self.buttons.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ButtonState> {
        self.buttons.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ButtonState> {
        self.buttons.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicates(b: &ButtonState) -> [bool; 5] {
        [b.is_up(), b.is_down(), b.is_held(), b.was_pressed(), b.was_released()]
    }

    // ── ButtonState ──

    #[test]
    fn test_initial_state_is_up() {
        let b = ButtonState::new();
        assert_eq!(predicates(&b), [true, false, false, false, false]);
        assert!(!b.just_updated());
        assert_eq!(b.phase(), ButtonPhase::Up);
    }

    #[test]
    fn test_apply_marks_just_updated() {
        let mut b = ButtonState::new();
        b.apply(true);
        assert!(b.just_updated());
        assert!(b.was_pressed());
        assert!(!b.is_held());
    }

    #[test]
    fn test_commit_clears_just_updated() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.commit_frame();
        assert!(!b.just_updated());
        b.commit_frame();
        assert!(!b.just_updated());
    }

    #[test]
    fn test_press_becomes_held_after_second_commit() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.commit_frame();
        // The event frame skips the re-apply, so the press edge survives one commit.
        assert!(b.was_pressed());
        assert!(!b.is_held());
        b.commit_frame();
        assert!(b.is_held());
        assert!(!b.was_pressed());
    }

    #[test]
    fn test_held_is_stable_across_commits() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.commit_frame();
        b.commit_frame();
        let held = b;
        b.commit_frame();
        b.commit_frame();
        assert_eq!(b, held);
    }

    #[test]
    fn test_press_then_release_in_one_frame() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.apply(false);
        b.commit_frame();
        assert!(b.was_released());
        assert!(b.is_up());
        assert_eq!(b.phase(), ButtonPhase::Released);
    }

    #[test]
    fn test_was_down_tracks_previous_report_within_frame() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.apply(true);
        // Key repeat: second report sees the first as its predecessor.
        assert!(b.is_held());
        b.apply(false);
        b.apply(true);
        assert!(b.was_pressed());
    }

    #[test]
    fn test_release_edge_latches_until_next_report() {
        let mut b = ButtonState::new();
        b.apply(true);
        b.commit_frame();
        b.apply(false);
        b.commit_frame();
        for _ in 0..3 {
            assert!(b.was_released());
            b.commit_frame();
        }
        b.apply(false);
        assert_eq!(b.phase(), ButtonPhase::Up);
    }

    #[test]
    fn test_phase_matches_predicates() {
        let cases = [
            (ButtonPhase::Up, vec![]),
            (ButtonPhase::Pressed, vec![true]),
            (ButtonPhase::Held, vec![true, true]),
            (ButtonPhase::Released, vec![true, false]),
        ];
        for (expected, reports) in cases {
            let mut b = ButtonState::new();
            for down in reports {
                b.apply(down);
            }
            assert_eq!(b.phase(), expected);
            assert_eq!(b.was_pressed(), expected == ButtonPhase::Pressed);
            assert_eq!(b.is_held(), expected == ButtonPhase::Held);
            assert_eq!(b.was_released(), expected == ButtonPhase::Released);
        }
    }

    #[test]
    fn test_phase_labels_unique() {
        let labels: std::collections::HashSet<&str> = [
            ButtonPhase::Up,
            ButtonPhase::Pressed,
            ButtonPhase::Held,
            ButtonPhase::Released,
        ]
        .iter()
        .map(|p| p.label())
        .collect();
        assert_eq!(labels.len(), 4);
    }

    // ── ButtonArray ──

    #[test]
    fn test_array_len_fixed() {
        let arr = ButtonArray::new(8);
        assert_eq!(arr.len(), 8);
        assert!(!arr.is_empty());
        assert!(ButtonArray::new(0).is_empty());
    }

    #[test]
    fn test_array_bounds() {
        let mut arr = ButtonArray::new(4);
        assert!(arr.get(0).is_some());
        assert!(arr.get(3).is_some());
        assert!(arr.get(4).is_none());
        assert!(arr.get(-1).is_none());
        assert!(arr.get_mut(i32::MAX).is_none());
        assert!(arr.get_mut(i32::MIN).is_none());
    }
}
