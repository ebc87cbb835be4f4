//! Transition phase tracking

/// Whether the slide strip is moving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No animation in flight
    #[default]
    Settled,
    /// Animating between two positions; navigation and gestures are locked
    Animating,
    /// Animating back to the unchanged position after a short drag.
    ///
    /// Clears itself after a fixed duration; gestures stay locked meanwhile.
    SnapBack,
}

impl TransitionPhase {
    /// Check if animating between positions
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, TransitionPhase::Animating)
    }

    /// Check if the strip transform should animate
    #[inline]
    pub fn animates_transform(&self) -> bool {
        !matches!(self, TransitionPhase::Settled)
    }

    /// Check if new pointer gestures are allowed
    #[inline]
    pub fn accepts_gestures(&self) -> bool {
        matches!(self, TransitionPhase::Settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_flags() {
        assert!(TransitionPhase::Settled.accepts_gestures());
        assert!(!TransitionPhase::Settled.animates_transform());

        assert!(TransitionPhase::Animating.is_animating());
        assert!(!TransitionPhase::Animating.accepts_gestures());

        assert!(!TransitionPhase::SnapBack.is_animating());
        assert!(TransitionPhase::SnapBack.animates_transform());
        assert!(!TransitionPhase::SnapBack.accepts_gestures());
    }
}
