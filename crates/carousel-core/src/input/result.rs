//! Input result type

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Input was handled by the slider
    Handled {
        /// The host must cancel the browser default (scroll, text selection)
        prevent_default: bool,
    },
    /// Input was not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Handled, browser default left alone
    pub const HANDLED: InputResult = InputResult::Handled {
        prevent_default: false,
    };

    /// Handled, browser default must be cancelled
    pub const CAPTURED: InputResult = InputResult::Handled {
        prevent_default: true,
    };

    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled { .. })
    }

    /// Check if the browser default must be cancelled
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            InputResult::Handled {
                prevent_default: true
            }
        )
    }
}
