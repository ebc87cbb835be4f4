//! Working sequence of slides
//!
//! In loop mode the caller's images are extended with a clone of the last
//! image in front and a clone of the first image at the back, so the
//! working sequence has `len + 2` slots. Slots `0` and `len + 1` are clone
//! slots; `1..=len` are the real slides.

/// Ordered image references plus the loop-clone layout
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideSequence {
    images: Vec<String>,
    looping: bool,
}

impl SlideSequence {
    /// Create a sequence over the caller's images
    pub fn new(images: Vec<String>, looping: bool) -> Self {
        Self { images, looping }
    }

    /// Number of real slides
    #[inline]
    pub fn real_len(&self) -> usize {
        self.images.len()
    }

    /// Check if there are no images
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether clone slots are present (loop mode with at least one image)
    #[inline]
    pub fn has_clones(&self) -> bool {
        self.looping && !self.images.is_empty()
    }

    /// Whether loop mode is configured
    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub(crate) fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub(crate) fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
    }

    /// Length of the working sequence
    pub fn working_len(&self) -> usize {
        if self.has_clones() {
            self.images.len() + 2
        } else {
            self.images.len()
        }
    }

    /// Image displayed at a working position
    pub fn image_at(&self, position: usize) -> Option<&str> {
        if !self.has_clones() {
            return self.images.get(position).map(String::as_str);
        }
        let n = self.images.len();
        let real = match position {
            0 => n - 1,
            p if p == n + 1 => 0,
            p if p <= n => p - 1,
            _ => return None,
        };
        self.images.get(real).map(String::as_str)
    }

    /// All images in working order, clones included
    pub fn working_images(&self) -> Vec<&str> {
        (0..self.working_len())
            .filter_map(|position| self.image_at(position))
            .collect()
    }

    /// Check if a working position is a clone slot
    pub fn is_clone_slot(&self, position: usize) -> bool {
        self.has_clones() && (position == 0 || position == self.images.len() + 1)
    }

    /// Project a working position back to a 0-based real index.
    ///
    /// Clone slot `0` maps to the last image, clone slot `len + 1` to the
    /// first, every other loop position shifts down by one.
    pub fn real_index(&self, position: usize) -> usize {
        if !self.has_clones() {
            return position;
        }
        let n = self.images.len();
        if position == 0 {
            n - 1
        } else if position >= n + 1 {
            0
        } else {
            position - 1
        }
    }

    /// Real slide a clone slot stands in for, as a working position.
    ///
    /// Returns `None` for positions that are not clone slots.
    pub fn jump_target(&self, position: usize) -> Option<usize> {
        if !self.is_clone_slot(position) {
            return None;
        }
        let n = self.images.len();
        if position == 0 {
            Some(n)
        } else {
            Some(1)
        }
    }

    /// Initial working position for the current mode
    #[inline]
    pub fn initial_position(&self) -> usize {
        if self.has_clones() {
            1
        } else {
            0
        }
    }

    /// Normalize a position after the mode or image list changed.
    ///
    /// Loop mode keeps positions already on a real slide and resets anything
    /// else to `1`; non-loop mode clamps into `[0, len - 1]`.
    pub fn normalize(&self, position: usize) -> usize {
        let n = self.images.len();
        if self.has_clones() {
            if position == 0 || position > n {
                1
            } else {
                position
            }
        } else {
            position.min(n.saturating_sub(1))
        }
    }
}
