/// One-shot visibility flag for a content block on the track.
///
/// The trigger is expressed in track progress: the block fires once its
/// leading edge reaches `edge` of the viewport width. A fired flag stays
/// set whatever the scroll does afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFlag {
    trigger: f64,
    revealed: bool,
}

impl RevealFlag {
    /// `block_left` is the block's left edge in viewport coordinates with the
    /// track untranslated.
    pub fn at_edge(block_left: f64, viewport_width: f64, max_offset: f64, edge: f64) -> Self {
        Self {
            trigger: trigger_progress(block_left, viewport_width, max_offset, edge),
            revealed: false,
        }
    }

    /// Moves the trigger after a layout change, keeping the flag.
    pub fn retarget(&mut self, block_left: f64, viewport_width: f64, max_offset: f64, edge: f64) {
        self.trigger = trigger_progress(block_left, viewport_width, max_offset, edge);
    }

    /// Feeds the unclamped track progress. Returns `true` only on the frame
    /// the flag flips.
    pub fn observe(&mut self, raw_progress: f64) -> bool {
        if self.revealed || raw_progress < self.trigger {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn trigger(&self) -> f64 {
        self.trigger
    }
}

fn trigger_progress(block_left: f64, viewport_width: f64, max_offset: f64, edge: f64) -> f64 {
    let distance = block_left - edge * viewport_width;
    if distance <= 0.0 {
        // Already inside the edge at rest: fire when the container is reached.
        0.0
    } else if max_offset <= 0.0 {
        f64::INFINITY
    } else {
        distance / max_offset
    }
}
