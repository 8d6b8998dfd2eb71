// Scroll-driven page behaviour of the landing page

/// Scroll offset, in pixels, past which the "back to top" control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Divisor applied to the viewport height for scroll-reveal animations.
pub const SCROLL_REVEAL_DIVIDEND: f64 = 1.25;

pub fn back_to_top_visible(scroll_offset: f64) -> bool {
    scroll_offset > BACK_TO_TOP_THRESHOLD
}

/// Whether an element whose top edge sits at `element_top` (relative to the
/// viewport) counts as in view. A `dividend` above 1 requires the element to
/// scroll further up before it is revealed.
pub fn element_in_view(element_top: f64, viewport_height: f64, dividend: f64) -> bool {
    element_top <= viewport_height / dividend
}
