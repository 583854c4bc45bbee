pub const NAVBAR_COMPACT_AFTER_PX: f64 = 50.0;
pub const FLOATING_CTA_AFTER_PX: f64 = 600.0;

// The hero image drifts 150px over the first 500px of scroll.
const PARALLAX_RANGE_PX: f64 = 500.0;
const PARALLAX_TRAVEL_PX: f64 = 150.0;

pub fn navbar_compacted(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_COMPACT_AFTER_PX
}

pub fn floating_cta_visible(scroll_y: f64) -> bool {
    scroll_y > FLOATING_CTA_AFTER_PX
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    let progress = (scroll_y / PARALLAX_RANGE_PX).clamp(0.0, 1.0);
    progress * PARALLAX_TRAVEL_PX
}

/// `"#sobre"` -> `Some("sobre")`. Anything that is not a same-page anchor
/// yields `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_compacts_past_fifty_pixels() {
        assert!(!navbar_compacted(0.0));
        assert!(navbar_compacted(800.0));
        assert!(!navbar_compacted(10.0));
        assert!(!navbar_compacted(50.0));
        assert!(navbar_compacted(50.5));
    }

    #[test]
    fn floating_cta_tracks_threshold_both_ways() {
        let offsets = [0.0, 700.0, 599.0, 601.0, 0.0];
        let visible: Vec<bool> = offsets.iter().map(|y| floating_cta_visible(*y)).collect();
        assert_eq!(visible, vec![false, true, false, true, false]);
    }

    #[test]
    fn parallax_is_proportional_then_clamped() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(250.0), 75.0);
        assert_eq!(parallax_offset(500.0), 150.0);
        assert_eq!(parallax_offset(4000.0), 150.0);
        assert_eq!(parallax_offset(-20.0), 0.0);
    }

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_id("#faq"), Some("faq"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://wa.me/5511"), None);
    }
}
