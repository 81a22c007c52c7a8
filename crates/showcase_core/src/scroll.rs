use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Scroll offset past which the header is raised.
    pub header_threshold_px: f64,
    /// How far an element must be inside the viewport before it is revealed.
    pub reveal_margin_px: f64,
    /// Lead applied to section tops when picking the active nav link.
    pub active_section_lead_px: f64,
    /// Quiet period before a burst of scroll events is handled.
    pub debounce_ms: u32,
    /// Share of a story element that must be on screen before it fades in.
    pub entrance_threshold: f64,
    /// Strip at the bottom of the viewport that does not count for entrances.
    pub entrance_bottom_inset_px: f64,
    /// Share of a timeline item that must be on screen before it animates.
    pub timeline_threshold: f64,
    /// Extra delay per timeline item when several appear in the same pass.
    pub timeline_stagger_ms: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            header_threshold_px: 100.0,
            reveal_margin_px: 150.0,
            active_section_lead_px: 200.0,
            debounce_ms: 10,
            entrance_threshold: 0.1,
            entrance_bottom_inset_px: 50.0,
            timeline_threshold: 0.3,
            timeline_stagger_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Raised,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64, settings: &ScrollSettings) -> Self {
        if scroll_y > settings.header_threshold_px {
            HeaderStyle::Raised
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "rgba(255, 255, 255, 0.95)",
            HeaderStyle::Raised => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "none",
            HeaderStyle::Raised => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }
}

/// Document offset to scroll to so the target sits just below a fixed header.
pub fn scroll_target(element_offset_top: f64, header_height: f64) -> f64 {
    (element_offset_top - header_height).max(0.0)
}

pub fn should_reveal(viewport_top: f64, viewport_height: f64, settings: &ScrollSettings) -> bool {
    viewport_top < viewport_height - settings.reveal_margin_px
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section the reader is in. When ranges overlap the later section wins.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionBounds],
    settings: &ScrollSettings,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.offset_top - settings.active_section_lead_px;
            scroll_y >= top && scroll_y < top + section.height
        })
        .map(|section| section.id.as_str())
}

/// Share of the box `top..top + height` (viewport coordinates) that lies
/// within `0..viewport_height - bottom_inset`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64, bottom_inset: f64) -> f64 {
    let bottom = viewport_height - bottom_inset;
    if height <= 0.0 {
        return if (0.0..=bottom).contains(&top) { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(bottom) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

fn crosses(fraction: f64, threshold: f64) -> bool {
    fraction > 0.0 && fraction >= threshold
}

/// Whether a hidden story element (timeline item or call to action) should
/// fade in.
pub fn should_enter(
    top: f64,
    height: f64,
    viewport_height: f64,
    settings: &ScrollSettings,
) -> bool {
    let fraction = visible_fraction(
        top,
        height,
        viewport_height,
        settings.entrance_bottom_inset_px,
    );
    crosses(fraction, settings.entrance_threshold)
}

/// Whether a timeline item is far enough on screen to start its animation.
pub fn timeline_visible(
    top: f64,
    height: f64,
    viewport_height: f64,
    settings: &ScrollSettings,
) -> bool {
    crosses(
        visible_fraction(top, height, viewport_height, 0.0),
        settings.timeline_threshold,
    )
}

/// Delay before the `position`-th timeline item that appeared in one pass is
/// animated. The first item starts at once.
pub fn timeline_delay_ms(position: usize, settings: &ScrollSettings) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(settings.timeline_stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn header_raises_strictly_past_threshold() {
        let settings = ScrollSettings::default();
        assert_eq!(HeaderStyle::for_offset(100.0, &settings), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_offset(100.5, &settings), HeaderStyle::Raised);
    }

    #[test]
    fn scroll_target_subtracts_header_and_clamps() {
        assert_eq!(scroll_target(900.0, 80.0), 820.0);
        assert_eq!(scroll_target(30.0, 80.0), 0.0);
    }

    #[test]
    fn reveal_needs_margin_inside_viewport() {
        let settings = ScrollSettings::default();
        assert!(should_reveal(500.0, 800.0, &settings));
        assert!(!should_reveal(650.0, 800.0, &settings));
    }

    #[test]
    fn visible_fraction_clips_to_viewport_and_inset() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0, 0.0), 1.0);
        assert_eq!(visible_fraction(-100.0, 200.0, 800.0, 0.0), 0.5);
        assert_eq!(visible_fraction(700.0, 200.0, 800.0, 0.0), 0.5);
        assert_eq!(visible_fraction(700.0, 200.0, 800.0, 50.0), 0.25);
        assert_eq!(visible_fraction(900.0, 200.0, 800.0, 0.0), 0.0);
    }

    #[test]
    fn entrance_needs_a_tenth_above_the_inset() {
        let settings = ScrollSettings::default();
        // 1000px tall, 90px above the 750px line: 9% visible.
        assert!(!should_enter(660.0, 1000.0, 800.0, &settings));
        // 110px above the line: 11%.
        assert!(should_enter(640.0, 1000.0, 800.0, &settings));
        // Fully inside the bottom inset does not count.
        assert!(!should_enter(760.0, 30.0, 800.0, &settings));
    }

    #[test]
    fn timeline_needs_thirty_percent() {
        let settings = ScrollSettings::default();
        // 40 of 200px on screen.
        assert!(!timeline_visible(760.0, 200.0, 800.0, &settings));
        // 70 of 200px.
        assert!(timeline_visible(730.0, 200.0, 800.0, &settings));
        // Scrolled mostly past the top: 50 of 200px left.
        assert!(!timeline_visible(-150.0, 200.0, 800.0, &settings));
    }

    #[test]
    fn timeline_items_are_staggered_by_position() {
        let settings = ScrollSettings::default();
        let delays: Vec<u32> = (0..4).map(|i| timeline_delay_ms(i, &settings)).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(timeline_delay_ms(usize::MAX, &settings), u32::MAX);
    }

    #[test]
    fn active_section_uses_lead_and_prefers_later_match() {
        let settings = ScrollSettings::default();
        let sections = vec![
            section("home", 0.0, 700.0),
            section("about", 600.0, 500.0),
            section("projects", 1100.0, 900.0),
        ];
        assert_eq!(active_section(0.0, &sections, &settings), Some("home"));
        // 450 is inside home (0..700) and about (400..900).
        assert_eq!(active_section(450.0, &sections, &settings), Some("about"));
        assert_eq!(active_section(950.0, &sections, &settings), Some("projects"));
        assert_eq!(active_section(5000.0, &sections, &settings), None);
    }
}
