//! Scroll-driven styling: header, parallax, scroll-to-top button

/// Header turns solid past this scroll offset (px)
pub const HEADER_SOLID_AFTER: f64 = 100.0;
/// Scroll-to-top button appears past this offset (px)
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 500.0;
/// Parallax shapes move at this fraction of the scroll offset
pub const PARALLAX_SPEED: f64 = 0.5;

/// Inline styles for the scroll-to-top button
pub const SCROLL_TOP_BUTTON_CSS: &str = "position: fixed; bottom: 20px; right: 20px; \
    width: 50px; height: 50px; border-radius: 50%; background: var(--primary-color); \
    color: white; border: none; font-size: 20px; cursor: pointer; opacity: 0; \
    transition: opacity 0.3s; z-index: 1000;";

/// Header background and shadow for a scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_SOLID_AFTER {
        HeaderStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    } else {
        HeaderStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        }
    }
}

/// CSS opacity for the scroll-to-top button
pub fn scroll_top_opacity(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLL_TOP_VISIBLE_AFTER { "1" } else { "0" }
}

/// CSS transform for parallax shapes
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold() {
        assert_eq!(header_style(0.0).box_shadow, "none");
        assert_eq!(header_style(100.0).background, "rgba(255, 255, 255, 0.95)");
        assert_eq!(header_style(100.5).background, "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert_eq!(scroll_top_opacity(500.0), "0");
        assert_eq!(scroll_top_opacity(501.0), "1");
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(300.0), "translateY(150px)");
        assert_eq!(parallax_transform(5.0), "translateY(2.5px)");
    }
}
