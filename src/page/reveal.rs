//! Section reveal when scrolled into view

/// IntersectionObserver threshold
pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Delay between consecutive revealed elements (ms)
pub const REVEAL_STAGGER_MS: i32 = 200;
/// Delay before skill bars fill (ms)
pub const SKILL_FILL_DELAY_MS: i32 = 500;

/// Descendants that fade in when their section intersects
pub const REVEAL_SELECTORS: [&str; 3] = [".reveal-text", ".project-card", ".skill-card"];

/// Extra effects a section triggers besides revealing its children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionEffects {
    pub counters: bool,
    pub skill_bars: bool,
}

impl SectionEffects {
    /// Effects for a section's `class` attribute
    pub fn for_classes(classes: &str) -> Self {
        let mut effects = Self::default();
        for class in classes.split_whitespace() {
            match class {
                "about" => effects.counters = true,
                "skills" => effects.skill_bars = true,
                _ => {}
            }
        }
        effects
    }
}

/// Delay before the `index`-th element of a group is revealed
pub fn stagger_delay(index: usize) -> i32 {
    (index as i32).saturating_mul(REVEAL_STAGGER_MS)
}

/// Width for a skill bar from its `data-skill` attribute
pub fn skill_width(level: &str) -> Option<String> {
    let level: f64 = level.trim().parse().ok()?;
    level
        .is_finite()
        .then(|| format!("{}%", level.clamp(0.0, 100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_effects() {
        assert_eq!(
            SectionEffects::for_classes("about section"),
            SectionEffects {
                counters: true,
                skill_bars: false
            }
        );
        assert!(SectionEffects::for_classes("skills").skill_bars);
        assert_eq!(SectionEffects::for_classes("aboutme"), SectionEffects::default());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 600);
    }

    #[test]
    fn test_skill_width() {
        assert_eq!(skill_width("85").as_deref(), Some("85%"));
        assert_eq!(skill_width("120").as_deref(), Some("100%"));
        assert_eq!(skill_width("n/a"), None);
    }
}
