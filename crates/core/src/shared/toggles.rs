/// Per-call filter enable flags.
///
/// A snapshot passed into the pipeline on every invocation; the pipeline
/// never stores or mutates it. Defaults to everything off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterToggles {
    pub grayscale: bool,
    pub blur: bool,
    pub edges: bool,
    pub beautify: bool,
}

impl FilterToggles {
    pub fn any_enabled(&self) -> bool {
        self.grayscale || self.blur || self.edges || self.beautify
    }
}

/// Output mode selected by the presentation shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Original,
    ObjectDetection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let toggles = FilterToggles::default();
        assert!(!toggles.grayscale);
        assert!(!toggles.blur);
        assert!(!toggles.edges);
        assert!(!toggles.beautify);
        assert!(!toggles.any_enabled());
    }

    #[test]
    fn test_any_enabled_detects_single_toggle() {
        let toggles = FilterToggles {
            edges: true,
            ..Default::default()
        };
        assert!(toggles.any_enabled());
    }

    #[test]
    fn test_default_mode_is_original() {
        assert_eq!(RenderMode::default(), RenderMode::Original);
    }
}
