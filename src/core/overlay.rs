//! Where an activation inside a modal overlay landed.

/// Part of an overlay that received a click or key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayHit {
    /// The dimmed area around the panel
    Backdrop,
    /// The explicit close control
    CloseButton,
    /// Escape key while the overlay is open
    Escape,
    /// Anywhere inside the content panel
    Panel,
}

impl OverlayHit {
    /// Whether this hit should dismiss the overlay. Activation inside the
    /// panel never does.
    pub fn dismisses(self) -> bool {
        !matches!(self, OverlayHit::Panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_panel_keeps_overlay_open() {
        assert!(OverlayHit::Backdrop.dismisses());
        assert!(OverlayHit::CloseButton.dismisses());
        assert!(OverlayHit::Escape.dismisses());
        assert!(!OverlayHit::Panel.dismisses());
    }
}
