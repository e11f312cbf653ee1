//! Declarative animation descriptions.
//!
//! A [`Transition`] says what to animate (`from` -> `to` pose), when
//! (`trigger`) and how (`duration`, `delay`, `easing`). The browser's CSS
//! engine does the interpolation: a transition is rendered as a set of CSS
//! custom properties plus a trigger class that the shared keyframes in
//! `ui::motion` pick up.

use derive_more::Display;

/// A CSS length
#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum Length {
    #[display("{_0}px")]
    Px(f32),
    #[display("{_0}vw")]
    Vw(f32),
    #[display("{_0}%")]
    Percent(f32),
}

impl Length {
    pub fn is_zero(&self) -> bool {
        match *self {
            Length::Px(v) | Length::Vw(v) | Length::Percent(v) => v == 0.0,
        }
    }
}

/// What starts a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is mounted
    Mount,
    /// Once, when the element first scrolls into view
    InView,
    /// While the pointer hovers the element
    Hover,
}

impl Trigger {
    pub fn class(&self) -> &'static str {
        match self {
            Trigger::Mount => "motion-mount",
            Trigger::InView => "motion-in-view",
            Trigger::Hover => "motion-hover",
        }
    }
}

/// Timing function
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Easing {
    #[display("linear")]
    Linear,
    #[display("ease-out")]
    EaseOut,
    #[display("ease-in-out")]
    EaseInOut,
    /// Overshooting curve approximating a spring
    #[display("cubic-bezier(0.34, 1.56, 0.64, 1)")]
    Spring,
}

/// Visual state at one end of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: Length,
    pub y: Length,
    /// Horizontal skew in degrees
    pub skew_x: f32,
    pub scale: f32,
}

impl Pose {
    /// Fully visible, untransformed
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: Length::Px(0.0),
        y: Length::Px(0.0),
        skew_x: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn offset_x(mut self, x: Length) -> Self {
        self.x = x;
        self
    }

    pub const fn offset_y(mut self, y: Length) -> Self {
        self.y = y;
        self
    }

    pub const fn skewed(mut self, degrees: f32) -> Self {
        self.skew_x = degrees;
        self
    }

    /// No offset, skew or scaling
    pub fn is_untransformed(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.skew_x == 0.0 && self.scale == 1.0
    }

    /// CSS `transform` value. An untransformed pose renders as `none`: any
    /// other value held by `animation-fill-mode` makes the element the
    /// containing block of its `position: fixed` descendants.
    pub fn transform(&self) -> String {
        if self.is_untransformed() {
            return "none".to_string();
        }
        format!(
            "translate({}, {}) skewX({}deg) scale({})",
            self.x, self.y, self.skew_x, self.scale
        )
    }
}

/// A complete animation description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub trigger: Trigger,
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    /// Fade in while rising 20px, on mount
    pub const FADE_UP: Transition = Transition {
        trigger: Trigger::Mount,
        from: Pose::hidden().offset_y(Length::Px(20.0)),
        to: Pose::REST,
        duration_ms: 500,
        delay_ms: 0,
        easing: Easing::EaseOut,
    };

    /// Same as [`Transition::FADE_UP`] but started when scrolled into view
    pub const REVEAL: Transition = Transition {
        trigger: Trigger::InView,
        ..Transition::FADE_UP
    };

    /// Entrance of a routed page
    pub const PAGE_ENTER: Transition = Transition {
        duration_ms: 300,
        ..Transition::FADE_UP
    };

    pub const SLIDE_FROM_LEFT: Transition = Transition {
        trigger: Trigger::InView,
        from: Pose::hidden().offset_x(Length::Px(-30.0)),
        to: Pose::REST,
        duration_ms: 600,
        delay_ms: 0,
        easing: Easing::EaseOut,
    };

    pub const SLIDE_FROM_RIGHT: Transition = Transition {
        from: Pose::hidden().offset_x(Length::Px(30.0)),
        ..Transition::SLIDE_FROM_LEFT
    };

    /// Card lifting 5px under the pointer
    pub const HOVER_LIFT: Transition = Transition {
        trigger: Trigger::Hover,
        from: Pose::REST,
        to: Pose::REST.offset_y(Length::Px(-5.0)),
        duration_ms: 200,
        delay_ms: 0,
        easing: Easing::EaseOut,
    };

    /// Skewed band sweeping across the splash screen
    pub const SPLASH_SWEEP: Transition = Transition {
        trigger: Trigger::Mount,
        from: Pose::REST.offset_x(Length::Vw(-150.0)).skewed(30.0),
        to: Pose::REST.offset_x(Length::Vw(150.0)).skewed(30.0),
        duration_ms: 1500,
        delay_ms: 0,
        easing: Easing::EaseInOut,
    };

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay the `index`-th sibling by `step_ms` per position
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        self.with_delay(self.delay_ms + step_ms * index as u32)
    }

    /// Total time until the transition completes
    pub fn total_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }

    /// Inline style declaring the custom properties read by the keyframes
    pub fn style(&self) -> String {
        format!(
            "--motion-from-opacity:{};--motion-from-transform:{};\
             --motion-to-opacity:{};--motion-to-transform:{};\
             --motion-duration:{}ms;--motion-delay:{}ms;--motion-easing:{};",
            self.from.opacity,
            self.from.transform(),
            self.to.opacity,
            self.to.transform(),
            self.duration_ms,
            self.delay_ms,
            self.easing,
        )
    }

    pub fn class(&self) -> &'static str {
        self.trigger.class()
    }
}

/// Delay step between staggered children
pub const STAGGER_STEP_MS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(20.0).to_string(), "20px");
        assert_eq!(Length::Vw(-150.0).to_string(), "-150vw");
        assert_eq!(Length::Percent(100.0).to_string(), "100%");
        assert_eq!(Length::Px(-2.5).to_string(), "-2.5px");
    }

    #[test]
    fn test_fade_up_style() {
        assert_eq!(
            Transition::FADE_UP.style(),
            "--motion-from-opacity:0;--motion-from-transform:translate(0px, 20px) skewX(0deg) scale(1);\
             --motion-to-opacity:1;--motion-to-transform:none;\
             --motion-duration:500ms;--motion-delay:0ms;--motion-easing:ease-out;"
        );
        assert_eq!(Transition::FADE_UP.class(), "motion-mount");
    }

    #[test]
    fn test_presets_share_poses() {
        assert_eq!(Transition::REVEAL.from, Transition::FADE_UP.from);
        assert_eq!(Transition::REVEAL.class(), "motion-in-view");
        assert_eq!(Transition::PAGE_ENTER.duration_ms, 300);
        assert_eq!(Transition::SLIDE_FROM_RIGHT.from.x, Length::Px(30.0));
        assert_eq!(Transition::HOVER_LIFT.class(), "motion-hover");
    }

    #[test]
    fn test_rest_pose_leaves_no_transform() {
        assert_eq!(Pose::REST.transform(), "none");
        assert_eq!(Transition::PAGE_ENTER.to.transform(), "none");
        assert_eq!(Transition::REVEAL.to.transform(), "none");
        assert_eq!(Transition::SLIDE_FROM_LEFT.to.transform(), "none");
        assert!(Transition::PAGE_ENTER.style().contains("--motion-to-transform:none;"));

        // Only the resting end collapses
        assert_eq!(
            Transition::PAGE_ENTER.from.transform(),
            "translate(0px, 20px) skewX(0deg) scale(1)"
        );
        assert_eq!(
            Transition::HOVER_LIFT.to.transform(),
            "translate(0px, -5px) skewX(0deg) scale(1)"
        );
    }

    #[test]
    fn test_stagger() {
        let third = Transition::REVEAL.staggered(2, STAGGER_STEP_MS);
        assert_eq!(third.delay_ms, 200);

        let delayed = Transition::REVEAL.with_delay(200).staggered(1, 50);
        assert_eq!(delayed.delay_ms, 250);
    }

    #[test]
    fn test_splash_sweep() {
        let second = Transition::SPLASH_SWEEP.with_delay(300);
        assert_eq!(second.total_ms(), 1800);
        assert!(
            second
                .style()
                .contains("--motion-to-transform:translate(150vw, 0px) skewX(30deg) scale(1)")
        );
        assert!(second.style().contains("--motion-easing:ease-in-out"));
    }
}
