//! Tooltip - Placement and Open/Close Delays

use std::time::Duration;

/// Side of the trigger the tooltip appears on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis-aligned rectangle in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

impl TooltipPosition {
    /// Top-left corner of a `width` x `height` tooltip next to `trigger`.
    ///
    /// The tooltip is centered on the trigger along the cross axis and kept
    /// `offset + gutter` away along the main axis.
    pub fn place(&self, trigger: Rect, width: f32, height: f32, offset: f32, gutter: f32) -> (f32, f32) {
        let gap = offset + gutter;
        match self {
            TooltipPosition::Top => (trigger.center_x() - width / 2.0, trigger.y - height - gap),
            TooltipPosition::Bottom => (
                trigger.center_x() - width / 2.0,
                trigger.y + trigger.height + gap,
            ),
            TooltipPosition::Left => (trigger.x - width - gap, trigger.center_y() - height / 2.0),
            TooltipPosition::Right => (
                trigger.x + trigger.width + gap,
                trigger.center_y() - height / 2.0,
            ),
        }
    }
}

/// Visibility of a tooltip with delayed transitions
///
/// `request_*` returns the delay and a generation; the caller waits for the
/// delay and then calls `settle(generation)`. A newer request invalidates
/// older pending transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipVisibility {
    visible: bool,
    target: bool,
    disabled: bool,
    open_delay: Duration,
    close_delay: Duration,
    generation: u64,
}

impl TooltipVisibility {
    pub fn new(open_delay: Duration, close_delay: Duration) -> Self {
        Self {
            open_delay,
            close_delay,
            ..Self::default()
        }
    }

    /// Check if the tooltip is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set disabled state; disabling hides immediately
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.visible = false;
            self.target = false;
            self.generation += 1;
        }
    }

    /// Force visibility (controlled `opened`)
    pub fn set_opened(&mut self, opened: bool) {
        self.visible = opened && !self.disabled;
        self.target = self.visible;
        self.generation += 1;
    }

    /// Pointer entered the trigger
    pub fn request_show(&mut self) -> Option<(Duration, u64)> {
        self.request(true, self.open_delay)
    }

    /// Pointer left the trigger
    pub fn request_hide(&mut self) -> Option<(Duration, u64)> {
        self.request(false, self.close_delay)
    }

    /// Apply a pending transition; returns whether visibility changed
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.visible == self.target {
            return false;
        }
        self.visible = self.target;
        true
    }

    fn request(&mut self, show: bool, delay: Duration) -> Option<(Duration, u64)> {
        if self.disabled {
            return None;
        }
        self.target = show;
        self.generation += 1;
        Some((delay, self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: Rect = Rect {
        x: 100.0,
        y: 100.0,
        width: 40.0,
        height: 20.0,
    };

    #[test]
    fn placement_on_each_side() {
        assert_eq!(TooltipPosition::Top.place(TRIGGER, 60.0, 30.0, 5.0, 5.0), (90.0, 60.0));
        assert_eq!(TooltipPosition::Bottom.place(TRIGGER, 60.0, 30.0, 5.0, 5.0), (90.0, 130.0));
        assert_eq!(TooltipPosition::Left.place(TRIGGER, 60.0, 30.0, 5.0, 5.0), (30.0, 95.0));
        assert_eq!(TooltipPosition::Right.place(TRIGGER, 60.0, 30.0, 5.0, 5.0), (150.0, 95.0));
    }

    #[test]
    fn show_then_hide() {
        let mut tooltip = TooltipVisibility::new(Duration::from_millis(50), Duration::ZERO);
        let (delay, generation) = tooltip.request_show().expect("enabled");
        assert_eq!(delay, Duration::from_millis(50));
        assert!(!tooltip.is_visible());
        assert!(tooltip.settle(generation));
        assert!(tooltip.is_visible());

        let (_, generation) = tooltip.request_hide().expect("enabled");
        assert!(tooltip.settle(generation));
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn leaving_before_open_delay_cancels_show() {
        let mut tooltip = TooltipVisibility::new(Duration::from_millis(200), Duration::ZERO);
        let (_, show) = tooltip.request_show().expect("enabled");
        let (_, hide) = tooltip.request_hide().expect("enabled");
        assert!(!tooltip.settle(show));
        assert!(!tooltip.settle(hide));
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn disabled_tooltip_stays_hidden() {
        let mut tooltip = TooltipVisibility::default();
        tooltip.set_opened(true);
        assert!(tooltip.is_visible());
        tooltip.set_disabled(true);
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.request_show(), None);
        tooltip.set_opened(true);
        assert!(!tooltip.is_visible());
    }
}
