//! Rating - Star Rating Value and Symbol Fill

/// How much of a symbol is drawn as full
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolFill {
    Empty,
    /// Fraction in `(0, 1)` of the symbol width
    Partial(f32),
    Full,
}

/// Value and hover preview of a rating control
#[derive(Debug, Clone, PartialEq)]
pub struct RatingModel {
    count: usize,
    fractions: usize,
    value: f32,
    hover: Option<f32>,
    read_only: bool,
    highlight_selected_only: bool,
}

impl RatingModel {
    /// Create a rating with `count` symbols, each split into `fractions` parts
    pub fn new(count: usize, fractions: usize) -> Self {
        Self {
            count: count.max(1),
            fractions: fractions.max(1),
            value: 0.0,
            hover: None,
            read_only: false,
            highlight_selected_only: false,
        }
    }

    /// Set the initial value
    pub fn value(mut self, value: f32) -> Self {
        self.value = self.clamp(value);
        self
    }

    /// Set read only
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Only highlight the selected symbol instead of every symbol up to it
    pub fn highlight_selected_only(mut self, highlight: bool) -> Self {
        self.highlight_selected_only = highlight;
        self
    }

    /// Number of symbols
    pub fn count(&self) -> usize {
        self.count
    }

    /// Parts each symbol is split into
    pub fn fractions(&self) -> usize {
        self.fractions
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn highlights_selected_only(&self) -> bool {
        self.highlight_selected_only
    }

    /// Number of clickable parts rendered
    pub fn symbol_count(&self) -> usize {
        self.count * self.fractions
    }

    /// Get the committed value
    pub fn current(&self) -> f32 {
        self.value
    }

    /// Value shown right now (hover preview wins)
    pub fn active_value(&self) -> f32 {
        self.hover.unwrap_or(self.value)
    }

    /// Adopt a controlled value
    pub fn sync(&mut self, value: Option<f32>) {
        if let Some(value) = value {
            self.value = self.clamp(value);
        }
    }

    /// Value represented by part `index`
    pub fn value_at(&self, index: usize) -> f32 {
        (index + 1) as f32 / self.fractions as f32
    }

    /// Pointer entered part `index`; returns the value for `on_hover`
    pub fn hover(&mut self, index: usize) -> Option<f32> {
        if self.read_only || index >= self.symbol_count() {
            return None;
        }
        let value = self.value_at(index);
        self.hover = Some(value);
        Some(value)
    }

    /// Pointer left the control; returns `0.0` for `on_hover`
    pub fn leave(&mut self) -> Option<f32> {
        if self.read_only {
            return None;
        }
        self.hover = None;
        Some(0.0)
    }

    /// Part `index` clicked; returns the new value for `on_change`
    pub fn select(&mut self, index: usize) -> Option<f32> {
        if self.read_only || index >= self.symbol_count() {
            return None;
        }
        self.value = self.value_at(index);
        Some(self.value)
    }

    /// Fill of part `index` for the active value
    pub fn fill(&self, index: usize) -> SymbolFill {
        let active = self.active_value();
        let start = index as f32 / self.fractions as f32;
        let end = self.value_at(index);

        if active <= start {
            SymbolFill::Empty
        } else if active >= end {
            SymbolFill::Full
        } else {
            SymbolFill::Partial((active - start) * self.fractions as f32)
        }
    }

    /// Whether part `index` is drawn in the highlight color
    pub fn is_highlighted(&self, index: usize) -> bool {
        if self.highlight_selected_only {
            (self.active_value() - self.value_at(index)).abs() < f32::EPSILON
        } else {
            self.fill(index) != SymbolFill::Empty
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(0.0, self.count as f32)
    }
}

impl Default for RatingModel {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_RATING_COUNT, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_symbols() {
        let mut rating = RatingModel::default();
        assert_eq!(rating.symbol_count(), 5);
        assert_eq!(rating.select(2), Some(3.0));
        assert_eq!(rating.fill(2), SymbolFill::Full);
        assert_eq!(rating.fill(3), SymbolFill::Empty);
        assert!(rating.is_highlighted(0));
        assert!(!rating.is_highlighted(4));
    }

    #[test]
    fn half_symbols() {
        let mut rating = RatingModel::new(5, 2);
        assert_eq!(rating.symbol_count(), 10);
        assert_eq!(rating.select(4), Some(2.5));
    }

    #[test]
    fn partial_fill_from_controlled_value() {
        let mut rating = RatingModel::new(5, 1);
        rating.sync(Some(2.25));
        assert_eq!(rating.fill(1), SymbolFill::Full);
        assert_eq!(rating.fill(2), SymbolFill::Partial(0.25));
        rating.sync(Some(9.0));
        assert_eq!(rating.current(), 5.0);
    }

    #[test]
    fn hover_previews_then_restores() {
        let mut rating = RatingModel::default().value(1.0);
        assert_eq!(rating.hover(3), Some(4.0));
        assert_eq!(rating.active_value(), 4.0);
        assert_eq!(rating.leave(), Some(0.0));
        assert_eq!(rating.active_value(), 1.0);
    }

    #[test]
    fn highlight_selected_only_marks_one_symbol() {
        let rating = RatingModel::default().value(3.0).highlight_selected_only(true);
        let highlighted: Vec<_> = (0..5).filter(|&i| rating.is_highlighted(i)).collect();
        assert_eq!(highlighted, vec![2]);
    }

    #[test]
    fn read_only_ignores_pointer() {
        let mut rating = RatingModel::default().value(2.0).read_only(true);
        assert_eq!(rating.select(4), None);
        assert_eq!(rating.hover(4), None);
        assert_eq!(rating.leave(), None);
        assert_eq!(rating.current(), 2.0);
    }
}
