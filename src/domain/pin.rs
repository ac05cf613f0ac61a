//! Pin - Pin/OTP Input Cells and Focus Management

/// Characters a pin cell accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PinKind {
    /// Any single character
    #[default]
    Alphanumeric,
    /// ASCII digits only
    Number,
}

impl PinKind {
    fn accepts(&self, c: char) -> bool {
        match self {
            PinKind::Alphanumeric => !c.is_control() && !c.is_whitespace(),
            PinKind::Number => c.is_ascii_digit(),
        }
    }
}

/// What the caller should do after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinUpdate {
    /// Joined value, to report through `on_change`
    pub value: String,
    /// Cell that should receive focus, if focus moves
    pub focus: Option<usize>,
    /// Set when every cell is filled, to report through `on_complete`
    pub complete: Option<String>,
}

/// Cells of a pin input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinState {
    cells: Vec<Option<char>>,
    kind: PinKind,
    manage_focus: bool,
    focused: Option<usize>,
}

impl PinState {
    /// Create `length` empty cells (at least one)
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![None; length.max(1)],
            kind: PinKind::default(),
            manage_focus: true,
            focused: None,
        }
    }

    /// Set accepted characters
    pub fn kind(mut self, kind: PinKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set whether edits move focus between cells
    pub fn manage_focus(mut self, manage_focus: bool) -> Self {
        self.manage_focus = manage_focus;
        self
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Character in a cell
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell that currently has focus
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Record that a cell received focus
    pub fn focus(&mut self, index: usize) {
        if index < self.cells.len() {
            self.focused = Some(index);
        }
    }

    /// Record that the input lost focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Joined value of the filled cells
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Text typed into a cell; only the last accepted character is kept.
    ///
    /// Returns `None` when the edit is rejected.
    pub fn input(&mut self, index: usize, text: &str) -> Option<PinUpdate> {
        if index >= self.cells.len() {
            return None;
        }
        let c = text.chars().rev().find(|c| self.kind.accepts(*c))?;
        self.cells[index] = Some(c);

        let focus = (self.manage_focus && index + 1 < self.cells.len()).then_some(index + 1);
        if let Some(next) = focus {
            self.focused = Some(next);
        }
        Some(self.update(focus))
    }

    /// Backspace pressed in a cell.
    ///
    /// A filled cell is cleared; on an empty cell focus moves back one cell.
    pub fn backspace(&mut self, index: usize) -> Option<PinUpdate> {
        if index >= self.cells.len() {
            return None;
        }
        if self.cells[index].take().is_some() {
            return Some(self.update(None));
        }

        let previous = index.checked_sub(1).filter(|_| self.manage_focus)?;
        self.focused = Some(previous);
        Some(PinUpdate {
            value: self.value(),
            focus: Some(previous),
            complete: None,
        })
    }

    /// Text pasted into the input; fills cells from the start
    pub fn paste(&mut self, text: &str) -> Option<PinUpdate> {
        let accepted: Vec<char> = text
            .chars()
            .filter(|c| self.kind.accepts(*c))
            .take(self.cells.len())
            .collect();
        if accepted.is_empty() {
            return None;
        }

        for (cell, c) in self.cells.iter_mut().zip(accepted.iter()) {
            *cell = Some(*c);
        }

        let focus = self
            .manage_focus
            .then(|| accepted.len().min(self.cells.len() - 1));
        if let Some(index) = focus {
            self.focused = Some(index);
        }
        Some(self.update(focus))
    }

    fn update(&self, focus: Option<usize>) -> PinUpdate {
        let value = self.value();
        let complete = self.is_complete().then(|| value.clone());
        PinUpdate {
            value,
            focus,
            complete,
        }
    }
}

impl Default for PinState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_advances_focus_and_completes() {
        let mut pin = PinState::new(3);

        let update = pin.input(0, "1").expect("accepted");
        assert_eq!(update.value, "1");
        assert_eq!(update.focus, Some(1));
        assert_eq!(update.complete, None);

        pin.input(1, "2").expect("accepted");
        let update = pin.input(2, "3").expect("accepted");
        assert_eq!(update.focus, None);
        assert_eq!(update.complete.as_deref(), Some("123"));
    }

    #[test]
    fn keeps_last_character_of_input() {
        let mut pin = PinState::new(4);
        pin.input(0, "ab").expect("accepted");
        assert_eq!(pin.cell(0), Some('b'));
    }

    #[test]
    fn number_kind_rejects_letters() {
        let mut pin = PinState::new(4).kind(PinKind::Number);
        assert_eq!(pin.input(0, "x"), None);
        assert!(pin.is_empty());
        assert!(pin.input(0, "7").is_some());
    }

    #[test]
    fn backspace_clears_then_moves_back() {
        let mut pin = PinState::new(4);
        pin.input(0, "1");
        pin.input(1, "2");

        let update = pin.backspace(1).expect("cleared");
        assert_eq!(update.value, "1");
        assert_eq!(update.focus, None);

        let update = pin.backspace(1).expect("moved");
        assert_eq!(update.focus, Some(0));
        assert_eq!(pin.focused(), Some(0));

        pin.backspace(0);
        assert_eq!(pin.backspace(0), None);
    }

    #[test]
    fn without_focus_management_focus_stays() {
        let mut pin = PinState::new(2).manage_focus(false);
        assert_eq!(pin.input(0, "1").and_then(|u| u.focus), None);
        assert_eq!(pin.backspace(1), None);
    }

    #[test]
    fn paste_fills_from_start_and_truncates() {
        let mut pin = PinState::new(4).kind(PinKind::Number);
        let update = pin.paste("12-34-56").expect("accepted");
        assert_eq!(update.value, "1234");
        assert_eq!(update.complete.as_deref(), Some("1234"));
        assert_eq!(update.focus, Some(3));

        let mut pin = PinState::new(4);
        let update = pin.paste("ab").expect("accepted");
        assert_eq!(update.value, "ab");
        assert_eq!(update.focus, Some(2));
        assert_eq!(update.complete, None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut pin = PinState::new(2);
        assert_eq!(pin.input(5, "1"), None);
        assert_eq!(pin.backspace(5), None);
        pin.focus(9);
        assert_eq!(pin.focused(), None);
    }
}
