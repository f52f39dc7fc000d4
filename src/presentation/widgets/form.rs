//! Focusable group of text inputs.

use crossterm::event::KeyEvent;

use super::TextInput;

/// Ordered set of inputs with a single focused field.
///
/// `order` lists the indices of the currently visible fields, so a form can
/// hide fields without losing their content.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextInput>,
    order: Vec<usize>,
    focus: usize,
}

impl Form {
    /// Creates form with every field visible and the first one focused.
    #[must_use]
    pub fn new(fields: Vec<TextInput>) -> Self {
        let order = (0..fields.len()).collect();
        let mut form = Self {
            fields,
            order,
            focus: 0,
        };
        form.sync_focus();
        form
    }

    /// Restricts the visible fields. Focus returns to the first one.
    pub fn set_order(&mut self, order: Vec<usize>) {
        self.order = order
            .into_iter()
            .filter(|&index| index < self.fields.len())
            .collect();
        self.focus = 0;
        self.sync_focus();
    }

    /// Returns visible fields in display order.
    pub fn visible(&self) -> impl Iterator<Item = &TextInput> {
        self.order.iter().filter_map(|&index| self.fields.get(index))
    }

    /// Returns value of field `index`.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", TextInput::value)
    }

    /// Returns index of the focused field.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.order.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        if !self.order.is_empty() {
            self.focus = (self.focus + 1) % self.order.len();
            self.sync_focus();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.order.is_empty() {
            self.focus = (self.focus + self.order.len() - 1) % self.order.len();
            self.sync_focus();
        }
    }

    /// Sends an editing key to the focused field.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        let Some(index) = self.focused() else {
            return false;
        };
        self.fields
            .get_mut(index)
            .is_some_and(|field| field.handle_key(key))
    }

    /// Wipes every field buffer.
    pub fn wipe(&mut self) {
        for field in &mut self.fields {
            field.wipe();
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused();
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(Some(index) == focused);
        }
    }
}
