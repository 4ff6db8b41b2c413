use std::collections::BTreeMap;

use super::Category;

/// Pricing-relevant state of the quote form: which actions are checked and
/// which option is selected in each category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    checked_actions: Vec<String>,
    chosen: BTreeMap<Category, String>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks or unchecks an action. Checking an already-checked action is a
    /// no-op, as is unchecking one that is not checked.
    pub fn toggle_action(
        &mut self,
        value: &str,
        checked: bool,
    ) {
        let position = self.checked_actions.iter().position(|a| a == value);
        match (checked, position) {
            (true, None) => self.checked_actions.push(value.to_string()),
            (false, Some(index)) => {
                self.checked_actions.remove(index);
            }
            _ => {}
        }
    }

    pub fn select(
        &mut self,
        category: Category,
        value: impl Into<String>,
    ) {
        self.chosen.insert(category, value.into());
    }

    pub fn selected(
        &self,
        category: Category,
    ) -> Option<&str> {
        self.chosen.get(&category).map(String::as_str)
    }

    pub fn is_checked(
        &self,
        value: &str,
    ) -> bool {
        self.checked_actions.iter().any(|a| a == value)
    }

    /// Checked actions in the order they were checked.
    pub fn checked_actions(&self) -> impl Iterator<Item = &str> {
        self.checked_actions.iter().map(String::as_str)
    }
}
