/// Single-select toggle over the visible task rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSelection {
    selected: Option<i64>,
}

impl TaskSelection {
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn is_active(&self, id: i64) -> bool {
        self.selected == Some(id)
    }

    pub fn toggle(&mut self, id: i64) {
        self.selected = if self.is_active(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selects_then_clears() {
        let mut selection = TaskSelection::default();
        selection.toggle(4);
        assert_eq!(selection.selected(), Some(4));
        assert!(selection.is_active(4));
        selection.toggle(4);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn double_toggle_restores_previous_selection() {
        let mut selection = TaskSelection::default();
        selection.toggle(1);
        let before = selection;
        selection.toggle(2);
        selection.toggle(2);
        // Second click on 2 clears rather than restoring 1.
        assert_eq!(selection.selected(), None);

        let mut selection = before;
        selection.toggle(1);
        selection.toggle(1);
        assert_eq!(selection, before);
    }

    #[test]
    fn selecting_another_task_replaces_the_active_one() {
        let mut selection = TaskSelection::default();
        selection.toggle(1);
        selection.toggle(2);
        assert!(!selection.is_active(1));
        assert!(selection.is_active(2));
    }
}
