use leptos::prelude::*;

use crate::features::dashboard::state::{mode_for_selection, DisplayFlow, DisplayMode};

/// Shared coordinator for the side panel. Owned by `App` and handed down through context.
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    mode: RwSignal<DisplayMode>,
}

impl DisplayContext {
    pub fn new(initial: DisplayMode) -> Self {
        Self { mode: RwSignal::new(initial) }
    }

    pub fn current(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn flow(&self) -> DisplayFlow {
        DisplayFlow::from(self.mode.get())
    }

    pub fn switch_mode(&self, mode: DisplayMode) {
        tracing::debug!(mode = mode.as_str(), "switching side panel");
        self.mode.set(mode);
    }

    pub fn follow_selection(&self, selected: Option<i64>) {
        let current = self.mode.get_untracked();
        let next = mode_for_selection(current, selected);
        if next != current {
            self.switch_mode(next);
        }
    }
}

pub fn provide_display(initial: DisplayMode) -> DisplayContext {
    let display = DisplayContext::new(initial);
    provide_context(display);
    display
}

pub fn use_display() -> DisplayContext {
    use_context::<DisplayContext>().expect("display context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_replaces_the_active_panel() {
        let display = DisplayContext::new(DisplayMode::Calendar);
        assert_eq!(display.current(), DisplayMode::Calendar);
        assert!(display.flow().calendar);

        display.switch_mode(DisplayMode::Editor);
        let flow = display.flow();
        assert!(flow.editor);
        assert!(!flow.calendar);
        assert!(!flow.preview);
    }

    #[test]
    fn selecting_a_task_sets_the_preview_flag() {
        let display = DisplayContext::new(DisplayMode::Calendar);
        display.follow_selection(Some(12));
        assert!(display.flow().preview);
        assert!(!display.flow().calendar);

        display.follow_selection(None);
        assert_eq!(display.current(), DisplayMode::Calendar);
    }
}
