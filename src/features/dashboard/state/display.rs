/// Side panel shown next to the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Preview,
    Editor,
    Calendar,
}

impl DisplayMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "preview" => Some(DisplayMode::Preview),
            "editor" => Some(DisplayMode::Editor),
            "calendar" => Some(DisplayMode::Calendar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Preview => "preview",
            DisplayMode::Editor => "editor",
            DisplayMode::Calendar => "calendar",
        }
    }
}

/// Panel to show after the task selection changed: a selected task opens its preview, and
/// clearing the selection closes the preview. Other panels stay open when nothing is selected.
pub fn mode_for_selection(current: DisplayMode, selected: Option<i64>) -> DisplayMode {
    match (selected, current) {
        (Some(_), _) => DisplayMode::Preview,
        (None, DisplayMode::Preview) => DisplayMode::Calendar,
        (None, mode) => mode,
    }
}

/// One flag per panel; exactly one is set for any mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlow {
    pub preview: bool,
    pub editor: bool,
    pub calendar: bool,
}

impl From<DisplayMode> for DisplayFlow {
    fn from(mode: DisplayMode) -> Self {
        Self {
            preview: mode == DisplayMode::Preview,
            editor: mode == DisplayMode::Editor,
            calendar: mode == DisplayMode::Calendar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flow_sets_exactly_one_flag() {
        for mode in [DisplayMode::Preview, DisplayMode::Editor, DisplayMode::Calendar] {
            let flow = DisplayFlow::from(mode);
            let set = [flow.preview, flow.editor, flow.calendar].iter().filter(|f| **f).count();
            assert_eq!(set, 1, "{mode:?}");
        }
        assert_eq!(
            DisplayFlow::from(DisplayMode::Editor),
            DisplayFlow { preview: false, editor: true, calendar: false }
        );
    }

    #[test]
    fn selecting_a_task_opens_the_preview() {
        for current in [DisplayMode::Preview, DisplayMode::Editor, DisplayMode::Calendar] {
            let flow = DisplayFlow::from(mode_for_selection(current, Some(3)));
            assert!(flow.preview, "{current:?}");
        }
    }

    #[test]
    fn clearing_the_selection_closes_only_the_preview() {
        assert_eq!(mode_for_selection(DisplayMode::Preview, None), DisplayMode::Calendar);
        assert_eq!(mode_for_selection(DisplayMode::Editor, None), DisplayMode::Editor);
        assert_eq!(mode_for_selection(DisplayMode::Calendar, None), DisplayMode::Calendar);
    }

    #[test]
    fn names_round_trip() {
        for mode in [DisplayMode::Preview, DisplayMode::Editor, DisplayMode::Calendar] {
            assert_eq!(DisplayMode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::from_name(" Calendar "), Some(DisplayMode::Calendar));
        assert_eq!(DisplayMode::from_name("calender"), None);
    }
}
