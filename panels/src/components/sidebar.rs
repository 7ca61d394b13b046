use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use slice_dispatch::{Component, EventKind};

/// Columns taken by the sidebar when shown
pub const SIDEBAR_WIDTH: u16 = 24;

const SECTIONS: &[&str] = &["Overview", "Activity", "Settings"];

pub struct SidebarProps<A> {
    pub is_shown: Option<bool>,
    pub on_show: fn(bool) -> A,
    pub on_hide: fn() -> A,
}

/// Collapsible navigation column, toggled with `s`
#[derive(Default)]
pub struct Sidebar;

impl Sidebar {
    pub fn is_visible(is_shown: Option<bool>) -> bool {
        is_shown == Some(true)
    }
}

impl<A> Component<A> for Sidebar {
    type Props<'a> = SidebarProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        match event.as_key() {
            Some(key) if key.code == KeyCode::Char('s') => {
                if Self::is_visible(props.is_shown) {
                    Some((props.on_hide)())
                } else {
                    Some((props.on_show)(true))
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !Self::is_visible(props.is_shown) || area.width == 0 {
            return;
        }

        let lines: Vec<Line> = SECTIONS
            .iter()
            .map(|section| Line::from(format!(" {}", section)))
            .collect();

        let block = Block::default()
            .title(" Sidebar ".bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slice_dispatch::testing::{char_key, into_event, RenderHarness, TestHarness};
    use slice_dispatch::{assert_emitted, Action};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Show(bool),
        Hide,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Show(_) => "Show",
                TestAction::Hide => "Hide",
            }
        }
    }

    fn props(is_shown: Option<bool>) -> SidebarProps<TestAction> {
        SidebarProps {
            is_shown,
            on_show: TestAction::Show,
            on_hide: || TestAction::Hide,
        }
    }

    #[test]
    fn test_toggle_key_shows_hidden_sidebar() {
        let mut harness = TestHarness::<(), TestAction>::default();
        for is_shown in [None, Some(false)] {
            harness.emit_all(Sidebar.handle_event(&into_event(char_key('s')), props(is_shown)));
        }

        let emitted = harness.drain_emitted();
        assert_eq!(emitted, vec![TestAction::Show(true), TestAction::Show(true)]);
    }

    #[test]
    fn test_toggle_key_hides_shown_sidebar() {
        let mut harness = TestHarness::<(), TestAction>::default();
        harness.emit_all(Sidebar.handle_event(&into_event(char_key('s')), props(Some(true))));

        let emitted = harness.drain_emitted();
        assert_emitted!(emitted, TestAction::Hide);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut harness = TestHarness::<(), TestAction>::default();
        harness.emit_all(Sidebar.handle_event(&into_event(char_key('x')), props(None)));
        assert!(!harness.has_emitted());
    }

    #[test]
    fn test_renders_only_when_shown() {
        let mut render = RenderHarness::new(30, 6);

        let hidden = render.render_to_string_plain(|frame| {
            let area = frame.area();
            Sidebar.render(frame, area, props(Some(false)));
        });
        assert!(!hidden.contains("Sidebar"));

        let shown = render.render_to_string_plain(|frame| {
            let area = frame.area();
            Sidebar.render(frame, area, props(Some(true)));
        });
        assert!(shown.contains("Sidebar"));
        assert!(shown.contains("Overview"));
    }
}
