//! Presentation components

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A presentation unit: draws its props and turns input into actions
///
/// Props are built by a container from connected state. Besides the values
/// to draw they carry the action constructors the component may call, as
/// plain `fn` pointers, so a component never holds the store and cannot
/// dispatch on its own. Local UI state that no other part of the app needs
/// (a highlighted row, a scroll offset) may live on `self`.
///
/// # Example
///
/// ```ignore
/// use slice_dispatch::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps<A> {
///     is_shown: bool,
///     on_show: fn() -> A,
///     on_hide: fn() -> A,
/// }
///
/// impl<A> Component<A> for Toggle {
///     type Props<'a> = ToggleProps<A>;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
///         let pressed = event.as_key().is_some_and(|key| key.code == KeyCode::Char('t'));
///         pressed.then(|| if props.is_shown { (props.on_hide)() } else { (props.on_show)() })
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.is_shown { "shown" } else { "hidden" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    type Props<'a>;

    /// Actions produced by `event`, in dispatch order
    ///
    /// `None`, `Some(action)` and `Vec`s all work as return values. Render-only
    /// components keep the default, which ignores every event.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
