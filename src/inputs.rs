//! Text fields and icon buttons shared by the editor and the palette view.

use std::time::Duration;

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// How long a button shows its check/cross before reverting.
const FEEDBACK_MS: u64 = 800;

/// Result shown on an icon button after it is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feedback {
    Idle,
    Done,
    Rejected,
}

/// A text field that calls `on_commit` on Enter or focus loss.
pub(crate) fn text_field(
    text: RwSignal<String>,
    width: f32,
    on_commit: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let on_enter = on_commit.clone();
    text_input(text)
        .style(move |s| {
            s.width(width)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_enter();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}

/// A numeric field with a caption underneath (e.g. `H`, `S`, `V`).
pub(crate) fn number_field(
    lbl: &'static str,
    text: RwSignal<String>,
    on_commit: impl Fn() + Clone + 'static,
) -> impl IntoView {
    v_stack((
        text_field(text, constants::INPUT_WIDTH, on_commit),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small lucide icon button. `on_click` reports whether the action
/// succeeded; the icon briefly turns into a check or a cross accordingly.
pub(crate) fn icon_button(
    icon: lucide_icons::Icon,
    on_click: impl Fn() -> bool + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let feedback = RwSignal::new(Feedback::Idle);
    let idle = icon.unicode().to_string();
    container(
        label(move || match feedback.get() {
            Feedback::Idle => idle.clone(),
            Feedback::Done => lucide_icons::Icon::Check.unicode().to_string(),
            Feedback::Rejected => lucide_icons::Icon::X.unicode().to_string(),
        })
        .style(move |s| {
            let c = match (feedback.get(), pressed.get()) {
                (Feedback::Done, _) => Color::rgb8(34, 160, 90),
                (Feedback::Rejected, _) => Color::rgb8(210, 60, 60),
                (Feedback::Idle, true) => Color::rgb8(80, 80, 80),
                (Feedback::Idle, false) => Color::rgb8(120, 120, 120),
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let outcome = if on_click() {
            Feedback::Done
        } else {
            Feedback::Rejected
        };
        feedback.set(outcome);
        floem::action::exec_after(Duration::from_millis(FEEDBACK_MS), move |_| {
            feedback.set(Feedback::Idle);
        });
    })
}

/// Copy `text` to the system clipboard. Returns `false` if no clipboard is
/// available or the write failed.
pub(crate) fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(message = "📋 Could not copy to clipboard", error = %err);
            false
        }
    }
}
