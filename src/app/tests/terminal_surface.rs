use ratatui::buffer::Buffer;
use ratatui::layout::Size;

use crate::app::StatusState;
use crate::command::ActionId;
use crate::panel::Variant;

use super::super::terminal_session::TerminalSurface;
use super::{StubRunner, TestTerminalSurface, app_with_runner};

fn screen_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn terminal_surface_supports_size_draw_and_bell() {
    let mut session = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    assert_eq!(session.size().expect("size should resolve"), Size::new(80, 24));

    session.bell().expect("bell should succeed");
    session.bell().expect("bell should succeed");
    assert_eq!(session.bells, 2);
}

#[test]
fn render_frame_shows_header_buttons_and_status() {
    let runner = StubRunner::new(Some(0));
    let mut app = app_with_runner(Variant::Full, &runner);
    app.state.status = StatusState::error(
        ActionId::FocusUp,
        "error executing command: hyprctl dispatch movefocus u (terminated by exit status 1)",
    );
    let mut session = TestTerminalSurface::new(100, 30).expect("test terminal should initialize");

    app.render_frame(&mut session).expect("frame should render");

    let text = screen_text(session.terminal.backend().buffer());
    assert!(text.contains("panel: full"), "{text}");
    for action in ActionId::ALL {
        assert!(text.contains(action.label()), "{} missing:\n{text}", action.label());
    }
    assert!(text.contains("hyprctl dispatch movefocus u"), "{text}");
    assert!(text.contains("q quit"), "{text}");
}

#[test]
fn media_panel_hides_volume_and_focus_buttons() {
    let runner = StubRunner::new(Some(0));
    let app = app_with_runner(Variant::Media, &runner);
    let mut session = TestTerminalSurface::new(80, 20).expect("test terminal should initialize");

    app.render_frame(&mut session).expect("frame should render");

    let text = screen_text(session.terminal.backend().buffer());
    assert!(text.contains("Play/Pause"));
    assert!(text.contains("Rewind 10s"));
    assert!(!text.contains("Mute"));
    assert!(!text.contains("Focus Up"));
}
