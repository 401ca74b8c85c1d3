//! Terminal event dispatch — mouse → drag state machine, keys → text box.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use cyclic_core::PointerEvent;

use crate::slider::{Focus, TermSlider};
use crate::surface::MOUSE_POINTER;

/// Feed one terminal event to the slider. Returns true if it was consumed.
pub fn handle_event(slider: &mut TermSlider, event: &Event) -> bool {
    match event {
        Event::Mouse(mouse) => handle_mouse(slider, *mouse),
        Event::Key(key) => handle_key(slider, *key),
        // The terminal's stand-in for pointercancel.
        Event::FocusLost => slider.model.pointer_cancel(MOUSE_POINTER).is_some(),
        _ => false,
    }
}

fn handle_mouse(slider: &mut TermSlider, mouse: MouseEvent) -> bool {
    let surface = slider.model.surface();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !surface.hit(mouse.column, mouse.row) {
                return false;
            }
            let offset_x = surface.offset_of(mouse.column);
            // Clicking the track blurs the text box.
            slider.finish_edit();
            slider.focus = Focus::Track;
            let handled = slider
                .model
                .pointer_down(PointerEvent::new(MOUSE_POINTER, offset_x))
                .is_handled();
            slider.sync_field();
            handled
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let offset_x = surface.offset_of(mouse.column);
            let handled = slider
                .model
                .pointer_move(PointerEvent::new(MOUSE_POINTER, offset_x))
                .is_handled();
            if handled {
                slider.sync_field();
            }
            handled
        }
        // Routed from anywhere on screen while a drag is active.
        MouseEventKind::Up(MouseButton::Left) => {
            if !surface.is_listening() {
                return false;
            }
            slider.model.pointer_up(MOUSE_POINTER).is_some()
        }
        _ => false,
    }
}

fn handle_key(slider: &mut TermSlider, key: KeyEvent) -> bool {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return false;
    }
    // The active drag owns the value until release.
    if slider.model.is_dragging() {
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::Right | KeyCode::Char('l') if !slider.is_editing() => {
            step(slider, 1)
        }
        KeyCode::Down | KeyCode::Left | KeyCode::Char('h') if !slider.is_editing() => {
            step(slider, -1)
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
            slider.focus = Focus::Field;
            slider.begin_edit();
            if let Some(raw) = slider.field.insert(c) {
                slider.model.input(raw);
            }
            true
        }
        KeyCode::Backspace if slider.focus == Focus::Field => {
            slider.begin_edit();
            if let Some(raw) = slider.field.backspace() {
                slider.model.input(raw);
            }
            true
        }
        KeyCode::Enter | KeyCode::Tab if slider.focus == Focus::Field => {
            slider.finish_edit();
            slider.focus = Focus::Track;
            true
        }
        KeyCode::Esc if slider.focus == Focus::Field => {
            slider.abandon_edit();
            slider.focus = Focus::Track;
            true
        }
        _ => false,
    }
}

/// Arrow keys act like spin-box arrows: live, then commit, per press.
fn step(slider: &mut TermSlider, direction: i8) -> bool {
    let stepped = if direction > 0 {
        slider.model.step_up()
    } else {
        slider.model.step_down()
    };
    if let Some(value) = stepped {
        slider.model.commit(value);
    }
    slider.sync_field();
    stepped.is_some()
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Mouse drag", "Set value; wraps past either end"),
        ("↑/→/l", "Step up"),
        ("↓/←/h", "Step down"),
        ("0-9 - .", "Type a value"),
        ("Backspace", "Delete last character"),
        ("Enter/Tab", "Commit typed value"),
        ("Esc", "Discard typed value, restore previous"),
    ]
}
