use crate::ui::app::{App, GRID_COLUMNS};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.previous_category(),
        KeyCode::Left => app.move_selection(-1),
        KeyCode::Right => app.move_selection(1),
        KeyCode::Up => app.move_selection(-(GRID_COLUMNS as isize)),
        KeyCode::Down => app.move_selection(GRID_COLUMNS as isize),
        KeyCode::Enter => {
            app.add_selected_to_cart();
        }
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_query_char(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_char_detection() {
        assert!(is_ctrl_char(
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            'q'
        ));
        assert!(is_ctrl_char(
            key(KeyCode::Char('Q'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            'q'
        ));
        assert!(!is_ctrl_char(key(KeyCode::Char('q'), KeyModifiers::NONE), 'q'));
    }
}
