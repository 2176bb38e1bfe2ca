//! Keyboard sampling: turns the events that arrived since the last tick
//! into a single `Controls` value.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// Resolve every pending key event into this tick's controls.
///
/// Later events win on each axis, so pressing up then down within one tick
/// yields "down".  Fire is a one-shot flag; a quit key short-circuits the
/// rest of the batch.
pub fn read_controls<I>(events: I) -> Controls
where
    I: IntoIterator<Item = KeyEvent>,
{
    let mut controls = Controls::default();

    for KeyEvent { code, kind, modifiers, .. } in events {
        if kind == KeyEventKind::Release {
            continue;
        }
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => controls.rows_direction = -1,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => controls.rows_direction = 1,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                controls.columns_direction = -1
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                controls.columns_direction = 1
            }
            KeyCode::Char(' ') => controls.fire = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                controls.quit = true;
                break;
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                controls.quit = true;
                break;
            }
            _ => {}
        }
    }
    controls
}
