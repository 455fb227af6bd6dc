use crate::sim::SimEvent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one poll waits before re-checking whether anyone still listens.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub(crate) fn map_event(ev: Event) -> Option<SimEvent> {
    match ev {
        Event::Key(k) => map_key(k),
        Event::Mouse(m) => Some(SimEvent::Pointer {
            x: m.column,
            y: m.row,
        }),
        Event::Resize(width, height) => Some(SimEvent::Resize { width, height }),
        _ => None,
    }
}

fn map_key(k: KeyEvent) -> Option<SimEvent> {
    if k.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') if ctrl => {
            Some(SimEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(SimEvent::Quit),
        _ => None,
    }
}

/// Start the thread that blocks on terminal input and forwards it.
///
/// The thread is the only sender. It stops on its own once the receiving
/// side is dropped, or when reading from the terminal fails.
pub(crate) fn spawn_poller(tx: mpsc::Sender<SimEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || poll_loop(&tx))
}

fn poll_loop(tx: &mpsc::Sender<SimEvent>) {
    while !tx.is_closed() {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                warn!("input poll failed: {e}");
                break;
            }
        }
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(e) => {
                warn!("input read failed: {e}");
                break;
            }
        };
        if let Some(sim_ev) = map_event(ev) {
            if tx.blocking_send(sim_ev).is_err() {
                break;
            }
        }
    }
    debug!("input thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn quit_keys() {
        for ev in [
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            key(KeyCode::Esc, KeyModifiers::NONE),
        ] {
            assert_eq!(map_event(ev), Some(SimEvent::Quit));
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_event(key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_does_not_quit() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn any_mouse_activity_moves_the_pointer() {
        for kind in [
            MouseEventKind::Moved,
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
        ] {
            assert_eq!(
                map_event(mouse(kind, 12, 4)),
                Some(SimEvent::Pointer { x: 12, y: 4 })
            );
        }
    }

    #[test]
    fn resize_carries_new_dimensions() {
        assert_eq!(
            map_event(Event::Resize(80, 24)),
            Some(SimEvent::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn focus_and_paste_are_ignored() {
        assert_eq!(map_event(Event::FocusGained), None);
        assert_eq!(map_event(Event::Paste("sand".into())), None);
    }
}
