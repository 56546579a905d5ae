use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::store::PreferenceStore;
use crate::tui::state::TuiApp;

impl<S: PreferenceStore> TuiApp<S> {
    pub fn run(&mut self) -> Result<()> {
        struct TuiGuard;
        impl Drop for TuiGuard {
            fn drop(&mut self) {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show);
                let _ = terminal::disable_raw_mode();
            }
        }
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        let _guard = TuiGuard;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        self.event_loop(&mut terminal)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Expire the rotation frame even when no input arrives.
            let _ = self.spinning();

            if self.dirty {
                terminal.draw(|f| self.view(f))?;
                self.dirty = false;
            }

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(k) if k.kind != KeyEventKind::Release => match k.code {
                        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('q') => return Ok(()),
                        // Both activation surfaces funnel into the same
                        // toggle; the menu routes to the mobile control.
                        KeyCode::Char('t') => {
                            if self.menu_open {
                                self.toggle_mobile();
                            } else {
                                self.toggle_desktop();
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') if self.menu_open => {
                            self.toggle_mobile();
                        }
                        KeyCode::Char('m') => self.toggle_menu(),
                        KeyCode::Esc => self.close_menu(),
                        _ => {}
                    },
                    Event::Resize(_, _) => self.dirty = true,
                    _ => {}
                }
            }
        }
    }
}
