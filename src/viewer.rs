//! Interactive terminal session around a computed `RenderModel`.

use crate::rows::RenderModel;
use crate::theme::Theme;
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Narrower than this and two panes plus gutters stop being readable.
pub const MIN_WIDTH: u16 = 60;

/// Largest scroll offset that still fills the viewport where possible.
fn max_scroll(row_count: usize, visible_height: usize) -> usize {
    row_count.saturating_sub(visible_height)
}

pub struct Viewer {
    model: RenderModel,
    left_title: String,
    right_title: String,
    scroll: usize,
    theme: Theme,
}

impl Viewer {
    pub fn new(model: RenderModel, left_title: String, right_title: String) -> Self {
        Viewer {
            model,
            left_title,
            right_title,
            scroll: 0,
            theme: Theme::Dark,
        }
    }

    /// Enter the alternate screen, run the event loop, restore the terminal.
    /// The terminal is restored even when the loop errors out.
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;

        let result = self.event_loop();

        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();

        loop {
            ui::render(
                &mut stdout,
                &self.model,
                &self.left_title,
                &self.right_title,
                self.scroll,
                self.theme,
            )?;

            let (_, height) = terminal::size()?;
            let page = height.saturating_sub(ui::CHROME_HEIGHT) as usize;
            let limit = max_scroll(self.model.row_count(), page);

            match event::read()? {
                Event::Key(key) => match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _)
                    | (KeyCode::Esc, _)
                    | (KeyCode::Char('x'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Char('t'), _) => self.theme = self.theme.toggled(),
                    (KeyCode::Up, _) => self.scroll = self.scroll.saturating_sub(1),
                    (KeyCode::Down, _) => self.scroll = (self.scroll + 1).min(limit),
                    (KeyCode::PageUp, _) => self.scroll = self.scroll.saturating_sub(page),
                    (KeyCode::PageDown, _) => self.scroll = (self.scroll + page).min(limit),
                    (KeyCode::Home, _) => self.scroll = 0,
                    (KeyCode::End, _) => self.scroll = limit,
                    _ => {}
                },
                Event::Resize(_, _) => {
                    // The next loop iteration re-reads the size and redraws;
                    // only the scroll needs re-clamping here.
                    self.scroll = self.scroll.min(limit);
                }
                _ => {}
            }
        }

        Ok(())
    }
}
