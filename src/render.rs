use crate::color::{hue_to_rgb, Rgb};
use crate::grid::{Cell, Coord, Grid};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};

/// Surface the simulation draws on. Every cell is a blank glyph; only the
/// background colour carries information (`None` = terminal default).
pub(crate) trait Display {
    fn size(&self) -> Result<(u16, u16)>;
    fn set_cell(&mut self, x: u16, y: u16, bg: Option<Rgb>) -> Result<()>;
    /// Flush everything set since the last present.
    fn present(&mut self) -> Result<()>;
    /// Blank the whole surface, e.g. after a resize.
    fn sync(&mut self) -> Result<()>;
}

/// Hand the changed cells of `grid` to the display.
pub(crate) fn draw_dirty<D: Display + ?Sized>(
    display: &mut D,
    grid: &Grid,
    dirty: &[Coord],
) -> Result<()> {
    for &(x, y) in dirty {
        let bg = match grid.get(x, y) {
            Cell::Empty => None,
            Cell::Sand(hue) => Some(hue_to_rgb(hue)),
        };
        // grid dimensions come from the terminal, so they fit in u16
        display.set_cell(x as u16, y as u16, bg)?;
    }
    Ok(())
}

/// crossterm-backed display. Owns raw mode and the alternate screen for as
/// long as it lives; dropping it gives the terminal back.
pub(crate) struct Terminal {
    out: Stdout,
    bg: Option<Color>,
    in_frame: bool,
}

impl Terminal {
    pub(crate) fn begin() -> Result<Self> {
        let mut term = Self {
            out: io::stdout(),
            bg: None,
            in_frame: false,
        };
        terminal::enable_raw_mode()?;
        execute!(
            term.out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            EnableMouseCapture,
            Clear(ClearType::All)
        )?;
        Ok(term)
    }
}

impl Display for Terminal {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn set_cell(&mut self, x: u16, y: u16, bg: Option<Rgb>) -> Result<()> {
        if !self.in_frame {
            queue!(self.out, BeginSynchronizedUpdate)?;
            self.in_frame = true;
        }
        let color = match bg {
            Some(Rgb { r, g, b }) => Color::Rgb { r, g, b },
            None => Color::Reset,
        };
        queue!(self.out, cursor::MoveTo(x, y))?;
        if self.bg != Some(color) {
            queue!(self.out, SetBackgroundColor(color))?;
            self.bg = Some(color);
        }
        queue!(self.out, Print(' '))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.in_frame {
            queue!(self.out, EndSynchronizedUpdate)?;
            self.in_frame = false;
        }
        self.out.flush()?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        self.bg = None;
        self.present()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            DisableMouseCapture,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
