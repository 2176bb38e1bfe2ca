/// Rendering layer — all terminal I/O lives here.
///
/// Canvases are copied cell by cell onto the physical terminal.  No game
/// logic is performed; this module only translates cells into terminal
/// commands and forwards key presses.

use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    style::{Attribute, Print, SetAttribute},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::canvas::{Attr, Canvas};

/// What the scheduler needs from a screen.
pub trait Display {
    /// Key events that arrived since the last call.  Never blocks.
    fn pending_keys(&mut self) -> Vec<KeyEvent>;

    /// Copy every region to the screen and flush.
    fn commit(&mut self, regions: &[&Canvas]) -> io::Result<()>;

    fn beep(&mut self) -> io::Result<()>;
}

fn attribute_of(attr: Attr) -> Option<Attribute> {
    match attr {
        Attr::Normal => None,
        Attr::Dim => Some(Attribute::Dim),
        Attr::Bold => Some(Attribute::Bold),
    }
}

// ── crossterm terminal ────────────────────────────────────────────────────────

pub struct Terminal<W: Write> {
    out: W,
    rx: mpsc::Receiver<Event>,
    rows: u16,
    columns: u16,
}

impl Terminal<BufWriter<Stdout>> {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn open() -> io::Result<Self> {
        let mut out = BufWriter::new(stdout());

        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(terminal::Clear(terminal::ClearType::All))?;

        let (columns, rows) = terminal::size()?;

        // Dedicate a thread to blocking event reads so polling never waits.
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
        });

        Ok(Self { out, rx, rows, columns })
    }
}

impl<W: Write> Terminal<W> {
    /// Terminal extent as (rows, columns).
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn queue_canvas(&mut self, canvas: &Canvas) -> io::Result<()> {
        let (origin_row, origin_column) = canvas.origin();
        let mut current = Attr::Normal;
        self.out.queue(SetAttribute(Attribute::Reset))?;

        for row in 0..canvas.rows() {
            let screen_row = origin_row as usize + row;
            if screen_row >= self.rows as usize {
                break;
            }
            self.out.queue(cursor::MoveTo(origin_column, screen_row as u16))?;

            for (column, cell) in canvas.row(row).iter().enumerate() {
                let screen_column = origin_column as usize + column;
                if screen_column >= self.columns as usize {
                    break;
                }
                // Printing the last cell scrolls some terminals.
                if screen_row + 1 == self.rows as usize && screen_column + 1 == self.columns as usize {
                    break;
                }
                if cell.attr != current {
                    self.out.queue(SetAttribute(Attribute::Reset))?;
                    if let Some(attribute) = attribute_of(cell.attr) {
                        self.out.queue(SetAttribute(attribute))?;
                    }
                    current = cell.attr;
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl<W: Write> Display for Terminal<W> {
    fn pending_keys(&mut self) -> Vec<KeyEvent> {
        self.rx
            .try_iter()
            .filter_map(|ev| match ev {
                Event::Key(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    fn commit(&mut self, regions: &[&Canvas]) -> io::Result<()> {
        for canvas in regions {
            self.queue_canvas(canvas)?;
        }
        self.out.flush()
    }

    fn beep(&mut self) -> io::Result<()> {
        self.out.queue(Print('\x07'))?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    // Always restore the terminal
    fn drop(&mut self) {
        let _ = self.out.execute(SetAttribute(Attribute::Reset));
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
