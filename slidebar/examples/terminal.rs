//! Interactive scrollbar in the terminal.
//!
//! Drag the slider, click the track, use the wheel or PageUp/PageDown
//! (shift for smaller steps). Escape quits. Logs go to `terminal.log`.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::Print,
    terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use slidebar::prelude::*;
use slidebar::PointerTracker;

const TOP: i32 = 2;
const LEFT: i32 = 4;

fn main() -> io::Result<()> {
    let log_file = File::create("terminal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture,
        event::EnableFocusChange
    )?;

    let result = run(&mut stdout);

    execute!(
        stdout,
        event::DisableFocusChange,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let (_, rows) = terminal::size()?;
    let length = (i32::from(rows) - TOP - 2).max(4);

    let changes = Rc::new(Cell::new(0u32));
    let counter = changes.clone();
    let mut scrollbar = Scrollbar::builder(length, 0, 1000)
        .id("demo")
        .orientation(Orientation::Vertical)
        .thickness(2)
        .on_change(move |_| counter.set(counter.get() + 1))
        .build()
        .map_err(io::Error::other)?;
    scrollbar.set_position(LEFT, TOP);

    let controls = Controller::default();
    let mut tracker = PointerTracker::new();

    loop {
        draw(stdout, &scrollbar, changes.get())?;

        let mut raw = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            raw.push(event::read()?);
        }
        if raw
            .iter()
            .any(|event| matches!(event, CrosstermEvent::Resize(..)))
        {
            let (_, rows) = terminal::size()?;
            let length = (i32::from(rows) - TOP - 2).max(4);
            if let Err(e) = scrollbar.set_length(length) {
                log::warn!("Cannot resize scrollbar: {}", e);
            }
        }

        let events = tracker.convert_all(&raw);
        if events
            .iter()
            .any(|event| controls.escape(event, &scrollbar))
        {
            return Ok(());
        }
        scrollbar.update(&events);
    }
}

fn draw(stdout: &mut Stdout, scrollbar: &Scrollbar, changes: u32) -> io::Result<()> {
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    let track = scrollbar.rect();
    let slider = scrollbar.slider_rect();
    for y in track.top()..track.bottom() {
        for x in track.left()..track.right() {
            let glyph = if slider.contains(x, y) { '█' } else { '░' };
            queue!(stdout, cursor::MoveTo(x as u16, y as u16), Print(glyph))?;
        }
    }

    let status = format!(
        "value {:>4} ({:>5.1}%)  page {}  changes {}{}",
        scrollbar.value(),
        scrollbar.value_percent() * 100.0,
        scrollbar.page_step(),
        changes,
        if scrollbar.is_dragging() { "  [dragging]" } else { "" },
    );
    queue!(stdout, cursor::MoveTo(LEFT as u16, 0), Print(status))?;
    stdout.flush()
}
