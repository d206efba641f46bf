//! Full-screen terminal view of a running simulation.

use std::io::{self, Stdout, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use termlife::render::{COUNTER_LABEL, Frame};
use termlife::{Scheduler, Snapshot};

/// How long to wait for a key before checking for new generations.
const INPUT_POLL: Duration = Duration::from_millis(20);

/// Raw mode + alternate screen for the lifetime of the guard.
struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::MoveTo(0, 0))?;
        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Draw every new generation until the user quits, or until the run ends
/// when `exit_on_stable` is set. Returns the last state shown.
pub fn run(
    mut scheduler: Scheduler,
    ticks: Receiver<Snapshot>,
    exit_on_stable: bool,
) -> io::Result<Snapshot> {
    let mut guard = TermGuard::new()?;
    let mut snapshot = scheduler.snapshot();
    let mut dirty = true;

    loop {
        if dirty {
            draw(&mut guard.out, &snapshot)?;
            dirty = false;
        }

        if exit_on_stable && snapshot.state.is_terminal() {
            break;
        }

        if event::poll(INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match (key.code, key.modifiers) {
                (KeyCode::Char('q') | KeyCode::Esc, _)
                | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                    scheduler.stop();
                    snapshot = scheduler.snapshot();
                    break;
                }
                _ => {}
            }
        }

        // Only the latest generation matters if several arrived since the last draw.
        while let Ok(next) = ticks.try_recv() {
            snapshot = next;
            dirty = true;
        }
    }

    Ok(snapshot)
}

fn draw(out: &mut Stdout, snapshot: &Snapshot) -> io::Result<()> {
    let frame = Frame::from_snapshot(snapshot);

    queue!(
        out,
        BeginSynchronizedUpdate,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Green),
        Print(COUNTER_LABEL),
        ResetColor,
        Print(&frame.header)
    )?;

    let mut line: u16 = 1;
    for row in &frame.rows {
        queue!(out, cursor::MoveTo(0, line), Print(row))?;
        line = line.saturating_add(1);
    }

    queue!(
        out,
        cursor::MoveTo(0, line),
        Print(&frame.status),
        cursor::MoveTo(0, line.saturating_add(1)),
        SetForegroundColor(Color::DarkGrey),
        Print("Press [q] to quit."),
        ResetColor,
        EndSynchronizedUpdate
    )?;
    out.flush()
}
