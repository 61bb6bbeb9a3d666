//! Crossterm event loop and board rendering.
//!
//! Thin presentation layer: translates terminal input into simulator
//! commands and redraws whenever the published state changes. All gating
//! (runs in progress, endpoint edits, out-of-bounds taps) happens in the
//! core, so the bindings here stay stateless.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Algorithm, CellState};
use pathviz_sim::{Simulator, StateWatcher, ViewState};

/// Board origin on screen.
const BOARD_X: i32 = 1;
const BOARD_Y: i32 = 3;

/// Run the visualizer until the user quits.
pub fn run() -> Result<(), Box<dyn Error>> {
    let sim = Simulator::new();
    let mut watcher = sim.subscribe();

    init()?;
    let result = event_loop(&sim, &mut watcher);
    close();
    result
}

fn init() -> Result<(), Box<dyn Error>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All),
        event::EnableMouseCapture
    )?;
    Ok(())
}

fn close() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, event::DisableMouseCapture);
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn event_loop(sim: &Simulator, watcher: &mut StateWatcher) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    draw(&mut stdout, &watcher.get(), sim.is_running())?;

    loop {
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('1') => sim.select_algorithm(Algorithm::Bfs),
                    KeyCode::Char('2') => sim.select_algorithm(Algorithm::Dijkstra),
                    KeyCode::Char('3') => sim.select_algorithm(Algorithm::Astar),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        // Detach; completion shows up through the watcher.
                        let _ = sim.run();
                    }
                    KeyCode::Char('r') => sim.reset(),
                    _ => {}
                },
                Event::Mouse(me) => handle_mouse(sim, me),
                _ => {}
            }
        }

        if let Some(state) = watcher.changed() {
            draw(&mut stdout, &state, sim.is_running())?;
        }
    }
}

/// Map a pointer event to a board command.
fn handle_mouse(sim: &Simulator, me: MouseEvent) {
    let row = me.row as i32 - BOARD_Y;
    let col = me.column as i32 - BOARD_X;
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            sim.drag_edit(row, col);
        }
        MouseEventKind::Up(MouseButton::Left) => sim.drag_end(),
        _ => {}
    }
}

fn draw(out: &mut impl Write, state: &ViewState, running: bool) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(1, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("pathviz — {}", state.selected.title())),
        SetAttribute(Attribute::Reset)
    )?;

    queue!(out, cursor::MoveTo(1, 1))?;
    for (i, algo) in Algorithm::ALL.into_iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, algo.name());
        if algo == state.selected {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(&label),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(&label))?;
        }
    }

    for (p, cell) in state.board.iter() {
        let (ch, color) = glyph(cell);
        queue!(
            out,
            cursor::MoveTo((BOARD_X + p.col) as u16, (BOARD_Y + p.row) as u16),
            SetForegroundColor(color),
            Print(ch)
        )?;
    }
    queue!(out, ResetColor)?;

    let status_y = (BOARD_Y + state.board.rows() + 1) as u16;
    queue!(
        out,
        cursor::MoveTo(1, status_y),
        Print(format!(
            "time {} ms   visited {}   path {}{}",
            state.stats.duration_ms,
            state.stats.visited_count,
            state.stats.path_length,
            if running { "   running..." } else { "" }
        )),
        cursor::MoveTo(1, status_y + 1),
        Print("click/drag: walls   space: run   r: reset   q: quit")
    )?;

    out.flush()
}

fn glyph(state: CellState) -> (char, Color) {
    match state {
        CellState::Empty => ('·', Color::DarkGrey),
        CellState::Wall => ('#', Color::White),
        CellState::Start => ('S', Color::Green),
        CellState::End => ('E', Color::Red),
        CellState::Visited => ('~', Color::Cyan),
        CellState::Path => ('o', Color::Yellow),
    }
}
