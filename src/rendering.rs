use std::io::{self, Write};
use std::time::Duration;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};

use crate::boundary::Domain;
use crate::error::SimError;
use crate::simulation::{SimState, Simulation};
use crate::types::Vector2D;

const MARKER_CHAR: char = '+';

// --- PlotGrid: the domain scaled down to terminal cells ---
pub struct PlotGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    domain: Domain,
}

impl PlotGrid {
    pub fn new(width: u16, height: u16, domain: Domain) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        PlotGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            domain,
        }
    }

    /// Maps a domain coordinate to a (column, row) cell. Rows grow downward,
    /// so `top` lands on row 0.
    pub fn cell(&self, point: Vector2D) -> (u16, u16) {
        let cols = self.width as i64 - 1;
        let rows = self.height as i64 - 1;
        let col = ((point.x - self.domain.left) * cols / self.domain.width()).clamp(0, cols);
        let row = rows - ((point.y - self.domain.bottom) * rows / self.domain.height()).clamp(0, rows);
        (col as u16, row as u16)
    }

    pub fn plot(&mut self, point: Vector2D, c: char) {
        let (x, y) = self.cell(point);
        self.set_char(x, y, c);
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn clear(&mut self) {
        self.grid = vec![vec![' '; self.width as usize]; self.height as usize];
    }

    pub fn render(&self, stdout: &mut impl Write) -> io::Result<()> {
        for y in 0..self.height {
            execute!(stdout, MoveTo(0, y))?;
            write!(stdout, "{}", self.grid[y as usize].iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// Single digit for small labels, `*` for anything else.
pub fn label_char(label: i64) -> char {
    match label {
        1..=9 => char::from(b'0' + label as u8),
        _ => '*',
    }
}

/// Draws the run frame by frame in the alternate screen until it halts or
/// `q` is pressed.
pub fn preview(sim: &mut Simulation, marker: Vector2D, delay: Duration) -> Result<(), SimError> {
    let (term_width, term_height) = terminal::size().map_err(|e| { error!("Failed to read terminal size: {}", e); e })?;
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    // The bottom row is kept for the status line.
    let mut grid = PlotGrid::new(term_width, term_height.saturating_sub(1), *sim.domain());
    let result = draw_frames(sim, &mut grid, marker, delay, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode: {}", e); e })?;
    info!("Preview ended at tick {}", sim.tick());
    result
}

fn draw_frames(
    sim: &mut Simulation,
    grid: &mut PlotGrid,
    marker: Vector2D,
    delay: Duration,
    stdout: &mut impl Write,
) -> Result<(), SimError> {
    loop {
        grid.clear();
        grid.plot(marker, MARKER_CHAR);
        for body in sim.bodies() {
            grid.plot(body.position, label_char(body.label));
        }
        grid.render(stdout)?;
        execute!(stdout, MoveTo(0, grid.height))?;
        write!(stdout, "tick {}/{}  (q to quit)", sim.tick(), sim.tick_bound())?;
        stdout.flush()?;

        if sim.state() == SimState::Halted {
            break;
        }
        if event::poll(delay)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
        sim.step()?;
    }

    // Hold the final frame until a key arrives.
    event::read()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_grid_corners() {
        let grid = PlotGrid::new(80, 24, Domain::centered(400, 300));
        assert_eq!(grid.cell(Vector2D::new(-200, 150)), (0, 0));
        assert_eq!(grid.cell(Vector2D::new(200, -150)), (79, 23));
        assert_eq!(grid.cell(Vector2D::new(0, 0)), (39, 12));
    }

    #[test]
    fn test_out_of_domain_is_clamped() {
        let grid = PlotGrid::new(10, 10, Domain::new(360, 360));
        assert_eq!(grid.cell(Vector2D::new(-50, 999)), (0, 0));
    }

    #[test]
    fn test_plot_and_clear() {
        let mut grid = PlotGrid::new(10, 5, Domain::new(100, 100));
        grid.plot(Vector2D::new(0, 0), label_char(3));
        assert_eq!(grid.grid[4][0], '3');
        grid.clear();
        assert!(grid.grid.iter().flatten().all(|&c| c == ' '));
    }

    #[test]
    fn test_render_writes_rows() {
        let mut grid = PlotGrid::new(4, 2, Domain::new(4, 2));
        grid.set_char(1, 0, 'x');
        let mut out = Vec::new();
        grid.render(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains(" x  "));
    }

    #[test]
    fn test_label_chars() {
        assert_eq!(label_char(1), '1');
        assert_eq!(label_char(9), '9');
        assert_eq!(label_char(-1), '*');
        assert_eq!(label_char(12), '*');
    }
}
