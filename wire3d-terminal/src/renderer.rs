/// ASCII line canvas for terminal rendering
use crossterm::{
    cursor::MoveTo,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Color, Surface, Vec2i};

use crate::error::{Error, Result};

/// One character cell of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::BLACK,
    };
}

/// Character grid that line segments are rasterized into
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a cell; coordinates off the canvas are dropped.
    pub fn plot(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { glyph, color };
    }

    /// Rasterize the segment with Bresenham, endpoints included.
    ///
    /// The segment is clipped to the canvas first, so wild coordinates from
    /// degenerate projections cost nothing.
    pub fn draw_line(&mut self, from: Vec2i, to: Vec2i, color: Color) {
        let glyph = slope_glyph(from, to);
        let Some((from, to)) = clip_segment(from, to, self.width, self.height) else {
            return;
        };

        let (mut x1, mut y1, mut x2, mut y2) = (from.x, from.y, to.x, to.y);
        let steep = (x1 - x2).abs() < (y1 - y2).abs();
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let derror = (y2 - y1).abs() * 2;
        let mut error = 0;
        let mut y = y1;
        for x in x1..=x2 {
            if steep {
                self.plot(y, x, glyph, color);
            } else {
                self.plot(x, y, glyph, color);
            }
            error += derror;
            if error > dx {
                y += if y2 > y1 { 1 } else { -1 };
                error -= dx * 2;
            }
        }
    }

    /// Write the grid to `writer`, one row per terminal line.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            writer.queue(MoveTo(0, y as u16))?;
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(term_color(cell.color)))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Pick the character that best follows the segment direction.
fn slope_glyph(from: Vec2i, to: Vec2i) -> char {
    let dx = (to.x as i64) - (from.x as i64);
    let dy = (to.y as i64) - (from.y as i64);
    if dx == 0 && dy == 0 {
        '+'
    } else if dy.abs() * 2 < dx.abs() {
        '-'
    } else if dx.abs() * 2 < dy.abs() {
        '|'
    } else if (dx > 0) == (dy > 0) {
        // raster y grows downwards
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[0, width) x [0, height)`.
fn clip_segment(from: Vec2i, to: Vec2i, width: usize, height: usize) -> Option<(Vec2i, Vec2i)> {
    if width == 0 || height == 0 {
        return None;
    }
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let (max_x, max_y) = ((width - 1) as f64, (height - 1) as f64);

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| Vec2i::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

/// [`Surface`] that draws into an [`AsciiCanvas`] and presents it to a terminal
pub struct TerminalSurface<W: Write> {
    canvas: AsciiCanvas,
    writer: W,
    status: Option<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(width: usize, height: usize, writer: W) -> Self {
        Self {
            canvas: AsciiCanvas::new(width, height),
            writer,
            status: None,
        }
    }

    pub fn canvas(&self) -> &AsciiCanvas {
        &self.canvas
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        log::debug!("canvas resized to {}x{}", width, height);
        self.canvas.resize(width, height);
    }

    /// Text overlaid on the first row when the frame is presented.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = Error;

    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width() as u32, self.canvas.height() as u32)
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.canvas.clear();
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2i, to: Vec2i, color: Color) {
        self.canvas.draw_line(from, to, color);
    }

    fn end_frame(&mut self) -> Result<()> {
        self.canvas.present(&mut self.writer)?;
        if let Some(status) = &self.status {
            self.writer.queue(MoveTo(0, 0))?;
            self.writer.queue(SetForegroundColor(TermColor::Yellow))?;
            self.writer.queue(Print(status))?;
            self.writer.queue(ResetColor)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
