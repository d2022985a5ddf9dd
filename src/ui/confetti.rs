use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::Frame;

use crate::state::ConfettiBurst;

const GRAVITY: f32 = 30.0;
const GLYPHS: [char; 5] = ['*', '•', '▪', '◆', '+'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Rgb(111, 66, 193),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
    pub color: Color,
}

/// Particle positions `elapsed` after the burst, in cells relative to the
/// top-left of the drawing area. The same burst always yields the same spray.
pub fn particles(burst: &ConfettiBurst, elapsed: Duration) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(burst.seed);
    let t = elapsed.as_secs_f32();
    let (ox, oy) = (burst.origin.0 as f32, burst.origin.1 as f32);

    (0..burst.count)
        .map(|_| {
            let vx: f32 = rng.gen_range(15.0..90.0);
            let vy: f32 = rng.gen_range(-25.0..5.0);
            let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
            let color = COLORS[rng.gen_range(0..COLORS.len())];
            Particle {
                x: ox + vx * t,
                y: oy + vy * t + 0.5 * GRAVITY * t * t,
                glyph,
                color,
            }
        })
        .collect()
}

pub fn draw_confetti(f: &mut Frame, area: Rect, burst: &ConfettiBurst, now: Duration) {
    let elapsed = now.saturating_sub(burst.fired_at);
    let buf = f.buffer_mut();

    for p in particles(burst, elapsed) {
        if p.x < 0.0 || p.y < 0.0 || p.x >= area.width as f32 || p.y >= area.height as f32 {
            continue;
        }
        let pos = Position::new(area.x + p.x as u16, area.y + p.y as u16);
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(p.glyph).set_fg(p.color);
        }
    }
}
