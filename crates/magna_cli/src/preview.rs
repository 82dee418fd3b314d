//! ASCII animation previews
//!
//! Drives the real scheduler and widgets at a fixed cadence and prints one
//! line (or one grid) per frame. Frames advance by the exact frame duration
//! rather than wall-clock deltas so captured output is reproducible.

use crate::Animation;
use anyhow::{ensure, Result};
use magna_animation::{AnimationScheduler, SchedulerHandle};
use magna_core::{Size, TracePhase};
use magna_widgets::{AccountCardBorder, AvatarRing, HeroHeadline, TitleMarquee};
use std::thread;
use std::time::Duration;

/// Preview card size, roughly the shipped card's aspect
const CARD_SIZE: Size = Size {
    width: 300.0,
    height: 100.0,
};

/// Character cells in the border preview grid
const GRID_COLS: usize = 40;
const GRID_ROWS: usize = 12;

/// The one widget a timed preview drives; only its drivers get registered
enum PreviewWidget {
    Hero(HeroHeadline),
    Border(AccountCardBorder),
    Marquee(TitleMarquee),
}

impl PreviewWidget {
    fn mount(animation: Animation, handle: SchedulerHandle) -> Self {
        match animation {
            Animation::Hero => Self::Hero(HeroHeadline::new(handle)),
            Animation::Border => Self::Border(AccountCardBorder::new(handle, CARD_SIZE)),
            Animation::Marquee => Self::Marquee(TitleMarquee::new(handle)),
            Animation::Orbit => unreachable!("orbit preview is static"),
        }
    }

    fn print(&self) {
        match self {
            Self::Hero(hero) => print_hero(hero),
            Self::Border(border) => print_border(border),
            Self::Marquee(marquee) => print_marquee(marquee),
        }
    }
}

pub fn run(animation: Animation, seconds: f32, fps: u32) -> Result<()> {
    ensure!(fps > 0, "fps must be positive");
    ensure!(seconds > 0.0, "duration must be positive");

    // Orbit layout is static; print it once and return
    if let Animation::Orbit = animation {
        return print_orbit();
    }

    let scheduler = AnimationScheduler::new();
    let widget = PreviewWidget::mount(animation, scheduler.handle());

    let frame_ms = 1000.0 / fps as f32;
    let total_frames = (seconds * fps as f32) as u32;
    tracing::info!(?animation, total_frames, "starting preview");

    for _ in 0..total_frames {
        scheduler.advance(frame_ms);
        widget.print();
        thread::sleep(Duration::from_millis(frame_ms as u64));
    }
    Ok(())
}

fn print_hero(hero: &HeroHeadline) {
    let frame = hero.frame();
    let cursor = if frame.cursor_visible { "|" } else { " " };
    println!("{}{}", frame.headline, cursor);
    println!("  {}", frame.terminal_line);
}

fn print_border(border: &AccountCardBorder) {
    let frame = border.frame();
    let size = border.size();
    let mut grid = vec![vec![' '; GRID_COLS]; GRID_ROWS];

    // Revealed cells per edge, proportional to the revealed lengths
    let top = (frame.borders.top / size.width * GRID_COLS as f32) as usize;
    let bottom = (frame.borders.bottom / size.width * GRID_COLS as f32) as usize;
    let right = (frame.borders.right / size.height * GRID_ROWS as f32) as usize;
    let left = (frame.borders.left / size.height * GRID_ROWS as f32) as usize;

    match frame.phase {
        TracePhase::Draw => {
            // Each edge grows from its walk-order start
            for c in 0..top.min(GRID_COLS) {
                grid[0][c] = '-';
            }
            for r in 0..right.min(GRID_ROWS) {
                grid[r][GRID_COLS - 1] = '|';
            }
            for c in 0..bottom.min(GRID_COLS) {
                grid[GRID_ROWS - 1][GRID_COLS - 1 - c] = '-';
            }
            for r in 0..left.min(GRID_ROWS) {
                grid[GRID_ROWS - 1 - r][0] = '|';
            }
        }
        TracePhase::Erase => {
            // Remaining outline shrinks toward each edge's walk-order end
            for c in (GRID_COLS - top.min(GRID_COLS))..GRID_COLS {
                grid[0][c] = '-';
            }
            for r in (GRID_ROWS - right.min(GRID_ROWS))..GRID_ROWS {
                grid[r][GRID_COLS - 1] = '|';
            }
            for c in (GRID_COLS - bottom.min(GRID_COLS))..GRID_COLS {
                grid[GRID_ROWS - 1][GRID_COLS - 1 - c] = '-';
            }
            for r in (GRID_ROWS - left.min(GRID_ROWS))..GRID_ROWS {
                grid[GRID_ROWS - 1 - r][0] = '|';
            }
        }
    }

    // Ball rides the frontier
    let bx = ((frame.ball.x / size.width) * (GRID_COLS - 1) as f32) as usize;
    let by = ((frame.ball.y / size.height) * (GRID_ROWS - 1) as f32) as usize;
    grid[by.min(GRID_ROWS - 1)][bx.min(GRID_COLS - 1)] = 'o';

    for row in &grid {
        println!("{}", row.iter().collect::<String>());
    }
    println!();
}

fn print_marquee(marquee: &TitleMarquee) {
    let frame = marquee.frame();
    let mut ball_line = String::new();
    let mut text_line = String::new();
    for (i, letter) in marquee.letters().iter().enumerate() {
        if i == frame.active_index {
            ball_line.push(if frame.bouncing { 'O' } else { 'o' });
            text_line.push(letter.to_ascii_uppercase());
        } else {
            ball_line.push(' ');
            text_line.push(*letter);
        }
    }
    println!("{ball_line}");
    println!("{text_line}");
}

fn print_orbit() -> Result<()> {
    let members = [
        "Ada Lovelace",
        "Grace Hopper",
        "Alan Turing",
        "Katherine Johnson",
        "Dennis Ritchie",
        "Barbara Liskov",
        "Ken Thompson",
        "Margaret Hamilton",
    ];
    let ring = AvatarRing::layout(&members);
    for slot in ring.slots() {
        println!(
            "ring {}  r={:>5.1}px  angle={:>6.1}°  counter={:>7.1}°  {}",
            slot.ring,
            slot.placement.radius,
            slot.placement.angle_deg,
            slot.placement.counter_rotation_deg,
            slot.initials,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_registers_only_the_selected_widget() {
        let scheduler = AnimationScheduler::new();

        let widget = PreviewWidget::mount(Animation::Marquee, scheduler.handle());
        assert_eq!(scheduler.cycler_count(), 1);
        assert_eq!(scheduler.typewriter_count(), 0);
        assert_eq!(scheduler.trace_count(), 0);
        drop(widget);

        let widget = PreviewWidget::mount(Animation::Hero, scheduler.handle());
        assert_eq!(scheduler.typewriter_count(), 1);
        assert_eq!(scheduler.cycler_count(), 1);
        assert_eq!(scheduler.trace_count(), 0);
        drop(widget);

        let widget = PreviewWidget::mount(Animation::Border, scheduler.handle());
        assert_eq!(scheduler.trace_count(), 1);
        assert_eq!(scheduler.typewriter_count(), 0);
        assert_eq!(scheduler.cycler_count(), 0);
        drop(widget);
    }
}
