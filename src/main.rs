//! Headless drop loop (default binary).
//!
//! Drives the piece engine the way a game loop would: spawn, rotate and shift
//! with board-bound validators, drop until a move is rejected, lock, clear rows.
//! Nothing is drawn; progress goes to the log and optionally JSON on stdout.

mod config;
mod playfield;

use anyhow::{bail, Result};
use log::{debug, info};

use pytromino::core::{pytromino_factory, Holder, PieceSnapshot, Pytromino};
use pytromino::types::{Point, ShapeType};

use config::DemoConfig;
use playfield::Playfield;

#[derive(Debug, Default)]
struct Summary {
    locked: Vec<PieceSnapshot>,
    lines_cleared: usize,
    holds: usize,
    topped_out: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = DemoConfig::parse_args()?;

    let (summary, field) = run(&config)?;

    info!(
        "locked {} pieces, cleared {} lines, {} holds, {} cells filled{}",
        summary.locked.len(),
        summary.lines_cleared,
        summary.holds,
        field.filled_cells(),
        if summary.topped_out { ", topped out" } else { "" }
    );
    for row in field.rows_ascii() {
        debug!("{}", row);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary.locked)?);
    }
    Ok(())
}

fn leftmost_column(piece: &Pytromino) -> f64 {
    piece
        .blocks()
        .iter()
        .map(|b| b.x)
        .fold(f64::INFINITY, f64::min)
}

fn run(config: &DemoConfig) -> Result<(Summary, Playfield)> {
    let mut field = Playfield::new(config.width, config.height);
    let mut hold: Holder<ShapeType> = Holder::new();
    let mut summary = Summary::default();
    let mut drawn = 0usize;
    let mut draw = || {
        let shape = ShapeType::ALL[drawn % ShapeType::ALL.len()];
        drawn += 1;
        shape
    };
    let spawn = Point::new((config.width / 2 - 1) as f64, 1.0);

    for n in 0..config.pieces {
        let mut shape = draw();

        if config.hold_every > 0 && (n + 1) % config.hold_every == 0 && hold.is_open() {
            shape = match hold.replace(shape)? {
                Some(held) => held,
                None => draw(),
            };
            hold.close();
            summary.holds += 1;
            debug!("hold swap, now playing {:?}", shape);
        }

        let mut piece = pytromino_factory(shape);
        piece.place_at(spawn);
        if !piece.blocks().iter().all(|&b| field.is_free(b)) {
            summary.topped_out = true;
            break;
        }

        for _ in 0..n % 4 {
            piece.try_rotate_cw(|p| field.is_free(p));
        }

        let target = ((n * 3) % field.width()) as f64;
        while leftmost_column(&piece) < target {
            if !piece.try_apply(Pytromino::shift_right_by(1), false, |p| field.is_free(p)) {
                break;
            }
        }
        while leftmost_column(&piece) > target {
            if !piece.try_apply(Pytromino::shift_left_by(1), false, |p| field.is_free(p)) {
                break;
            }
        }

        while piece.try_apply(Pytromino::shift_down_by(1), false, |p| field.is_free(p)) {}

        if !field.lock(&piece) {
            bail!("{:?} came to rest on an occupied cell", piece.shape_type());
        }
        let cleared = field.clear_full_rows(&piece.occupied_rows());
        summary.lines_cleared += cleared;
        hold.open();

        debug!(
            "locked {:?} at {:?}, cleared {}",
            piece.shape_type(),
            PieceSnapshot::from(&piece).cells(),
            cleared
        );
        summary.locked.push(PieceSnapshot::from(&piece));
    }

    Ok((summary, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_hold_follows_shape_order() {
        let config = DemoConfig {
            pieces: 7,
            hold_every: 0,
            ..DemoConfig::default()
        };
        let (summary, field) = run(&config).unwrap();

        assert_eq!(summary.holds, 0);
        assert!(!summary.topped_out);
        let shapes: Vec<ShapeType> = summary.locked.iter().map(|s| s.shape).collect();
        assert_eq!(shapes, ShapeType::ALL.to_vec());
        assert!(summary.locked.iter().all(|s| s.placed));
        assert_eq!(field.filled_cells() + 10 * summary.lines_cleared, 7 * 4);
    }

    #[test]
    fn test_run_uses_hold_slot() {
        let config = DemoConfig {
            pieces: 10,
            hold_every: 2,
            ..DemoConfig::default()
        };
        let (summary, _) = run(&config).unwrap();
        assert!(summary.holds > 0);
        // The first hold parks the O and plays the next shape in its place.
        assert_eq!(summary.locked[1].shape, ShapeType::L);
        assert_eq!(summary.locked[3].shape, ShapeType::O);
    }

    #[test]
    fn test_small_field_tops_out() {
        let config = DemoConfig {
            pieces: 50,
            width: 4,
            height: 4,
            hold_every: 0,
            json: false,
        };
        let (summary, _) = run(&config).unwrap();
        assert!(summary.topped_out);
        assert!(summary.locked.len() < 50);
    }
}
