// main.rs - Yin/Yang Game of Life desktop shell

use clap::Parser;
use eframe::egui;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use yinyang_engine::{GRID_HEIGHT, GRID_WIDTH, Grid, rules};

mod ui;

/// Pixel size of one grid cell.
pub const CELL_SIZE: f32 = 20.0;

#[derive(Parser, Debug)]
#[command(name = "yinyang", about = "Three-state Game of Life where yin and yang must coexist")]
struct Args {
    /// Seed for the grid randomizer; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let app = YinYangApp::new(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Yin/Yang Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

struct YinYangApp {
    grid: Grid,
    rng: ChaCha8Rng,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    generation: u32,
}

impl YinYangApp {
    fn new(args: &Args) -> Self {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, interval_ms = args.interval_ms, "starting yin/yang life");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::random(GRID_WIDTH, GRID_HEIGHT, &mut rng);

        Self {
            grid,
            rng,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(args.interval_ms),
            generation: 0,
        }
    }

    /// One timer tick: replace the grid with its successor.
    fn advance_generation(&mut self) {
        self.grid = rules::step(&self.grid, &mut self.rng);
        self.generation += 1;
        debug!(generation = self.generation, "advanced one generation");
    }

    fn randomize(&mut self) {
        self.grid = Grid::random(GRID_WIDTH, GRID_HEIGHT, &mut self.rng);
        self.generation = 0;
    }

    fn cycle_cell(&mut self, x: usize, y: usize) {
        match self.grid.cycle(x, y) {
            Ok(state) => debug!(x, y, ?state, "cell edited"),
            Err(err) => warn!(%err, "ignoring click outside the grid"),
        }
    }

    /// Map a pointer position to cell coordinates relative to the painted
    /// grid's origin. Positions outside the grid rect map to nothing.
    fn cell_at(origin: egui::Pos2, pos: egui::Pos2) -> Option<(usize, usize)> {
        let dx = pos.x - origin.x;
        let dy = pos.y - origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let x = (dx / CELL_SIZE) as usize;
        let y = (dy / CELL_SIZE) as usize;
        (x < GRID_WIDTH && y < GRID_HEIGHT).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_clicked_cell() {
        let origin = egui::pos2(10.0, 50.0);
        assert_eq!(YinYangApp::cell_at(origin, egui::pos2(10.0, 50.0)), Some((0, 0)));
        assert_eq!(YinYangApp::cell_at(origin, egui::pos2(49.9, 90.0)), Some((1, 2)));
    }

    #[test]
    fn pointer_outside_the_grid_maps_to_nothing() {
        let origin = egui::pos2(10.0, 50.0);
        assert_eq!(YinYangApp::cell_at(origin, egui::pos2(9.0, 50.0)), None);
        assert_eq!(YinYangApp::cell_at(origin, egui::pos2(10.0, 49.0)), None);

        let right_edge = origin.x + CELL_SIZE * GRID_WIDTH as f32;
        assert_eq!(YinYangApp::cell_at(origin, egui::pos2(right_edge, 50.0)), None);
    }
}
