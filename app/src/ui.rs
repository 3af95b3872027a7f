// ui.rs - egui frame for the yin/yang grid

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};
use std::time::Instant;

use yinyang_engine::Cell;

use crate::{CELL_SIZE, YinYangApp};

fn cell_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Dead => Color32::LIGHT_GRAY,
        Cell::Yin => Color32::BLACK,
        Cell::Yang => Color32::WHITE,
    }
}

impl eframe::App for YinYangApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance once per interval while the timer runs
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Yin/Yang Game of Life");

            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.is_running = true;
                    self.last_update = Instant::now();
                }

                if ui.button("⏹ Stop").clicked() {
                    self.is_running = false;
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.label("Click a cell to cycle it dead → yin → yang.");

            ui.separator();

            // Draw the grid
            let total_size = Vec2::new(
                CELL_SIZE * self.grid.width() as f32,
                CELL_SIZE * self.grid.height() as f32,
            );
            let (response, painter) = ui.allocate_painter(total_size, Sense::click());
            let origin = response.rect.min;

            for (x, y, cell) in self.grid.iter() {
                let rect = Rect::from_min_size(
                    egui::pos2(
                        origin.x + x as f32 * CELL_SIZE,
                        origin.y + y as f32 * CELL_SIZE,
                    ),
                    Vec2::splat(CELL_SIZE),
                );

                painter.rect_filled(rect, 0.0, cell_color(cell));
                painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
            }

            // Handle clicking: divide pixels by the cell size, reject the rest
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((x, y)) = YinYangApp::cell_at(origin, pos) {
                        self.cycle_cell(x, y);
                    }
                }
            }

            ui.separator();

            // Population readout
            let yin = self.grid.iter().filter(|&(_, _, c)| c == Cell::Yin).count();
            let yang = self.grid.iter().filter(|&(_, _, c)| c == Cell::Yang).count();
            let total = self.grid.width() * self.grid.height();

            ui.horizontal(|ui| {
                ui.label(format!("Yin: {yin}"));
                ui.label(format!("Yang: {yang}"));
                ui.label(format!("Dead: {}", total - yin - yang));
            });
        });

        // Keep repainting while the timer runs
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
