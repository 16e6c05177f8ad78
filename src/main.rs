//! Orb Studio RS - Main Application
//! Interactive orbiting light trails, particle bursts and pop-up targets

mod color;
mod config;
mod orbs;
mod particles;
mod rng;
mod sim;
mod targets;
mod trails;

use egui::{Color32, Vec2};

use config::AppConfig;
use sim::Simulation;
use trails::TrailSystem;

/// Main application state
struct OrbStudioApp {
    config: AppConfig,
    sim: Simulation,
    trails: TrailSystem,
    last_drag_pos: Option<Vec2>,
    seeded: bool,
}

impl OrbStudioApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let config = AppConfig::default();
        let sim = Simulation::new(1280.0, 720.0, &config);

        Self {
            config,
            sim,
            trails: TrailSystem::new(),
            last_drag_pos: None,
            seeded: false,
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("✨ Orb Studio RS");
                ui.separator();

                ui.checkbox(&mut self.config.visual.trails, "Trails")
                    .on_hover_text("Leave fading light trails behind orbs and particles");
                ui.checkbox(&mut self.config.targets.enabled, "Targets")
                    .on_hover_text("Show faces that burst when dragged over");

                ui.separator();

                if ui.button("🗑 Clear").clicked() {
                    self.sim.reset(&self.config);
                    self.trails.clear();
                }

                ui.separator();

                if ui.button("💾 Save Config").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .save_file()
                    {
                        if let Err(e) = self.config.save(&path.to_string_lossy()) {
                            eprintln!("Error saving config: {}", e);
                        }
                    }
                }

                if ui.button("📂 Load Config").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        match AppConfig::load(&path.to_string_lossy()) {
                            Ok(config) => self.config = config,
                            Err(e) => eprintln!("Error loading config: {}", e),
                        }
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "orbs: {}  particles: {}",
                        self.sim.orbs.len(),
                        self.sim.particles.len()
                    ));
                });
            });
        });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

            self.sim.resize(rect.width(), rect.height());
            if !self.seeded {
                // Reseed once at the real canvas size; the placeholder
                // dimensions from startup are gone after this.
                self.sim.reset(&self.config);
                self.seeded = true;
            }

            // Pointer drags run to completion here, between simulation ticks.
            if response.dragged() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let point = pointer - rect.min;
                    if self.last_drag_pos != Some(point) {
                        self.sim.on_drag_move(point, &self.config);
                        self.last_drag_pos = Some(point);
                    }
                }
            } else {
                self.last_drag_pos = None;
            }

            let painter = ui.painter_at(rect);

            // Background wash: the plain background, or the lighter wash
            // color while trails are accumulating.
            let bg = if self.config.visual.trails {
                self.config.visual.trail_wash
            } else {
                self.config.visual.background
            };
            painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

            self.trails
                .fade(self.config.visual.trails, self.config.visual.trail_fade);
            self.trails.render(&painter, rect.min);

            self.sim
                .render_targets(&painter, rect.min, &self.config.targets);

            self.sim.tick(&self.config);

            let keep_trails = self.config.visual.trails;
            self.sim
                .render_orbs(&painter, rect.min, &mut self.trails, keep_trails);
            self.sim
                .render_particles(&painter, rect.min, &mut self.trails, keep_trails);
        });
    }
}

impl eframe::App for OrbStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);
        self.render_canvas(ctx);

        // Re-register for the next frame; the loop never returns to idle.
        ctx.request_repaint();
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Orb Studio RS"),
        ..Default::default()
    };

    eframe::run_native(
        "Orb Studio RS",
        options,
        Box::new(|cc| Box::new(OrbStudioApp::new(cc))),
    )
}
