//! Simulation State for Orb Studio RS
//! Owns the orb, particle and target collections and their per-tick rules

use egui::{Color32, Painter, Pos2, Vec2};
use rand::rngs::ThreadRng;
use rand::Rng;
use rayon::prelude::*;

use crate::color::hue_color;
use crate::config::{AppConfig, OrbConfig, TargetConfig};
use crate::orbs::Orb;
use crate::particles::Particle;
use crate::rng::sample;
use crate::targets::Target;
use crate::trails::TrailSystem;

/// Exclusive owner of all live entities. The frame loop and the pointer
/// handler go through these operations; nothing mutates entities directly.
pub struct Simulation {
    pub orbs: Vec<Orb>,
    pub particles: Vec<Particle>,
    pub targets: Vec<Target>,
    pub width: f32,
    pub height: f32,
}

impl Simulation {
    pub fn new(width: f32, height: f32, config: &AppConfig) -> Self {
        let mut sim = Self {
            orbs: Vec::new(),
            particles: Vec::new(),
            targets: Vec::new(),
            width,
            height,
        };
        sim.seed_orbs(&config.orbs);
        sim.seed_targets(&config.targets);
        sim
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Track the canvas size. Existing orbs keep their original centers;
    /// only newly spawned entities see the new midpoint.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Stack the initial orbs along the vertical line through the center.
    pub fn seed_orbs(&mut self, config: &OrbConfig) {
        let mut rng = rand::thread_rng();
        let center = self.center();
        self.orbs = (0..config.seed_count)
            .map(|i| {
                let at = center + Vec2::new(0.0, i as f32 * config.seed_spacing);
                Orb::spawn(at, center, config, &mut rng)
            })
            .collect();
    }

    pub fn seed_targets(&mut self, config: &TargetConfig) {
        let mut rng = rand::thread_rng();
        self.targets = (0..config.count)
            .map(|_| Target::random(self.width, self.height, config, &mut rng))
            .collect();
    }

    /// Pointer drag: a splash of particles, a fresh orb, then the collision
    /// pass when targets are on. Runs between frames, never during a tick.
    pub fn on_drag_move(&mut self, point: Vec2, config: &AppConfig) {
        let mut rng = rand::thread_rng();

        for _ in 0..config.particles.drag_spawn_count {
            self.particles
                .push(Particle::spawn(point, None, &config.particles, &mut rng));
        }
        self.orbs
            .push(Orb::spawn(point, self.center(), &config.orbs, &mut rng));

        if config.targets.enabled {
            self.collide_targets(point, config, &mut rng);
        }
    }

    /// Every target containing the point bursts and is replaced in its slot,
    /// so the live count never changes and iteration stays index-stable.
    fn collide_targets(&mut self, point: Vec2, config: &AppConfig, rng: &mut ThreadRng) {
        let [r, g, b] = config.targets.burst_color;
        let accent = Color32::from_rgb(r, g, b);

        for target in &mut self.targets {
            if target.contains(point, config.targets.radius) {
                for _ in 0..config.targets.burst_count {
                    self.particles.push(Particle::spawn(
                        target.pos,
                        Some(accent),
                        &config.particles,
                        rng,
                    ));
                }
                *target = Target::random(self.width, self.height, &config.targets, rng);
            }
        }
    }

    /// One simulation step: advance orbs, roll their particle bursts,
    /// integrate particles, prune the expired ones.
    pub fn tick(&mut self, config: &AppConfig) {
        let mut rng = rand::thread_rng();

        for orb in &mut self.orbs {
            orb.update();
        }

        let mut burst: Vec<Particle> = Vec::new();
        for orb in &self.orbs {
            if rng.gen::<f32>() < config.orbs.burst_chance {
                let color = hue_color(orb.hue_angle);
                let jitter = config.orbs.burst_jitter;
                for _ in 0..config.orbs.burst_count {
                    let offset = Vec2::new(
                        sample(&mut rng, -jitter, jitter) as f32,
                        sample(&mut rng, -jitter, jitter) as f32,
                    );
                    burst.push(Particle::spawn(
                        orb.pos + offset,
                        Some(color),
                        &config.particles,
                        &mut rng,
                    ));
                }
            }
        }
        self.particles.extend(burst);

        let gravity = config.particles.gravity;
        self.particles.par_iter_mut().for_each(|p| p.update(gravity));
        self.particles.retain(|p| !p.expired());
    }

    /// Discard everything and start from the seeded arrangement.
    pub fn reset(&mut self, config: &AppConfig) {
        self.orbs.clear();
        self.particles.clear();
        self.seed_orbs(&config.orbs);
        self.seed_targets(&config.targets);
    }

    // ========================================================================
    // Render passes
    // ========================================================================

    pub fn render_targets(&self, painter: &Painter, origin: Pos2, config: &TargetConfig) {
        if !config.enabled {
            return;
        }
        for target in &self.targets {
            target.draw(painter, origin, config.radius);
        }
    }

    /// Draw each orb's segment; with trails on, hand a copy of the stroke to
    /// the trail history so it can fade over the following frames.
    pub fn render_orbs(
        &self,
        painter: &Painter,
        origin: Pos2,
        trails: &mut TrailSystem,
        keep_trails: bool,
    ) {
        for orb in &self.orbs {
            orb.draw(painter, origin);
            if keep_trails {
                trails.push_segment(
                    orb.last_pos,
                    orb.pos,
                    orb.stroke_width,
                    hue_color(orb.hue_angle),
                );
            }
        }
    }

    pub fn render_particles(
        &self,
        painter: &Painter,
        origin: Pos2,
        trails: &mut TrailSystem,
        keep_trails: bool,
    ) {
        for particle in &self.particles {
            particle.draw(painter, origin);
            if keep_trails {
                trails.push_dot(particle.pos, particle.size, particle.color);
            }
        }
    }
}
