//! Configuration System for Orb Studio RS
//! All tunable constants for orbs, particles, targets and rendering

use serde::{Deserialize, Serialize};

// ============================================================================
// Orbs
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrbConfig {
    pub seed_count: usize,
    /// Vertical spacing between seeded orbs, in pixels
    pub seed_spacing: f32,
    /// Minimum angular increment per tick
    pub speed_floor: f32,
    /// Radius at which the random speed factor reaches its full value
    pub speed_falloff: f32,
    /// Chance per orb per tick to emit a small particle burst
    pub burst_chance: f32,
    pub burst_count: usize,
    /// Burst particles are jittered by this many pixels on each axis
    pub burst_jitter: i32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            seed_count: 100,
            seed_spacing: 2.0,
            speed_floor: 0.015,
            speed_falloff: 750.0,
            burst_chance: 0.1,
            burst_count: 3,
            burst_jitter: 5,
        }
    }
}

// ============================================================================
// Particles
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Lifetime in ticks
    pub life: i32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Particles spawned per drag-move event
    pub drag_spawn_count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            life: 50,
            gravity: 0.1,
            min_size: 0.1,
            max_size: 0.3,
            drag_spawn_count: 5,
        }
    }
}

// ============================================================================
// Targets
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TargetConfig {
    /// When off, targets are neither drawn nor collided with
    pub enabled: bool,
    pub count: usize,
    pub radius: f32,
    /// Particles emitted when a target is hit
    pub burst_count: usize,
    pub burst_color: [u8; 3],
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 10,
            radius: 20.0,
            burst_count: 15,
            burst_color: [255, 165, 0],
        }
    }
}

// ============================================================================
// Visual
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisualConfig {
    /// Leave fading trails instead of wiping the frame
    pub trails: bool,
    pub background: [u8; 3],
    /// Background used while trails are on
    pub trail_wash: [u8; 3],
    /// Per-frame brightness multiplier for retained trail marks
    pub trail_fade: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            trails: true,
            background: [0, 0, 0],
            trail_wash: [34, 34, 34],
            trail_fade: 0.92,
        }
    }
}

// ============================================================================
// App Config
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub orbs: OrbConfig,
    pub particles: ParticleConfig,
    pub targets: TargetConfig,
    pub visual: VisualConfig,
}

impl AppConfig {
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}
