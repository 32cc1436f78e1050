use std::{fs, path::Path};

use anyhow::Context;
use libgame::size::{GridSize, MAX_GRID_AREA, MIN_GRID_DIMENSION};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Viewport size the maximum grid is derived from, in the same unit as `cell_size`.
    pub viewport_width: usize,
    pub viewport_height: usize,

    /// Size of a single tile on each axis.
    pub cell_size: usize,

    /// Pause between two generations while running. Clamped into the supported range.
    pub loop_delay_ms: u64,

    /// Start stepping right away instead of waiting for `run`.
    pub autostart: bool,

    /// Fixed seed for board randomization. Random if absent.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1920,
            viewport_height: 1080,
            cell_size: 15,
            loop_delay_ms: 100,
            autostart: false,
            seed: None,
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config = serde_json::from_slice(&config_serialized)
            .context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let cells_x = self.viewport_width / self.cell_size;
        let cells_y = self.viewport_height / self.cell_size;
        if cells_x < MIN_GRID_DIMENSION || cells_y < MIN_GRID_DIMENSION {
            return Err(ConfigError::ViewportTooSmall {
                width: self.viewport_width,
                height: self.viewport_height,
                cell_size: self.cell_size,
            });
        }

        if self.max_size().checked_area().is_none() {
            return Err(ConfigError::ViewportTooLarge {
                width: self.viewport_width,
                height: self.viewport_height,
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }

    pub fn max_size(&self) -> GridSize {
        GridSize::max_for_viewport(self.viewport_width, self.viewport_height, self.cell_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size must be non-zero")]
    ZeroCellSize,

    #[error(
        "Viewport {width}x{height} fits fewer than {min} cells of size {cell_size} per axis",
        min = MIN_GRID_DIMENSION
    )]
    ViewportTooSmall {
        width: usize,
        height: usize,
        cell_size: usize,
    },

    #[error(
        "Viewport {width}x{height} with cell size {cell_size} exceeds {max} cells",
        max = MAX_GRID_AREA
    )]
    ViewportTooLarge {
        width: usize,
        height: usize,
        cell_size: usize,
    },
}
