use crate::types::*;
use serde::{Deserialize, Serialize};

/// Anchor points for each block, `(x, y)` in millimetres from the top-left
/// corner of the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub postal_code: (f32, f32),
    pub address: (f32, f32),
    pub name: (f32, f32),
    pub sender_postal_code: (f32, f32),
    pub sender_address: (f32, f32),
    pub sender_name: (f32, f32),
}

/// Font size per block in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub postal_code: f32,
    pub address: f32,
    pub name: f32,
    pub sender_postal_code: f32,
    pub sender_address: f32,
    pub sender_name: f32,
}

/// Column pitch per vertical block in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub address: f32,
    pub name: f32,
    pub sender_address: f32,
    pub sender_name: f32,
}

/// Postcard layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub positions: Positions,
    pub font_sizes: FontSizes,
    pub line_heights: LineHeights,

    /// Characters per address line before wrapping
    pub address_max_chars: usize,

    /// Horizontal advance between postal code digits in millimetres
    pub postal_code_advance: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        // Standard Japanese postcard: recipient postal boxes at the top right,
        // sender boxes at the bottom left.
        Self {
            positions: Positions {
                postal_code: (45.0, 9.5),
                address: (90.0, 24.0),
                name: (57.0, 30.0),
                sender_postal_code: (5.5, 128.5),
                sender_address: (30.0, 72.0),
                sender_name: (17.0, 78.0),
            },
            font_sizes: FontSizes {
                postal_code: 6.0,
                address: 5.5,
                name: 10.0,
                sender_postal_code: 4.0,
                sender_address: 4.0,
                sender_name: 6.0,
            },
            line_heights: LineHeights {
                address: 7.0,
                name: 12.0,
                sender_address: 5.0,
                sender_name: 7.0,
            },
            address_max_chars: 15,
            postal_code_advance: 7.0,
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NengaError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NengaError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
