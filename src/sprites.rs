//! Sprite art loading for the terminal renderer.
//!
//! Sprites are plain text files in the assets directory; missing or empty
//! files degrade to `None` and the renderer paints solid color blocks
//! instead. That fallback is required behavior, not a nicety: the game must
//! run from a bare checkout with no assets at all.

use std::path::Path;

/// A rectangular character sprite, rows of equal visual weight. Lookup is by
/// relative position so one sprite serves any terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
}

impl Sprite {
    /// Parse sprite text. Returns `None` for art with no drawable rows.
    pub fn parse(text: &str) -> Option<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().collect())
            .collect();
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    /// Sample the character at a relative position, both axes in `[0, 1)`.
    /// Positions outside the range clamp to the nearest edge cell.
    pub fn sample(&self, rel_x: f64, rel_y: f64) -> char {
        let row_idx = ((rel_y * self.rows.len() as f64) as usize).min(self.rows.len() - 1);
        let row = &self.rows[row_idx];
        if row.is_empty() {
            return ' ';
        }
        let col_idx = ((rel_x * row.len() as f64) as usize).min(row.len() - 1);
        row[col_idx]
    }
}

/// All sprite art the renderer can use, each piece independently optional.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub bird: Option<Sprite>,
    pub pipe: Option<Sprite>,
}

impl SpriteSet {
    /// Load sprites from the assets directory. Each missing file is logged
    /// and skipped; nothing here can fail the startup.
    pub fn load(assets_dir: &Path) -> Self {
        Self {
            bird: load_sprite(assets_dir, "bird.txt"),
            pipe: load_sprite(assets_dir, "pipe.txt"),
        }
    }
}

fn load_sprite(assets_dir: &Path, name: &str) -> Option<Sprite> {
    let path = assets_dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let sprite = Sprite::parse(&text);
            if sprite.is_none() {
                log::warn!("sprite {} is empty, using solid blocks", path.display());
            }
            sprite
        }
        Err(err) => {
            log::warn!(
                "could not load sprite {}: {}, using solid blocks",
                path.display(),
                err
            );
            None
        }
    }
}
