//! Level layout parsing and assembly.
//!
//! A level is a text grid, one character per tile:
//!
//! | Symbol | Meaning                                   |
//! |--------|-------------------------------------------|
//! | `0`    | empty                                     |
//! | `1-5`  | solid block drawn with `<digit>.png`      |
//! | `6`    | walker spawn point                        |
//! | `7`    | star, touching it wins (`7.png`)          |
//!
//! [`LevelLayout::parse`] validates the grid and [`LevelLayout::assemble`]
//! turns it into [`LevelGeometry`] scaled to the render target. Tiles cover
//! the target seamlessly: column `c` spans `[c*w/cols, (c+1)*w/cols)`.

use std::fmt;
use std::path::Path;

use bevy_ecs::prelude::Resource;

use crate::components::rect::Rect;

/// Errors raised while reading or validating a level grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    Io { path: String, reason: String },
    Empty,
    Ragged { row: usize, expected: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
    /// More rows or columns than the render target has pixels.
    TooDense {
        columns: usize,
        rows: usize,
        width: i32,
        height: i32,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io { path, reason } => write!(f, "cannot read level '{}': {}", path, reason),
            LevelError::Empty => write!(f, "level grid is empty"),
            LevelError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            LevelError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol '{}' at row {}, column {}", symbol, row, col)
            }
            LevelError::TooDense {
                columns,
                rows,
                width,
                height,
            } => write!(
                f,
                "{}x{} tiles do not fit a {}x{} render target",
                columns, rows, width, height
            ),
        }
    }
}

impl std::error::Error for LevelError {}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Solid block; the value is the texture digit 1 to 5.
    Block(u8),
    WalkerSpawn,
    Star,
}

impl Tile {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Tile::Empty),
            '1'..='5' => Some(Tile::Block(symbol as u8 - b'0')),
            '6' => Some(Tile::WalkerSpawn),
            '7' => Some(Tile::Star),
            _ => None,
        }
    }
}

/// Texture key for a block digit, as registered by the asset loader.
pub fn tile_texture_key(digit: u8) -> String {
    format!("tile_{}", digit)
}

/// A validated, rectangular tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    rows: Vec<Vec<Tile>>,
}

/// A textured static rectangle: an obstacle block or a star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub rect: Rect,
    pub tex_key: String,
}

/// Everything the game needs from a level once it has been laid out.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelGeometry {
    /// Solid rectangles all movement resolves against.
    pub obstacles: Vec<Rect>,
    /// Obstacles with their textures, in the same order as `obstacles`.
    pub blocks: Vec<Block>,
    pub stars: Vec<Block>,
    /// Top-left corners of walker spawn tiles.
    pub walker_spawns: Vec<(i32, i32)>,
    pub width: i32,
    pub height: i32,
}

impl LevelLayout {
    /// Parse a grid from text. Surrounding whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row_idx = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    Tile::from_symbol(symbol).ok_or(LevelError::UnknownSymbol {
                        row: row_idx,
                        col,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows.first()
                && first.len() != row.len()
            {
                return Err(LevelError::Ragged {
                    row: row_idx,
                    expected: first.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|e| LevelError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&text)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows[0].len()
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Block digits used anywhere in the grid, plus 7 if a star is present.
    pub fn texture_digits(&self) -> Vec<u8> {
        let mut digits: Vec<u8> = self
            .rows
            .iter()
            .flatten()
            .filter_map(|tile| match tile {
                Tile::Block(digit) => Some(*digit),
                Tile::Star => Some(7),
                _ => None,
            })
            .collect();
        digits.sort_unstable();
        digits.dedup();
        digits
    }

    /// Pixel rectangle of the tile at `(row, col)` on a `width` x `height` target.
    pub fn tile_rect(&self, row: usize, col: usize, width: i32, height: i32) -> Rect {
        let cols = self.columns() as i32;
        let rows = self.rows() as i32;
        let (c, r) = (col as i32, row as i32);
        let x0 = c * width / cols;
        let x1 = (c + 1) * width / cols;
        let y0 = r * height / rows;
        let y1 = (r + 1) * height / rows;
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Lay the grid out over a `width` x `height` render target.
    ///
    /// Every tile must be at least one pixel on each side.
    pub fn assemble(&self, width: i32, height: i32) -> Result<LevelGeometry, LevelError> {
        let fits = |count: usize, pixels: i32| i32::try_from(count).is_ok_and(|n| n <= pixels);
        if !fits(self.columns(), width) || !fits(self.rows(), height) {
            return Err(LevelError::TooDense {
                columns: self.columns(),
                rows: self.rows(),
                width,
                height,
            });
        }

        let mut geometry = LevelGeometry {
            width,
            height,
            ..Default::default()
        };
        for (row, tiles) in self.rows.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let rect = self.tile_rect(row, col, width, height);
                match tile {
                    Tile::Empty => {}
                    Tile::Block(digit) => {
                        geometry.obstacles.push(rect);
                        geometry.blocks.push(Block {
                            rect,
                            tex_key: tile_texture_key(*digit),
                        });
                    }
                    Tile::WalkerSpawn => geometry.walker_spawns.push((rect.x, rect.y)),
                    Tile::Star => geometry.stars.push(Block {
                        rect,
                        tex_key: tile_texture_key(7),
                    }),
                }
            }
        }
        Ok(geometry)
    }
}

impl LevelGeometry {
    /// True if `rect` has dropped completely below the level.
    pub fn is_below(&self, rect: &Rect) -> bool {
        rect.top() >= self.height
    }
}
