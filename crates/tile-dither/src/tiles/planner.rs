//! Background search and per-tile palette assignment.
//!
//! Both passes read the index grid produced by the global quantizer, where
//! every value is a master palette index.

use super::layout::TileLayout;
use super::usage::ColorUsage;
use crate::color::Rgba16;
use crate::grid::{Grid, IndexGrid};
use crate::palette::{MasterPalette, PALETTE_SIZE};

/// Four master palette indices for one tile.
///
/// Slot 0 is the shared background. Slots 1 and 2 go to screen RAM, slot 3
/// to color RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TilePalette(pub [u8; 4]);

impl TilePalette {
    #[inline]
    pub fn background(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn slots(&self) -> [u8; 4] {
        self.0
    }

    /// Resolve the four slots against `master`.
    pub fn colors(&self, master: &MasterPalette) -> [Rgba16; 4] {
        self.0.map(|i| master.get(i as usize))
    }
}

/// Result of the background search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundChoice {
    /// Chosen master index.
    pub index: u8,
    /// Overflow cost of the chosen index.
    pub cost: u32,
    /// Overflow cost of every candidate.
    pub costs: [u32; PALETTE_SIZE],
}

impl BackgroundChoice {
    /// Report a background that was fixed rather than searched.
    pub fn fixed(indices: &IndexGrid, index: u8) -> Self {
        let costs = background_costs(indices);
        Self {
            index,
            cost: costs[index as usize],
            costs,
        }
    }
}

/// Overflow cost of `background` over all tiles.
pub fn background_cost(indices: &IndexGrid, background: u8) -> u32 {
    let layout = TileLayout::new(indices.width(), indices.height());
    layout
        .tiles()
        .map(|(col, row)| ColorUsage::of_tile(indices, col, row, background).overflow_cost())
        .sum()
}

/// Overflow cost of every candidate background.
pub fn background_costs(indices: &IndexGrid) -> [u32; PALETTE_SIZE] {
    std::array::from_fn(|bg| background_cost(indices, bg as u8))
}

/// Pick the background with the lowest overflow cost.
///
/// Candidates are scanned in ascending order with a strict comparison, so
/// the lowest index wins among equal costs.
pub fn choose_background(indices: &IndexGrid) -> BackgroundChoice {
    let costs = background_costs(indices);
    let mut index = 0;
    for (i, &cost) in costs.iter().enumerate() {
        if cost < costs[index] {
            index = i;
        }
    }
    BackgroundChoice {
        index: index as u8,
        cost: costs[index],
        costs,
    }
}

/// Number of tiles that use more than three colors besides `background`.
pub fn overflow_tiles(indices: &IndexGrid, background: u8) -> usize {
    let layout = TileLayout::new(indices.width(), indices.height());
    layout
        .tiles()
        .filter(|&(col, row)| ColorUsage::of_tile(indices, col, row, background).distinct() > 3)
        .count()
}

/// Give every tile the background plus its three most used other colors.
pub fn assign_palettes(indices: &IndexGrid, background: u8) -> Grid<TilePalette> {
    let layout = TileLayout::new(indices.width(), indices.height());
    Grid::from_fn(layout.columns(), layout.rows(), |col, row| {
        let [a, b, c] = ColorUsage::of_tile(indices, col, row, background).top_three();
        TilePalette([background, a, b, c])
    })
}

/// Background choice plus the tile palette grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlan {
    pub background: BackgroundChoice,
    pub palettes: Grid<TilePalette>,
}

impl TilePlan {
    /// Resolve every tile palette to colors, ready for a [`TileContext`].
    ///
    /// [`TileContext`]: super::TileContext
    pub fn resolve(&self, master: &MasterPalette) -> Grid<[Rgba16; 4]> {
        self.palettes.map(|p| p.colors(master))
    }
}

/// Search the background, then assign tile palettes.
pub fn plan(indices: &IndexGrid) -> TilePlan {
    let background = choose_background(indices);
    TilePlan {
        palettes: assign_palettes(indices, background.index),
        background,
    }
}

/// Assign tile palettes around a fixed background.
pub fn plan_with_background(indices: &IndexGrid, background: u8) -> TilePlan {
    debug_assert!((background as usize) < PALETTE_SIZE);
    TilePlan {
        palettes: assign_palettes(indices, background),
        background: BackgroundChoice::fixed(indices, background),
    }
}
