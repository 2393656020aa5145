//! Tile palette planning.
//!
//! Multicolor bitmaps split the screen into 4x8 tiles. Each tile may show
//! four colors: one background shared by the whole screen and three of its
//! own. Planning works on the index grid produced by the global quantizer:
//!
//! 1. [`choose_background`] tries all 16 colors as the shared background
//!    and keeps the one that forces the fewest pixels off their color.
//! 2. [`assign_palettes`] gives each tile the background plus its three
//!    most used remaining colors.
//!
//! [`TileContext`] then re-runs error diffusion against the tile palettes.

mod context;
mod layout;
mod planner;
mod usage;

pub use context::TileContext;
pub use layout::{TileLayout, TILE_HEIGHT, TILE_WIDTH};
pub use planner::{
    assign_palettes, background_cost, background_costs, choose_background, overflow_tiles, plan,
    plan_with_background, BackgroundChoice, TilePalette, TilePlan,
};
pub use usage::ColorUsage;
