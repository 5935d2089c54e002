//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Banner`: Guide title and introduction
//! - `DetailHeader`: Back control, category title and description
//! - `StatusBar`: Status message and key hints
//! - `Tile` / `PreviewWidget`: ratatui widgets drawn inside the grid
//!
//! ### Stateful Components
//!
//! - `TileGrid`: Scrollable responsive grid; borrows a persistent `GridState`
//!   and records its layout for mouse hit testing
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! `App`. This keeps dependencies explicit and components testable with
//! ratatui's `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── banner.rs         (Title and introduction)
//! ├── detail_header.rs  (Back control + category heading)
//! ├── preview.rs        (Preview asset resolver + canvas widget)
//! ├── status_bar.rs     (Bottom status line)
//! ├── tile.rs           (Single card)
//! └── tile_grid.rs      (Responsive scrolling grid)
//! ```

mod banner;
pub use banner::{BANNER_HEIGHT, Banner};

mod detail_header;
pub use detail_header::DetailHeader;

pub mod preview;

mod status_bar;
pub use status_bar::StatusBar;

pub mod tile;
pub mod tile_grid;
pub use tile_grid::{Direction, GridState, TileGrid, TileSpec};
