#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use error::{RenderError, Result};
pub use ir::{Connection, Network};
pub use layout::{Layout, SlotPool, assign_slots, compute_layout};
pub use parser::{load_network, parse_network};
pub use render::{render_svg, write_output_svg};
pub use theme::Theme;
