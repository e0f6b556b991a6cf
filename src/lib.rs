//! # tour_plot
//!
//! Draws a travelling-salesman tour over its cities for visual inspection.
//!
//! The tour itself comes from an external solver. This crate reads the
//! solver's two text files (the city coordinates and the chosen tour) and
//! renders the cities, the legs with their distances, and the total
//! distance into an SVG chart.
//!
//! Two format variants are supported, see [`Layout`]. Each binary hard-codes
//! one of them.
//!
//! Based on [`plotters`](https://docs.rs/plotters) for the chart and
//! [`petgraph`](https://docs.rs/petgraph) for the optional DOT export.

pub mod config;
pub mod error;
pub mod input;
pub mod input_blocks;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod render_blocks;
#[doc(hidden)]
pub mod testing;
pub mod types;

pub use config::Config;
pub use error::{Error, LineError, Result};
pub use input::Reader;
pub use input_blocks::layout::Layout;
pub use pipeline::run;
pub use types::{City, CityId, CityMap, Edge, Tour};
