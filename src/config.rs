use std::path::PathBuf;

use log::LevelFilter;

use crate::input_blocks::layout::Layout;

pub const DEFAULT_CITIES_FILE: &str = "cidades.txt";
pub const DEFAULT_TOUR_FILE: &str = "caminhominimo.txt";
pub const DEFAULT_CHART_FILE: &str = "caminhominimo.svg";

/// Where to read the inputs from, which layout they use, and where the chart goes.
///
/// Relative paths resolve against the working directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub cities_path: PathBuf,
    pub tour_path: PathBuf,
    pub layout: Layout,
    pub chart_path: PathBuf,
    /// Chart size in pixels, `(width, height)`.
    pub chart_size: (u32, u32),
    /// When set, the tour is also written there in DOT format.
    pub dot_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cities_path: PathBuf::from(DEFAULT_CITIES_FILE),
            tour_path: PathBuf::from(DEFAULT_TOUR_FILE),
            layout: Layout::default(),
            chart_path: PathBuf::from(DEFAULT_CHART_FILE),
            chart_size: (800, 800),
            dot_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn new(layout: Layout) -> Self {
        Config {
            layout,
            ..Self::default()
        }
    }

    pub fn with_cities_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cities_path = path.into();
        self
    }

    pub fn with_tour_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tour_path = path.into();
        self
    }

    pub fn with_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_path = path.into();
        self
    }

    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    pub fn with_dot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dot_path = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
