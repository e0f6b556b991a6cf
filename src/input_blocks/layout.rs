use crate::error::LineError;
use crate::types::{City, CityId};

/// Text marking the line that carries the total tour length.
pub const SUMMARY_MARKER: &str = "Distancia total";

/// Token separating the two city ids of a tour leg.
pub const ARROW: &str = "->";

/// Textual encoding of the input files.
///
/// - `Positional`: cities are `x y` lines, numbered by their order in the file;
///   weights use a period as decimal separator.
/// - `Labeled`: cities are `Cidade <id>: (<x>, <y>)` lines;
///   weights may use a comma as decimal separator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Positional,
    Labeled,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Positional => write!(f, "positional"),
            Layout::Labeled => write!(f, "labeled"),
        }
    }
}

impl Layout {
    /// Parses one non-blank coordinate line.
    ///
    /// `ordinal` is the 1-based position of the line among non-blank lines and
    /// becomes the id in the positional layout. The labeled layout ignores it.
    pub fn parse_city_line(self, ordinal: CityId, line: &str) -> Result<City, LineError> {
        match self {
            Layout::Positional => {
                let mut tokens = line.split_whitespace();
                let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
                    return Err(LineError::Shape("two coordinates \"x y\""));
                };
                Ok(City::new(ordinal, parse_int(x)?, parse_int(y)?))
            }
            Layout::Labeled => {
                let (name, coordinates) = line
                    .split_once(':')
                    .ok_or(LineError::Shape("\"<label> <id>: (<x>,<y>)\""))?;
                if coordinates.contains(':') {
                    return Err(LineError::Shape("a single ':'"));
                }
                let id = name
                    .split_whitespace()
                    .last()
                    .ok_or(LineError::Shape("a city id before ':'"))?;
                let coordinates = coordinates
                    .trim()
                    .trim_matches(|c| c == '(' || c == ')');
                let (x, y) = coordinates
                    .split_once(',')
                    .ok_or(LineError::Shape("coordinates \"(x,y)\""))?;
                if y.contains(',') {
                    return Err(LineError::Shape("exactly two coordinates"));
                }
                Ok(City::new(parse_int(id)?, parse_int(x)?, parse_int(y)?))
            }
        }
    }

    /// Parses a weight or distance token.
    pub fn parse_number(self, token: &str) -> Result<f64, LineError> {
        let normalized = match self {
            Layout::Positional => token.to_string(),
            Layout::Labeled => token.replace(',', "."),
        };
        normalized.parse().map_err(|source| LineError::Number {
            token: token.to_string(),
            source,
        })
    }

    /// Formats a distance with two decimals, as the solver writes it.
    pub fn format_number(self, value: f64) -> String {
        let text = format!("{:.2}", value);
        match self {
            Layout::Positional => text,
            Layout::Labeled => text.replace('.', ","),
        }
    }
}

pub(crate) fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    token: &str,
) -> Result<T, LineError> {
    let token = token.trim();
    token.parse().map_err(|source| LineError::Integer {
        token: token.to_string(),
        source,
    })
}
