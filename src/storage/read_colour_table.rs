use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::colour_table::{ColourTable, ColourTableError};

#[derive(Debug, Error)]
pub enum ReadColourTableError {
    #[error("could not read colour file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("colour file does not start with a colour count")]
    MissingCount,
    #[error("expected an integer, found {token:?}")]
    InvalidToken { token: String },
    #[error("colour component {value} is outside 0..=255")]
    ComponentOutOfRange { value: i64 },
    #[error("colour file declares {expected} colours but only {found} are complete")]
    TooFewColours { expected: usize, found: usize },
    #[error(transparent)]
    Table(#[from] ColourTableError),
}

pub fn read_colour_table(path: impl AsRef<Path>) -> Result<ColourTable, ReadColourTableError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReadColourTableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_colour_table(&text)
}

/// Parses a colour count `N` followed by `N` whitespace separated `r g b` triples.
/// Anything after the last declared triple is ignored.
pub fn parse_colour_table(text: &str) -> Result<ColourTable, ReadColourTableError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(ReadColourTableError::MissingCount)?;
    let expected = parse_count(count_token)?;

    let mut colours = Vec::new();

    for found in 0..expected {
        let mut component = || -> Result<u8, ReadColourTableError> {
            let token = tokens
                .next()
                .ok_or(ReadColourTableError::TooFewColours { expected, found })?;
            parse_component(token)
        };

        let r = component()?;
        let g = component()?;
        let b = component()?;

        colours.push(Colour { r, g, b });
    }

    Ok(ColourTable::new(colours)?)
}

fn parse_count(token: &str) -> Result<usize, ReadColourTableError> {
    token
        .parse::<usize>()
        .map_err(|_| ReadColourTableError::InvalidToken {
            token: token.to_string(),
        })
}

fn parse_component(token: &str) -> Result<u8, ReadColourTableError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| ReadColourTableError::InvalidToken {
            token: token.to_string(),
        })?;

    u8::try_from(value).map_err(|_| ReadColourTableError::ComponentOutOfRange { value })
}
