//! Page reference sources: reference strings, trace files, random draws.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tracing::info;
use xz2::read::XzDecoder;

use crate::{error::Error, Page, Result};

/// Parses a reference string such as `"1,2,3, 4"` or one page per line.
///
/// Commas and whitespace both separate references and empty fields are
/// skipped, so a blank string is the empty sequence.
pub fn parse_references(input: &str) -> Result<Vec<Page>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<Page>().map_err(|_| Error::InvalidReference {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect()
}

/// Reads a reference string from `path`, decompressing `.xz` files.
pub fn read_trace(path: &Path) -> Result<Vec<Page>> {
    let stream = fs::File::open(path)?;
    let mut contents = String::new();
    if path.extension().is_some_and(|ext| ext == "xz") {
        XzDecoder::new(stream).read_to_string(&mut contents)?;
    } else {
        io::BufReader::new(stream).read_to_string(&mut contents)?;
    }
    let refs = parse_references(&contents)?;
    info!(path = %path.display(), references = refs.len(), "loaded trace");
    Ok(refs)
}

/// Draws `length` references uniformly from `0..pages`.
pub fn random_references(length: usize, pages: u32, seed: Option<u64>) -> Result<Vec<Page>> {
    if pages == 0 {
        return Err(Error::Config(
            "random references need at least one distinct page".to_string(),
        ));
    }
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    Ok(std::iter::repeat_with(|| Page::from(rng.u32(0..pages)))
        .take(length)
        .collect())
}
