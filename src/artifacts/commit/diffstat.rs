//! Diffstat summary parsing
//!
//! `git show --stat` ends with a summary line such as:
//!
//! ```text
//!  3 files changed, 42 insertions(+), 5 deletions(-)
//! ```
//!
//! Only the insertion figure is extracted. A summary without one (pure
//! deletions, renames, mode changes, empty commits) counts as zero added lines.

use thiserror::Error;

/// Regex pattern for the insertion figure, singular or plural
const INSERTIONS_REGEX: &str = r"(\d+) insertions?\(\+\)";

#[derive(Debug, Error)]
pub enum DiffStatError {
    #[error("invalid diffstat pattern")]
    Pattern(#[from] regex::Error),

    #[error("insertion figure {figure} is out of range")]
    Figure {
        figure: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Extract the number of inserted lines from a diffstat summary
///
/// The first `<n> insertion(s)(+)` occurrence wins.
pub fn parse_added_lines(summary: &str) -> Result<u64, DiffStatError> {
    let captures = regex::Regex::new(INSERTIONS_REGEX)?.captures(summary);

    match captures {
        Some(captures) => {
            let figure = &captures[1];
            figure.parse::<u64>().map_err(|source| DiffStatError::Figure {
                figure: figure.to_string(),
                source,
            })
        }
        None => Ok(0),
    }
}
