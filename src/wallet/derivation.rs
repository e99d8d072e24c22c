//! BIP-32 derivation paths

use crate::util::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Index offset of hardened children
pub const HARDENED_KEY: u32 = 0x80000000;

// Either a path from the master key or a single child index
const PATH_PATTERN: &str = r"^(?:[mM](?:/\d+['hH]?)*/?|\d+['hH]?)$";

static PATH_REGEX: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(PATH_PATTERN));

/// Sequence of child indices from a key to one of its descendants
///
/// Hardened indices are stored with `HARDENED_KEY` added.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// Returns whether `path` follows the derivation path grammar
    ///
    /// Accepts `m`, `m/0/1'/2h` (with `M` or a trailing slash allowed) and bare indices like `7`.
    pub fn is_valid_path(path: &str) -> bool {
        DerivationPath::from_str(path).is_ok()
    }

    /// Returns the child indices in derivation order
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Returns whether the path has no steps
    pub fn is_master(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a path one step further down
    pub fn child(&self, index: u32) -> DerivationPath {
        let mut indices = self.0.clone();
        indices.push(index);
        DerivationPath(indices)
    }
}

impl From<u32> for DerivationPath {
    fn from(index: u32) -> Self {
        DerivationPath(vec![index])
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath> {
        let re = PATH_REGEX
            .as_ref()
            .map_err(|e| Error::InvalidDerivationPath(e.to_string()))?;
        if !re.is_match(path) {
            return Err(Error::InvalidDerivationPath(path.to_string()));
        }

        let mut indices = Vec::new();
        let steps = path.split('/').filter(|s| !s.is_empty() && *s != "m" && *s != "M");
        for step in steps {
            let hardened = step.ends_with(|c: char| c == '\'' || c == 'h' || c == 'H');
            let digits = step.trim_end_matches(|c: char| c == '\'' || c == 'h' || c == 'H');
            let index: u32 = digits
                .parse()
                .map_err(|_| Error::InvalidDerivationPath(path.to_string()))?;
            if index >= HARDENED_KEY {
                let msg = format!("{}: index {} out of range", path, index);
                return Err(Error::InvalidDerivationPath(msg));
            }
            indices.push(if hardened { index + HARDENED_KEY } else { index });
        }
        Ok(DerivationPath(indices))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("m")?;
        for index in self.0.iter() {
            if *index >= HARDENED_KEY {
                write!(f, "/{}'", index - HARDENED_KEY)?;
            } else {
                write!(f, "/{}", index)?;
            }
        }
        Ok(())
    }
}
