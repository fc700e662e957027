//! # Domain Loader
//!
//! Reads the YAML domain file once at startup and materializes every entry
//! as a validated [`DomainConfig`].
//!
//! Loading is all-or-nothing: a single malformed or invalid entry aborts the
//! whole load, so no submission ever runs against a partial configuration.
//!
//! ```yaml
//! salt_lake_city:
//!   is_enabled: true
//!   pixel_grid: {xmin: -112.0, xmax: -111.8, xres: 0.01, ymin: 40.6, ymax: 40.8, yres: 0.01}
//!   simulation_config:
//!     n_hours: -24
//!     xmn: -112.5
//!     # ...
//!   meteorology_model: hrrr
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use scenegen_common::scene::{DomainConfig, DomainSpec};
use scenegen_common::validate::ValidationError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default location of the domain file, relative to the working directory.
pub const DEFAULT_DOMAINS_PATH: &str = "domains.yaml";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read domain file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("domain file declares no domains")]
    Empty,
    #[error("malformed domain file")]
    Malformed(#[from] serde_yaml::Error),
    #[error("domain `{0}` is declared more than once")]
    DuplicateDomain(String),
    #[error("domain `{name}` failed validation")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Loaded domains, in declaration order.
///
/// Read-only once loaded; names are unique.
#[derive(Debug, Clone, Default)]
pub struct Domains {
    entries: Vec<(String, DomainConfig)>,
}

impl Domains {
    pub fn get(&self, name: &str) -> Option<&DomainConfig> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, domain)| domain)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainConfig)> {
        self.entries.iter().map(|(name, domain)| (name.as_str(), domain))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Domains with `is_enabled` set, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &DomainConfig)> {
        self.iter().filter(|(_, domain)| domain.is_enabled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw entries in document order, duplicates included.
struct DomainEntries(Vec<(String, DomainSpec)>);

impl<'de> Deserialize<'de> for DomainEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DomainEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of domain names to domain configurations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, spec)) = map.next_entry::<String, DomainSpec>()? {
                    entries.push((name, spec));
                }
                Ok(DomainEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Reads and validates the domain file at `path`.
pub fn load_domains(path: impl AsRef<Path>) -> Result<Domains, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "read domain file");
    parse_domains(&text)
}

/// Parses and validates a YAML domain document.
pub fn parse_domains(text: &str) -> Result<Domains, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let specs = match serde_yaml::from_str::<Option<DomainEntries>>(text)? {
        Some(DomainEntries(specs)) if !specs.is_empty() => specs,
        _ => return Err(LoadError::Empty),
    };

    let mut entries: Vec<(String, DomainConfig)> = Vec::with_capacity(specs.len());
    for (name, spec) in specs {
        if entries.iter().any(|(existing, _)| *existing == name) {
            return Err(LoadError::DuplicateDomain(name));
        }

        let domain = DomainConfig::new(spec).map_err(|source| LoadError::Invalid {
            name: name.clone(),
            source,
        })?;
        entries.push((name, domain));
    }

    debug!(count = entries.len(), "loaded domains");
    Ok(Domains { entries })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
