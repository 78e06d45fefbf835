//! Catalog files and startup validation.
//!
//! Catalogs can be supplied as JSON or YAML. Role names are kept as plain
//! strings in the file so that an undefined role is reported with the entry it
//! belongs to instead of as an opaque deserialization failure. Validation runs
//! once; everything downstream works with already-checked
//! [`NavigationEntry`] values.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use plantnxt_types::{NavigationEntry, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Error surfaced when a catalog cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension is neither JSON nor YAML.
    #[error("unsupported catalog format for {0}; expected .json, .yaml or .yml")]
    UnsupportedFormat(PathBuf),
    #[error("entry '{entry}' references undefined role '{role}'")]
    UnknownRole { entry: String, role: String },
    #[error("duplicate entry id '{id}'")]
    DuplicateId { id: String },
    /// A required text field is empty. `entry` is the id, or the 1-based
    /// position when the id itself is missing.
    #[error("entry '{entry}' is missing a value for '{field}'")]
    MissingField { entry: String, field: &'static str },
    /// `required_roles` is present but lists nothing; omit it instead to make
    /// the entry visible to everyone.
    #[error("entry '{entry}' has an empty required_roles list")]
    EmptyRoleSet { entry: String },
}

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

/// An entry as written in a catalog file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<Vec<String>>,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl From<&NavigationEntry> for RawEntry {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            id: entry.id.clone(),
            label: entry.label.clone(),
            destination: entry.destination.clone(),
            description: entry.description.clone(),
            group: entry.group.clone(),
            required_roles: entry
                .required_roles
                .as_ref()
                .map(|roles| roles.iter().map(|role| role.as_str().to_string()).collect()),
            icon: entry.icon.clone(),
            phase: entry.phase.clone(),
        }
    }
}

impl CatalogFile {
    /// Builds a file representation of already-validated entries, e.g. to
    /// export the built-in catalog as a starting template.
    pub fn from_entries(entries: &[NavigationEntry]) -> Self {
        Self {
            entries: entries.iter().map(RawEntry::from).collect(),
        }
    }
}

/// Reads, parses and validates a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<NavigationEntry>, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = validate_catalog(parse_catalog(&contents, format)?)?;
    info!(path = %path.display(), entries = entries.len(), "loaded navigation catalog");
    Ok(entries)
}

pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<CatalogFile, CatalogError> {
    match format {
        CatalogFormat::Json => Ok(serde_json::from_str(contents)?),
        CatalogFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Converts raw entries into [`NavigationEntry`] values, failing on the first
/// problem found.
pub fn validate_catalog(file: CatalogFile) -> Result<Vec<NavigationEntry>, CatalogError> {
    let mut seen_ids = HashSet::new();
    let mut entries = Vec::with_capacity(file.entries.len());

    for (index, raw) in file.entries.into_iter().enumerate() {
        let entry_name = if raw.id.trim().is_empty() {
            format!("#{}", index + 1)
        } else {
            raw.id.clone()
        };

        for (field, value) in [
            ("id", &raw.id),
            ("label", &raw.label),
            ("destination", &raw.destination),
            ("group", &raw.group),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    entry: entry_name,
                    field,
                });
            }
        }

        if !seen_ids.insert(raw.id.clone()) {
            return Err(CatalogError::DuplicateId { id: raw.id });
        }

        let required_roles = match raw.required_roles {
            None => None,
            Some(names) if names.is_empty() => return Err(CatalogError::EmptyRoleSet { entry: entry_name }),
            Some(names) => Some(parse_roles(&entry_name, &names)?),
        };

        entries.push(NavigationEntry {
            id: raw.id,
            label: raw.label,
            destination: raw.destination,
            description: raw.description,
            group: raw.group,
            required_roles,
            icon: raw.icon,
            phase: raw.phase.filter(|phase| !phase.trim().is_empty()),
        });
    }

    Ok(entries)
}

fn parse_roles(entry: &str, names: &[String]) -> Result<BTreeSet<Role>, CatalogError> {
    names
        .iter()
        .map(|name| {
            name.parse::<Role>().map_err(|_| CatalogError::UnknownRole {
                entry: entry.to_string(),
                role: name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_catalog;

    fn raw(id: &str, group: &str) -> RawEntry {
        RawEntry {
            id: id.to_string(),
            label: id.to_uppercase(),
            destination: format!("/{id}"),
            description: String::new(),
            group: group.to_string(),
            required_roles: None,
            icon: String::new(),
            phase: None,
        }
    }

    #[test]
    fn unknown_role_names_the_entry() {
        let mut entry = raw("dash", "Ops");
        entry.required_roles = Some(vec!["CEO".to_string(), "Intern".to_string()]);
        let error = validate_catalog(CatalogFile { entries: vec![entry] }).unwrap_err();
        assert!(
            matches!(&error, CatalogError::UnknownRole { entry, role } if entry == "dash" && role == "Intern"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = validate_catalog(CatalogFile {
            entries: vec![raw("a", "Ops"), raw("a", "Admin")],
        })
        .unwrap_err();
        assert!(matches!(error, CatalogError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn blank_group_is_a_missing_field() {
        let error = validate_catalog(CatalogFile {
            entries: vec![raw("a", "  ")],
        })
        .unwrap_err();
        assert!(matches!(error, CatalogError::MissingField { entry, field: "group" } if entry == "a"));
    }

    #[test]
    fn missing_id_reports_position() {
        let error = validate_catalog(CatalogFile {
            entries: vec![raw("a", "Ops"), raw("", "Ops")],
        })
        .unwrap_err();
        assert!(matches!(error, CatalogError::MissingField { entry, field: "id" } if entry == "#2"));
    }

    #[test]
    fn empty_role_list_is_rejected() {
        let mut entry = raw("a", "Ops");
        entry.required_roles = Some(Vec::new());
        let error = validate_catalog(CatalogFile { entries: vec![entry] }).unwrap_err();
        assert!(matches!(error, CatalogError::EmptyRoleSet { entry } if entry == "a"));
    }

    #[test]
    fn yaml_catalog_parses_route_style_role_names() {
        let yaml = r#"
entries:
  - id: dashboard
    label: Dashboard
    destination: /
    group: Operations Layer 1
    required_roles: [CEO, VP_Production]
    phase: Phase 1
  - id: oee
    label: OEE Tracking
    destination: /oee
    group: Operations Layer 1
"#;
        let entries = validate_catalog(parse_catalog(yaml, CatalogFormat::Yaml).expect("parse yaml")).expect("valid");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_visible_to(Some(Role::VpProduction)));
        assert!(!entries[0].is_visible_to(Some(Role::PlantHead)));
        assert!(entries[1].is_visible_to(None));
    }

    #[test]
    fn exported_default_catalog_validates_back_to_itself() {
        let catalog = default_catalog();
        let json = serde_json::to_string(&CatalogFile::from_entries(&catalog)).expect("serialize");
        let parsed = validate_catalog(parse_catalog(&json, CatalogFormat::Json).expect("parse")).expect("valid");
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("nav.JSON")).ok(), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_path(Path::new("nav.yml")).ok(), Some(CatalogFormat::Yaml));
        assert!(matches!(
            CatalogFormat::from_path(Path::new("nav.toml")),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }
}
