use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use walkdir::WalkDir;

use crate::document::Document;
use crate::error::{Result, StoreError};
use crate::store::{DocumentStore, IdGenerator, SearchRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// `yaml`/`yml` files are YAML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    fn is_sequence(self, content: &str) -> Result<bool> {
        match self {
            Self::Json => Ok(serde_json::from_str::<JsonValue>(content)?.is_array()),
            Self::Yaml => Ok(serde_yaml::from_str::<YamlValue>(content)?.is_sequence()),
        }
    }
}

pub struct DataLoader;

impl DataLoader {
    pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_documents(&content, DataFormat::from_path(path))
    }

    /// A documents file holds either a list of documents or a single one.
    pub fn parse_documents(content: &str, format: DataFormat) -> Result<Vec<Document>> {
        let entries = if format.is_sequence(content)? {
            format.parse::<Vec<Option<Document>>>(content)?
        } else {
            vec![format.parse::<Option<Document>>(content)?]
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.ok_or_else(|| {
                    StoreError::invalid_argument(format!(
                        "Document should not be null (entry {})",
                        index
                    ))
                })
            })
            .collect()
    }

    pub fn load_request(path: &Path) -> Result<SearchRequest> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_request(&content, DataFormat::from_path(path))
    }

    pub fn parse_request(content: &str, format: DataFormat) -> Result<SearchRequest> {
        format
            .parse::<Option<SearchRequest>>(content)?
            .ok_or_else(|| StoreError::invalid_argument("Request should not be null"))
    }

    /// Expands each seed path relative to `root`: files are taken as-is and
    /// directories are walked for JSON and YAML files. Missing paths are
    /// skipped.
    pub fn collect_seed_files(root: &Path, seed_paths: &[String]) -> Result<Vec<PathBuf>> {
        let matcher = data_file_matcher()?;
        let mut files = Vec::new();

        for seed_path in seed_paths {
            let full_path = root.join(seed_path);
            if full_path.is_file() {
                files.push(full_path);
            } else if full_path.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(&full_path)
                    .max_depth(3)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .map(|e| e.into_path())
                    .filter(|path| {
                        path.is_file()
                            && path.file_name().is_some_and(|name| matcher.is_match(name))
                    })
                    .collect();
                found.sort();
                files.extend(found);
            } else {
                tracing::warn!("Seed path {:?} does not exist", full_path);
            }
        }

        Ok(files)
    }

    /// Saves every document from `files` into `store`, in file order. Files
    /// that fail to load are logged and skipped.
    pub fn seed_store<G: IdGenerator>(store: &mut DocumentStore<G>, files: &[PathBuf]) -> usize {
        let mut saved = 0;
        for file in files {
            match Self::load_documents(file) {
                Ok(documents) => {
                    tracing::info!("Loaded {} documents from {:?}", documents.len(), file);
                    saved += documents.len();
                    for document in documents {
                        store.save(document);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", file, e);
                }
            }
        }
        saved
    }
}

fn data_file_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new("*.json")?);
    builder.add(Glob::new("*.{yaml,yml}")?);
    Ok(builder.build()?)
}
