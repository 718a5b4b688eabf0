//! Reading and writing `init.yml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::document::InitDocument;
use crate::error::StoreError;

/// Fixed name of the document in the working directory
pub const INIT_FILE_NAME: &str = "init.yml";

/// Location of the persisted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitFile {
    path: PathBuf,
}

impl InitFile {
    /// `init.yml` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(INIT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the document, first creating an empty placeholder if missing
    pub fn open_or_create(&self) -> Result<InitDocument, StoreError> {
        if !self.exists() {
            info!(path = %self.path.display(), "creating empty configuration file");
            fs::File::create(&self.path).map_err(|source| StoreError::Create {
                path: self.path.clone(),
                source,
            })?;
            return Ok(InitDocument::default());
        }
        self.load()
    }

    /// An empty file loads as a fresh document
    pub fn load(&self) -> Result<InitDocument, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let doc = from_yaml(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), secrets = doc.secrets.len(), "loaded configuration");
        Ok(doc)
    }

    /// Rewrite the whole file
    pub fn save(&self, doc: &InitDocument) -> Result<(), StoreError> {
        let yaml = to_yaml(doc)?;
        fs::write(&self.path, yaml).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "wrote configuration");
        Ok(())
    }
}

pub fn to_yaml(doc: &InitDocument) -> Result<String, StoreError> {
    serde_yaml::to_string(doc).map_err(StoreError::Serialize)
}

pub fn from_yaml(contents: &str) -> Result<InitDocument, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(InitDocument::default());
    }
    serde_yaml::from_str(contents)
}
