//! In-memory result of template resolution

use crate::catalog::{Contribution, Package, Section};
use serde::Serialize;
use std::collections::BTreeMap;

/// Package name → version range, kept in name order like npm writes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest(BTreeMap<String, String>);

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package; an existing entry with the same name is replaced (last write wins)
    /// and its previous version returned
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), version.into())
    }

    pub fn extend(&mut self, packages: &[Package]) {
        for package in packages {
            self.insert(package.name, package.version);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Package> for Manifest {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for package in iter {
            manifest.insert(package.name, package.version);
        }
        manifest
    }
}

/// A file to be written, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Ordered generated files plus the dependency manifests they were resolved with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<GeneratedFile>,
    pub dependencies: Manifest,
    pub dev_dependencies: Manifest,
}

impl FileSet {
    pub fn new(dependencies: Manifest, dev_dependencies: Manifest) -> Self {
        Self {
            files: Vec::new(),
            dependencies,
            dev_dependencies,
        }
    }

    /// Merge an axis contribution into the matching manifest section
    pub fn apply(&mut self, contribution: &Contribution) {
        match contribution.section {
            Section::Dependencies => self.dependencies.extend(contribution.packages),
            Section::DevDependencies => self.dev_dependencies.extend(contribution.packages),
        }
    }

    /// Add a file. A file already registered at `path` is replaced in place.
    pub fn add(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => existing.content = content,
            None => self.files.push(GeneratedFile { path, content }),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
