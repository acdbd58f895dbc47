// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Template source loading
//!
//! The composer only knows template sources by identifier. A
//! [`TemplateSource`] turns an identifier into template text.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Resolves template identifiers to their text
pub trait TemplateSource {
    fn load(&self, id: &str) -> io::Result<String>;
}

/// Loads templates from files below a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectorySource {
    fn load(&self, id: &str) -> io::Result<String> {
        let path = self.root.join(id);
        debug!("Loading template source {:?}", path);
        std::fs::read_to_string(&path)
    }
}

/// In-memory template sources
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.sources.insert(id.into(), text.into());
        self
    }
}

impl TemplateSource for MemorySource {
    fn load(&self, id: &str) -> io::Result<String> {
        self.sources.get(id).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no template source named '{}'", id),
            )
        })
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn load(&self, id: &str) -> io::Result<String> {
        (**self).load(id)
    }
}
