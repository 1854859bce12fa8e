//! In-memory workspace for command tests

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::workspace::{ExportFormat, ImportRequest, ObjectInfo, WorkspaceApi, WorkspaceError};

#[derive(Default)]
pub struct MemoryWorkspace {
    pub imports: RefCell<Vec<ImportRequest>>,
    pub exports: RefCell<Vec<(String, ExportFormat)>>,
    pub files: RefCell<BTreeMap<String, String>>,
    pub dirs: RefCell<Vec<String>>,

    /// When set, every call is rejected with this message
    pub reject_with: Option<String>,
}

impl MemoryWorkspace {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_file(path: &str, content: &str) -> Self {
        let workspace = Self::default();
        workspace
            .files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        workspace
    }

    fn check(&self) -> Result<(), WorkspaceError> {
        match &self.reject_with {
            Some(message) => Err(WorkspaceError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl WorkspaceApi for MemoryWorkspace {
    fn import(&self, request: &ImportRequest) -> Result<(), WorkspaceError> {
        self.check()?;
        self.imports.borrow_mut().push(request.clone());
        self.files
            .borrow_mut()
            .insert(request.path.clone(), request.content.clone());
        Ok(())
    }

    fn export(&self, path: &str, format: ExportFormat) -> Result<String, WorkspaceError> {
        self.check()?;
        self.exports.borrow_mut().push((path.to_string(), format));
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| WorkspaceError::Rejected {
                status: 404,
                message: format!("RESOURCE_DOES_NOT_EXIST: {}", path),
            })
    }

    fn list(&self, path: &str) -> Result<Vec<ObjectInfo>, WorkspaceError> {
        self.check()?;
        let prefix = format!("{}/", path.trim_end_matches('/'));
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(&prefix))
            .map(|p| ObjectInfo {
                path: p.clone(),
                object_type: "NOTEBOOK".to_string(),
                language: None,
                object_id: None,
                extra: serde_json::Map::new(),
            })
            .collect())
    }

    fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError> {
        self.check()?;
        self.dirs.borrow_mut().push(path.to_string());
        Ok(())
    }
}
