use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use thiserror::Error;

use crate::client::UploadEndpoint;
use crate::gallery::{Gallery, GalleryEntry};
use crate::mime;

/// The single user-visible error slot. Each action overwrites the last
/// message; nothing is accumulated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("please select a file first")]
    NoFileSelected,
    #[error("this file already exists")]
    DuplicateFile,
    #[error("this image already exists on server")]
    DuplicateOnServer,
    #[error("this image already exists")]
    DuplicateUrl,
    #[error("please provide a valid URL")]
    InvalidUrl,
    #[error("{0}")]
    Transport(String),
}

/// A file chosen but not yet uploaded. The payload is read eagerly so the
/// in-flight candidate is captured by value before any network call starts.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl UploadCandidate {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("Not a file path: {}", path.display()))?;
        let data =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Self {
            name,
            size: data.len() as u64,
            mime_type: mime::detect_content_type(path).to_string(),
            data,
        })
    }
}

enum UploadOutcome {
    Stored(GalleryEntry),
    AlreadyStored,
}

/// Drives the two user-facing flows (local-file upload and URL paste)
/// against the gallery, enforcing the duplicate policy and surfacing a
/// single current error.
pub struct UploadSession<E> {
    endpoint: E,
    gallery: Gallery,
    pending: Option<UploadCandidate>,
    uploading: bool,
    error: Option<SessionError>,
}

impl<E: UploadEndpoint> UploadSession<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            gallery: Gallery::default(),
            pending: None,
            uploading: false,
            error: None,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn pending(&self) -> Option<&UploadCandidate> {
        self.pending.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Replaces any prior pending candidate. A file whose `(name, size)`
    /// pair already made it into the gallery is rejected outright.
    pub fn select_file(&mut self, candidate: UploadCandidate) {
        self.error = None;

        if self.gallery.contains_file(&candidate.name, candidate.size) {
            self.error = Some(SessionError::DuplicateFile);
            self.pending = None;
            return;
        }

        self.pending = Some(candidate);
    }

    /// Runs the two-step upload protocol for the pending candidate:
    /// request a slot, re-check the server-assigned view URL against the
    /// gallery, then transfer the payload.
    ///
    /// Exactly one upload may be in flight; a call while busy is ignored.
    /// On transport failure the candidate stays selected so a retry is
    /// just another `upload()` call.
    pub async fn upload(&mut self) {
        if self.uploading {
            return;
        }
        let Some(candidate) = self.pending.clone() else {
            self.error = Some(SessionError::NoFileSelected);
            return;
        };

        self.uploading = true;
        self.error = None;

        let outcome = self.perform_upload(candidate).await;
        self.uploading = false;

        match outcome {
            Ok(UploadOutcome::Stored(entry)) => {
                self.gallery.push(entry);
                self.pending = None;
            }
            Ok(UploadOutcome::AlreadyStored) => {
                self.error = Some(SessionError::DuplicateOnServer);
                self.pending = None;
            }
            Err(err) => {
                self.error = Some(SessionError::Transport(format!("{err:#}")));
            }
        }
    }

    async fn perform_upload(&self, candidate: UploadCandidate) -> Result<UploadOutcome> {
        let slot = self
            .endpoint
            .request_slot(&candidate.name, &candidate.mime_type)
            .await?;

        // The (name, size) check at selection time cannot see a server that
        // derives the same storage key for a file uploaded under another
        // name, so the view URL is checked again before any byte moves.
        if self.gallery.contains_url(&slot.view_url) {
            return Ok(UploadOutcome::AlreadyStored);
        }

        self.endpoint
            .transfer(&slot.upload_url, &candidate.mime_type, candidate.data)
            .await?;

        Ok(UploadOutcome::Stored(GalleryEntry {
            url: slot.view_url,
            name: candidate.name,
            size: Some(candidate.size),
        }))
    }

    /// Adds a pasted URL directly to the gallery. No network call and no
    /// check that the URL is reachable or actually an image.
    pub fn add_from_url(&mut self, raw_url: &str) {
        let url = raw_url.trim();
        if url.is_empty() {
            self.error = Some(SessionError::InvalidUrl);
            return;
        }

        if self.gallery.contains_url(url) {
            self.error = Some(SessionError::DuplicateUrl);
            return;
        }

        self.gallery.push(GalleryEntry {
            url: url.to_string(),
            name: "Pasted Image".to_string(),
            size: None,
        });
        self.error = None;
    }
}
