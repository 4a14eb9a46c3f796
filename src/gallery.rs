/// One image reference shown to the user. Entries are never mutated or
/// removed once added; entries from pasted URLs carry no size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub url: String,
    pub name: String,
    pub size: Option<u64>,
}

/// Ordered, append-only collection of successfully added image references.
/// Owned by the session for its whole lifetime; there is no clear operation.
#[derive(Debug, Default)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    /// Whether any entry already points at `url`.
    pub fn contains_url(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry.url == url)
    }

    /// Whether a local file with this `(name, size)` pair was already
    /// uploaded. Pasted entries have no size and never match.
    pub fn contains_file(&self, name: &str, size: u64) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name == name && entry.size == Some(size))
    }

    pub(crate) fn push(&mut self, entry: GalleryEntry) {
        self.entries.push(entry);
    }
}
