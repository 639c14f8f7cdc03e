use bytes::Bytes;

/// Transient carrier for an uploaded file between the handler and the
/// storage layer. The content never touches the database; saving produces a
/// `StoredFile` index row and a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDto {
    pub name: String,
    pub content: Bytes,
}

impl FileDto {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
