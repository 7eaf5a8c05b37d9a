use super::Error;

/// Error from the storage driver.
#[derive(Debug)]
pub(super) struct StorageError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a storage failure.
    ///
    /// Driver errors (rusqlite errors, bad connection URLs, constraint
    /// violations) pass through Melba unchanged; this is the only way
    /// they enter the error type. A message string works too, for
    /// storage-side conditions with no underlying error value.
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError { inner: err.into() }))
    }

    /// Returns `true` if this error is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Storage(_))
    }
}
