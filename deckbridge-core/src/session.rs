use uuid::Uuid;

use crate::buffer::DataBuffer;

/// Session-held slot for the most recent data buffer.
///
/// Each incoming payload replaces the buffer wholesale; nested entries are
/// never mutated in place, so a reader either sees the old buffer or the
/// new one. The host serializes access, typically by wrapping the session
/// in a `Mutex` alongside its other widget state.
#[derive(Debug, Default)]
pub struct SessionState {
    buffer: Option<DataBuffer>,
}

impl SessionState {
    pub fn new() -> Self {
        Self { buffer: None }
    }

    /// Swap in a freshly built buffer, dropping the previous one. Returns
    /// the installed revision id.
    pub fn install(&mut self, buffer: DataBuffer) -> Uuid {
        let revision = buffer.id;
        log::debug!(
            "Installing data buffer {} ({} layers, {} columns)",
            revision,
            buffer.layer_count(),
            buffer.column_count()
        );
        self.buffer = Some(buffer);
        revision
    }

    /// The current buffer, if any payload has arrived this session.
    pub fn buffer(&self) -> Option<&DataBuffer> {
        self.buffer.as_ref()
    }

    /// Revision id of the installed buffer.
    pub fn revision(&self) -> Option<Uuid> {
        self.buffer.as_ref().map(|b| b.id)
    }

    pub fn has_data(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty() {
        let session = SessionState::new();
        assert!(!session.has_data());
        assert!(session.buffer().is_none());
        assert!(session.revision().is_none());
    }

    #[test]
    fn test_install_replaces_buffer() {
        let mut session = SessionState::new();
        let first = session.install(DataBuffer::new());
        let second = session.install(DataBuffer::new());

        assert_ne!(first, second);
        assert_eq!(session.revision(), Some(second));
    }

    #[test]
    fn test_clear() {
        let mut session = SessionState::new();
        session.install(DataBuffer::new());
        session.clear();
        assert!(!session.has_data());
    }
}
