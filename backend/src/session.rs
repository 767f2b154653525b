//! Session Persistence
//!
//! The one piece of durable state: the authenticated user, stored as a JSON
//! file in the configured data directory. Absence of the file means logged
//! out; a corrupt file is treated the same way rather than failing login.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sh_common::User;
use thiserror::Error;

const SESSION_FILE_NAME: &str = "session.json";

/// Session file error types.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem error reading or writing the session file.
    #[error("Session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The user could not be serialized.
    #[error("Session serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Handle to the session file under the configured data directory.
#[derive(Debug)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a handle for `data_dir/session.json`. The directory is created
    /// lazily on the first persist.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
        }
    }

    /// Write the authenticated user to disk.
    pub async fn persist(&self, user: &User) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(user)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Read the persisted user back, if any. A missing file means logged
    /// out; a corrupt file is logged and treated as logged out.
    pub async fn restore(&self) -> SessionResult<Option<User>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    tracing::warn!("Corrupt session file, treating as logged out: {e}");
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the session file. Clearing an absent session is a no-op.
    pub async fn clear(&self) -> SessionResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sh_common::Role;
    use uuid::Uuid;

    fn demo_user() -> User {
        User {
            id: Uuid::now_v7(),
            name: "Alice Student".to_string(),
            email: "user@test.com".to_string(),
            role: Role::User,
            avatar_url: "https://picsum.photos/seed/alice/100/100".to_string(),
            level: 1,
            points: 50,
            streak: 3,
        }
    }

    #[tokio::test]
    async fn persist_then_restore_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionFile::new(dir.path());
        let user = demo_user();

        session.persist(&user).await.unwrap();
        let restored = session.restore().await.unwrap();
        assert_eq!(restored, Some(user));
    }

    #[tokio::test]
    async fn missing_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionFile::new(dir.path());

        assert_eq!(session.restore().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionFile::new(dir.path());
        tokio::fs::write(dir.path().join(SESSION_FILE_NAME), "{not json")
            .await
            .unwrap();

        assert_eq!(session.restore().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_removes_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionFile::new(dir.path());

        session.persist(&demo_user()).await.unwrap();
        session.clear().await.unwrap();
        assert_eq!(session.restore().await.unwrap(), None);

        // Clearing again is fine.
        session.clear().await.unwrap();
    }
}
