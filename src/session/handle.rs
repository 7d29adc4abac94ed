//! Shared access to a session

use super::{Message, SessionState};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a session.
///
/// Readers may inspect the session at any time, including while a request
/// cycle is waiting on the query service. Writing is reserved to the runtime.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    pub async fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().await
    }

    #[allow(dead_code)] // Presentation read API
    pub async fn transcript(&self) -> Vec<Message> {
        self.inner.read().await.transcript().to_vec()
    }

    #[allow(dead_code)] // Presentation read API
    pub async fn draft(&self) -> String {
        self.inner.read().await.draft().to_string()
    }

    #[allow(dead_code)] // Presentation read API
    pub async fn is_busy(&self) -> bool {
        self.inner.read().await.is_busy()
    }
}
