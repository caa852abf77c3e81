// src/db/memory_repo.rs

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::VisitorStore,
    models::visitor::{Visitor, VisitorData, SCHEMA_VERSION},
};

/// Armazenamento em memória do processo. Usado quando não há `DATABASE_URL`
/// e nos testes. Tudo se perde ao encerrar.
#[derive(Clone, Default)]
pub struct MemoryVisitorStore {
    // Em ordem de inserção
    visitors: Arc<RwLock<Vec<Visitor>>>,
}

impl MemoryVisitorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitorStore for MemoryVisitorStore {
    async fn list(&self) -> Result<Vec<Visitor>, AppError> {
        let guard = self.visitors.read().await;

        // Do último inserido para o primeiro; o sort estável preserva isso nos empates
        let mut visitors: Vec<Visitor> = guard.iter().rev().cloned().collect();
        visitors.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(visitors)
    }

    async fn create(&self, dados: VisitorData) -> Result<Visitor, AppError> {
        let now = Utc::now();
        let visitor = Visitor {
            id: Uuid::new_v4(),
            versao: SCHEMA_VERSION,
            dados,
            created_at: now,
            updated_at: now,
        };

        self.visitors.write().await.push(visitor.clone());
        Ok(visitor)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.visitors.write().await;
        let before = guard.len();
        guard.retain(|v| v.id != id);

        Ok(guard.len() < before)
    }
}
