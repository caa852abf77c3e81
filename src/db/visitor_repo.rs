// src/db/visitor_repo.rs

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::visitor::{Visitor, VisitorData, SCHEMA_VERSION},
};

/// Armazenamento dos visitantes. Cada chamada vai direto ao armazenamento:
/// sem cache, sem retry.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Todos os visitantes, do mais recente para o mais antigo.
    async fn list(&self) -> Result<Vec<Visitor>, AppError>;

    /// Grava um visitante já normalizado. Id e datas são atribuídos aqui.
    async fn create(&self, dados: VisitorData) -> Result<Visitor, AppError>;

    /// Remove pelo id. Retorna `false` se não havia nada com esse id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

// O repositório de visitantes, responsável por todas as interações com a tabela 'visitantes'
#[derive(Clone)]
pub struct PgVisitorStore {
    pool: PgPool,
}

impl PgVisitorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Roda as migrações embutidas. É também o primeiro contato com o banco.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl VisitorStore for PgVisitorStore {
    async fn list(&self) -> Result<Vec<Visitor>, AppError> {
        let visitors = sqlx::query_as::<_, Visitor>(
            r#"
            SELECT
                id, versao,
                nome, sexo, perfil_etario, tipo_culto, congregacao,
                frequenta, qual_igreja, procurando, tem_cargo, cargo, cargo_label,
                comoconheceu, comoconheceu_label, nome_convidador, data_hora, whatsapp,
                receber_informativos,
                is_familia, membros_familia, membros_detalhes, total_pessoas,
                familia, representante,
                created_at, updated_at
            FROM visitantes
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(visitors)
    }

    async fn create(&self, dados: VisitorData) -> Result<Visitor, AppError> {
        let visitor = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitantes (
                id, versao,
                nome, sexo, perfil_etario, tipo_culto, congregacao,
                frequenta, qual_igreja, procurando, tem_cargo, cargo, cargo_label,
                comoconheceu, comoconheceu_label, nome_convidador, data_hora, whatsapp,
                receber_informativos,
                is_familia, membros_familia, membros_detalhes, total_pessoas,
                familia, representante
            )
            VALUES (
                $1, $2,
                $3, $4, $5, $6, $7,
                $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18,
                $19,
                $20, $21, $22, $23,
                $24, $25
            )
            RETURNING
                id, versao,
                nome, sexo, perfil_etario, tipo_culto, congregacao,
                frequenta, qual_igreja, procurando, tem_cargo, cargo, cargo_label,
                comoconheceu, comoconheceu_label, nome_convidador, data_hora, whatsapp,
                receber_informativos,
                is_familia, membros_familia, membros_detalhes, total_pessoas,
                familia, representante,
                created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(SCHEMA_VERSION)
        .bind(dados.nome)
        .bind(dados.sexo)
        .bind(dados.perfil_etario)
        .bind(dados.tipo_culto)
        .bind(dados.congregacao)
        .bind(dados.frequenta)
        .bind(dados.qual_igreja)
        .bind(dados.procurando)
        .bind(dados.tem_cargo)
        .bind(dados.cargo)
        .bind(dados.cargo_label)
        .bind(dados.comoconheceu)
        .bind(dados.comoconheceu_label)
        .bind(dados.nome_convidador)
        .bind(dados.data_hora)
        .bind(dados.whatsapp)
        .bind(dados.receber_informativos)
        .bind(dados.is_familia)
        .bind(dados.membros_familia)
        .bind(Json(dados.membros_detalhes))
        .bind(dados.total_pessoas)
        .bind(dados.familia)
        .bind(dados.representante)
        .fetch_one(&self.pool)
        .await?;

        Ok(visitor)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM visitantes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
