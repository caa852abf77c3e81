// src/services/auth.rs

use anyhow::Context;
use std::{path::Path, sync::Arc};

use crate::{
    common::{coerce, error::AppError},
    models::auth::{LoginPayload, LoginResponse, Secretary},
};

/// Cadastro fixo de secretários, carregado uma vez na inicialização.
/// Somente leitura depois disso.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Secretary>,
}

impl Roster {
    pub fn new(entries: Vec<Secretary>) -> Self {
        for s in &entries {
            if s.cpf.is_empty() || s.cpf.chars().any(|c| !c.is_ascii_digit()) {
                tracing::warn!(
                    "⚠️ Secretário de matrícula '{}' tem CPF fora do formato (só dígitos) e não conseguirá entrar.",
                    s.matricula
                );
            }
        }
        Self { entries }
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let entries: Vec<Secretary> =
            serde_json::from_str(raw).context("cadastro de secretários não é um array JSON válido")?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("falha ao ler {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Busca exata pelo par (matrícula, CPF). O primeiro que casar vence.
    pub fn find(&self, matricula: &str, cpf_digits: &str) -> Option<&Secretary> {
        self.entries
            .iter()
            .find(|s| s.matricula == matricula && s.cpf == cpf_digits)
    }
}

#[derive(Clone)]
pub struct AuthService {
    roster: Arc<Roster>,
}

impl AuthService {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    pub fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, AppError> {
        let matricula = coerce::trimmed_text(payload.matricula.as_ref());
        let cpf = coerce::digits_only(&coerce::text(payload.cpf.as_ref()).unwrap_or_default());

        match self.roster.find(&matricula, &cpf) {
            Some(secretary) => {
                tracing::info!("🔑 Login de {} ({})", secretary.nome, secretary.congregacao);
                Ok(LoginResponse::from(secretary))
            }
            None => {
                tracing::debug!("Login recusado para a matrícula '{}'", matricula);
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
