// src/config.rs

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::{env, path::PathBuf, sync::Arc, time::Duration};

use crate::{
    db::{MemoryVisitorStore, PgVisitorStore, VisitorStore},
    services::{
        auth::{AuthService, Roster},
        visitor_service::VisitorService,
    },
};

const DEFAULT_PORT: u16 = 3001;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub secretarios_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT inválida: '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let secretarios_path = env::var("SECRETARIOS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("secretarios.json"));

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("build"));

        Ok(Self {
            port,
            database_url,
            secretarios_path,
            static_dir,
        })
    }

    // Para o log de inicialização; nunca mostra a URL (tem senha)
    pub fn store_mode(&self) -> &'static str {
        if self.database_url.is_some() {
            "postgres"
        } else {
            "memória"
        }
    }
}

// O estado compartilhado entre os handlers. Nada aqui é mutável.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub visitor_service: VisitorService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let roster = Roster::load(&config.secretarios_path)?;
        tracing::info!(
            "👥 {} secretários carregados de {}",
            roster.len(),
            config.secretarios_path.display()
        );
        if roster.is_empty() {
            tracing::warn!("⚠️ Cadastro de secretários vazio: nenhum login será aceito");
        }

        let store: Arc<dyn VisitorStore> = match &config.database_url {
            Some(url) => {
                // Conexão preguiçosa: banco fora do ar não impede o servidor de subir
                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .acquire_timeout(Duration::from_secs(3))
                    .connect_lazy(url)
                    .context("DATABASE_URL malformada")?;

                let repo = PgVisitorStore::new(pool);
                match repo.migrate().await {
                    Ok(()) => tracing::info!("✅ Conectado ao banco de dados, migrações em dia"),
                    Err(e) => tracing::error!("❌ Erro ao conectar ao banco de dados: {}", e),
                }
                Arc::new(repo)
            }
            None => {
                tracing::warn!(
                    "⚠️ DATABASE_URL não definida: visitantes ficam só em memória e somem ao reiniciar"
                );
                Arc::new(MemoryVisitorStore::new())
            }
        };

        Ok(Self::from_parts(roster, store))
    }

    pub fn from_parts(roster: Roster, store: Arc<dyn VisitorStore>) -> Self {
        Self {
            auth_service: AuthService::new(Arc::new(roster)),
            visitor_service: VisitorService::new(store),
        }
    }
}
