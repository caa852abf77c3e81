// src/models/visitor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Versão do formato do registro gravado hoje.
///
/// 1. campos básicos do visitante
/// 2. família (`isFamilia`, `membrosFamilia`, `totalPessoas`) e `cargoLabel`
/// 3. consentimento LGPD (`receberInformativos`) e `membrosDetalhes`
///
/// Registros antigos são lidos com os campos novos nos valores padrão.
pub const SCHEMA_VERSION: i16 = 3;

// Texto padrão quando a família chega sem nenhum nome
pub const FAMILY_PLACEHOLDER: &str = "Família visitante";

// Dados de cada pessoa da visita (sexo/perfil/cargo por pessoa)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDetail {
    pub nome: String,
    pub sexo: String,
    pub perfil_etario: String,
    pub tem_cargo: String,
    pub cargo: String,
    pub cargo_label: String,
}

// O conteúdo canônico de um visitante, já normalizado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorData {
    pub nome: Option<String>,
    pub sexo: Option<String>,
    pub perfil_etario: Option<String>,
    pub tipo_culto: Option<String>,
    pub congregacao: Option<String>,
    pub frequenta: Option<String>,
    pub qual_igreja: Option<String>,
    pub procurando: String,
    pub tem_cargo: Option<String>,
    pub cargo: Option<String>,
    pub cargo_label: String,
    pub comoconheceu: Option<String>,
    pub comoconheceu_label: String,
    pub nome_convidador: Option<String>,
    pub data_hora: Option<String>,
    pub whatsapp: Option<String>,

    // LGPD: "sim" | "não" | ""
    pub receber_informativos: String,

    // Família
    pub is_familia: bool,
    pub membros_familia: Vec<String>,
    #[sqlx(json)]
    pub membros_detalhes: Vec<MemberDetail>,
    pub total_pessoas: i32,

    // Antigos (só para compatibilidade de leitura)
    pub familia: String,
    pub representante: bool,
}

impl Default for VisitorData {
    fn default() -> Self {
        Self {
            nome: None,
            sexo: None,
            perfil_etario: None,
            tipo_culto: None,
            congregacao: None,
            frequenta: None,
            qual_igreja: None,
            procurando: String::new(),
            tem_cargo: None,
            cargo: None,
            cargo_label: String::new(),
            comoconheceu: None,
            comoconheceu_label: String::new(),
            nome_convidador: None,
            data_hora: None,
            whatsapp: None,
            receber_informativos: String::new(),
            is_familia: false,
            membros_familia: Vec::new(),
            membros_detalhes: Vec::new(),
            total_pessoas: 1,
            familia: String::new(),
            representante: false,
        }
    }
}

// Um visitante gravado, com id e datas atribuídos pelo armazenamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    // O front-end usa `_id` para deletar
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(default = "legacy_version")]
    pub versao: i16,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub dados: VisitorData,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn legacy_version() -> i16 {
    1
}
