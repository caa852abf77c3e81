// src/models/auth.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Um registro do cadastro fixo de secretários
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secretary {
    pub matricula: String,
    // Só dígitos; qualquer outro caractere impede o login dessa entrada
    pub cpf: String,
    pub nome: String,
    pub congregacao: String,
    #[serde(default)]
    pub is_sede: bool,
}

// Dados para login. Os dois campos chegam sem tipo garantido
// (a matrícula às vezes vem como número).
#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub matricula: Option<Value>,
    #[serde(default)]
    pub cpf: Option<Value>,
}

// Resposta do login
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub nome: String,
    pub matricula: String,
    pub congregacao: String,
    pub is_sede: bool,
}

impl From<&Secretary> for LoginResponse {
    fn from(s: &Secretary) -> Self {
        Self {
            nome: s.nome.clone(),
            matricula: s.matricula.clone(),
            congregacao: s.congregacao.clone(),
            is_sede: s.is_sede,
        }
    }
}
