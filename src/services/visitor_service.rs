// src/services/visitor_service.rs

use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::{coerce, error::AppError},
    db::VisitorStore,
    models::visitor::{MemberDetail, Visitor, VisitorData, FAMILY_PLACEHOLDER},
};

#[derive(Clone)]
pub struct VisitorService {
    store: Arc<dyn VisitorStore>,
}

impl VisitorService {
    pub fn new(store: Arc<dyn VisitorStore>) -> Self {
        Self { store }
    }

    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, AppError> {
        self.store.list().await
    }

    pub async fn create_visitor(&self, body: &Value) -> Result<Visitor, AppError> {
        let dados = normalize_submission(body);
        let visitor = self.store.create(dados).await?;

        tracing::info!(
            "📝 Visitante registrado: {} ({} pessoa(s))",
            visitor.dados.nome.as_deref().unwrap_or("-"),
            visitor.dados.total_pessoas
        );
        Ok(visitor)
    }

    // Apagar um id que não existe também é sucesso
    pub async fn delete_visitor(&self, id: &str) -> Result<(), AppError> {
        let id = Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidId(id.to_string()))?;

        if !self.store.delete(id).await? {
            tracing::debug!("Nenhum visitante com id {} para deletar", id);
        }
        Ok(())
    }
}

// =============================================================================
//  NORMALIZAÇÃO
// =============================================================================

/// Transforma o que o formulário mandou em um registro canônico.
///
/// Nunca falha: campos ausentes ou de tipo errado viram vazio/padrão.
/// Campos desconhecidos são descartados.
pub fn normalize_submission(body: &Value) -> VisitorData {
    let empty = Map::new();
    let obj = body.as_object().unwrap_or(&empty);
    let field = |key: &str| obj.get(key);

    let membros_familia: Vec<String> = match field("membrosFamilia") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|n| coerce::trimmed_text(Some(n)))
            .filter(|n| !n.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let membros_detalhes: Vec<MemberDetail> = match field("membrosDetalhes") {
        Some(Value::Array(items)) => items
            .iter()
            .map(member_detail)
            .filter(|m| !m.nome.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let mut doc = VisitorData {
        nome: coerce::text(field("nome")),
        sexo: coerce::text(field("sexo")),
        perfil_etario: coerce::text(field("perfilEtario")),
        tipo_culto: coerce::text(field("tipoCulto")),
        congregacao: coerce::text(field("congregacao")),
        frequenta: coerce::text(field("frequenta")),
        qual_igreja: coerce::text(field("qualIgreja")),
        procurando: coerce::trimmed_text(field("procurando")),
        tem_cargo: coerce::text(field("temCargo")),
        cargo: coerce::text(field("cargo")),
        cargo_label: coerce::trimmed_text(field("cargoLabel")),
        comoconheceu: coerce::text(field("comoconheceu")),
        comoconheceu_label: coerce::trimmed_text(field("comoconheceuLabel")),
        nome_convidador: coerce::text(field("nomeConvidador")),
        data_hora: coerce::text(field("dataHora")),
        whatsapp: coerce::text(field("whatsapp")),
        receber_informativos: coerce::trimmed_text(field("receberInformativos")),
        is_familia: coerce::flag(field("isFamilia")),
        membros_familia,
        membros_detalhes,
        total_pessoas: 1,
        familia: coerce::text(field("familia")).unwrap_or_default(),
        representante: coerce::flag(field("representante")),
    };

    if doc.is_familia {
        apply_family_rules(&mut doc);
    } else {
        apply_individual_rules(&mut doc);
    }

    doc
}

fn member_detail(raw: &Value) -> MemberDetail {
    let get = |key: &str| coerce::trimmed_text(raw.get(key));
    MemberDetail {
        nome: get("nome"),
        sexo: get("sexo"),
        perfil_etario: get("perfilEtario"),
        tem_cargo: get("temCargo"),
        cargo: get("cargo"),
        cargo_label: get("cargoLabel"),
    }
}

fn apply_family_rules(doc: &mut VisitorData) {
    // membrosDetalhes tem prioridade para calcular total e nome
    let nomes: Vec<String> = if doc.membros_detalhes.is_empty() {
        doc.membros_familia.clone()
    } else {
        doc.membros_detalhes.iter().map(|m| m.nome.clone()).collect()
    };

    doc.total_pessoas = i32::try_from(nomes.len()).unwrap_or(i32::MAX).max(1);
    doc.nome = Some(
        nomes
            .first()
            .cloned()
            .unwrap_or_else(|| FAMILY_PLACEHOLDER.to_string()),
    );

    if !doc.membros_detalhes.is_empty() && doc.membros_familia.is_empty() {
        doc.membros_familia = nomes;
    }
}

fn apply_individual_rules(doc: &mut VisitorData) {
    doc.total_pessoas = 1;

    // Formulário novo: o primeiro membro completa os campos do topo que faltarem
    let Some(m0) = doc.membros_detalhes.first().cloned() else {
        return;
    };

    fill_if_missing(&mut doc.nome, m0.nome);
    fill_if_missing(&mut doc.sexo, m0.sexo);
    fill_if_missing(&mut doc.perfil_etario, m0.perfil_etario);
    fill_if_missing(&mut doc.tem_cargo, m0.tem_cargo);
    fill_if_missing(&mut doc.cargo, m0.cargo);
    if doc.cargo_label.is_empty() {
        doc.cargo_label = m0.cargo_label;
    }
}

fn fill_if_missing(slot: &mut Option<String>, fallback: String) {
    let missing = slot.as_deref().is_none_or(str::is_empty);
    if missing && !fallback.is_empty() {
        *slot = Some(fallback);
    }
}
