// src/common/coerce.rs

// Conversões tolerantes de valores JSON vindos do formulário.
// Nada aqui rejeita entrada: o que não serve vira vazio/padrão.

use serde_json::Value;

/// Texto "como veio": strings intactas, números e booleanos no formato textual.
/// `null`, arrays e objetos contam como ausentes.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Texto aparado, com `""` quando ausente. `0` e `false` também contam
/// como vazios, como o formulário sempre tratou.
pub fn trimmed_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        other => text(other).map(|s| s.trim().to_string()).unwrap_or_default(),
    }
}

/// Flag booleana no estilo do formulário ("sim", "true", 1...).
pub fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "sim" | "yes"
        ),
        _ => false,
    }
}

/// Mantém só os dígitos (CPF digitado com pontos, traços, espaços...).
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
