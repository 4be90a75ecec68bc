use serde_json::{Map, Value};

use crate::error::ConsultaError;

/// Valor exibido quando o campo não existe na resposta ou é nulo.
pub const PADRAO: &str = "N/A";

/// Lê `chave` de `container` como texto, devolvendo `padrao` se ausente ou nulo.
pub fn campo(container: &Map<String, Value>, chave: &str, padrao: &str) -> String {
    match presente(container, chave) {
        Some(Value::String(s)) => s.clone(),
        Some(outro) => outro.to_string(),
        None => padrao.to_string(),
    }
}

/// O valor de `chave`, exceto quando ausente ou nulo.
pub fn presente<'a>(container: &'a Map<String, Value>, chave: &str) -> Option<&'a Value> {
    container.get(chave).filter(|v| !v.is_null())
}

fn texto(container: &Map<String, Value>, chave: &str) -> Option<String> {
    presente(container, chave).map(|_| campo(container, chave, PADRAO))
}

// Itens que não são objetos viram `None` e são lidos como registros vazios
fn objetos<'a>(
    container: &'a Map<String, Value>,
    chave: &str,
) -> Vec<Option<&'a Map<String, Value>>> {
    match presente(container, chave) {
        Some(Value::Array(itens)) => itens.iter().map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn campo_de(item: Option<&Map<String, Value>>, chave: &str) -> String {
    item.map_or_else(|| PADRAO.to_string(), |m| campo(m, chave, PADRAO))
}

/// Resposta da BrasilAPI. Sem esquema fixo: cada campo é lido sob demanda.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    campos: Map<String, Value>,
}

impl CompanyRecord {
    pub fn from_value(valor: Value) -> Result<Self, ConsultaError> {
        match valor {
            Value::Object(campos) => Ok(Self { campos }),
            outro => Err(ConsultaError::Requisicao(format!(
                "resposta inesperada da API, esperado objeto JSON e recebido {}",
                tipo_json(&outro)
            ))),
        }
    }

    pub fn campos(&self) -> &Map<String, Value> {
        &self.campos
    }

    pub fn campo(&self, chave: &str) -> String {
        campo(&self.campos, chave, PADRAO)
    }

    pub fn texto(&self, chave: &str) -> Option<String> {
        texto(&self.campos, chave)
    }

    pub fn valor(&self, chave: &str) -> Option<&Value> {
        presente(&self.campos, chave)
    }

    /// Quadro de sócios e administradores (QSA).
    pub fn socios(&self) -> Vec<PartnerRecord> {
        objetos(&self.campos, "qsa")
            .into_iter()
            .map(PartnerRecord::from_map)
            .collect()
    }

    pub fn atividades_secundarias(&self) -> Vec<ActivityRecord> {
        objetos(&self.campos, "cnaes_secundarios")
            .into_iter()
            .map(ActivityRecord::from_map)
            .collect()
    }

    /// O último regime da lista é o mais recente.
    pub fn regime_atual(&self) -> Option<TaxRegimeRecord> {
        objetos(&self.campos, "regime_tributario")
            .last()
            .map(|regime| TaxRegimeRecord::from_map(*regime))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerRecord {
    pub nome: String,
    pub qualificacao: String,
    pub documento: String,
    pub data_entrada: Option<String>,
}

impl PartnerRecord {
    fn from_map(socio: Option<&Map<String, Value>>) -> Self {
        Self {
            nome: campo_de(socio, "nome_socio"),
            qualificacao: campo_de(socio, "qualificacao_socio"),
            documento: campo_de(socio, "cnpj_cpf_do_socio"),
            data_entrada: socio.and_then(|m| texto(m, "data_entrada_sociedade")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub descricao: String,
}

impl ActivityRecord {
    fn from_map(atividade: Option<&Map<String, Value>>) -> Self {
        Self {
            descricao: campo_de(atividade, "descricao"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRegimeRecord {
    pub forma_de_tributacao: String,
}

impl TaxRegimeRecord {
    fn from_map(regime: Option<&Map<String, Value>>) -> Self {
        Self {
            forma_de_tributacao: campo_de(regime, "forma_de_tributacao"),
        }
    }
}

fn tipo_json(valor: &Value) -> &'static str {
    match valor {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "texto",
        Value::Array(_) => "lista",
        Value::Object(_) => "objeto",
    }
}
