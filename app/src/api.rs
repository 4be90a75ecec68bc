use anyhow::Context;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ConsultaError;
use crate::models::CompanyRecord;
use crate::ui;

pub const URL_BRASILAPI: &str = "https://brasilapi.com.br/api/cnpj/v1";

/// Origem dos dados de uma consulta. Uma chamada por submissão, sem repetição.
pub(crate) trait FonteCnpj {
    async fn buscar(&self, cnpj: &str) -> Result<CompanyRecord, ConsultaError>;
}

pub struct ClienteBrasilApi {
    http: reqwest::Client,
    base_url: String,
}

impl ClienteBrasilApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        // Sem timeout próprio: vale o padrão do transporte
        let http = reqwest::Client::builder()
            .user_agent(concat!("consulta-cnpj/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Falha ao criar cliente HTTP")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_consulta(&self, cnpj: &str) -> String {
        format!("{}/{}", self.base_url, cnpj)
    }
}

impl FonteCnpj for ClienteBrasilApi {
    async fn buscar(&self, cnpj: &str) -> Result<CompanyRecord, ConsultaError> {
        let url = self.url_consulta(cnpj);
        ui::print_verbose(&format!("GET {}", url));

        let resposta = self.http.get(&url).send().await?;
        interpretar_resposta(resposta).await
    }
}

/// 200 vira registro; qualquer outro status é "não encontrado".
pub async fn interpretar_resposta(
    resposta: reqwest::Response,
) -> Result<CompanyRecord, ConsultaError> {
    let status = resposta.status();
    if status != StatusCode::OK {
        ui::print_verbose(&format!("API respondeu com status {}", status));
        return Err(ConsultaError::NaoEncontrado);
    }

    let corpo: Value = resposta.json().await?;
    CompanyRecord::from_value(corpo)
}
