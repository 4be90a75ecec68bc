use serde_json::json;

use crate::error::ConsultaError;
use crate::models::{CompanyRecord, PADRAO};
use crate::utils;

pub const SEPARADOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Sucesso(String),
    Erro(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secao {
    pub titulo: String,
    pub linhas: Vec<String>,
}

/// Saída de uma submissão, na ordem em que é exibida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relatorio {
    pub banner: Banner,
    pub secoes: Vec<Secao>,
}

pub fn relatorio_erro(erro: &ConsultaError) -> Relatorio {
    Relatorio {
        banner: Banner::Erro(erro.to_string()),
        secoes: Vec::new(),
    }
}

pub fn relatorio_empresa(empresa: &CompanyRecord) -> Relatorio {
    Relatorio {
        banner: Banner::Sucesso("Dados encontrados com sucesso!".to_string()),
        secoes: vec![
            secao_empresa(empresa),
            secao_endereco(empresa),
            secao_socios(empresa),
            secao_atividades(empresa),
        ],
    }
}

// Formatadores só se aplicam a valores presentes; o padrão aparece como está
fn formatado(empresa: &CompanyRecord, chave: &str, formatar: fn(&str) -> String) -> String {
    empresa
        .texto(chave)
        .map(|valor| formatar(&valor))
        .unwrap_or_else(|| PADRAO.to_string())
}

fn secao_empresa(empresa: &CompanyRecord) -> Secao {
    let capital = empresa.valor("capital_social").cloned().unwrap_or(json!(0));

    Secao {
        titulo: "Informações da Empresa:".to_string(),
        linhas: vec![
            format!("🏛️ Razão Social: {}", empresa.campo("razao_social")),
            format!("🏷️ Nome Fantasia: {}", empresa.campo("nome_fantasia")),
            format!("🏢 CNPJ: {}", formatado(empresa, "cnpj", utils::formatar_cnpj)),
            format!("💰 Capital Social: {}", utils::formatar_moeda(&capital)),
            format!(
                "🗓️ Data de Abertura: {}",
                formatado(empresa, "data_inicio_atividade", utils::formatar_data)
            ),
            format!(
                "📞 Telefones: {}, {}",
                formatado(empresa, "ddd_telefone_1", utils::formatar_telefone),
                formatado(empresa, "ddd_telefone_2", utils::formatar_telefone)
            ),
        ],
    }
}

fn secao_endereco(empresa: &CompanyRecord) -> Secao {
    let logradouro = format!(
        "{} {}, {} {}",
        empresa.campo("descricao_tipo_de_logradouro"),
        empresa.campo("logradouro"),
        empresa.campo("numero"),
        empresa.campo("complemento")
    );
    let regime = empresa
        .regime_atual()
        .map(|r| r.forma_de_tributacao)
        .unwrap_or_else(|| PADRAO.to_string());

    Secao {
        titulo: "Endereço:".to_string(),
        linhas: vec![
            format!("📍 Endereço: {}", logradouro.trim_end()),
            format!(
                "{} - {}/{}",
                empresa.campo("bairro"),
                empresa.campo("municipio"),
                empresa.campo("uf")
            ),
            format!("📮 CEP: {}", formatado(empresa, "cep", utils::formatar_cep)),
            format!("📩 E-mail: {}", empresa.campo("email")),
            format!(
                "💼 Situação Cadastral: {}",
                empresa.campo("descricao_situacao_cadastral")
            ),
            format!(
                "🗓️ Data da Situação Cadastral: {}",
                formatado(empresa, "data_situacao_cadastral", utils::formatar_data)
            ),
            format!("📜 Regime de Tributação: {}", regime),
        ],
    }
}

fn secao_socios(empresa: &CompanyRecord) -> Secao {
    let socios = empresa.socios();
    let mut linhas = Vec::new();

    if socios.is_empty() {
        linhas.push("Nenhum sócio encontrado.".to_string());
    }

    for (i, socio) in socios.iter().enumerate() {
        if i > 0 {
            linhas.push(SEPARADOR.to_string());
        }
        let entrada = socio
            .data_entrada
            .as_deref()
            .map(utils::formatar_data)
            .unwrap_or_else(|| PADRAO.to_string());

        linhas.push(format!("- Nome: {} ({})", socio.nome, socio.qualificacao));
        linhas.push(format!("- CPF/CNPJ: {}", socio.documento));
        linhas.push(format!("- Data de Entrada na Sociedade: {}", entrada));
    }

    Secao {
        titulo: "🧑‍💼 Sócios:".to_string(),
        linhas,
    }
}

fn secao_atividades(empresa: &CompanyRecord) -> Secao {
    let mut linhas = vec![
        "Atividade Principal:".to_string(),
        format!("- {}", empresa.campo("cnae_fiscal_descricao")),
    ];

    let secundarias = empresa.atividades_secundarias();
    if !secundarias.is_empty() {
        linhas.push("Atividades Secundárias:".to_string());
        linhas.extend(secundarias.iter().map(|a| format!("- {}", a.descricao)));
    }

    Secao {
        titulo: "📝 Atividades:".to_string(),
        linhas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn registro(valor: Value) -> CompanyRecord {
        CompanyRecord::from_value(valor).unwrap()
    }

    fn completo() -> CompanyRecord {
        registro(json!({
            "cnpj": "11222333000181",
            "razao_social": "EMPRESA EXEMPLO LTDA",
            "nome_fantasia": "EXEMPLO",
            "capital_social": 150000,
            "data_inicio_atividade": "2005-09-12",
            "ddd_telefone_1": "1133334444",
            "ddd_telefone_2": "11987654321",
            "descricao_tipo_de_logradouro": "AVENIDA",
            "logradouro": "PAULISTA",
            "numero": "1000",
            "complemento": "ANDAR 5",
            "bairro": "BELA VISTA",
            "municipio": "SAO PAULO",
            "uf": "SP",
            "cep": "01310100",
            "email": "contato@exemplo.com.br",
            "descricao_situacao_cadastral": "ATIVA",
            "data_situacao_cadastral": "2005-09-12",
            "regime_tributario": [
                { "ano": 2021, "forma_de_tributacao": "LUCRO PRESUMIDO" },
                { "ano": 2023, "forma_de_tributacao": "LUCRO REAL" }
            ],
            "qsa": [
                {
                    "nome_socio": "MARIA DA SILVA",
                    "qualificacao_socio": "Sócio-Administrador",
                    "cnpj_cpf_do_socio": "***123456**",
                    "data_entrada_sociedade": "2005-09-12"
                },
                {
                    "nome_socio": "JOAO SOUZA",
                    "qualificacao_socio": "Sócio",
                    "cnpj_cpf_do_socio": "***654321**",
                    "data_entrada_sociedade": "2010-01-20"
                }
            ],
            "cnae_fiscal_descricao": "Desenvolvimento de programas de computador sob encomenda",
            "cnaes_secundarios": [
                { "codigo": 6204000, "descricao": "Consultoria em tecnologia da informação" }
            ]
        }))
    }

    #[test]
    fn ordem_das_secoes() {
        let relatorio = relatorio_empresa(&completo());
        assert_eq!(
            relatorio.banner,
            Banner::Sucesso("Dados encontrados com sucesso!".to_string())
        );
        let titulos: Vec<&str> = relatorio.secoes.iter().map(|s| s.titulo.as_str()).collect();
        assert_eq!(
            titulos,
            vec![
                "Informações da Empresa:",
                "Endereço:",
                "🧑‍💼 Sócios:",
                "📝 Atividades:"
            ]
        );
    }

    #[test]
    fn bloco_da_empresa_formatado() {
        let relatorio = relatorio_empresa(&completo());
        assert_eq!(
            relatorio.secoes[0].linhas,
            vec![
                "🏛️ Razão Social: EMPRESA EXEMPLO LTDA",
                "🏷️ Nome Fantasia: EXEMPLO",
                "🏢 CNPJ: 11.222.333/0001-81",
                "💰 Capital Social: R$150.000,00",
                "🗓️ Data de Abertura: 12/09/2005",
                "📞 Telefones: (11) 3333-4444, (11) 98765-4321",
            ]
        );
    }

    #[test]
    fn bloco_de_endereco_usa_ultimo_regime() {
        let relatorio = relatorio_empresa(&completo());
        assert_eq!(
            relatorio.secoes[1].linhas,
            vec![
                "📍 Endereço: AVENIDA PAULISTA, 1000 ANDAR 5",
                "BELA VISTA - SAO PAULO/SP",
                "📮 CEP: 01310-100",
                "📩 E-mail: contato@exemplo.com.br",
                "💼 Situação Cadastral: ATIVA",
                "🗓️ Data da Situação Cadastral: 12/09/2005",
                "📜 Regime de Tributação: LUCRO REAL",
            ]
        );
    }

    #[test]
    fn socios_separados() {
        let relatorio = relatorio_empresa(&completo());
        assert_eq!(
            relatorio.secoes[2].linhas,
            vec![
                "- Nome: MARIA DA SILVA (Sócio-Administrador)",
                "- CPF/CNPJ: ***123456**",
                "- Data de Entrada na Sociedade: 12/09/2005",
                "---",
                "- Nome: JOAO SOUZA (Sócio)",
                "- CPF/CNPJ: ***654321**",
                "- Data de Entrada na Sociedade: 20/01/2010",
            ]
        );
    }

    #[test]
    fn atividades_principal_e_secundarias() {
        let relatorio = relatorio_empresa(&completo());
        assert_eq!(
            relatorio.secoes[3].linhas,
            vec![
                "Atividade Principal:",
                "- Desenvolvimento de programas de computador sob encomenda",
                "Atividades Secundárias:",
                "- Consultoria em tecnologia da informação",
            ]
        );
    }

    #[test]
    fn registro_vazio_usa_padroes() {
        let relatorio = relatorio_empresa(&registro(json!({})));

        assert_eq!(
            relatorio.secoes[0].linhas,
            vec![
                "🏛️ Razão Social: N/A",
                "🏷️ Nome Fantasia: N/A",
                "🏢 CNPJ: N/A",
                "💰 Capital Social: R$0,00",
                "🗓️ Data de Abertura: N/A",
                "📞 Telefones: N/A, N/A",
            ]
        );
        assert_eq!(relatorio.secoes[1].linhas[0], "📍 Endereço: N/A N/A, N/A N/A");
        assert_eq!(relatorio.secoes[1].linhas[2], "📮 CEP: N/A");
        assert_eq!(relatorio.secoes[1].linhas[6], "📜 Regime de Tributação: N/A");
        assert_eq!(relatorio.secoes[2].linhas, vec!["Nenhum sócio encontrado."]);
        assert_eq!(
            relatorio.secoes[3].linhas,
            vec!["Atividade Principal:", "- N/A"]
        );
    }

    #[test]
    fn complemento_vazio_nao_deixa_espaco_no_fim() {
        let empresa = registro(json!({
            "descricao_tipo_de_logradouro": "RUA",
            "logradouro": "DAS FLORES",
            "numero": "10",
            "complemento": ""
        }));
        let relatorio = relatorio_empresa(&empresa);
        assert_eq!(relatorio.secoes[1].linhas[0], "📍 Endereço: RUA DAS FLORES, 10");
    }

    #[test]
    fn capital_em_texto() {
        let empresa = registro(json!({ "capital_social": "2500.75" }));
        let relatorio = relatorio_empresa(&empresa);
        assert_eq!(relatorio.secoes[0].linhas[3], "💰 Capital Social: R$2.500,75");
    }

    #[test]
    fn erro_so_tem_banner() {
        let relatorio = relatorio_erro(&ConsultaError::NaoEncontrado);
        assert_eq!(
            relatorio.banner,
            Banner::Erro("CNPJ não encontrado na base de dados.".to_string())
        );
        assert!(relatorio.secoes.is_empty());
    }
}
