use anyhow::Result;
use chrono::Local;

use crate::api::FonteCnpj;
use crate::cnpj;
use crate::error::ConsultaError;
use crate::models::CompanyRecord;
use crate::render;
use crate::ui;

pub const TITULO: &str = "Consulta CNPJ (BrasilAPI)🔎";
const INSTRUCAO: &str =
    "Digite um CNPJ válido para consultar informações da empresa correspondente.";
const AJUDA: &str = "Aceita CNPJ com pontos, barras e traços ou apenas números.";
const COMANDO_SAIR: &str = "sair";

/// Etapas de uma submissão. Toda submissão começa e termina em `Ocioso`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Etapa {
    Ocioso,
    Validando,
    Consultando,
    Renderizando,
    ErroExibido,
}

#[derive(Debug, Clone, Default)]
pub struct Opcoes {
    pub verificar_dv: bool,
    pub json: bool,
}

fn entrar(etapa: Etapa) {
    ui::print_verbose(&format!("etapa: {:?}", etapa));
}

/// Valida a entrada e, só se ela for válida, faz a consulta.
pub async fn submeter<F: FonteCnpj>(
    fonte: &F,
    entrada: &str,
    opcoes: &Opcoes,
) -> Result<CompanyRecord, ConsultaError> {
    entrar(Etapa::Validando);
    let cnpj = cnpj::validar(entrada, opcoes.verificar_dv)?;

    entrar(Etapa::Consultando);
    fonte.buscar(&cnpj).await
}

/// Processa uma submissão completa e exibe o resultado. Erros param aqui.
pub async fn executar<F: FonteCnpj>(fonte: &F, entrada: &str, opcoes: &Opcoes) -> Etapa {
    entrar(Etapa::Ocioso);

    let etapa_final = match submeter(fonte, entrada, opcoes).await {
        Ok(empresa) => {
            entrar(Etapa::Renderizando);
            exibir_empresa(&empresa, opcoes);
            Etapa::Renderizando
        }
        Err(erro) => {
            entrar(Etapa::ErroExibido);
            ui::exibir_relatorio(&render::relatorio_erro(&erro));
            Etapa::ErroExibido
        }
    };

    entrar(Etapa::Ocioso);
    etapa_final
}

fn exibir_empresa(empresa: &CompanyRecord, opcoes: &Opcoes) {
    if opcoes.json {
        match serde_json::to_string_pretty(empresa.campos()) {
            Ok(texto) => println!("{}", texto),
            Err(e) => ui::print_error(&format!("Falha ao serializar resposta: {}", e)),
        }
        return;
    }

    ui::exibir_relatorio(&render::relatorio_empresa(empresa));
    ui::print_separator();
    ui::print_info(&format!(
        "Consulta realizada em {}",
        Local::now().format("%d/%m/%Y %H:%M:%S")
    ));
}

pub fn exibir_cabecalho() {
    ui::print_header(TITULO);
    ui::print_info(INSTRUCAO);
}

/// Uma submissão por linha até `sair` ou fim da entrada.
pub async fn sessao_interativa<F: FonteCnpj>(fonte: &F, opcoes: &Opcoes) -> Result<()> {
    ui::print_info(AJUDA);
    ui::print_info(&format!("Digite \"{}\" para encerrar.", COMANDO_SAIR));

    loop {
        let Some(entrada) = ui::ler_entrada("CNPJ: ")? else {
            println!();
            break;
        };
        if entrada.trim().eq_ignore_ascii_case(COMANDO_SAIR) {
            break;
        }

        executar(fonte, &entrada, opcoes).await;
    }

    Ok(())
}
