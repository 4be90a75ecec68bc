mod api;
mod cnpj;
mod error;
mod flow;
mod models;
mod render;
mod ui;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "consulta-cnpj", version)]
#[command(about = "Consulta dados públicos de CNPJ na BrasilAPI", long_about = None)]
struct Cli {
    /// Modo silencioso (menos saída)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Modo verboso (mais detalhes)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Imprime a resposta da API em JSON em vez do relatório
    #[arg(long, global = true)]
    json: bool,

    /// Endereço base da API de consulta
    #[arg(long, global = true, default_value = api::URL_BRASILAPI)]
    api_url: String,

    /// Confere também os dígitos verificadores do CNPJ
    #[arg(long, global = true)]
    verificar_dv: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consulta um único CNPJ
    Consultar {
        /// CNPJ com pontos, barras e traços ou apenas números
        cnpj: String,
    },
    /// Lê CNPJs do terminal, um por linha, até "sair"
    Interativo,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    ui::init(cli.quiet, cli.verbose);

    let cliente = api::ClienteBrasilApi::new(&cli.api_url)?;
    let opcoes = flow::Opcoes {
        verificar_dv: cli.verificar_dv,
        json: cli.json,
    };

    if !cli.json {
        flow::exibir_cabecalho();
    }

    match cli.command {
        Commands::Consultar { cnpj } => {
            if flow::executar(&cliente, &cnpj, &opcoes).await == flow::Etapa::ErroExibido {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Interativo => {
            flow::sessao_interativa(&cliente, &opcoes).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
