use thiserror::Error;

/// Falhas de uma submissão, cada uma com a mensagem exibida ao usuário.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsultaError {
    #[error("Por favor, insira um CNPJ válido.")]
    EntradaVazia,

    #[error("CNPJ inválido. Certifique-se de que o CNPJ possui 14 dígitos.")]
    TamanhoInvalido,

    #[error("CNPJ inválido. Os dígitos verificadores não conferem.")]
    DigitoVerificador,

    /// Qualquer status diferente de 200. O código não é exposto ao usuário.
    #[error("CNPJ não encontrado na base de dados.")]
    NaoEncontrado,

    /// Falha de transporte ou de leitura do corpo da resposta.
    #[error("Ocorreu um erro ao consultar o CNPJ: {0}")]
    Requisicao(String),
}

impl From<reqwest::Error> for ConsultaError {
    fn from(err: reqwest::Error) -> Self {
        // `{:#}` inclui toda a cadeia de `source()`, onde está a causa real
        ConsultaError::Requisicao(format!("{:#}", anyhow::Error::from(err)))
    }
}
