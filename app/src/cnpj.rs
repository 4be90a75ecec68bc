use crate::error::ConsultaError;

pub const TAMANHO_CNPJ: usize = 14;

const PESOS_DV1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const PESOS_DV2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Remove tudo que não for dígito decimal (pontos, barras, traços, espaços...).
pub fn normalizar(entrada: &str) -> String {
    entrada.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Valida a entrada bruta e devolve o CNPJ normalizado.
///
/// A verificação dos dígitos verificadores só acontece com `verificar_dv`;
/// sem ela basta ter 14 dígitos.
pub fn validar(entrada: &str, verificar_dv: bool) -> Result<String, ConsultaError> {
    if entrada.is_empty() {
        return Err(ConsultaError::EntradaVazia);
    }

    let cnpj = normalizar(entrada);
    if cnpj.len() != TAMANHO_CNPJ {
        return Err(ConsultaError::TamanhoInvalido);
    }

    if verificar_dv && !digitos_verificadores_conferem(&cnpj) {
        return Err(ConsultaError::DigitoVerificador);
    }

    Ok(cnpj)
}

/// Algoritmo módulo 11 da Receita Federal. Espera exatamente 14 dígitos.
pub fn digitos_verificadores_conferem(cnpj: &str) -> bool {
    let digitos: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();
    if digitos.len() != TAMANHO_CNPJ || cnpj.len() != TAMANHO_CNPJ {
        return false;
    }

    // Sequências repetidas passam na conta mas não são CNPJs emitidos
    if digitos.iter().all(|&d| d == digitos[0]) {
        return false;
    }

    let dv1 = calcular_dv(&digitos[..12], &PESOS_DV1);
    let dv2 = calcular_dv(&digitos[..13], &PESOS_DV2);

    digitos[12] == dv1 && digitos[13] == dv2
}

fn calcular_dv(digitos: &[u32], pesos: &[u32]) -> u32 {
    let soma: u32 = digitos.iter().zip(pesos).map(|(d, p)| d * p).sum();
    match soma % 11 {
        0 | 1 => 0,
        resto => 11 - resto,
    }
}
