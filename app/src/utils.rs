use serde_json::Value;

const MOEDA_ZERO: &str = "R$0";
const MARCADOR_MILHAR: &str = "__TH__";

// Fatias por caractere para nunca cortar no meio de um código UTF-8
fn fatia(texto: &str, inicio: usize, fim: usize) -> String {
    texto
        .chars()
        .skip(inicio)
        .take(fim.saturating_sub(inicio))
        .collect()
}

fn resto(texto: &str, inicio: usize) -> String {
    texto.chars().skip(inicio).collect()
}

/// `11222333000181` -> `11.222.333/0001-81`
pub fn formatar_cnpj(cnpj: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        fatia(cnpj, 0, 2),
        fatia(cnpj, 2, 5),
        fatia(cnpj, 5, 8),
        fatia(cnpj, 8, 12),
        fatia(cnpj, 12, 14)
    )
}

/// `01310100` -> `01310-100`
pub fn formatar_cep(cep: &str) -> String {
    format!("{}-{}", fatia(cep, 0, 5), resto(cep, 5))
}

/// Fixo com 10 dígitos, celular com 11. Outros tamanhos voltam sem alteração.
pub fn formatar_telefone(telefone: &str) -> String {
    match telefone.chars().count() {
        10 => format!(
            "({}) {}-{}",
            fatia(telefone, 0, 2),
            fatia(telefone, 2, 6),
            resto(telefone, 6)
        ),
        11 => format!(
            "({}) {}-{}",
            fatia(telefone, 0, 2),
            fatia(telefone, 2, 7),
            resto(telefone, 7)
        ),
        _ => telefone.to_string(),
    }
}

/// Formata valores monetários no padrão brasileiro, sempre com duas casas.
///
/// Aceita número JSON ou string numérica. Nulo, string vazia ou qualquer
/// valor que não vire número finito resulta em `R$0`.
pub fn formatar_moeda(valor: &Value) -> String {
    let numero = match valor {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(numero) = numero.filter(|n| n.is_finite()) else {
        return MOEDA_ZERO.to_string();
    };

    // 1234.5 -> "1,234.50" -> "1.234,50"
    let formatado = agrupar_milhares(numero)
        .replace(',', MARCADOR_MILHAR)
        .replace('.', ",")
        .replace(MARCADOR_MILHAR, ".");

    format!("R${}", formatado)
}

// Convenção de origem: vírgula separa milhares, ponto separa decimais
fn agrupar_milhares(numero: f64) -> String {
    let texto = format!("{:.2}", numero);
    let (sinal, corpo) = match texto.strip_prefix('-') {
        Some(corpo) => ("-", corpo),
        None => ("", texto.as_str()),
    };
    let (inteiro, decimais) = corpo.split_once('.').unwrap_or((corpo, "00"));

    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, c) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push(',');
        }
        agrupado.push(c);
    }

    format!("{}{}.{}", sinal, agrupado, decimais)
}

/// Converte data do formato `YYYY-MM-DD` para `DD/MM/YYYY`.
pub fn formatar_data(data: &str) -> String {
    match data.split('-').collect::<Vec<_>>().as_slice() {
        [ano, mes, dia] => format!("{}/{}/{}", dia, mes, ano),
        _ => data.to_string(),
    }
}
