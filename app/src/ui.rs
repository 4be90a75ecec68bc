use colored::*;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::render::{Banner, Relatorio, SEPARADOR};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(quiet: bool, verbose: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_header(message: &str) {
    if !is_quiet() {
        println!("\n{}", message.bold().cyan());
        println!("{}", "─".repeat(message.chars().count()).cyan());
    }
}

pub fn print_verbose(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

pub fn print_separator() {
    if !is_quiet() {
        println!("{}", SEPARADOR.dimmed());
    }
}

/// Exibe banner e seções. O conteúdo das seções sai mesmo em modo silencioso.
pub fn exibir_relatorio(relatorio: &Relatorio) {
    match &relatorio.banner {
        Banner::Sucesso(msg) => {
            print_separator();
            print_success(msg);
        }
        Banner::Erro(msg) => print_error(msg),
    }

    for secao in &relatorio.secoes {
        print_separator();
        println!("{}", secao.titulo.bold());
        for linha in &secao.linhas {
            if linha == SEPARADOR {
                println!("{}", linha.dimmed());
            } else {
                println!("{}", linha);
            }
        }
    }
}

/// Lê uma linha do terminal. `None` quando a entrada termina (EOF).
pub fn ler_entrada(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt.bold());
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let linha = input.trim_end_matches(&['\n', '\r'][..]);
    Ok(Some(linha.to_string()))
}
