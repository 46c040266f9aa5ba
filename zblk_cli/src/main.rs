use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zblk_codecs::DeflateCodec;
use zblk_core::{
    compress_file, decompress_file, verify, Codec, PipelineOptions, Verdict, DEFAULT_BLOCK_SIZE,
};

// ── prompt helpers ─────────────────────────────────────────────────────────

/// Print `label` without a newline and read one trimmed line from stdin.
/// `None` means stdin was closed.
fn prompt(stdin: &mut impl BufRead, label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Thread-count prompt: integer > 0 or a usage error (reported by the
/// caller, no action taken).
fn prompt_threads(stdin: &mut impl BufRead) -> anyhow::Result<Option<usize>> {
    let Some(answer) = prompt(stdin, "- NUMERO DE HILOS: ")? else {
        return Ok(None);
    };
    match answer.parse::<i64>() {
        Ok(n) if n > 0 => Ok(Some(n as usize)),
        _ => {
            eprintln!("ERROR: el numero de hilos debe ser un entero mayor que cero");
            Ok(Some(0))
        }
    }
}

fn prompt_path(stdin: &mut impl BufRead, label: &str) -> anyhow::Result<Option<PathBuf>> {
    Ok(prompt(stdin, label)?.map(PathBuf::from))
}

// ── menu actions ───────────────────────────────────────────────────────────

fn run_compress(stdin: &mut impl BufRead) -> anyhow::Result<()> {
    let Some(threads) = prompt_threads(stdin)? else {
        return Ok(());
    };
    if threads == 0 {
        return Ok(()); // usage error already reported
    }
    let Some(input) = prompt_path(stdin, "- RUTA AL ARCHIVO DE ENTRADA: ")? else {
        return Ok(());
    };
    let Some(output) = prompt_path(stdin, "- RUTA AL ARCHIVO DE SALIDA: ")? else {
        return Ok(());
    };

    let options = PipelineOptions {
        threads,
        block_size: DEFAULT_BLOCK_SIZE,
    };
    let codec = DeflateCodec::default();
    match compress_file(&input, &output, &codec, &options) {
        Ok(report) => {
            if report.effective_threads < report.requested_threads {
                println!(
                    "AJUSTE: hilos reducidos de {} a {} (solo hay {} bloques)",
                    report.requested_threads, report.effective_threads, report.block_count
                );
            }
            println!("Archivo comprimido exitosamente: {}", output.display());
            println!("Codec utilizado: {}", codec.name());
            println!("Tamano original: {} bytes", report.original_size);
            println!("Tamano comprimido: {} bytes", report.compressed_size);
            println!("Tiempo transcurrido: {:.3} s", report.elapsed.as_secs_f64());
        }
        Err(e) => eprintln!("ERROR: {:#}", e),
    }
    Ok(())
}

fn run_decompress(stdin: &mut impl BufRead) -> anyhow::Result<()> {
    let Some(threads) = prompt_threads(stdin)? else {
        return Ok(());
    };
    if threads == 0 {
        return Ok(());
    }
    let Some(input) = prompt_path(stdin, "- RUTA AL ARCHIVO DE ENTRADA: ")? else {
        return Ok(());
    };
    let Some(output) = prompt_path(stdin, "- RUTA AL ARCHIVO DE SALIDA: ")? else {
        return Ok(());
    };

    let options = PipelineOptions {
        threads,
        block_size: DEFAULT_BLOCK_SIZE,
    };
    let codec = DeflateCodec::default();
    match decompress_file(&input, &output, &codec, &options) {
        Ok(report) => {
            if report.effective_threads < report.requested_threads {
                println!(
                    "AJUSTE: hilos reducidos de {} a {} (solo hay {} bloques)",
                    report.requested_threads, report.effective_threads, report.block_count
                );
            }
            println!("Archivo descomprimido exitosamente: {}", output.display());
            println!("Codec utilizado: {}", codec.name());
            println!("Tamano descomprimido: {} bytes", report.decompressed_size);
            println!("Tiempo transcurrido: {:.3} s", report.elapsed.as_secs_f64());
        }
        Err(e) => eprintln!("ERROR: {:#}", e),
    }
    Ok(())
}

fn run_verify(stdin: &mut impl BufRead) -> anyhow::Result<()> {
    let Some(left) = prompt_path(stdin, "- RUTA AL ARCHIVO ORIGINAL: ")? else {
        return Ok(());
    };
    let Some(right) = prompt_path(stdin, "- RUTA AL ARCHIVO A COMPARAR: ")? else {
        return Ok(());
    };

    match verify(&left, &right) {
        Ok(Verdict::Match) => println!("VERIFICACION: EXITOSA"),
        Ok(Verdict::SizeMismatch { left, right }) => println!(
            "VERIFICACION: FALLO - tamanos distintos ({} vs {} bytes)",
            left, right
        ),
        Ok(Verdict::ContentMismatch { offset }) => println!(
            "VERIFICACION: FALLO - contenido distinto en el byte {}",
            offset
        ),
        Err(e) => eprintln!("ERROR: {:#}", e),
    }
    Ok(())
}

// ── entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        println!("BIENVENIDO");
        println!("(1) Comprimir");
        println!("(2) Descomprimir");
        println!("(3) Verificar");
        println!("(0) Salir");
        let Some(option) = prompt(&mut stdin, ">>> ")? else {
            return Ok(()); // stdin closed
        };

        match option.as_str() {
            "1" => run_compress(&mut stdin)?,
            "2" => run_decompress(&mut stdin)?,
            "3" => run_verify(&mut stdin)?,
            "0" => return Ok(()),
            _ => {} // menu is reprinted on the next pass
        }
        println!();
    }
}
