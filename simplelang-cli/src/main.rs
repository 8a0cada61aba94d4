//! Entrypoint for CLI
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use log::{debug, error, info};
use simplelang::{compile_str, CompileError, CompileResult, Compilation, IMPL_VERSION};

static USAGE: &str = r#"
usage: simplec CMD [FILE] [OUTDIR]

commands:
    build   Compile FILE (default input.txt) and write the token, syntax
            tree and assembly listings into OUTDIR (default .)
    tokens  Print the token listing of FILE
    ast     Print the syntax tree listing of FILE
    asm     Print the assembly listing of FILE

examples:
    simplec build
    simplec build program.txt out
    simplec asm program.txt
"#;

const DEFAULT_INPUT: &str = "input.txt";
const TOKENS_FILE: &str = "tokens.txt";
const AST_FILE: &str = "ast_output.txt";
const ASM_FILE: &str = "output.asm";

fn read_source(filepath: impl AsRef<Path>) -> CompileResult<String> {
    let file_bytes = fs::read(filepath.as_ref())?;
    let source_code = String::from_utf8(file_bytes)?;
    Ok(source_code)
}

/// Compile, printing a report that quotes the offending line on failure.
fn compile_file(filepath: impl AsRef<Path>) -> CompileResult<Compilation> {
    let source_code = read_source(filepath.as_ref())?;

    compile_str(&source_code).map_err(|err| {
        error!(
            "{}: compilation failed\n{}",
            filepath.as_ref().display(),
            err.report(&source_code)
        );
        err
    })
}

fn run_build(filepath: PathBuf, outdir: PathBuf) -> CompileResult<()> {
    info!("Starting Compilation...");

    // All phases run before anything is written, so a failed
    // compilation never leaves partial listings behind.
    let compilation = compile_file(&filepath)?;

    for (name, addr) in compilation.symbols.iter() {
        debug!("{name} -> M {addr}");
    }

    fs::create_dir_all(&outdir)?;

    info!("Generating Tokens...");
    fs::write(outdir.join(TOKENS_FILE), compilation.token_listing())?;

    info!("Generating AST...");
    fs::write(outdir.join(AST_FILE), compilation.ast_listing())?;

    info!("Generating Assembly...");
    fs::write(outdir.join(ASM_FILE), compilation.asm_listing())?;

    info!("Compilation Completed Successfully!");

    Ok(())
}

fn run_print(filepath: PathBuf, listing: fn(&Compilation) -> String) -> CompileResult<()> {
    let compilation = compile_file(filepath)?;
    print!("{}", listing(&compilation));
    Ok(())
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let result: Result<(), CompileError> = match parse_args() {
        Some(Cmd::Build { filepath, outdir }) => run_build(filepath, outdir),
        Some(Cmd::Tokens { filepath }) => run_print(filepath, Compilation::token_listing),
        Some(Cmd::Ast { filepath }) => run_print(filepath, Compilation::ast_listing),
        Some(Cmd::Asm { filepath }) => run_print(filepath, Compilation::asm_listing),
        None => {
            print_usage();
            // FreeBSD EX_USAGE (64)
            process::exit(64)
        }
    };

    if let Err(err) = result {
        // Source errors were already reported with context.
        if err.line().is_none() {
            error!("{err}");
        }
        process::exit(1)
    }
}

fn parse_args() -> Option<Cmd> {
    let mut args = env::args().skip(1);
    match args.next() {
        Some(cmd) => {
            // don't format me T.T
            match cmd.as_str() {
                "build" => Some(Cmd::Build {
                    filepath: args.next().unwrap_or_else(|| DEFAULT_INPUT.to_owned()).into(),
                    outdir: args.next().unwrap_or_else(|| ".".to_owned()).into(),
                }),
                "tokens" => Some(Cmd::Tokens {
                    filepath: args.next()?.into(),
                }),
                "ast" => Some(Cmd::Ast {
                    filepath: args.next()?.into(),
                }),
                "asm" => Some(Cmd::Asm {
                    filepath: args.next()?.into(),
                }),
                _ => None,
            }
        }
        None => None,
    }
}

fn print_usage() {
    println!("simplec v{IMPL_VERSION}");
    println!("{USAGE}");
}

enum Cmd {
    /// Compile and write all listings
    Build { filepath: PathBuf, outdir: PathBuf },
    /// Print tokens
    Tokens { filepath: PathBuf },
    /// Print syntax tree
    Ast { filepath: PathBuf },
    /// Print assembly
    Asm { filepath: PathBuf },
}
