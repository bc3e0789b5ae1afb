use clap::Parser;
use markgone::application::{ConvertOptions, ConvertService, ListTagsService};
use markgone::cli::{format_conversion_report, format_tag_list, Cli, Commands};
use markgone::error::{MarkgoneError, Result};
use markgone::infrastructure::{read_document, write_output, Config};
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Some(Commands::Convert { path, out_dir }) => {
            let service = ConvertService::new(config);
            let report = service.execute(&ConvertOptions {
                input: path,
                out_dir,
            })?;
            print!("{}", format_conversion_report(&report));
            Ok(())
        }
        Some(Commands::Tags { path }) => {
            let service = ListTagsService::new(config);
            let tags = service.execute(&path)?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        None => {
            let text = match cli.input.as_deref() {
                None => read_stdin()?,
                Some(path) if path == Path::new("-") => read_stdin()?,
                Some(path) => read_document(path)?,
            };

            let service = ConvertService::new(config);
            match cli.output {
                Some(output) => {
                    let mut html = Vec::new();
                    service.convert_text(&text, &mut html)?;
                    write_output(&output, &html)?;
                    tracing::info!(output = %output.display(), "wrote document");
                }
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    service.convert_text(&text, &mut out)?;
                    out.flush()?;
                }
            }
            Ok(())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(MarkgoneError::Io)?;
    Ok(text)
}
