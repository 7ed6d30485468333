use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = drug_checker::cli::Cli::parse();

    match cli.command {
        drug_checker::cli::Commands::Serve { ref host, port } => {
            init_tracing("info,tower_http=debug");
            match drug_checker::server::run_http(host, port, cli.timeout()).await {
                Ok(()) => std::process::ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::ExitCode::from(1)
                }
            }
        }
        _ => {
            init_tracing("warn");
            match drug_checker::cli::run(cli).await {
                Ok(output) => {
                    println!("{output}");
                    std::process::ExitCode::SUCCESS
                }
                Err(err) => {
                    if let Some(app_err) = err.downcast_ref::<drug_checker::error::DrugCheckerError>()
                    {
                        eprintln!("Error: {app_err}");
                    } else {
                        eprintln!("Error: {err}");
                    }
                    std::process::ExitCode::from(1)
                }
            }
        }
    }
}
