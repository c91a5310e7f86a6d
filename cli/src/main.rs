use clap::Parser;
use docu_mind::{run, Args, Style};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let style = Style::detect(args.no_color || std::env::var_os("NO_COLOR").is_some());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&args, style, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{}", style.error(&format!("Error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}
