use clap::Parser;
use tracing_subscriber::EnvFilter;

use version_checker::logging::TracingLogger;
use version_checker::version::checker::VersionChecker;

#[derive(Parser)]
#[command(name = "version-checker")]
#[command(version, about = "Checks GitHub for a newer AIStudioToAPI release")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr so the JSON result stays alone on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(VersionChecker::default().with_logger(Box::new(TracingLogger)).check_for_updates());

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
