use clap::Parser;
use gcse_client::{
    ApiClient, Config,
    config::Args,
    smoke::{SmokeOptions, run_smoke_suite},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before anything else that might build a TLS client
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry()?;
    tracing::debug!("Loaded configuration from {}", args.config);

    let client = ApiClient::new(&config)?;
    let options = SmokeOptions {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let report = run_smoke_suite(&client, &options).await;

    for check in &report.checks {
        match &check.outcome {
            Ok(summary) => println!("PASS  {:<40} {summary}", check.name),
            Err(e) => println!("FAIL  {:<40} [{}] {}", check.name, e.status_code(), e.user_message()),
        }
    }

    if args.logout {
        client.auth().logout()?;
    }

    let failed = report.failed().count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} checks failed", report.checks.len());
    }
    println!("All {} checks passed.", report.checks.len());
    Ok(())
}
