use animosity::app;
use animosity::error::AppError;
use animosity::settings::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;

    if let Err(e) = app::run(&settings) {
        tracing::error!(error = %e, "Fatal error");
        return Err(e);
    }

    Ok(())
}
