use clap::Parser;

use program_advisor::app_data::AppData;
use program_advisor::cli::{self, Cli};
use program_advisor::config::{self, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::logging::init_logging();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    let db = config::database::connect(&settings).await?;
    config::database::migrate(&db).await?;

    let app_data = AppData::new(db);
    cli::execute_command(cli, &app_data).await
}
