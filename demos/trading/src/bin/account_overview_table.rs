use degiro_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger_with_default("debug");

    let client = Client::new(Config::new()?).await?;

    let today = Local::now().date_naive();
    let from = today - chrono::Duration::days(90);
    let request = AccountOverviewRequest::new(from, today)?;
    let overview = client.get_account_overview(&request).await?;
    info!("{} cash movements since {}", overview.len(), from);

    println!("{}", cash_movements_table(&overview.cash_movements));

    client.logout().await?;
    Ok(())
}
