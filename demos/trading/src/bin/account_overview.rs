use degiro_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger_with_default("debug");

    let config = Config::new()?;
    let client = Client::new(config).await?;

    let today = Local::now().date_naive();
    let request = AccountOverviewRequest::year_to_date(today);
    let account_overview = client.get_account_overview(&request).await?;

    for cash_movement in &account_overview.cash_movements {
        for line in cash_movement_lines(cash_movement) {
            println!("{line}");
        }
    }

    Ok(())
}
