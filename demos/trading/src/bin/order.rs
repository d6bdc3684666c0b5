use degiro_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger_with_default("debug");

    let config = Config::new()?;
    let client = Client::new(config).await?;

    let order = Order::limit(Action::Buy, 71981, 1.0, 10.0, TimeType::GoodTillDay);

    let checking_response = client.check_order(&order).await?;
    let confirmation_id = checking_response.confirmation_id.clone();

    info!("free space after order: {:?}", checking_response.free_space_new);
    info!("response datetime: {}", checking_response.response_datetime);
    info!("transaction fees: {:?}", checking_response.transaction_fees);
    info!(
        "transaction opposite fees: {:?}",
        checking_response.transaction_opposite_fees
    );
    info!("transaction taxes: {:?}", checking_response.transaction_taxes);

    let confirmation_response = client.confirm_order(&confirmation_id, &order).await?;

    println!("{checking_response}");
    println!("{confirmation_response}");

    Ok(())
}
