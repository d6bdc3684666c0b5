/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::order::OrderService;
use crate::constants::{ACCOUNT_OVERVIEW_PATH, ORDER_CHECK_PATH, ORDER_CONFIRM_PATH};
use crate::error::AppError;
use crate::model::auth::ClientDetails;
use crate::model::http::HttpClient;
use crate::model::requests::{AccountOverviewRequest, Order};
use crate::model::responses::{
    AccountOverview, CheckOrderData, CheckingResponse, ConfirmOrderData, ConfirmationResponse,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// High level DEGIRO client
///
/// # Example
/// ```ignore
/// use degiro_client::prelude::*;
///
/// let client = Client::new(Config::new()?).await?;
/// let order = Order::limit(Action::Buy, 71981, 1.0, 10.0, TimeType::GoodTillDay);
/// let checking = client.check_order(&order).await?;
/// let confirmation = client.confirm_order(&checking.confirmation_id, &order).await?;
/// ```
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and logs in
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client that logs in on its first request
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(config)?);
        Ok(Self { http_client })
    }

    /// Logs in, replacing any previous session
    pub async fn connect(&self) -> Result<Session, AppError> {
        self.http_client.connect().await
    }

    /// Gets the current session, logging in if there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.http_client.get_session().await
    }

    /// Logs out
    pub async fn logout(&self) -> Result<(), AppError> {
        self.http_client.logout().await
    }
}

#[async_trait]
impl AccountService for Client {
    async fn get_account_overview(
        &self,
        request: &AccountOverviewRequest,
    ) -> Result<AccountOverview, AppError> {
        info!(
            "Getting account overview from {} to {}",
            request.from_date, request.to_date
        );
        let overview: AccountOverview = self
            .http_client
            .get(ACCOUNT_OVERVIEW_PATH, &request.query_params())
            .await?;
        debug!("Account overview obtained: {} cash movements", overview.len());
        Ok(overview)
    }

    async fn get_client_details(&self) -> Result<ClientDetails, AppError> {
        self.http_client.auth().get_client_details().await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn check_order(&self, order: &Order) -> Result<CheckingResponse, AppError> {
        order.validate()?;
        info!(
            "Checking {} order for product {}",
            order.order_type, order.product_id
        );
        let data: CheckOrderData = self.http_client.post(ORDER_CHECK_PATH, order).await?;
        let response = CheckingResponse::from_data(data, Utc::now());
        debug!("Order checked, confirmation id: {}", response.confirmation_id);
        Ok(response)
    }

    async fn confirm_order(
        &self,
        confirmation_id: &str,
        order: &Order,
    ) -> Result<ConfirmationResponse, AppError> {
        if confirmation_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "confirmation id is empty".to_string(),
            ));
        }
        order.validate()?;
        info!("Confirming order {}", confirmation_id);
        let path = format!("{ORDER_CONFIRM_PATH}/{confirmation_id}");
        let data: ConfirmOrderData = self.http_client.post(&path, order).await?;
        info!("✓ Order placed: {}", data.order_id);
        Ok(ConfirmationResponse {
            order_id: data.order_id,
            response_datetime: Utc::now(),
        })
    }
}
