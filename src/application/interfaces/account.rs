use crate::error::AppError;
use crate::model::auth::ClientDetails;
use crate::model::requests::AccountOverviewRequest;
use crate::model::responses::AccountOverview;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the cash movements booked between the request's dates (both included)
    async fn get_account_overview(
        &self,
        request: &AccountOverviewRequest,
    ) -> Result<AccountOverview, AppError>;

    /// Gets the details of the logged in client, including its `intAccount`
    async fn get_client_details(&self) -> Result<ClientDetails, AppError>;
}
