use crate::error::AppError;
use crate::model::requests::Order;
use crate::model::responses::{CheckingResponse, ConfirmationResponse};

use async_trait::async_trait;

#[async_trait]
/// Service for placing orders through the two-step check/confirm flow
///
/// An order is first checked, which returns fees, taxes and a confirmation id,
/// and then confirmed with that id and the same order.
pub trait OrderService: Send + Sync {
    /// Checks an order and returns the confirmation id and the costs
    ///
    /// The order is validated locally first, so an incomplete order never reaches the server.
    async fn check_order(&self, order: &Order) -> Result<CheckingResponse, AppError>;

    /// Confirms a checked order and returns the id of the placed order
    async fn confirm_order(
        &self,
        confirmation_id: &str,
        order: &Order,
    ) -> Result<ConfirmationResponse, AppError>;
}
