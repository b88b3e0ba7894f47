//! # Payment Client
//!
//! Creates payment intents against the payment gateway. The mock
//! tokenizes deterministically from the amount and method, so tests can
//! predict the token without capturing side channels.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use carepoint_core::{PaymentIntent, PaymentMethod};

/// Remote payment operations.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Creates a payment intent for the given amount.
    ///
    /// The amount must be positive; a zero or negative amount is
    /// rejected the way the gateway would reject it.
    async fn create_intent(
        &self,
        method: PaymentMethod,
        amount_cents: i64,
    ) -> ApiResult<PaymentIntent>;
}

/// Mock payment gateway client.
#[derive(Debug, Clone)]
pub struct MockPaymentApi {
    config: ApiConfig,
}

impl MockPaymentApi {
    pub fn new(config: ApiConfig) -> Self {
        MockPaymentApi { config }
    }

    /// Deterministic token for a given method and amount.
    pub fn token_for(method: PaymentMethod, amount_cents: i64) -> String {
        let tag = match method {
            PaymentMethod::Card => "card",
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Upi => "upi",
        };
        format!("mock_tok_{tag}_{amount_cents}")
    }
}

#[async_trait]
impl PaymentApi for MockPaymentApi {
    async fn create_intent(
        &self,
        method: PaymentMethod,
        amount_cents: i64,
    ) -> ApiResult<PaymentIntent> {
        debug!(
            url = %self.config.endpoint("payments/intents"),
            ?method,
            amount_cents,
            "POST (mocked)"
        );
        tokio::time::sleep(self.config.payment_delay()).await;

        if amount_cents <= 0 {
            return Err(ApiError::rejected(format!(
                "Amount must be positive, got {amount_cents}"
            )));
        }

        Ok(PaymentIntent {
            token: Self::token_for(method, amount_cents),
            amount_cents,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_intent_token_is_deterministic() {
        let api = MockPaymentApi::new(ApiConfig::instant());
        let a = api.create_intent(PaymentMethod::Card, 5969).await.unwrap();
        let b = api.create_intent(PaymentMethod::Card, 5969).await.unwrap();
        assert_eq!(a.token, b.token);
        assert_eq!(a.token, "mock_tok_card_5969");
        assert_eq!(a.amount_cents, 5969);
    }

    #[tokio::test]
    async fn test_zero_amount_rejected() {
        let api = MockPaymentApi::new(ApiConfig::instant());
        let err = api.create_intent(PaymentMethod::Upi, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
    }
}
