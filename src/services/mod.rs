//! Capability Services
//!
//! Hazard detection, payments, emergency dispatch and inquiries sit behind
//! these traits. Pages only talk to the traits; the site ships with the mock
//! implementations from `mock`.
//!
//! Futures are `?Send` since everything runs on the browser's single thread.
//! Implementations are still `Send + Sync` so they can live in Leptos context.

mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::models::DetectionResult;
use crate::pricing::BillingCycle;

pub use mock::{MockDispatcher, MockDetector, MockInquiryDesk, MockPaymentProcessor};

/// Common result type for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServiceError {
    /// The service refused the request
    Rejected(String),
    /// The service could not be reached
    Unavailable(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            ServiceError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

// ========================
// Requests and Replies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionRequest {
    /// Image as a data URL
    pub image: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyOrigin {
    /// Header button on every page
    Header,
    /// "Contact Emergency Services" after a detection
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyRequest {
    pub origin: EmergencyOrigin,
    pub hazard_type: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DispatchAck {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub plan_id: String,
    pub cycle: BillingCycle,
    /// Whole dollars
    pub amount: u32,
    pub auto_renew: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentReceipt {
    pub plan_id: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceHandle {
    pub invoice: String,
    pub file_name: String,
}

// ========================
// Traits
// ========================

#[async_trait(?Send)]
pub trait HazardDetector: Send + Sync {
    /// Analyze one image
    async fn detect(&self, request: &DetectionRequest) -> ServiceResult<DetectionResult>;
}

#[async_trait(?Send)]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> ServiceResult<PaymentReceipt>;

    /// Prepare a PDF invoice for download
    async fn invoice(&self, invoice: &str) -> ServiceResult<InvoiceHandle>;
}

#[async_trait(?Send)]
pub trait EmergencyDispatcher: Send + Sync {
    async fn dispatch(&self, request: &EmergencyRequest) -> ServiceResult<DispatchAck>;
}

#[async_trait(?Send)]
pub trait InquiryDesk: Send + Sync {
    async fn send(&self, submission: &ContactForm) -> ServiceResult<()>;
}

/// Service handles shared through `AppContext`
#[derive(Clone)]
pub struct Services {
    pub detector: Arc<dyn HazardDetector>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub dispatcher: Arc<dyn EmergencyDispatcher>,
    pub inquiries: Arc<dyn InquiryDesk>,
}

impl Services {
    pub fn mock(config: &SiteConfig) -> Self {
        Self {
            detector: Arc::new(MockDetector),
            payments: Arc::new(MockPaymentProcessor::new(config.payment_delay_ms)),
            dispatcher: Arc::new(MockDispatcher),
            inquiries: Arc::new(MockInquiryDesk::new(config.inquiry_delay_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ServiceError::Rejected("card declined".into()).to_string(), "Rejected: card declined");
        assert_eq!(ServiceError::Unavailable("offline".into()).to_string(), "Unavailable: offline");
    }
}
