//! Mock Services
//!
//! Demo implementations. Nothing leaves the browser and nothing fails.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use super::*;
use crate::models::RiskLevel;

/// Simulated latency. A zero delay resolves immediately.
async fn pause(delay_ms: u32) {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
}

/// Always reports the same fire hazard
pub struct MockDetector;

#[async_trait(?Send)]
impl HazardDetector for MockDetector {
    async fn detect(&self, request: &DetectionRequest) -> ServiceResult<DetectionResult> {
        tracing::info!(
            image_bytes = request.image.len(),
            location = %request.location,
            "mock hazard detection"
        );
        Ok(DetectionResult {
            hazard_detected: true,
            hazard_type: "Fire Hazard".to_string(),
            confidence: 97,
            risk_level: RiskLevel::High,
            location: "Building Section A".to_string(),
            recommendations: vec![
                "Evacuate the area immediately".to_string(),
                "Contact fire department".to_string(),
                "Use fire extinguisher if safe to do so".to_string(),
                "Ensure all personnel are accounted for".to_string(),
            ],
        })
    }
}

/// Acknowledges every call without contacting anyone
pub struct MockDispatcher;

#[async_trait(?Send)]
impl EmergencyDispatcher for MockDispatcher {
    async fn dispatch(&self, request: &EmergencyRequest) -> ServiceResult<DispatchAck> {
        tracing::warn!(origin = ?request.origin, "mock emergency dispatch, no call placed");
        let ack = match request.origin {
            EmergencyOrigin::Header => DispatchAck {
                title: "Emergency Services Contacted".to_string(),
                message: "Emergency services contacted! (Demo mode)".to_string(),
            },
            EmergencyOrigin::Dashboard => DispatchAck {
                title: "Emergency Services Contacted".to_string(),
                message: "Fire department has been notified. Response team dispatched.".to_string(),
            },
        };
        Ok(ack)
    }
}

/// Waits, then reports success
pub struct MockPaymentProcessor {
    delay_ms: u32,
}

impl MockPaymentProcessor {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl PaymentProcessor for MockPaymentProcessor {
    async fn charge(&self, request: &PaymentRequest) -> ServiceResult<PaymentReceipt> {
        tracing::info!(plan = %request.plan_id, amount = request.amount, "mock payment started");
        pause(self.delay_ms).await;
        Ok(PaymentReceipt {
            plan_id: request.plan_id.clone(),
            amount: request.amount,
        })
    }

    async fn invoice(&self, invoice: &str) -> ServiceResult<InvoiceHandle> {
        Ok(InvoiceHandle {
            invoice: invoice.to_string(),
            file_name: format!("{}.pdf", invoice),
        })
    }
}

/// Waits, then reports the message as delivered
pub struct MockInquiryDesk {
    delay_ms: u32,
}

impl MockInquiryDesk {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl InquiryDesk for MockInquiryDesk {
    async fn send(&self, submission: &ContactForm) -> ServiceResult<()> {
        tracing::info!(subject = %submission.subject, "mock inquiry submitted");
        pause(self.delay_ms).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use crate::pricing::BillingCycle;
    use futures::executor::block_on;

    fn instant_services() -> Services {
        let config = SiteConfig {
            inquiry_delay_ms: 0,
            payment_delay_ms: 0,
            ..SiteConfig::default()
        };
        Services::mock(&config)
    }

    #[test]
    fn test_mock_detector_result() {
        let request = DetectionRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            location: String::new(),
            notes: String::new(),
        };
        let result = block_on(MockDetector.detect(&request)).unwrap();
        assert!(result.hazard_detected);
        assert_eq!(result.hazard_type, "Fire Hazard");
        assert_eq!(result.confidence, 97);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.recommendations[1], "Contact fire department");
    }

    #[test]
    fn test_mock_dispatch_header() {
        let request = EmergencyRequest {
            origin: EmergencyOrigin::Header,
            hazard_type: None,
            location: None,
        };
        let ack = block_on(MockDispatcher.dispatch(&request)).unwrap();
        assert_eq!(ack.message, "Emergency services contacted! (Demo mode)");
    }

    #[test]
    fn test_mock_invoice_name() {
        let handle = block_on(MockPaymentProcessor::new(0).invoice("INV-2024-003")).unwrap();
        assert_eq!(handle.file_name, "INV-2024-003.pdf");
    }

    #[test]
    fn test_mock_charge_echoes_request() {
        let services = instant_services();
        let request = PaymentRequest {
            plan_id: "professional".to_string(),
            cycle: BillingCycle::Yearly,
            amount: 1490,
            auto_renew: true,
        };
        let receipt = block_on(services.payments.charge(&request)).unwrap();
        assert_eq!(receipt.plan_id, "professional");
        assert_eq!(receipt.amount, 1490);
    }

    #[test]
    fn test_mock_inquiry_delivered() {
        let services = instant_services();
        let submission = ContactForm {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.example".to_string(),
            subject: "Pilot program".to_string(),
            message: "Two sites, one warehouse.".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(block_on(services.inquiries.send(&submission)), Ok(()));
    }
}
