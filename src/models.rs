//! Frontend Models
//!
//! Records shown on the site. Literal tables live in `catalog`.

use serde::{Deserialize, Serialize};

/// Icon shown next to a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Shield,
    Alert,
    Phone,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Shield => "🛡",
            NavIcon::Alert => "⚠",
            NavIcon::Phone => "📞",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Result of one hazard analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub hazard_detected: bool,
    pub hazard_type: String,
    /// Percentage, 0..=100
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub location: String,
    pub recommendations: Vec<String>,
}

/// Subscription plan (pricing table row)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub recommended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentRecord {
    pub date: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
    pub invoice: &'static str,
    pub plan: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl SocialPlatform {
    pub fn glyph(self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "GH",
            SocialPlatform::LinkedIn => "in",
            SocialPlatform::Twitter => "X",
            SocialPlatform::Email => "✉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub domain: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
    pub social: &'static [(SocialPlatform, &'static str)],
}

impl TeamMember {
    /// Avatar glyph picked from the member's domain
    pub fn domain_glyph(&self) -> &'static str {
        let d = self.domain;
        if d.contains("AI") || d.contains("Machine Learning") {
            "🧠"
        } else if d.contains("Development") || d.contains("Software") {
            "💻"
        } else if d.contains("Design") {
            "🎨"
        } else if d.contains("Business") || d.contains("Strategy") {
            "📈"
        } else {
            "🛡"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advisor {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub expertise: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemComponentStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub metrics: &'static [(&'static str, &'static str)],
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionType {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub accuracy: u8,
    pub accent: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub use_cases: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetric {
    pub name: &'static str,
    pub accuracy: f32,
    pub speed: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueStream {
    pub name: &'static str,
    pub percentage: u8,
    pub description: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub year: &'static str,
    pub revenue: &'static str,
    pub growth: &'static str,
    pub customers: &'static str,
}

/// Generic labelled figure used by stat cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub icon: &'static str,
}

/// Labelled gauge, value is a percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub name: &'static str,
    pub value: &'static str,
    pub percent: u8,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Emergency,
    Success,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityEntry {
    pub time: &'static str,
    pub event: &'static str,
    pub status: &'static str,
    pub kind: ActivityKind,
}

/// Title + description pair (features, advantages, resources)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
