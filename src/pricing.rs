//! Pricing Rules
//!
//! Prices come straight from the plan table; yearly prices are literals,
//! not derived from monthly ones.

use serde::Serialize;

use crate::models::PricingPlan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// "monthly" / "yearly", as used in form values
    pub fn as_str(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(BillingCycle::Monthly),
            "yearly" => Some(BillingCycle::Yearly),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/mo",
            BillingCycle::Yearly => "/yr",
        }
    }
}

pub fn price(plan: &PricingPlan, cycle: BillingCycle) -> u32 {
    match cycle {
        BillingCycle::Monthly => plan.monthly_price,
        BillingCycle::Yearly => plan.yearly_price,
    }
}

/// Yearly discount against twelve monthly payments, whole percent,
/// rounded half away from zero. Zero in monthly mode.
pub fn savings_percent(plan: &PricingPlan, cycle: BillingCycle) -> u32 {
    if cycle == BillingCycle::Monthly {
        return 0;
    }
    let full_year = plan.monthly_price as f64 * 12.0;
    if full_year <= 0.0 {
        return 0;
    }
    let pct = (full_year - plan.yearly_price as f64) / full_year * 100.0;
    if pct <= 0.0 {
        0
    } else {
        pct.round() as u32
    }
}

/// "$1490/yr"
pub fn price_label(plan: &PricingPlan, cycle: BillingCycle) -> String {
    format!("${}{}", price(plan, cycle), cycle.suffix())
}

/// "Save 17% annually", only shown for a positive yearly saving
pub fn savings_label(plan: &PricingPlan, cycle: BillingCycle) -> Option<String> {
    match savings_percent(plan, cycle) {
        0 => None,
        pct => Some(format!("Save {}% annually", pct)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{plan_by_id, PRICING_PLANS};

    #[test]
    fn test_professional_yearly() {
        let plan = plan_by_id("professional").unwrap();
        assert_eq!(price_label(plan, BillingCycle::Yearly), "$1490/yr");
        assert_eq!(savings_percent(plan, BillingCycle::Yearly), 17);
        assert_eq!(savings_label(plan, BillingCycle::Yearly).as_deref(), Some("Save 17% annually"));
    }

    #[test]
    fn test_monthly_has_no_savings() {
        for plan in PRICING_PLANS {
            assert_eq!(savings_percent(plan, BillingCycle::Monthly), 0);
            assert!(savings_label(plan, BillingCycle::Monthly).is_none());
            assert_eq!(price_label(plan, BillingCycle::Monthly), format!("${}/mo", plan.monthly_price));
        }
    }

    #[test]
    fn test_toggle_does_not_touch_table() {
        let before: Vec<_> = PRICING_PLANS.to_vec();
        let mut labels = Vec::new();
        for cycle in [BillingCycle::Yearly, BillingCycle::Monthly, BillingCycle::Yearly, BillingCycle::Monthly] {
            labels.push(price_label(&PRICING_PLANS[0], cycle));
        }
        assert_eq!(labels, vec!["$490/yr", "$49/mo", "$490/yr", "$49/mo"]);
        assert_eq!(before, PRICING_PLANS.to_vec());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let plan = PricingPlan {
            id: "t",
            name: "T",
            description: "",
            monthly_price: 10,
            yearly_price: 114,
            icon: "",
            features: &[],
            limitations: &[],
            recommended: false,
        };
        // 120 -> 114 is exactly 5.0%; 120 -> 117 is 2.5%
        assert_eq!(savings_percent(&plan, BillingCycle::Yearly), 5);
        let plan = PricingPlan { yearly_price: 117, ..plan };
        assert_eq!(savings_percent(&plan, BillingCycle::Yearly), 3);
    }

    #[test]
    fn test_no_savings_when_yearly_costs_more() {
        let plan = PricingPlan {
            id: "t",
            name: "T",
            description: "",
            monthly_price: 10,
            yearly_price: 130,
            icon: "",
            features: &[],
            limitations: &[],
            recommended: false,
        };
        assert_eq!(savings_percent(&plan, BillingCycle::Yearly), 0);
        assert!(savings_label(&plan, BillingCycle::Yearly).is_none());
    }

    #[test]
    fn test_parse_cycle() {
        assert_eq!(BillingCycle::parse("yearly"), Some(BillingCycle::Yearly));
        assert_eq!(BillingCycle::parse(BillingCycle::Monthly.as_str()), Some(BillingCycle::Monthly));
        assert_eq!(BillingCycle::parse("weekly"), None);
    }
}
