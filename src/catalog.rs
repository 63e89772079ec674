//! Site Catalog
//!
//! Literal display tables. Nothing here changes at runtime.

use crate::models::*;

// ========================
// Navigation
// ========================

pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem { label: "Home", path: "/", icon: NavIcon::Shield },
    NavigationItem { label: "Dashboard", path: "/dashboard", icon: NavIcon::Alert },
    NavigationItem { label: "System", path: "/system", icon: NavIcon::Shield },
    NavigationItem { label: "AI Features", path: "/ai-features", icon: NavIcon::Alert },
    NavigationItem { label: "Business Model", path: "/business", icon: NavIcon::Shield },
    NavigationItem { label: "Payments", path: "/payments", icon: NavIcon::Alert },
    NavigationItem { label: "Team", path: "/team", icon: NavIcon::Shield },
    NavigationItem { label: "Contact", path: "/contact", icon: NavIcon::Phone },
];

// ========================
// Home
// ========================

pub const HOME_FEATURES: &[Highlight] = &[
    Highlight {
        icon: "📷",
        title: "AI-Powered Detection",
        description: "Advanced computer vision to identify hazards in real-time from uploaded images.",
    },
    Highlight {
        icon: "⚠",
        title: "Instant Alerts",
        description: "Immediate notifications and emergency response coordination when hazards are detected.",
    },
    Highlight {
        icon: "⚡",
        title: "Real-time Processing",
        description: "Lightning-fast analysis and response times for critical safety situations.",
    },
    Highlight {
        icon: "🛡",
        title: "Safety First",
        description: "Comprehensive safety protocols and emergency response integration.",
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat { label: "Response Time", value: "<30s", note: "Average hazard detection", icon: "" },
    Stat { label: "Accuracy", value: "99.7%", note: "AI detection precision", icon: "" },
    Stat { label: "Coverage", value: "24/7", note: "Continuous monitoring", icon: "" },
    Stat { label: "Integration", value: "API", note: "Emergency services", icon: "" },
];

// ========================
// Dashboard
// ========================

pub const DASHBOARD_STATS: &[Stat] = &[
    Stat { label: "Images Analyzed", value: "1,247", note: "+12%", icon: "👁" },
    Stat { label: "Hazards Detected", value: "23", note: "+5%", icon: "⚠" },
    Stat { label: "Response Time", value: "28s", note: "-15%", icon: "⏱" },
    Stat { label: "Active Monitors", value: "8", note: "+2%", icon: "👥" },
];

pub const RECENT_ACTIVITY: &[ActivityEntry] = &[
    ActivityEntry {
        time: "2 minutes ago",
        event: "Fire hazard detected in Building A",
        status: "High Risk",
        kind: ActivityKind::Emergency,
    },
    ActivityEntry {
        time: "15 minutes ago",
        event: "Safety inspection completed",
        status: "Clear",
        kind: ActivityKind::Success,
    },
    ActivityEntry {
        time: "1 hour ago",
        event: "Slip hazard detected in hallway",
        status: "Medium Risk",
        kind: ActivityKind::Alert,
    },
    ActivityEntry {
        time: "3 hours ago",
        event: "System maintenance completed",
        status: "Complete",
        kind: ActivityKind::Success,
    },
];

// ========================
// System
// ========================

pub const SYSTEM_METRICS: &[Stat] = &[
    Stat { label: "System Uptime", value: "99.97%", note: "text-success", icon: "📈" },
    Stat { label: "Processing Speed", value: "28s avg", note: "text-primary", icon: "⚡" },
    Stat { label: "Detection Accuracy", value: "97.3%", note: "text-success", icon: "🧠" },
    Stat { label: "Active Monitors", value: "156", note: "text-primary", icon: "👥" },
];

pub const PIPELINE_STAGES: &[&str] = &[
    "Image Input",
    "Preprocessing",
    "AI Analysis",
    "Risk Assessment",
    "Alert Generation",
];

pub const SYSTEM_COMPONENTS: &[SystemComponentStatus] = &[
    SystemComponentStatus {
        id: "camera",
        name: "Camera Input",
        icon: "📷",
        status: "Active",
        description: "High-resolution image capture and preprocessing",
        metrics: &[("uptime", "99.9%"), ("processed", "1,247 images"), ("latency", "12ms")],
        details: "Advanced image preprocessing pipeline with noise reduction, edge detection, and feature extraction capabilities.",
    },
    SystemComponentStatus {
        id: "ai",
        name: "AI Detection Engine",
        icon: "🧠",
        status: "Processing",
        description: "Machine learning models for hazard identification",
        metrics: &[("accuracy", "97.3%"), ("models", "12 active"), ("processing", "Real-time")],
        details: "Ensemble of deep learning models including CNNs, object detection, and risk assessment algorithms.",
    },
    SystemComponentStatus {
        id: "alert",
        name: "Alert System",
        icon: "⚠",
        status: "Ready",
        description: "Real-time notification and emergency response",
        metrics: &[("response", "<30s"), ("channels", "5 active"), ("sent", "156 alerts")],
        details: "Multi-channel alert system with escalation protocols and emergency service integration.",
    },
    SystemComponentStatus {
        id: "database",
        name: "Data Storage",
        icon: "🗄",
        status: "Synced",
        description: "Secure storage and analytics database",
        metrics: &[("storage", "2.4TB"), ("queries", "Fast"), ("backup", "Daily")],
        details: "Distributed database with real-time replication, encryption at rest, and automated backup systems.",
    },
    SystemComponentStatus {
        id: "cloud",
        name: "Cloud Infrastructure",
        icon: "☁",
        status: "Optimal",
        description: "Scalable cloud computing resources",
        metrics: &[("instances", "8 active"), ("load", "65%"), ("regions", "3 zones")],
        details: "Auto-scaling cloud infrastructure with load balancing and multi-region deployment for high availability.",
    },
    SystemComponentStatus {
        id: "api",
        name: "API Gateway",
        icon: "🖥",
        status: "Active",
        description: "Secure API endpoints and integrations",
        metrics: &[("requests", "2.1M/day"), ("latency", "45ms"), ("errors", "0.02%")],
        details: "RESTful API with rate limiting, authentication, and comprehensive logging for third-party integrations.",
    },
];

pub const LIVE_STATUS: &[Gauge] = &[
    Gauge { name: "CPU Usage", value: "67%", percent: 67, status: "Normal" },
    Gauge { name: "Memory Usage", value: "42%", percent: 42, status: "Optimal" },
    Gauge { name: "Network I/O", value: "28%", percent: 28, status: "Low" },
    Gauge { name: "Storage Usage", value: "85%", percent: 85, status: "High" },
    Gauge { name: "AI Model Performance", value: "97%", percent: 97, status: "Excellent" },
];

// ========================
// AI Features
// ========================

pub const AI_CAPABILITIES: &[Stat] = &[
    Stat { label: "Real-time Processing", value: "28s avg", note: "Process images in under 30 seconds", icon: "📈" },
    Stat { label: "Multi-object Detection", value: "Up to 12", note: "Identify multiple hazards simultaneously", icon: "🎯" },
    Stat { label: "Edge Computing", value: "Local AI", note: "On-device processing for faster response", icon: "🔲" },
    Stat { label: "Continuous Learning", value: "Auto-update", note: "Models improve with new data", icon: "🧠" },
];

pub const DETECTION_TYPES: &[DetectionType] = &[
    DetectionType {
        id: "fire",
        name: "Fire Detection",
        icon: "🔥",
        accuracy: 97,
        accent: "text-red-500 bg-red-500/10",
        description: "Advanced flame and smoke detection using thermal imaging analysis",
        features: &["Smoke pattern recognition", "Heat signature analysis", "Flame color detection", "Smoke density measurement"],
        use_cases: &["Building safety", "Industrial monitoring", "Wildfire detection", "Kitchen safety"],
    },
    DetectionType {
        id: "water",
        name: "Water Hazards",
        icon: "💧",
        accuracy: 94,
        accent: "text-blue-500 bg-blue-500/10",
        description: "Flood detection and water accumulation monitoring",
        features: &["Water level detection", "Flood pattern analysis", "Leak identification", "Moisture assessment"],
        use_cases: &["Flood monitoring", "Pipe leak detection", "Basement flooding", "Water damage prevention"],
    },
    DetectionType {
        id: "electrical",
        name: "Electrical Hazards",
        icon: "⚡",
        accuracy: 91,
        accent: "text-yellow-500 bg-yellow-500/10",
        description: "Detection of electrical faults and hazardous conditions",
        features: &["Sparking detection", "Exposed wire identification", "Overheating equipment", "Arc fault recognition"],
        use_cases: &["Electrical maintenance", "Safety inspections", "Equipment monitoring", "Fire prevention"],
    },
    DetectionType {
        id: "chemical",
        name: "Chemical Spills",
        icon: "💨",
        accuracy: 89,
        accent: "text-green-500 bg-green-500/10",
        description: "Chemical hazard and spill detection using visual analysis",
        features: &["Spill pattern recognition", "Chemical color analysis", "Vapor detection", "Contamination spread"],
        use_cases: &["Laboratory safety", "Industrial sites", "Transportation", "Environmental monitoring"],
    },
    DetectionType {
        id: "structural",
        name: "Structural Damage",
        icon: "⚠",
        accuracy: 86,
        accent: "text-orange-500 bg-orange-500/10",
        description: "Structural integrity assessment and damage detection",
        features: &["Crack detection", "Foundation issues", "Wall damage", "Ceiling problems"],
        use_cases: &["Building inspection", "Earthquake damage", "Foundation monitoring", "Safety assessment"],
    },
    DetectionType {
        id: "slip",
        name: "Slip Hazards",
        icon: "🛡",
        accuracy: 92,
        accent: "text-purple-500 bg-purple-500/10",
        description: "Detection of slippery surfaces and fall hazards",
        features: &["Wet surface detection", "Ice identification", "Obstacle recognition", "Floor condition analysis"],
        use_cases: &["Workplace safety", "Public areas", "Winter conditions", "Cleaning protocols"],
    },
];

pub const MODEL_METRICS: &[ModelMetric] = &[
    ModelMetric { name: "Primary Detection Model", accuracy: 97.3, speed: "Fast", status: "Active" },
    ModelMetric { name: "Fire & Smoke Classifier", accuracy: 98.1, speed: "Very Fast", status: "Active" },
    ModelMetric { name: "Water Hazard Detector", accuracy: 94.7, speed: "Fast", status: "Active" },
    ModelMetric { name: "Structural Analysis Model", accuracy: 86.2, speed: "Medium", status: "Training" },
    ModelMetric { name: "Risk Assessment Engine", accuracy: 89.5, speed: "Fast", status: "Active" },
];

pub const PROCESSING_PERFORMANCE: &[Gauge] = &[
    Gauge { name: "Average Processing Time", value: "28 seconds", percent: 85, status: "" },
    Gauge { name: "Model Load Time", value: "1.2 seconds", percent: 92, status: "" },
    Gauge { name: "Memory Usage", value: "2.4 GB", percent: 60, status: "" },
    Gauge { name: "GPU Utilization", value: "67%", percent: 67, status: "" },
    Gauge { name: "Inference Speed", value: "45 FPS", percent: 78, status: "" },
];

/// (name, value, is_good)
pub const DETECTION_STATISTICS: &[(&str, &str, bool)] = &[
    ("True Positive Rate", "97.3%", true),
    ("False Positive Rate", "1.8%", false),
    ("Sensitivity", "96.1%", true),
    ("Specificity", "98.7%", true),
    ("F1 Score", "0.97", true),
];

// ========================
// Business
// ========================

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "starter",
        name: "Starter",
        description: "Perfect for small businesses and basic monitoring",
        monthly_price: 49,
        yearly_price: 490,
        icon: "🛡",
        features: &[
            "Up to 100 image analyses/month",
            "Basic hazard detection",
            "Email alerts",
            "24/7 monitoring",
            "Basic reporting",
            "Community support",
        ],
        limitations: &["Limited to 2 locations", "Basic AI models only"],
        recommended: false,
    },
    PricingPlan {
        id: "professional",
        name: "Professional",
        description: "Advanced features for growing organizations",
        monthly_price: 149,
        yearly_price: 1490,
        icon: "⚡",
        features: &[
            "Up to 1,000 image analyses/month",
            "Advanced AI detection models",
            "Multi-channel alerts (SMS, Email, Push)",
            "Real-time dashboard",
            "Advanced analytics",
            "Priority support",
            "API access",
            "Custom integrations",
        ],
        limitations: &["Limited to 10 locations"],
        recommended: true,
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        description: "Complete solution for large organizations",
        monthly_price: 499,
        yearly_price: 4990,
        icon: "👑",
        features: &[
            "Unlimited image analyses",
            "All AI detection models",
            "Custom alert workflows",
            "White-label dashboard",
            "Advanced analytics & BI",
            "Dedicated support manager",
            "Custom API development",
            "On-premise deployment option",
            "SLA guarantee",
            "Training & onboarding",
        ],
        limitations: &[],
        recommended: false,
    },
];

pub const DEFAULT_PLAN_ID: &str = "professional";

pub const REVENUE_STREAMS: &[RevenueStream] = &[
    RevenueStream {
        name: "Subscription Revenue",
        percentage: 70,
        description: "Monthly/yearly subscription plans",
        value: "$2.1M ARR",
    },
    RevenueStream {
        name: "Enterprise Contracts",
        percentage: 20,
        description: "Custom enterprise solutions",
        value: "$800K ARR",
    },
    RevenueStream {
        name: "API Usage",
        percentage: 7,
        description: "Pay-per-use API calls",
        value: "$200K ARR",
    },
    RevenueStream {
        name: "Training & Support",
        percentage: 3,
        description: "Professional services",
        value: "$120K ARR",
    },
];

pub const PROJECTIONS: &[Projection] = &[
    Projection { year: "2024", revenue: "$3.2M", growth: "180%", customers: "1,250" },
    Projection { year: "2025", revenue: "$8.5M", growth: "165%", customers: "3,200" },
    Projection { year: "2026", revenue: "$18.2M", growth: "115%", customers: "6,800" },
    Projection { year: "2027", revenue: "$32.8M", growth: "80%", customers: "12,500" },
    Projection { year: "2028", revenue: "$52.1M", growth: "59%", customers: "19,200" },
];

pub const MARKET_METRICS: &[Stat] = &[
    Stat { label: "Total Addressable Market", value: "$12.8B", note: "Global safety technology market", icon: "" },
    Stat { label: "Serviceable Market", value: "$3.2B", note: "AI-powered safety solutions", icon: "" },
    Stat { label: "Current Market Share", value: "0.08%", note: "Significant growth opportunity", icon: "" },
    Stat { label: "Growth Rate", value: "180%", note: "Year-over-year revenue growth", icon: "" },
];

pub const MARKET_SEGMENTS: &[(&str, &str)] = &[
    ("Workplace Safety Market", "$5.8B"),
    ("AI in Safety Market", "$3.2B"),
    ("Emergency Response Systems", "$2.1B"),
    ("Computer Vision in Safety", "$1.7B"),
];

pub const COMPETITIVE_ADVANTAGES: &[Highlight] = &[
    Highlight { icon: "✓", title: "Real-time AI Processing", description: "Sub-30 second hazard detection" },
    Highlight { icon: "✓", title: "Multi-hazard Detection", description: "Single platform for all safety needs" },
    Highlight { icon: "✓", title: "Emergency Integration", description: "Direct connection to response services" },
    Highlight { icon: "✓", title: "Edge Computing", description: "On-device processing for speed" },
    Highlight { icon: "✓", title: "Scalable Infrastructure", description: "Cloud-native architecture" },
    Highlight { icon: "✓", title: "Continuous Learning", description: "AI models improve with usage" },
];

// ========================
// Payments
// ========================

pub const PAYMENT_HISTORY: &[PaymentRecord] = &[
    PaymentRecord { date: "2024-03-01", amount: "$149.00", status: "Paid", invoice: "INV-2024-003", plan: "Professional" },
    PaymentRecord { date: "2024-02-01", amount: "$149.00", status: "Paid", invoice: "INV-2024-002", plan: "Professional" },
    PaymentRecord { date: "2024-01-01", amount: "$149.00", status: "Paid", invoice: "INV-2024-001", plan: "Professional" },
    PaymentRecord { date: "2023-12-01", amount: "$49.00", status: "Paid", invoice: "INV-2023-012", plan: "Starter" },
];

pub const SECURITY_FEATURES: &[&str] = &[
    "256-bit SSL Encryption",
    "PCI DSS Compliant",
    "Two-factor Authentication",
    "Fraud Detection",
    "Secure Token Storage",
];

// ========================
// Team
// ========================

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Alex Chen",
        role: "CEO & Co-Founder",
        domain: "Business Strategy & Leadership",
        bio: "Former VP of Engineering at SafetyTech Corp. 15+ years in emergency response systems.",
        skills: &["Strategic Planning", "Team Leadership", "Emergency Systems", "Business Development"],
        social: &[
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::Twitter, "#"),
            (SocialPlatform::Email, "mailto:alex@flarealert.com"),
        ],
    },
    TeamMember {
        name: "Dr. Sarah Kim",
        role: "CTO & Co-Founder",
        domain: "AI & Machine Learning",
        bio: "PhD in Computer Vision from MIT. Former research scientist at Google AI with 50+ published papers.",
        skills: &["Deep Learning", "Computer Vision", "AI Architecture", "Research"],
        social: &[
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::GitHub, "#"),
            (SocialPlatform::Email, "mailto:sarah@flarealert.com"),
        ],
    },
    TeamMember {
        name: "Marcus Rodriguez",
        role: "Lead Safety Engineer",
        domain: "Emergency Response & Safety Protocols",
        bio: "20 years with Fire Department of NY. Certified Emergency Response Coordinator.",
        skills: &["Emergency Protocols", "Safety Standards", "Risk Assessment", "Training"],
        social: &[
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::Email, "mailto:marcus@flarealert.com"),
        ],
    },
    TeamMember {
        name: "Emma Thompson",
        role: "Senior Software Engineer",
        domain: "Full-Stack Development",
        bio: "Former Senior Engineer at Stripe. Expert in scalable cloud architecture and real-time systems.",
        skills: &["React", "Node.js", "Cloud Architecture", "DevOps"],
        social: &[
            (SocialPlatform::GitHub, "#"),
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::Email, "mailto:emma@flarealert.com"),
        ],
    },
    TeamMember {
        name: "David Park",
        role: "AI Research Engineer",
        domain: "Computer Vision & Model Development",
        bio: "MS in AI from Stanford. Specialized in real-time object detection and edge computing.",
        skills: &["PyTorch", "TensorFlow", "Edge Computing", "Model Optimization"],
        social: &[
            (SocialPlatform::GitHub, "#"),
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::Email, "mailto:david@flarealert.com"),
        ],
    },
    TeamMember {
        name: "Lisa Wang",
        role: "Product Designer",
        domain: "UX/UI Design & User Research",
        bio: "Former Design Lead at Airbnb. Passionate about designing for emergency and safety applications.",
        skills: &["User Research", "Prototyping", "Design Systems", "Accessibility"],
        social: &[
            (SocialPlatform::LinkedIn, "#"),
            (SocialPlatform::Twitter, "#"),
            (SocialPlatform::Email, "mailto:lisa@flarealert.com"),
        ],
    },
];

pub const ADVISORS: &[Advisor] = &[
    Advisor {
        name: "Dr. Robert Martinez",
        role: "Emergency Response Advisor",
        company: "Former FEMA Director",
        expertise: "National Emergency Management",
    },
    Advisor {
        name: "Jennifer Liu",
        role: "AI Ethics Advisor",
        company: "Stanford AI Institute",
        expertise: "Responsible AI Development",
    },
    Advisor {
        name: "Captain Mike O'Brien",
        role: "Safety Operations Advisor",
        company: "NYC Fire Department",
        expertise: "Emergency Response Protocols",
    },
];

pub const COMPANY_STATS: &[Stat] = &[
    Stat { label: "Team Members", value: "24", note: "", icon: "👥" },
    Stat { label: "Years Combined Experience", value: "180+", note: "", icon: "🏅" },
    Stat { label: "Patents Filed", value: "7", note: "", icon: "🛡" },
    Stat { label: "Research Papers", value: "15", note: "", icon: "🧠" },
];

pub const MISSION_VALUES: &[Highlight] = &[
    Highlight {
        icon: "🛡",
        title: "Safety First",
        description: "Every decision we make prioritizes the safety and well-being of people and communities.",
    },
    Highlight {
        icon: "🧠",
        title: "Innovation",
        description: "We push the boundaries of AI and machine learning to solve real-world safety challenges.",
    },
    Highlight {
        icon: "🌐",
        title: "Global Impact",
        description: "Our goal is to make advanced safety technology accessible to organizations worldwide.",
    },
];

// ========================
// Contact
// ========================

pub const CONTACT_INFO: &[Stat] = &[
    Stat { label: "Email", value: "hello@flarealert.com", note: "General inquiries and support", icon: "✉" },
    Stat { label: "Phone", value: "+1 (555) 123-4567", note: "Sales and enterprise support", icon: "📞" },
    Stat { label: "Address", value: "123 Safety Street, Tech City, TC 12345", note: "Headquarters location", icon: "📍" },
];

/// (platform, label, url, description)
pub const SOCIAL_LINKS: &[(SocialPlatform, &str, &str, &str)] = &[
    (SocialPlatform::GitHub, "GitHub", "#", "Open source projects"),
    (SocialPlatform::LinkedIn, "LinkedIn", "#", "Professional updates"),
    (SocialPlatform::Twitter, "Twitter", "#", "Latest news"),
];

/// (value, label)
pub const INQUIRY_TYPES: &[(&str, &str)] = &[
    ("sales", "Sales & Pricing"),
    ("demo", "Product Demo"),
    ("enterprise", "Enterprise Solutions"),
    ("technical", "Technical Support"),
    ("partnership", "Partnership"),
    ("media", "Media & Press"),
    ("other", "Other"),
];

/// Resource cards: title in `label`, action in `value`, description in `note`
pub const RESOURCES: &[Stat] = &[
    Stat {
        label: "Download Pitch Deck",
        value: "Download PDF",
        note: "Comprehensive overview of FLARE Alert technology and business model",
        icon: "📄",
    },
    Stat {
        label: "Schedule Demo",
        value: "Schedule Now",
        note: "Book a personalized demo with our team to see FLARE Alert in action",
        icon: "📅",
    },
    Stat {
        label: "Enterprise Solutions",
        value: "Contact Sales",
        note: "Custom solutions for large organizations and government agencies",
        icon: "🏢",
    },
];

/// Find a plan by id
pub fn plan_by_id(id: &str) -> Option<&'static PricingPlan> {
    PRICING_PLANS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_paths_are_unique() {
        let paths: HashSet<_> = NAVIGATION.iter().map(|n| n.path).collect();
        assert_eq!(paths.len(), NAVIGATION.len());
        assert_eq!(NAVIGATION.len(), 8);
        assert_eq!(NAVIGATION[0].path, "/");
    }

    #[test]
    fn test_default_plan_exists() {
        let plan = plan_by_id(DEFAULT_PLAN_ID).unwrap();
        assert_eq!(plan.name, "Professional");
        assert!(plan.recommended);
        assert!(plan_by_id("platinum").is_none());
    }

    #[test]
    fn test_exactly_one_recommended_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.recommended).count(), 1);
    }

    #[test]
    fn test_revenue_shares_sum_to_hundred() {
        let total: u32 = REVENUE_STREAMS.iter().map(|s| s.percentage as u32).sum();
        assert_eq!(total, 100);
    }
}
