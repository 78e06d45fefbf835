use plantnxt_types::{NavigationEntry, Role};

const OPERATIONS: &str = "Operations Layer 1";
const DECISION_INTELLIGENCE: &str = "Decision Intelligence Layer";
const FINANCIAL: &str = "Financial Layer";
const STRATEGIC: &str = "Strategic & Governance Layer";
const ADMIN: &str = "Admin & Ecosystem Layer";

/// Roles allowed onto the executive dashboard route.
const DASHBOARD_ROLES: [Role; 5] = [Role::Ceo, Role::Coo, Role::Cfo, Role::VpProduction, Role::VpSupplyChain];

fn entry(
    id: &str,
    label: &str,
    destination: &str,
    icon: &str,
    group: &str,
    phase: &str,
    description: &str,
) -> NavigationEntry {
    NavigationEntry::new(id, label, destination, group)
        .with_icon(icon)
        .with_phase(phase)
        .with_description(description)
}

/// The dashboard's built-in navigation entries, in display order.
pub fn default_catalog() -> Vec<NavigationEntry> {
    vec![
        entry(
            "dashboard",
            "Dashboard",
            "/",
            "DB",
            OPERATIONS,
            "Phase 1",
            "One-screen clarity of operations, insights, and actions",
        )
        .with_required_roles(DASHBOARD_ROLES),
        entry(
            "oee",
            "OEE Tracking",
            "/oee",
            "OE",
            OPERATIONS,
            "Phase 1",
            "Monitor availability, performance, and quality in real time",
        ),
        entry(
            "production",
            "Production",
            "/production",
            "PR",
            OPERATIONS,
            "Phase 1",
            "Throughput, schedules, and bottleneck tracking",
        ),
        entry(
            "quality",
            "Quality",
            "/quality",
            "QA",
            OPERATIONS,
            "Phase 1",
            "Defect trends, first-pass yield, and scrap analysis",
        ),
        entry(
            "maintenance",
            "Maintenance",
            "/maintenance",
            "MT",
            OPERATIONS,
            "Phase 1",
            "Preventive, predictive, and corrective maintenance insights",
        ),
        entry(
            "alerts",
            "Alerts",
            "/alerts",
            "AL",
            OPERATIONS,
            "Phase 1",
            "Central hub for downtime, quality, and risk alerts",
        ),
        entry(
            "copilot",
            "AI Copilot",
            "/copilot",
            "AI",
            DECISION_INTELLIGENCE,
            "Phase 1",
            "Ask anything, get root-cause answers and recommendations",
        ),
        entry(
            "financial-impact",
            "Financial Impact",
            "/financial-impact",
            "FI",
            DECISION_INTELLIGENCE,
            "Phase 1",
            "Translate operational changes into revenue, profit, and cash impact",
        ),
        entry(
            "scenario-planning",
            "Scenario Planning",
            "/scenario-planning",
            "SC",
            DECISION_INTELLIGENCE,
            "Phase 2",
            "\"What-if\" simulations for OEE, downtime, and demand shifts",
        ),
        entry(
            "optimization",
            "Optimization Opportunities",
            "/optimization",
            "OP",
            DECISION_INTELLIGENCE,
            "Phase 2",
            "AI-driven workload, capacity, and scheduling improvements",
        ),
        entry(
            "statements",
            "Statements",
            "/statements",
            "ST",
            FINANCIAL,
            "Phase 2",
            "View P&L, Balance Sheet, and Cashflow linked to ops performance",
        ),
        entry(
            "forecasting",
            "Forecasting",
            "/forecasting",
            "FC",
            FINANCIAL,
            "Phase 3",
            "Predict financial outcomes based on operational scenarios",
        ),
        entry(
            "strategic-planning",
            "Strategic Planning",
            "/strategic-planning",
            "SP",
            STRATEGIC,
            "Phase 2",
            "Align plant performance with long-term goals",
        ),
        entry(
            "reports-compliance",
            "Reports & Compliance",
            "/reports-compliance",
            "RC",
            STRATEGIC,
            "Phase 2",
            "Standard exports, audit trails, and compliance packs",
        ),
        entry(
            "sustainability",
            "Sustainability & Energy",
            "/sustainability",
            "SU",
            STRATEGIC,
            "Phase 3",
            "CO2 footprint, energy per unit, ESG compliance",
        ),
        entry(
            "organization",
            "Organization & Plants",
            "/organization",
            "OR",
            ADMIN,
            "Phase 1",
            "Multi-plant, multi-BU structure and hierarchy",
        ),
        entry(
            "users-roles",
            "Users & Roles",
            "/users-roles",
            "UR",
            ADMIN,
            "Phase 1",
            "Enterprise-grade access control and SSO",
        ),
        entry(
            "integrations",
            "Integrations",
            "/integrations",
            "IN",
            ADMIN,
            "Phase 2",
            "Connect ERP, MES, PLC, and data lakes",
        ),
        entry(
            "settings",
            "Settings",
            "/settings",
            "SE",
            ADMIN,
            "Phase 1",
            "Notifications, preferences, and AI configurations",
        ),
    ]
}
