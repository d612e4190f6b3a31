//! Page content — the sections, cards and panels the page registers at setup.
//!
//! Everything here is static copy; behaviour hangs off the ids.

use serde::{Deserialize, Serialize};

use crate::engines::ModuleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub id: String,
    pub label: String,
    pub target: i64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub period: String,
    pub title: String,
    pub organization: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCard {
    pub id: String,
    pub name: String,
    pub preview: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleBlock {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Simulator recomputed when the block opens.
    #[serde(default)]
    pub simulator: Option<ModuleId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchBlock {
    pub id: String,
    pub label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub name: String,
    pub typing_text: String,
    pub contact_subtitle: String,
    pub recruiter_summary: Vec<String>,
    pub metrics: Vec<MetricCard>,
    pub timeline: Vec<TimelineItem>,
    pub architecture: Vec<ArchBlock>,
    pub skills: Vec<SkillCard>,
    pub modules: Vec<ModuleBlock>,
    pub contact: Vec<ContactLink>,
}

fn metric(id: &str, label: &str, target: i64, suffix: &str) -> MetricCard {
    MetricCard {
        id: id.into(),
        label: label.into(),
        target,
        suffix: suffix.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: "KarenOS".into(),
            typing_text: "Designing intelligent systems for measurable impact.".into(),
            contact_subtitle: "Open to ML leadership and staff data science roles.".into(),
            recruiter_summary: strings(&[
                "Data scientist turned ML systems lead; 8+ years shipping models to production.",
                "Owns experimentation, risk scoring and data platform roadmaps end to end.",
                "Comfortable from SQL to Kubernetes; measured in revenue, not notebooks.",
            ]),
            metrics: vec![
                metric("metric-years", "Years in production ML", 8, "+"),
                metric("metric-models", "Models shipped", 40, ""),
                metric("metric-revenue", "Revenue influenced", 12, "M"),
                metric("metric-uptime", "Pipeline uptime", 99, "%"),
            ],
            timeline: vec![
                TimelineItem {
                    id: "timeline-lead".into(),
                    period: "2022 – now".into(),
                    title: "ML Systems Lead".into(),
                    organization: "Growth-stage marketplace".into(),
                    details: strings(&[
                        "Built the experimentation platform behind every pricing launch.",
                        "Cut fraud losses with a real-time risk scoring service.",
                    ]),
                },
                TimelineItem {
                    id: "timeline-senior".into(),
                    period: "2019 – 2022".into(),
                    title: "Senior Data Scientist".into(),
                    organization: "Subscription commerce".into(),
                    details: strings(&[
                        "Owned churn and LTV models feeding lifecycle marketing.",
                        "Moved batch retraining onto a CI/CD model pipeline.",
                    ]),
                },
                TimelineItem {
                    id: "timeline-analyst".into(),
                    period: "2016 – 2019".into(),
                    title: "Data Analyst".into(),
                    organization: "Retail analytics consultancy".into(),
                    details: strings(&["Forecasting and A/B analysis for national retailers."]),
                },
            ],
            architecture: vec![
                ArchBlock {
                    id: "arch-ingest".into(),
                    label: "Ingest".into(),
                    tooltip: "Event streams and CDC land in a raw zone, schema-checked on arrival.".into(),
                },
                ArchBlock {
                    id: "arch-features".into(),
                    label: "Features".into(),
                    tooltip: "Shared feature definitions serve both training and inference.".into(),
                },
                ArchBlock {
                    id: "arch-serve".into(),
                    label: "Serve".into(),
                    tooltip: "Models ship behind versioned endpoints with shadow traffic first.".into(),
                },
                ArchBlock {
                    id: "arch-observe".into(),
                    label: "Observe".into(),
                    tooltip: "Drift, latency and business KPIs alert on the same dashboard.".into(),
                },
            ],
            skills: vec![
                SkillCard {
                    id: "skill-experimentation".into(),
                    name: "Experimentation".into(),
                    preview: "A/B design, power, guardrails".into(),
                    detail: "Sequential testing, CUPED variance reduction, decision frameworks that product teams actually follow.".into(),
                },
                SkillCard {
                    id: "skill-ml".into(),
                    name: "Machine Learning".into(),
                    preview: "Ranking, risk, forecasting".into(),
                    detail: "Gradient boosting to deep models, calibrated for the decisions they drive.".into(),
                },
                SkillCard {
                    id: "skill-platform".into(),
                    name: "Data Platform".into(),
                    preview: "Warehouses, streams, orchestration".into(),
                    detail: "dbt, Airflow, Spark and Kafka, picked per scale rather than per trend.".into(),
                },
            ],
            modules: vec![
                ModuleBlock {
                    id: "module-revenue".into(),
                    title: "Revenue Intelligence Engine".into(),
                    summary: "Estimate what an experiment is worth before it ships.".into(),
                    simulator: Some(ModuleId::Revenue),
                },
                ModuleBlock {
                    id: "module-risk".into(),
                    title: "Risk Intelligence Engine".into(),
                    summary: "Trade alert sensitivity against tolerance.".into(),
                    simulator: Some(ModuleId::Risk),
                },
                ModuleBlock {
                    id: "module-arch".into(),
                    title: "Architecture Simulator".into(),
                    summary: "Compare the data stack at three operating scales.".into(),
                    simulator: Some(ModuleId::Architecture),
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".into(),
                    href: "mailto:hello@karenos.dev".into(),
                },
                ContactLink {
                    label: "GitHub".into(),
                    href: "https://github.com/karenos".into(),
                },
            ],
        }
    }
}
