//! Risk register rollup: counts per level and per status over one project's
//! risk set. A pass-through tally over already-classified rows; no new
//! scoring happens here.

use crate::model::risk::{Risk, RiskLevel, RiskStatus};

/// Counts per classified risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelTally {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

/// Counts per tracking status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub identified: usize,
    pub monitored: usize,
    pub mitigated: usize,
    pub realized: usize,
}

/// Exposure overview for one project's risk register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskRegisterSummary {
    pub total: usize,
    pub levels: LevelTally,
    pub statuses: StatusTally,
}

/// Tallies a risk set as returned by the risk repository.
pub fn summarize_risk_register(risks: &[Risk]) -> RiskRegisterSummary {
    let mut summary = RiskRegisterSummary {
        total: risks.len(),
        ..RiskRegisterSummary::default()
    };

    for risk in risks {
        match risk.level {
            RiskLevel::Low => summary.levels.low += 1,
            RiskLevel::Moderate => summary.levels.moderate += 1,
            RiskLevel::High => summary.levels.high += 1,
        }
        match risk.status {
            RiskStatus::Identified => summary.statuses.identified += 1,
            RiskStatus::Monitored => summary.statuses.monitored += 1,
            RiskStatus::Mitigated => summary.statuses.mitigated += 1,
            RiskStatus::Realized => summary.statuses.realized += 1,
        }
    }

    summary
}
