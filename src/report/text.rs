use crate::model::insights::{HealthTrend, OpportunityLevel, SecurityRisk, Severity};
use crate::model::modes::AuditMode;
use crate::model::scores::{
    ComponentScore, ComponentState, CompositeScore, CompositeValue, Provenance, TrafficSource,
};
use crate::report::{format_composite, format_money, format_opt_score, format_pct, format_score};

pub fn render_report_text(score: &CompositeScore, mode: AuditMode) -> String {
    let mut out = String::new();

    out.push_str("Website Audit Scorecard\n");
    out.push_str("=======================\n\n");
    out.push_str(&format!(
        "Target: {}\n",
        score.target.as_deref().unwrap_or("(unspecified)")
    ));
    out.push_str(&format!("Audit mode: {}\n\n", mode.label()));

    out.push_str("1. Health overview\n");
    out.push_str(&format!(
        "Overall health: {}\n",
        format_composite(&score.overall_health)
    ));
    out.push_str(&format!(
        "Technical health: {}\n",
        format_composite(&score.technical_health)
    ));
    if let Some(line) = coverage_line(&score.overall_health) {
        out.push_str(&line);
    }
    out.push_str(&format!("Health trend: {}\n", trend_label(score.health_trend)));
    out.push_str(&format!("Critical issues: {}\n\n", score.critical_issues));

    out.push_str("2. Component scores\n");
    for sub in &score.sub_scores {
        out.push_str(&component_line(sub));
    }
    out.push('\n');

    out.push_str("3. Traffic and revenue\n");
    match score.traffic_impact {
        Some(impact) => out.push_str(&format!(
            "Performance impact: {} ({} traffic loss)\n",
            impact.bucket.name(),
            impact.loss_range
        )),
        None => out.push_str("Performance impact: unknown\n"),
    }
    out.push_str(&format!(
        "Conversion loss estimate: {}\n",
        score
            .conversion_loss_estimate
            .map(format_pct)
            .unwrap_or_else(|| "NA".to_string())
    ));
    out.push_str(&format!(
        "SEO opportunity: {}\n",
        format_opt_score(score.seo_opportunity)
    ));
    if let Some(level) = score.executive.seo_opportunity_level {
        out.push_str(&format!("SEO opportunity level: {}\n", opportunity_label(level)));
    }
    out.push_str(&format!(
        "Security risk: {}\n",
        risk_label(score.executive.security_risk)
    ));
    match &score.revenue_estimate {
        Some(rev) => {
            out.push_str(&format!(
                "Monthly traffic: {:.0} ({})\n",
                rev.monthly_traffic,
                match rev.traffic_source {
                    TrafficSource::Ranking => "ranking estimate",
                    TrafficSource::ProfileDefault => "profile default",
                }
            ));
            out.push_str(&format!(
                "Current revenue: {}\n",
                format_money(rev.current_revenue)
            ));
            out.push_str(&format!(
                "Projected revenue: {} (+{})\n\n",
                format_money(rev.revenue),
                format_money(rev.revenue_increase)
            ));
        }
        None => out.push_str("Revenue estimate: unavailable\n\n"),
    }

    out.push_str("4. Action priority matrix\n");
    for item in &score.action_priority_matrix {
        out.push_str(&format!(
            "{}: impact {}, effort {} -> {}\n",
            item.area.label(),
            format_score(item.impact_score),
            format_score(item.effort_score),
            item.quadrant.label()
        ));
    }
    out.push('\n');

    out.push_str("5. Key insights\n");
    if score.insights.is_empty() {
        out.push_str("No issues flagged.\n");
    }
    for insight in &score.insights {
        out.push_str(&format!(
            "[{}] {}\n",
            severity_label(insight.severity()),
            insight.message()
        ));
    }
    if !score.seo_recommendations.is_empty() {
        out.push_str("SEO recommendations:\n");
        for rec in &score.seo_recommendations {
            out.push_str(&format!("- {}\n", rec.message()));
        }
    }

    out
}

fn coverage_line(value: &CompositeValue) -> Option<String> {
    match value {
        CompositeValue::Determinate {
            coverage, excluded, ..
        } if !excluded.is_empty() => Some(format!(
            "Coverage: {} of weighted components (excluded: {})\n",
            format_pct(coverage * 100.0),
            excluded
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        )),
        _ => None,
    }
}

fn component_line(sub: &ComponentScore) -> String {
    match &sub.state {
        ComponentState::Scored {
            score,
            provenance,
            low_confidence,
            band,
        } => {
            let suffix = if *provenance == Provenance::Simulated {
                " [simulated]"
            } else if *low_confidence {
                " [low confidence]"
            } else {
                ""
            };
            format!(
                "{}: {} ({}){}\n",
                sub.component.name(),
                format_score(*score),
                band.name(),
                suffix
            )
        }
        ComponentState::Unavailable { reason } => {
            format!("{}: unavailable ({})\n", sub.component.name(), reason)
        }
    }
}

fn trend_label(trend: HealthTrend) -> &'static str {
    match trend {
        HealthTrend::Improving => "improving",
        HealthTrend::NeedsAttention => "needs attention",
        HealthTrend::Unknown => "unknown",
    }
}

fn opportunity_label(level: OpportunityLevel) -> &'static str {
    match level {
        OpportunityLevel::High => "high",
        OpportunityLevel::Medium => "medium",
        OpportunityLevel::Low => "low",
    }
}

fn risk_label(risk: SecurityRisk) -> &'static str {
    match risk {
        SecurityRisk::High => "high",
        SecurityRisk::Low => "low",
        SecurityRisk::Unknown => "unknown",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Opportunity => "opportunity",
    }
}
