//! Export page: report templates and the section/format selection.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    PowerPoint,
    Excel,
    Word,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 4] = [
        ReportFormat::Pdf,
        ReportFormat::PowerPoint,
        ReportFormat::Excel,
        ReportFormat::Word,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::PowerPoint => "PowerPoint",
            ReportFormat::Excel => "Excel",
            ReportFormat::Word => "Word",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReportFormat::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "report format",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    Custom,
}

impl std::str::FromStr for ReportPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(ReportPeriod::Weekly),
            "monthly" => Ok(ReportPeriod::Monthly),
            "quarterly" => Ok(ReportPeriod::Quarterly),
            "yearly" => Ok(ReportPeriod::Yearly),
            "custom" => Ok(ReportPeriod::Custom),
            _ => Err(CoreError::UnknownOption {
                kind: "report period",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSection {
    Overview,
    Metrics,
    Visualizations,
    Risks,
    Recommendations,
    Scenarios,
}

impl ReportSection {
    pub const ALL: [ReportSection; 6] = [
        ReportSection::Overview,
        ReportSection::Metrics,
        ReportSection::Visualizations,
        ReportSection::Risks,
        ReportSection::Recommendations,
        ReportSection::Scenarios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportSection::Overview => "Business Overview",
            ReportSection::Metrics => "Financial Metrics",
            ReportSection::Visualizations => "Charts & Graphs",
            ReportSection::Risks => "Risk Analysis",
            ReportSection::Recommendations => "AI Recommendations",
            ReportSection::Scenarios => "Scenario Analysis",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportSection::Overview => "Company profile and key metrics summary",
            ReportSection::Metrics => "Revenue, profit, cash flow analysis",
            ReportSection::Visualizations => "Interactive visualizations and trends",
            ReportSection::Risks => "Risk alerts and mitigation strategies",
            ReportSection::Recommendations => "Actionable business insights",
            ReportSection::Scenarios => "What-if analysis and projections",
        }
    }

    fn index(self) -> usize {
        match self {
            ReportSection::Overview => 0,
            ReportSection::Metrics => 1,
            ReportSection::Visualizations => 2,
            ReportSection::Risks => 3,
            ReportSection::Recommendations => 4,
            ReportSection::Scenarios => 5,
        }
    }
}

impl std::str::FromStr for ReportSection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReportSection::ALL
            .into_iter()
            .find(|sec| {
                sec.label().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", sec).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "report section",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub sections: Vec<ReportSection>,
    pub format: ReportFormat,
    pub length: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ready,
    Generating,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecentReport {
    pub name: &'static str,
    pub kind: &'static str,
    pub format: ReportFormat,
    pub size_mb: f64,
    pub generated: NaiveDate,
    pub status: ReportStatus,
}

/// What the export form currently has selected.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub period: ReportPeriod,
    sections: [bool; 6],
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            period: ReportPeriod::default(),
            // everything except scenario analysis
            sections: [true, true, true, true, true, false],
        }
    }
}

impl ReportConfig {
    pub fn is_selected(&self, section: ReportSection) -> bool {
        self.sections[section.index()]
    }

    /// Flip one section and return its new state.
    pub fn toggle(&mut self, section: ReportSection) -> bool {
        let slot = &mut self.sections[section.index()];
        *slot = !*slot;
        *slot
    }

    pub fn selected_sections(&self) -> Vec<ReportSection> {
        ReportSection::ALL
            .into_iter()
            .filter(|s| self.is_selected(*s))
            .collect()
    }

    /// Select exactly the template's sections and take its format.
    /// The period is left alone.
    pub fn apply_template(&mut self, template: &ReportTemplate) {
        for section in ReportSection::ALL {
            self.sections[section.index()] = template.sections.contains(&section);
        }
        self.format = template.format;
    }
}

/// Find a report template by name, ignoring case.
pub fn find_report_template<'a>(
    templates: &'a [ReportTemplate],
    name: &str,
) -> CoreResult<&'a ReportTemplate> {
    let wanted = name.trim();
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownOption {
            kind: "report template",
            value: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_all_but_scenarios() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.format, ReportFormat::Pdf);
        assert_eq!(cfg.period, ReportPeriod::Monthly);
        assert_eq!(cfg.selected_sections().len(), 5);
        assert!(!cfg.is_selected(ReportSection::Scenarios));
    }

    #[test]
    fn toggle_flips_one_section() {
        let mut cfg = ReportConfig::default();
        assert!(cfg.toggle(ReportSection::Scenarios));
        assert!(!cfg.toggle(ReportSection::Risks));
        assert!(cfg.is_selected(ReportSection::Scenarios));
        assert!(!cfg.is_selected(ReportSection::Risks));
    }

    #[test]
    fn template_replaces_sections_and_format() {
        let mut cfg = ReportConfig {
            period: ReportPeriod::Quarterly,
            ..ReportConfig::default()
        };
        let deck = ReportTemplate {
            name: "Deck",
            description: "",
            sections: vec![ReportSection::Overview, ReportSection::Recommendations],
            format: ReportFormat::PowerPoint,
            length: "15-20 slides",
        };
        cfg.apply_template(&deck);
        assert_eq!(
            cfg.selected_sections(),
            vec![ReportSection::Overview, ReportSection::Recommendations]
        );
        assert_eq!(cfg.format, ReportFormat::PowerPoint);
        assert_eq!(cfg.period, ReportPeriod::Quarterly);
    }

    #[test]
    fn parse_by_label_or_id() {
        assert_eq!("powerpoint".parse::<ReportFormat>().unwrap(), ReportFormat::PowerPoint);
        assert_eq!("risks".parse::<ReportSection>().unwrap(), ReportSection::Risks);
        assert_eq!(
            "Charts & Graphs".parse::<ReportSection>().unwrap(),
            ReportSection::Visualizations
        );
        assert!("yearly".parse::<ReportPeriod>().is_ok());
        assert!("daily".parse::<ReportPeriod>().is_err());
    }
}
