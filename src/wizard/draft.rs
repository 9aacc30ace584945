//! The pitch draft and the partial patches merged into it

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Template pre-selected when a wizard starts
pub const DEFAULT_TEMPLATE: &str = "investor";
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#8b5cf6";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Opaque reference to a logo image owned by the rendering side.
///
/// The wizard never reads the file behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoRef(pub PathBuf);

impl LogoRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for LogoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A founder or team member listed on the team slide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            bio: bio.into(),
        }
    }
}

/// Everything the user has entered across every step.
///
/// Absent text is the empty string; gates treat both the same way. Fields
/// missing from a draft file take their values from [`PitchDraft::initial`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "PitchDraft::initial")]
pub struct PitchDraft {
    // ─── Design ─────────────────────────────────────────────────────────────────
    pub selected_template: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    // ─── Company ────────────────────────────────────────────────────────────────
    pub company_name: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoRef>,
    // ─── Problem & Solution ─────────────────────────────────────────────────────
    pub problem: String,
    pub solution: String,
    // ─── Market & Business Model ────────────────────────────────────────────────
    pub market_size: String,
    pub target_audience: String,
    pub revenue_model: String,
    // ─── Financials ─────────────────────────────────────────────────────────────
    pub ask_amount: String,
    pub use_of_funds: String,
    pub projected_revenue: String,
    // ─── Team ───────────────────────────────────────────────────────────────────
    pub team_members: Vec<TeamMember>,
}

impl PitchDraft {
    /// Draft a wizard starts from: default template, colors and font
    pub fn initial() -> Self {
        Self {
            selected_template: DEFAULT_TEMPLATE.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            ..Self::default()
        }
    }

    /// Overlay every field present in `patch`; absent fields are left alone
    pub fn apply(&mut self, patch: DraftPatch) {
        macro_rules! overlay {
            ($draft:expr, $patch:expr; $($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = $patch.$field {
                        $draft.$field = value;
                    }
                )*
            };
        }

        overlay!(
            self, patch;
            selected_template,
            primary_color,
            secondary_color,
            font_family,
            company_name,
            tagline,
            problem,
            solution,
            market_size,
            target_audience,
            revenue_model,
            ask_amount,
            use_of_funds,
            projected_revenue,
            logo,
            team_members,
        );
    }

    /// Load a draft from a TOML, JSON or YAML file (chosen by extension)
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft file {}", path.display()))?;

        let draft = match DraftFormat::from_path(path)? {
            DraftFormat::Toml => toml::from_str(&contents).context("Failed to parse TOML draft")?,
            DraftFormat::Json => {
                serde_json::from_str(&contents).context("Failed to parse JSON draft")?
            }
            DraftFormat::Yaml => {
                serde_yaml::from_str(&contents).context("Failed to parse YAML draft")?
            }
        };

        tracing::debug!(path = %path.display(), "loaded draft");
        Ok(draft)
    }

    /// Serialize the draft in the format implied by `path`'s extension
    pub fn to_file_contents(&self, path: &Path) -> Result<String> {
        let contents = match DraftFormat::from_path(path)? {
            DraftFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize draft to TOML")?
            }
            DraftFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize draft to JSON")?
            }
            DraftFormat::Yaml => {
                serde_yaml::to_string(self).context("Failed to serialize draft to YAML")?
            }
        };
        Ok(contents)
    }

    /// Save the draft, creating parent directories as needed
    pub async fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_file_contents(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create draft directory")?;
            }
        }

        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write draft file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved draft");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftFormat {
    Toml,
    Json,
    Yaml,
}

impl DraftFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => bail!(
                "Unsupported draft format '{}' for {} (expected .toml, .json or .yaml)",
                other,
                path.display()
            ),
        }
    }
}

/// A partial draft: each present field overwrites the draft's value on merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub selected_template: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    /// `Some(None)` removes the logo
    pub logo: Option<Option<LogoRef>>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub market_size: Option<String>,
    pub target_audience: Option<String>,
    pub revenue_model: Option<String>,
    pub ask_amount: Option<String>,
    pub use_of_funds: Option<String>,
    pub projected_revenue: Option<String>,
    pub team_members: Option<Vec<TeamMember>>,
}

impl DraftPatch {
    /// Patch that sets a single text field.
    ///
    /// `Logo` and `TeamMembers` are not text; they are left absent.
    pub fn with_text(mut self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        let slot = match field {
            DraftField::SelectedTemplate => &mut self.selected_template,
            DraftField::PrimaryColor => &mut self.primary_color,
            DraftField::SecondaryColor => &mut self.secondary_color,
            DraftField::FontFamily => &mut self.font_family,
            DraftField::CompanyName => &mut self.company_name,
            DraftField::Tagline => &mut self.tagline,
            DraftField::Problem => &mut self.problem,
            DraftField::Solution => &mut self.solution,
            DraftField::MarketSize => &mut self.market_size,
            DraftField::TargetAudience => &mut self.target_audience,
            DraftField::RevenueModel => &mut self.revenue_model,
            DraftField::AskAmount => &mut self.ask_amount,
            DraftField::UseOfFunds => &mut self.use_of_funds,
            DraftField::ProjectedRevenue => &mut self.projected_revenue,
            DraftField::Logo | DraftField::TeamMembers => {
                tracing::warn!(field = field.key(), "ignoring text value for non-text field");
                return self;
            }
        };
        *slot = Some(value);
        self
    }

    pub fn with_logo(mut self, logo: LogoRef) -> Self {
        self.logo = Some(Some(logo));
        self
    }

    pub fn without_logo(mut self) -> Self {
        self.logo = Some(None);
        self
    }

    pub fn with_team(mut self, members: Vec<TeamMember>) -> Self {
        self.team_members = Some(members);
        self
    }

    /// Fields this patch will write, in declaration order
    pub fn touched(&self) -> Vec<DraftField> {
        DraftField::all()
            .iter()
            .copied()
            .filter(|field| match field {
                DraftField::SelectedTemplate => self.selected_template.is_some(),
                DraftField::PrimaryColor => self.primary_color.is_some(),
                DraftField::SecondaryColor => self.secondary_color.is_some(),
                DraftField::FontFamily => self.font_family.is_some(),
                DraftField::CompanyName => self.company_name.is_some(),
                DraftField::Tagline => self.tagline.is_some(),
                DraftField::Logo => self.logo.is_some(),
                DraftField::Problem => self.problem.is_some(),
                DraftField::Solution => self.solution.is_some(),
                DraftField::MarketSize => self.market_size.is_some(),
                DraftField::TargetAudience => self.target_audience.is_some(),
                DraftField::RevenueModel => self.revenue_model.is_some(),
                DraftField::AskAmount => self.ask_amount.is_some(),
                DraftField::UseOfFunds => self.use_of_funds.is_some(),
                DraftField::ProjectedRevenue => self.projected_revenue.is_some(),
                DraftField::TeamMembers => self.team_members.is_some(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.touched().is_empty()
    }
}

/// Names every field of [`PitchDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    SelectedTemplate,
    PrimaryColor,
    SecondaryColor,
    FontFamily,
    CompanyName,
    Tagline,
    Logo,
    Problem,
    Solution,
    MarketSize,
    TargetAudience,
    RevenueModel,
    AskAmount,
    UseOfFunds,
    ProjectedRevenue,
    TeamMembers,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::SelectedTemplate,
            DraftField::PrimaryColor,
            DraftField::SecondaryColor,
            DraftField::FontFamily,
            DraftField::CompanyName,
            DraftField::Tagline,
            DraftField::Logo,
            DraftField::Problem,
            DraftField::Solution,
            DraftField::MarketSize,
            DraftField::TargetAudience,
            DraftField::RevenueModel,
            DraftField::AskAmount,
            DraftField::UseOfFunds,
            DraftField::ProjectedRevenue,
            DraftField::TeamMembers,
        ]
    }

    /// Serialized field name
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::SelectedTemplate => "selected_template",
            DraftField::PrimaryColor => "primary_color",
            DraftField::SecondaryColor => "secondary_color",
            DraftField::FontFamily => "font_family",
            DraftField::CompanyName => "company_name",
            DraftField::Tagline => "tagline",
            DraftField::Logo => "logo",
            DraftField::Problem => "problem",
            DraftField::Solution => "solution",
            DraftField::MarketSize => "market_size",
            DraftField::TargetAudience => "target_audience",
            DraftField::RevenueModel => "revenue_model",
            DraftField::AskAmount => "ask_amount",
            DraftField::UseOfFunds => "use_of_funds",
            DraftField::ProjectedRevenue => "projected_revenue",
            DraftField::TeamMembers => "team_members",
        }
    }

    /// Human-readable label shown next to inputs and in "missing" hints
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::SelectedTemplate => "Template",
            DraftField::PrimaryColor => "Primary Color",
            DraftField::SecondaryColor => "Secondary Color",
            DraftField::FontFamily => "Font",
            DraftField::CompanyName => "Company Name",
            DraftField::Tagline => "Tagline",
            DraftField::Logo => "Logo",
            DraftField::Problem => "Problem",
            DraftField::Solution => "Solution",
            DraftField::MarketSize => "Market Size",
            DraftField::TargetAudience => "Target Audience",
            DraftField::RevenueModel => "Revenue Model",
            DraftField::AskAmount => "Funding Ask",
            DraftField::UseOfFunds => "Use of Funds",
            DraftField::ProjectedRevenue => "Projected Revenue",
            DraftField::TeamMembers => "Team Members",
        }
    }

    /// Current text of a text field; `None` for `Logo` and `TeamMembers`
    pub fn text<'a>(&self, draft: &'a PitchDraft) -> Option<&'a str> {
        let value = match self {
            DraftField::SelectedTemplate => &draft.selected_template,
            DraftField::PrimaryColor => &draft.primary_color,
            DraftField::SecondaryColor => &draft.secondary_color,
            DraftField::FontFamily => &draft.font_family,
            DraftField::CompanyName => &draft.company_name,
            DraftField::Tagline => &draft.tagline,
            DraftField::Problem => &draft.problem,
            DraftField::Solution => &draft.solution,
            DraftField::MarketSize => &draft.market_size,
            DraftField::TargetAudience => &draft.target_audience,
            DraftField::RevenueModel => &draft.revenue_model,
            DraftField::AskAmount => &draft.ask_amount,
            DraftField::UseOfFunds => &draft.use_of_funds,
            DraftField::ProjectedRevenue => &draft.projected_revenue,
            DraftField::Logo | DraftField::TeamMembers => return None,
        };
        Some(value.as_str())
    }

    /// Whether the draft holds a value for this field
    pub fn is_filled(&self, draft: &PitchDraft) -> bool {
        match self {
            DraftField::Logo => draft.logo.is_some(),
            DraftField::TeamMembers => draft.team_members.iter().any(|m| !m.name.is_empty()),
            text_field => text_field.text(draft).is_some_and(|v| !v.is_empty()),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initial_draft_has_design_defaults() {
        let draft = PitchDraft::initial();
        assert_eq!(draft.selected_template, "investor");
        assert_eq!(draft.primary_color, "#3b82f6");
        assert_eq!(draft.secondary_color, "#8b5cf6");
        assert_eq!(draft.font_family, "Inter");
        assert!(draft.company_name.is_empty());
        assert!(draft.logo.is_none());
        assert!(draft.team_members.is_empty());
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut draft = PitchDraft::initial();
        draft.apply(DraftPatch {
            company_name: Some("Acme".to_string()),
            ..Default::default()
        });
        draft.apply(DraftPatch {
            tagline: Some("We make work better".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.tagline, "We make work better");
        assert_eq!(draft.selected_template, "investor");
    }

    #[test]
    fn test_apply_last_write_wins() {
        let mut draft = PitchDraft::default();
        draft.apply(DraftPatch::default().with_text(DraftField::Problem, "first"));
        draft.apply(DraftPatch::default().with_text(DraftField::Problem, "second"));
        assert_eq!(draft.problem, "second");
    }

    #[test]
    fn test_apply_can_clear_text() {
        let mut draft = PitchDraft::default();
        draft.apply(DraftPatch::default().with_text(DraftField::Problem, "slow invoices"));
        draft.apply(DraftPatch::default().with_text(DraftField::Problem, ""));
        assert!(draft.problem.is_empty());
    }

    #[test]
    fn test_apply_logo_and_team() {
        let mut draft = PitchDraft::default();
        let team = vec![TeamMember::new("Ada", "CEO", "Built two startups")];
        draft.apply(
            DraftPatch::default()
                .with_logo(LogoRef::new("assets/logo.png"))
                .with_team(team.clone()),
        );

        assert_eq!(draft.logo, Some(LogoRef::new("assets/logo.png")));
        assert_eq!(draft.team_members, team);

        draft.apply(DraftPatch::default().without_logo());
        assert!(draft.logo.is_none());
        assert_eq!(draft.team_members, team);
    }

    #[test]
    fn test_with_text_ignores_non_text_fields() {
        let patch = DraftPatch::default().with_text(DraftField::TeamMembers, "Ada");
        assert!(patch.is_empty());
    }

    #[test]
    fn test_touched_lists_present_fields() {
        let patch = DraftPatch::default()
            .with_text(DraftField::Tagline, "x")
            .with_text(DraftField::CompanyName, "y");
        assert_eq!(
            patch.touched(),
            vec![DraftField::CompanyName, DraftField::Tagline]
        );
        assert!(DraftPatch::default().is_empty());
    }

    #[test]
    fn test_is_filled_semantics() {
        let mut draft = PitchDraft::default();
        assert!(!DraftField::CompanyName.is_filled(&draft));
        assert!(!DraftField::Logo.is_filled(&draft));
        assert!(!DraftField::TeamMembers.is_filled(&draft));

        draft.company_name = " ".to_string();
        draft.team_members = vec![TeamMember::new("", "CTO", "")];
        assert!(DraftField::CompanyName.is_filled(&draft));
        assert!(!DraftField::TeamMembers.is_filled(&draft));

        draft.team_members.push(TeamMember::new("Grace", "CTO", ""));
        assert!(DraftField::TeamMembers.is_filled(&draft));
    }

    #[test]
    fn test_text_accessor() {
        let draft = PitchDraft::initial();
        assert_eq!(DraftField::FontFamily.text(&draft), Some("Inter"));
        assert_eq!(DraftField::Logo.text(&draft), None);
    }

    #[tokio::test]
    async fn test_save_and_load_each_format() {
        let temp_dir = TempDir::new().unwrap();
        let mut draft = PitchDraft::initial();
        draft.company_name = "Acme".to_string();
        draft.team_members = vec![TeamMember::new("Ada", "CEO", "")];
        draft.logo = Some(LogoRef::new("logo.svg"));

        for name in ["draft.toml", "draft.json", "draft.yaml"] {
            let path = temp_dir.path().join("nested").join(name);
            draft.save(&path).await.unwrap();
            let loaded = PitchDraft::load(&path).unwrap();
            assert_eq!(loaded, draft, "format {}", name);
        }
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        std::fs::write(&path, "company_name = \"Acme\"\n").unwrap();

        let draft = PitchDraft::load(&path).unwrap();
        assert_eq!(draft.company_name, "Acme");
        assert!(draft.tagline.is_empty());
        assert_eq!(draft.selected_template, DEFAULT_TEMPLATE);
        assert_eq!(draft.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(draft.secondary_color, DEFAULT_SECONDARY_COLOR);
        assert_eq!(draft.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_load_keeps_explicit_design_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{"selected_template": "nonprofit", "font_family": ""}"#)
            .unwrap();

        let draft = PitchDraft::load(&path).unwrap();
        assert_eq!(draft.selected_template, "nonprofit");
        assert!(draft.font_family.is_empty());
        assert_eq!(draft.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("draft.txt");
        let err = PitchDraft::initial().save(&path).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported draft format"));
    }
}
