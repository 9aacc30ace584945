//! The fixed step sequence and the deck template catalog

use std::fmt;

use super::draft::DraftField;
use super::gate::StepGate;

/// Steps of the pitch deck wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    /// Pick a deck template
    Template,
    /// Company name, tagline and logo
    Company,
    /// Problem statement and solution
    ProblemSolution,
    /// Market size, audience and business model
    Market,
    /// Funding ask, use of funds, projections
    Financials,
    /// Team roster
    Team,
    /// Review everything and generate the deck
    Review,
}

const TEMPLATE_FIELDS: &[DraftField] = &[DraftField::SelectedTemplate];
const COMPANY_FIELDS: &[DraftField] = &[DraftField::CompanyName, DraftField::Tagline];
const PROBLEM_FIELDS: &[DraftField] = &[DraftField::Problem, DraftField::Solution];
const MARKET_FIELDS: &[DraftField] = &[
    DraftField::MarketSize,
    DraftField::TargetAudience,
    DraftField::RevenueModel,
];
const FINANCIALS_FIELDS: &[DraftField] = &[DraftField::AskAmount, DraftField::UseOfFunds];
const TEAM_FIELDS: &[DraftField] = &[DraftField::TeamMembers];
/// Review requires everything the earlier steps require
const REVIEW_FIELDS: &[DraftField] = &[
    DraftField::SelectedTemplate,
    DraftField::CompanyName,
    DraftField::Tagline,
    DraftField::Problem,
    DraftField::Solution,
    DraftField::MarketSize,
    DraftField::TargetAudience,
    DraftField::RevenueModel,
    DraftField::AskAmount,
    DraftField::UseOfFunds,
    DraftField::TeamMembers,
];

impl StepId {
    pub fn all() -> &'static [StepId] {
        &[
            StepId::Template,
            StepId::Company,
            StepId::ProblemSolution,
            StepId::Market,
            StepId::Financials,
            StepId::Team,
            StepId::Review,
        ]
    }

    /// Stable identifier used in logs and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            StepId::Template => "template",
            StepId::Company => "company",
            StepId::ProblemSolution => "problem",
            StepId::Market => "market",
            StepId::Financials => "financials",
            StepId::Team => "team",
            StepId::Review => "review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StepId::Template => "Choose Template",
            StepId::Company => "Company Info",
            StepId::ProblemSolution => "Problem & Solution",
            StepId::Market => "Market & Model",
            StepId::Financials => "Financials",
            StepId::Team => "Team",
            StepId::Review => "Review & Export",
        }
    }

    /// The completion gate registered for this step
    pub fn gate(&self) -> StepGate {
        match self {
            StepId::Template => StepGate::requiring(TEMPLATE_FIELDS),
            StepId::Company => StepGate::requiring(COMPANY_FIELDS),
            StepId::ProblemSolution => StepGate::requiring(PROBLEM_FIELDS),
            StepId::Market => StepGate::requiring(MARKET_FIELDS),
            StepId::Financials => StepGate::requiring(FINANCIALS_FIELDS),
            StepId::Team => StepGate::requiring(TEAM_FIELDS),
            StepId::Review => StepGate::requiring(REVIEW_FIELDS),
        }
    }

    /// Every draft field this step collects, required or not
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            StepId::Template => &[
                DraftField::SelectedTemplate,
                DraftField::PrimaryColor,
                DraftField::SecondaryColor,
                DraftField::FontFamily,
            ],
            StepId::Company => &[
                DraftField::CompanyName,
                DraftField::Tagline,
                DraftField::Logo,
            ],
            StepId::ProblemSolution => PROBLEM_FIELDS,
            StepId::Market => MARKET_FIELDS,
            StepId::Financials => &[
                DraftField::AskAmount,
                DraftField::UseOfFunds,
                DraftField::ProjectedRevenue,
            ],
            StepId::Team => TEAM_FIELDS,
            StepId::Review => &[],
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Static description of one step: identity, title and gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: StepId,
    pub title: &'static str,
    pub gate: StepGate,
}

impl StepDescriptor {
    pub fn new(id: StepId, title: &'static str, gate: StepGate) -> Self {
        Self { id, title, gate }
    }
}

impl From<StepId> for StepDescriptor {
    fn from(id: StepId) -> Self {
        Self::new(id, id.title(), id.gate())
    }
}

/// The standard seven-step pitch deck sequence
pub fn pitch_steps() -> Vec<StepDescriptor> {
    StepId::all().iter().copied().map(StepDescriptor::from).collect()
}

/// A selectable deck template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended: bool,
}

impl DeckTemplate {
    pub fn all() -> &'static [DeckTemplate] {
        &[
            DeckTemplate {
                id: "investor",
                name: "Investor Pitch",
                description: "Perfect for seed funding and Series A presentations",
                recommended: true,
            },
            DeckTemplate {
                id: "product-launch",
                name: "Product Launch",
                description: "Showcase your new product or feature to customers",
                recommended: false,
            },
            DeckTemplate {
                id: "startup-pitch",
                name: "Startup Pitch",
                description: "Early-stage startup pitch for competitions and accelerators",
                recommended: false,
            },
            DeckTemplate {
                id: "nonprofit",
                name: "Nonprofit Proposal",
                description: "Grant applications and donor presentations",
                recommended: false,
            },
        ]
    }

    pub fn find(id: &str) -> Option<&'static DeckTemplate> {
        DeckTemplate::all().iter().find(|t| t.id == id)
    }

    /// Position of a template in the catalog
    pub fn position(id: &str) -> Option<usize> {
        DeckTemplate::all().iter().position(|t| t.id == id)
    }
}
