//! Deck export
//!
//! The wizard engine stops at the last step; turning the finished draft into
//! a document is the job of a [`DeckExporter`]. [`OutlineExporter`] renders a
//! Markdown slide outline through Handlebars.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;

use crate::wizard::{DeckTemplate, DraftField, PitchDraft, StepId, TeamMember};

const OUTLINE_TEMPLATE: &str = include_str!("outline.md.hbs");

/// Errors producing a deck artifact
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("draft is incomplete, missing: {}", labels(.missing))]
    Incomplete { missing: Vec<DraftField> },

    #[error("failed to render deck: {0}")]
    Render(#[from] handlebars::RenderError),
}

fn labels(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(DraftField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A rendered document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckArtifact {
    pub file_name: String,
    pub contents: String,
}

/// Turns a finished draft into a document
pub trait DeckExporter {
    fn export(&self, draft: &PitchDraft) -> Result<DeckArtifact, ExportError>;
}

/// Markdown slide outline exporter
pub struct OutlineExporter {
    handlebars: Handlebars<'static>,
}

impl Default for OutlineExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineExporter {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        // Markdown output, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(false);
        Self { handlebars }
    }

    fn context(draft: &PitchDraft) -> serde_json::Value {
        let template_name = DeckTemplate::find(&draft.selected_template)
            .map_or(draft.selected_template.as_str(), |t| t.name);
        let team_members: Vec<&TeamMember> = draft
            .team_members
            .iter()
            .filter(|member| !member.name.is_empty())
            .collect();
        let closing_title = if draft.selected_template == "nonprofit" {
            "Join Us"
        } else {
            "Thank You"
        };

        json!({
            "company_name": draft.company_name,
            "tagline": draft.tagline,
            "logo": draft.logo.as_ref().map(ToString::to_string),
            "template_name": template_name,
            "primary_color": draft.primary_color,
            "secondary_color": draft.secondary_color,
            "font_family": draft.font_family,
            "problem": draft.problem,
            "solution": draft.solution,
            "market_size": draft.market_size,
            "target_audience": draft.target_audience,
            "revenue_model": draft.revenue_model,
            "ask_amount": draft.ask_amount,
            "use_of_funds": draft.use_of_funds,
            "projected_revenue": draft.projected_revenue,
            "team_members": team_members,
            "closing_title": closing_title,
            "generated_on": chrono::Local::now().format("%Y-%m-%d").to_string(),
        })
    }
}

impl DeckExporter for OutlineExporter {
    fn export(&self, draft: &PitchDraft) -> Result<DeckArtifact, ExportError> {
        let missing = StepId::Review.gate().missing(draft);
        if !missing.is_empty() {
            return Err(ExportError::Incomplete { missing });
        }

        let contents = self
            .handlebars
            .render_template(OUTLINE_TEMPLATE, &Self::context(draft))?;

        Ok(DeckArtifact {
            file_name: format!("{}.md", deck_slug(&draft.company_name)),
            contents,
        })
    }
}

/// File stem for a company's deck, e.g. `acme-corp-pitch`
pub fn deck_slug(company_name: &str) -> String {
    let mut slug = String::new();
    for c in company_name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "pitch-deck".to_string()
    } else {
        format!("{}-pitch", slug)
    }
}

/// Write an artifact into `dir`, creating it if needed
pub async fn write_artifact(dir: &Path, artifact: &DeckArtifact) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "deck exported");
    Ok(path)
}
