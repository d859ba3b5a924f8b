//! Options for report composition.

use crate::media::BoundingBox;

/// Bounding box of the letterhead logo.
pub const LOGO_BOX: BoundingBox = BoundingBox::new(100, 100);

/// Bounding box of the analyzed plan image.
pub const PLAN_BOX: BoundingBox = BoundingBox::new(500, 350);

/// User-visible wording of the letterhead and front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    /// Document title
    pub title: String,
    /// Heading of the context and objectives section
    pub context_heading: String,
    /// Label preceding the context text
    pub context_label: String,
    /// Label preceding the request text
    pub request_label: String,
    /// Heading above the analyzed plan image
    pub plan_heading: String,
    /// Heading above the AI analysis body
    pub analysis_heading: String,
    /// File name stem of exported reports
    pub file_stem: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::french()
    }
}

impl ReportLabels {
    /// French wording (default).
    pub fn french() -> Self {
        Self {
            title: "Rapport d'Analyse Technique".to_string(),
            context_heading: "1. Contexte & Objectifs".to_string(),
            context_label: "CONTEXTE :".to_string(),
            request_label: "DEMANDE :".to_string(),
            plan_heading: "2. Plan Analysé".to_string(),
            analysis_heading: "3. Expertise IA".to_string(),
            file_stem: "Rapport_Expertise".to_string(),
        }
    }

    /// English wording.
    pub fn english() -> Self {
        Self {
            title: "Technical Analysis Report".to_string(),
            context_heading: "1. Context & Objectives".to_string(),
            context_label: "CONTEXT:".to_string(),
            request_label: "REQUEST:".to_string(),
            plan_heading: "2. Analyzed Plan".to_string(),
            analysis_heading: "3. AI Expertise".to_string(),
            file_stem: "Expert_Report".to_string(),
        }
    }
}

/// Options for building a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Wording of fixed sections.
    pub labels: ReportLabels,

    /// Box the logo is fitted into.
    pub logo_box: BoundingBox,

    /// Box the reference plan is fitted into.
    pub plan_box: BoundingBox,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            labels: ReportLabels::default(),
            logo_box: LOGO_BOX,
            plan_box: PLAN_BOX,
        }
    }
}

impl ReportOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section wording.
    pub fn with_labels(mut self, labels: ReportLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Overrides only the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.labels.title = title.into();
        self
    }

    /// Sets the logo bounding box.
    pub fn with_logo_box(mut self, width: u32, height: u32) -> Self {
        self.logo_box = BoundingBox::new(width, height);
        self
    }

    /// Sets the plan image bounding box.
    pub fn with_plan_box(mut self, width: u32, height: u32) -> Self {
        self.plan_box = BoundingBox::new(width, height);
        self
    }
}
