//! Template catalog and dispatch.
//!
//! The catalog is static metadata for the picker. `resolve` is what the
//! preview surface calls to pick a layout; anything it doesn't recognize
//! renders with `modern`.

pub mod handlers;

use serde::Serialize;

use crate::models::resume::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Professional,
    Creative,
    Minimal,
    Modern,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub category: TemplateCategory,
}

const CATALOG: [TemplateDescriptor; 11] = [
    TemplateDescriptor {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Clean design with gradient header and professional layout",
        preview: "🎨",
        category: TemplateCategory::Professional,
    },
    TemplateDescriptor {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional format with centered header and serif fonts",
        preview: "📄",
        category: TemplateCategory::Professional,
    },
    TemplateDescriptor {
        id: TemplateId::Creative,
        name: "Creative",
        description: "Two-column layout with purple gradient sidebar",
        preview: "✨",
        category: TemplateCategory::Creative,
    },
    TemplateDescriptor {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Ultra-clean design with centered text and minimal styling",
        preview: "⚪",
        category: TemplateCategory::Minimal,
    },
    TemplateDescriptor {
        id: TemplateId::Professional,
        name: "Professional",
        description: "Corporate-style with blue accents and structured layout",
        preview: "💼",
        category: TemplateCategory::Professional,
    },
    TemplateDescriptor {
        id: TemplateId::Executive,
        name: "Executive",
        description: "Sophisticated design for senior-level positions",
        preview: "👔",
        category: TemplateCategory::Professional,
    },
    TemplateDescriptor {
        id: TemplateId::Technical,
        name: "Technical",
        description: "Developer-focused with code-style formatting",
        preview: "💻",
        category: TemplateCategory::Technical,
    },
    TemplateDescriptor {
        id: TemplateId::Elegant,
        name: "Elegant",
        description: "Sophisticated layout with elegant typography",
        preview: "🌸",
        category: TemplateCategory::Professional,
    },
    TemplateDescriptor {
        id: TemplateId::Bold,
        name: "Bold",
        description: "Strong design with red accents and bold typography",
        preview: "🔥",
        category: TemplateCategory::Creative,
    },
    TemplateDescriptor {
        id: TemplateId::Simple,
        name: "Simple",
        description: "Clean and straightforward design for any profession",
        preview: "📝",
        category: TemplateCategory::Minimal,
    },
    TemplateDescriptor {
        id: TemplateId::Contemporary,
        name: "Contemporary",
        description: "Modern design with teal accents and clean sections",
        preview: "🌊",
        category: TemplateCategory::Modern,
    },
];

/// All templates, in picker order.
pub fn catalog() -> &'static [TemplateDescriptor] {
    &CATALOG
}

/// Exact lookup by wire id (`"modern"`, `"bold"`, ...).
pub fn find(id: &str) -> Option<&'static TemplateDescriptor> {
    TemplateId::parse(id).map(|t| t.descriptor())
}

/// Dispatch for rendering: unknown ids fall back to `modern`.
pub fn resolve(id: &str) -> &'static TemplateDescriptor {
    TemplateId::parse_or_default(id).descriptor()
}

impl TemplateId {
    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        // CATALOG is declared in `TemplateId::ALL` order.
        let index = TemplateId::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or(0);
        &CATALOG[index]
    }
}
