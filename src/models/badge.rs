//! Badge variants used to tag statuses on cards and table rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    /// Style classes for the variant.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "badge bg-primary text-primary-foreground",
            Self::Secondary => "badge bg-secondary text-secondary-foreground",
            Self::Destructive => "badge bg-destructive text-destructive-foreground",
            Self::Outline => "badge border text-foreground",
        }
    }
}

/// A status that knows how it should be badged.
pub trait Badged {
    fn badge_variant(&self) -> BadgeVariant;
    fn badge_label(&self) -> &'static str;
}

/// Label and variant ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
    pub class_name: &'static str,
}

impl Badge {
    pub fn of(status: &impl Badged) -> Self {
        let variant = status.badge_variant();
        Self {
            label: status.badge_label().to_string(),
            variant,
            class_name: variant.class_name(),
        }
    }
}
