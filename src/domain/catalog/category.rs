//! Category enum representing the six service lines the agency quotes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The service categories a qualification can be opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Showcase,
    WebApp,
    Mobile,
    Ecommerce,
    Identity,
    Automation,
}

impl Category {
    /// Returns all categories in catalog order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Showcase,
            Category::WebApp,
            Category::Mobile,
            Category::Ecommerce,
            Category::Identity,
            Category::Automation,
        ]
    }

    /// Web-like categories share the page-based payload and the technical step.
    pub fn is_web_like(&self) -> bool {
        matches!(self, Category::Showcase | Category::WebApp)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Showcase => "Showcase website",
            Category::WebApp => "Web application",
            Category::Mobile => "Mobile application",
            Category::Ecommerce => "E-commerce",
            Category::Identity => "Visual identity",
            Category::Automation => "Automation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
