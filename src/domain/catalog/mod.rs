//! Category catalog - the service lines and their closed answer sets.

mod category;
mod options;

pub use category::Category;
pub use options::{
    CatalogType, Complexity, DesignStyle, IdentityPackage, MobilePlatform, PaymentTerms, Urgency,
};
