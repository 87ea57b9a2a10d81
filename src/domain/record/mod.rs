//! Form record accumulator.
//!
//! The record is the only input of the estimation engine and the summary
//! projector. Steps write to it exclusively through [`RecordPatch`].

#[cfg(test)]
pub(crate) mod arbitrary;
mod form_record;
mod patch;
mod payloads;

pub use form_record::{DealTerms, FormRecord};
pub use patch::{
    AutomationPatch, ContextPatch, DealPatch, EcommercePatch, IdentityPatch, MobilePatch,
    PatchError, RecordPatch, WebPatch,
};
pub(crate) use payloads::has_text;
pub use payloads::{
    AutomationPayload, CategoryPayload, DesignBrief, EcommercePayload, IdentityPayload,
    MobilePayload, TechnicalRequirements, WebFeatures, WebPayload,
};
