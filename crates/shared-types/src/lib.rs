pub mod subscription;
pub mod types;

pub use subscription::{has_access, has_access_key, Feature, SubscriptionTier, UnknownTierError};
pub use types::{DocumentType, UnknownDocumentTypeError};
