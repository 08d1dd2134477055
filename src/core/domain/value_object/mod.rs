mod icinga_url;
pub mod serde_helpers;

pub use icinga_url::IcingaUrl;
