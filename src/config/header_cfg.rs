use crate::{config::HeaderCfgBuilder, header::CanonicalName};

/// Per-response policy applied when a [`Header`](crate::header::Header) is built.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct HeaderCfg {
    pub(crate) frozen: Vec<CanonicalName>,
}

impl HeaderCfg {
    /// Starts a config with no frozen headers.
    #[inline]
    pub fn builder() -> HeaderCfgBuilder {
        HeaderCfgBuilder::default()
    }

    /// Names marked immutable as soon as a container is created.
    #[inline]
    pub fn frozen(&self) -> &[CanonicalName] {
        &self.frozen
    }
}
