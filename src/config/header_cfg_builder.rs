use crate::{config::HeaderCfg, header::CanonicalName};
use std::sync::Arc;

/// Builds a [`HeaderCfg`].
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct HeaderCfgBuilder {
    frozen: Vec<CanonicalName>,
}

impl HeaderCfgBuilder {
    /// Adds `name` to the headers frozen at construction. Repeats are ignored.
    pub fn freeze(mut self, name: &str) -> Self {
        let name = CanonicalName::new(name);
        if !self.frozen.contains(&name) {
            self.frozen.push(name);
        }
        self
    }

    /// Finishes the config, shared between the containers built from it.
    pub fn build(self) -> Arc<HeaderCfg> {
        Arc::new(HeaderCfg {
            frozen: self.frozen,
        })
    }
}
