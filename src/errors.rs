use crate::header::CanonicalName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("can't write to {0} header")]
    Restricted(CanonicalName),
    #[error("immutable header")]
    Immutable(CanonicalName),
    #[error("bad header name: {0:?}")]
    InvalidName(String),
    #[error("bad value for {0} header")]
    InvalidValue(CanonicalName),
}

impl HeaderError {
    #[inline]
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted(_))
    }

    #[inline]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Immutable(_))
    }
}
