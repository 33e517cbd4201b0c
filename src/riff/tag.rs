use std::fmt;

use crate::riff::writer::RiffError;

/// A four character chunk identifier.
///
/// Tags are exactly 4 bytes, always. The fallible constructors reject
/// anything else up front instead of reading past the end of a short
/// input the way the usual `*(uint32_t*)"RIFF"` trick does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag([u8; 4]);

impl Tag {
    pub const RIFF: Tag = Tag(*b"RIFF");
    pub const LIST: Tag = Tag(*b"LIST");

    pub fn new(bytes: &[u8]) -> Result<Tag, RiffError> {
        match <[u8; 4]>::try_from(bytes) {
            Ok(id) => Ok(Tag(id)),
            Err(_) => Err(RiffError::InvalidIdentifier(bytes.len())),
        }
    }

    /// Container chunks carry a 4 byte form type right after the header.
    pub fn is_container(&self) -> bool {
        *self == Tag::RIFF || *self == Tag::LIST
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for Tag {
    fn from(bytes: [u8; 4]) -> Tag {
        Tag(bytes)
    }
}

impl TryFrom<&str> for Tag {
    type Error = RiffError;

    fn try_from(value: &str) -> Result<Tag, RiffError> {
        Tag::new(value.as_bytes())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}
