//! Embedded catalog data.
//!
//! The default catalog ships inside the binary, embedded at compile time
//! using [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use rust_embed::Embed;
use std::borrow::Cow;

/// Name of the bundled data file.
pub const CONTENT_FILE: &str = "content.json";

#[derive(Embed)]
#[folder = "../../assets/"]
pub(crate) struct Bundled;
impl Bundled {
    /// Get the raw bytes of a bundled file by name.
    pub fn load(name: impl AsRef<str>) -> Result<Cow<'static, [u8]>> {
        Self::get(name.as_ref()).map(|f| f.data).ok_or_raise(|| ErrorKind::AssetNotFound(name.as_ref().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_load_content() {
        let data = Bundled::load(CONTENT_FILE);
        assert!(data.is_ok());
        assert!(!data.unwrap().is_empty());
    }

    #[test]
    fn missing_asset_is_reported() {
        let err = Bundled::load("missing.json").unwrap_err();
        assert_eq!(&*err, &ErrorKind::AssetNotFound("missing.json".to_string()));
    }
}
