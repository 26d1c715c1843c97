//! Boilerplate files compiled into the binary.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Copied byte-for-byte.
    Static,
    /// UTF-8 text with `{{key}}` placeholders.
    Template,
}

#[derive(Debug)]
pub struct Asset {
    pub id: &'static str,
    pub kind: AssetKind,
    pub contents: &'static [u8],
}

impl Asset {
    /// Template text. Fails for assets that are not valid UTF-8.
    pub fn text(&self) -> Result<&'static str> {
        std::str::from_utf8(self.contents).map_err(|e| {
            Error::internal_unexpected(format!("asset '{}' is not UTF-8: {}", self.id, e))
        })
    }
}

macro_rules! asset {
    ($id:literal, $kind:ident) => {
        Asset {
            id: $id,
            kind: AssetKind::$kind,
            contents: include_bytes!(concat!("../../assets/", $id)),
        }
    };
}

static ASSETS: &[Asset] = &[
    asset!("gulpfile.js", Template),
    asset!("_package.json", Template),
    asset!("gitignore", Static),
    asset!("gitattributes", Static),
    asset!("bowerrc", Static),
    asset!("jshintrc", Static),
    asset!("favicon.ico", Static),
    asset!("apple-touch-icon.png", Static),
    asset!("robots.txt", Static),
    asset!("screen.scss", Static),
    asset!("index.html", Template),
    asset!("app.js", Static),
];

pub fn all() -> &'static [Asset] {
    ASSETS
}

pub fn get(id: &str) -> Result<&'static Asset> {
    ASSETS
        .iter()
        .find(|asset| asset.id == id)
        .ok_or_else(|| Error::template_asset_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::template;

    #[test]
    fn every_asset_has_contents() {
        for asset in all() {
            assert!(!asset.contents.is_empty(), "{} is empty", asset.id);
        }
    }

    #[test]
    fn templates_are_text_and_static_assets_have_no_placeholders() {
        for asset in all() {
            match asset.kind {
                AssetKind::Template => {
                    assert!(asset.text().is_ok(), "{} is not UTF-8", asset.id);
                }
                AssetKind::Static => {
                    if let Ok(text) = asset.text() {
                        assert!(
                            template::unresolved(text, &[]).is_empty(),
                            "{} contains placeholders",
                            asset.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_asset_is_reported() {
        let err = get("missing.txt").unwrap_err();
        assert_eq!(err.code.as_str(), "template.asset_not_found");
    }

    #[test]
    fn icons_are_binary() {
        assert!(get("apple-touch-icon.png").unwrap().contents.starts_with(b"\x89PNG"));
        assert_eq!(&get("favicon.ico").unwrap().contents[..4], &[0, 0, 1, 0]);
    }
}
