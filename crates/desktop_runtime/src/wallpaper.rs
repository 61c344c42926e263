//! Wallpaper preference parsing and CSS background resolution.

use platform_host::WallpaperPreference;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Persisted wallpaper values that cannot be applied.
pub enum WallpaperPrefError {
    #[error("malformed wallpaper preference: {0}")]
    Malformed(String),
    #[error("unknown wallpaper kind `{0}`")]
    UnknownKind(String),
}

/// Parses the raw JSON stored under the wallpaper preference key.
///
/// # Errors
///
/// Returns [`WallpaperPrefError::UnknownKind`] for a well-formed record with an unsupported
/// `type`, and [`WallpaperPrefError::Malformed`] for anything else that does not decode.
pub fn parse_wallpaper_pref(raw: &str) -> Result<WallpaperPreference, WallpaperPrefError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| WallpaperPrefError::Malformed(err.to_string()))?;
    if let Some(kind) = value.get("type").and_then(Value::as_str) {
        if !matches!(kind, "css" | "image") {
            return Err(WallpaperPrefError::UnknownKind(kind.to_string()));
        }
    }
    serde_json::from_value(value).map_err(|err| WallpaperPrefError::Malformed(err.to_string()))
}

/// CSS `background` shorthand for a preference.
pub fn wallpaper_background(pref: &WallpaperPreference) -> String {
    match pref {
        WallpaperPreference::Css(value) => value.clone(),
        WallpaperPreference::Image(url) => format!("url({url}) center/cover no-repeat"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn css_value_is_used_verbatim() {
        let pref = parse_wallpaper_pref(r#"{"type":"css","value":"linear-gradient(#123, #456)"}"#)
            .expect("css pref");
        assert_eq!(wallpaper_background(&pref), "linear-gradient(#123, #456)");
    }

    #[test]
    fn image_value_becomes_cover_background() {
        let pref = parse_wallpaper_pref(r#"{"type":"image","value":"/img/dunes.jpg"}"#)
            .expect("image pref");
        assert_eq!(
            wallpaper_background(&pref),
            "url(/img/dunes.jpg) center/cover no-repeat"
        );
    }

    #[test]
    fn unknown_kind_is_distinguished_from_malformed() {
        assert_eq!(
            parse_wallpaper_pref(r#"{"type":"video","value":"x.mp4"}"#),
            Err(WallpaperPrefError::UnknownKind("video".to_string()))
        );
        assert!(matches!(
            parse_wallpaper_pref("{not json"),
            Err(WallpaperPrefError::Malformed(_))
        ));
        assert!(matches!(
            parse_wallpaper_pref(r#"{"type":"css"}"#),
            Err(WallpaperPrefError::Malformed(_))
        ));
    }
}
