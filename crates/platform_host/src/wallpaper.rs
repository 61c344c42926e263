//! Persisted desktop wallpaper preference model.

use serde::Deserialize;

/// `localStorage` key the desktop reads its wallpaper from.
pub const WALLPAPER_PREF_KEY: &str = "namixos_wallpaper";

/// User-selected desktop background.
///
/// Stored as `{ "type": "css" | "image", "value": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum WallpaperPreference {
    /// Raw CSS `background` value (colors, gradients).
    Css(String),
    /// Image URL rendered centered and cover-fit.
    Image(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preference_reads_type_value_wire_shape() {
        let parsed: WallpaperPreference =
            serde_json::from_str(r#"{"type":"css","value":"linear-gradient(#123, #456)"}"#)
                .expect("parse css");
        assert_eq!(
            parsed,
            WallpaperPreference::Css("linear-gradient(#123, #456)".to_string())
        );

        let parsed: WallpaperPreference =
            serde_json::from_str(r#"{"type":"image","value":"/wallpapers/dunes.jpg"}"#)
                .expect("parse image");
        assert_eq!(
            parsed,
            WallpaperPreference::Image("/wallpapers/dunes.jpg".to_string())
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let parsed = serde_json::from_str::<WallpaperPreference>(r#"{"type":"video","value":"x"}"#);
        assert!(parsed.is_err());
    }
}
