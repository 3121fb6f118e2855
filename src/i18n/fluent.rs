use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation bundles, one per embedded (or overridden) `.ftl` file.
///
/// Lookups go through [`I18n::tr`] and [`I18n::tr_with_args`]; both fall
/// back to a visible `MISSING: key` marker instead of failing, so a typo
/// in a key shows up on screen rather than in a log.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = FluentResource::try_new(source).expect("embedded FTL must parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .expect("embedded FTL must not conflict");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        if let Some(dir) = &i18n_dir {
            load_overrides(Path::new(dir), &mut bundles, &mut available_locales);
        }

        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale; locales without a bundle are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(name.to_string(), value.to_string());
        }
        self.lookup(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    /// Formats one message in the current locale. `None` when the key is
    /// unknown, has no value, or formatting reported errors.
    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

/// Loads `.ftl` files from a user-supplied directory on top of the embedded
/// bundles. Override messages replace embedded ones with the same key, and a
/// file for a locale the binary does not ship adds that locale. Unreadable or
/// malformed files are skipped so a bad override cannot prevent startup.
fn load_overrides(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("ftl") {
            continue;
        }
        let Some(locale) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        let Ok(resource) = FluentResource::try_new(content) else {
            continue;
        };

        if let Some(bundle) = bundles.get_mut(&locale) {
            bundle.add_resource_overriding(resource);
        } else {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.add_resource_overriding(resource);
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
    }
}

/// First shipped locale found along CLI flag, config file, OS locale.
/// Candidates that fail to parse or have no bundle are passed over.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ]
    .into_iter()
    .flatten()
    .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
    .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use unic_langid::LanguageIdentifier;

    fn ids(list: &[&str]) -> Vec<LanguageIdentifier> {
        list.iter().map(|raw| raw.parse().unwrap()).collect()
    }

    #[test]
    fn cli_flag_picks_the_locale() {
        let lang = resolve_locale(
            Some("zh-TW".to_string()),
            &Config::default(),
            &ids(&["en-US", "zh-TW"]),
        );
        assert_eq!(lang, Some("zh-TW".parse().unwrap()));
    }

    #[test]
    fn config_file_picks_the_locale() {
        let mut config = Config::default();
        config.general.language = Some("zh-TW".to_string());

        let lang = resolve_locale(None, &config, &ids(&["en-US", "zh-TW"]));
        assert_eq!(lang, Some("zh-TW".parse().unwrap()));
    }

    #[test]
    fn cli_flag_beats_config_file() {
        let mut config = Config::default();
        config.general.language = Some("zh-TW".to_string());

        let lang = resolve_locale(
            Some("en-US".to_string()),
            &config,
            &ids(&["en-US", "zh-TW"]),
        );
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn unshipped_locale_falls_through() {
        let lang = resolve_locale(
            Some("fr-FR".to_string()),
            &Config::default(),
            &ids(&["en-US"]),
        );
        assert_ne!(lang, Some("fr-FR".parse().unwrap()));
    }

    #[test]
    fn system_fallback_only_yields_shipped_locales() {
        // Depends on the host locale, so only the invariant is checked.
        let available = ids(&["en-US", "zh-TW"]);
        if let Some(lang) = resolve_locale(None, &Config::default(), &available) {
            assert!(available.contains(&lang));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"zh-TW".parse().unwrap()));
    }

    #[test]
    fn known_key_translates() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(i18n.tr("app-name"), "Reelcut");
    }

    #[test]
    fn unknown_key_shows_a_marker() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_interpolate() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        // Fluent wraps interpolated values in Unicode isolation marks, so
        // assert on containment rather than equality.
        let title = i18n.tr_with_args("window-title", &[("file", "demo.mp4")]);
        assert!(title.contains("demo.mp4"));
        assert!(title.contains("Reelcut"));
    }

    #[test]
    fn set_locale_ignores_unknown() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("fr-FR".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn override_directory_replaces_messages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en-US.ftl"), "app-name = Overridden\n").unwrap();

        let mut i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(i18n.tr("app-name"), "Overridden");
        // Keys absent from the override still come from the embedded bundle.
        assert_ne!(i18n.tr("settings-title"), "MISSING: settings-title");
    }

    #[test]
    fn override_directory_adds_locales() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("de-DE.ftl"), "app-name = Reelcut\n").unwrap();

        let i18n = I18n::new(
            None,
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert!(i18n.available_locales.contains(&"de-DE".parse().unwrap()));
    }

    #[test]
    fn missing_override_directory_is_ignored() {
        let i18n = I18n::new(
            None,
            Some("/definitely/not/a/real/path".to_string()),
            &Config::default(),
        );
        assert!(!i18n.available_locales.is_empty());
    }
}
