//! Locale bootstrapping for the front end.
//!
//! A [`Localizer`] owns the message store and remembers whether the bundled
//! catalogs were registered, so [`Localizer::setup_locale`] can be called from
//! any startup path without registering anything twice.

/// Message catalogs and locale negotiation
pub mod catalog;

use log::{debug, info, warn};

use crate::errors::Result;
pub use catalog::{InitOptions, MessageCatalog, MessageStore, Messages};

/// Locale used when a message is missing and when no locale is given
pub const FALLBACK_LOCALE: &str = "en";

/// Message bundles shipped with the binary
pub const BUNDLES: [(&str, &str); 2] = [
    ("en", include_str!("lang/en.json")),
    ("nl", include_str!("lang/nl.json")),
];

/// Whether the bundled catalogs have been registered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleState {
    /// Nothing registered
    Uninitialized,
    /// Catalogs registered and initial locale chosen; never left
    Initialized,
}

/// Preferred language of the host environment, e.g. `nl-NL`
pub fn environment_locale() -> Option<String> {
    sys_locale::get_locale()
}

/// Owns the message store and its one-way setup lifecycle
pub struct Localizer<S = MessageCatalog> {
    state: LocaleState,
    store: S,
    preferred_locale: fn() -> Option<String>,
}

impl Localizer<MessageCatalog> {
    /// Localizer over an empty [`MessageCatalog`], using the host locale
    pub fn new() -> Self {
        Self::with_store(MessageCatalog::new())
    }
}

impl Default for Localizer<MessageCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MessageStore> Localizer<S> {
    /// Localizer over `store`, using the host locale
    pub fn with_store(store: S) -> Self {
        Localizer {
            state: LocaleState::Uninitialized,
            store,
            preferred_locale: environment_locale,
        }
    }

    /// Replace where the initial locale comes from
    #[must_use]
    pub fn with_preferred_locale(mut self, preferred_locale: fn() -> Option<String>) -> Self {
        self.preferred_locale = preferred_locale;
        self
    }

    /// Register the bundled catalogs and pick the initial locale.
    ///
    /// Does nothing once it has succeeded. If a bundle fails to parse nothing
    /// is registered and the state stays [`LocaleState::Uninitialized`].
    pub fn setup_locale(&mut self) -> Result<()> {
        if self.state == LocaleState::Initialized {
            return Ok(());
        }

        let bundles = BUNDLES
            .iter()
            .map(|(locale, source)| catalog::parse_messages(locale, source).map(|m| (*locale, m)))
            .collect::<Result<Vec<_>>>()?;

        for (locale, messages) in bundles {
            debug!("Registering {} messages for {locale}", messages.len());
            self.store.add_messages(locale, messages);
        }

        let initial_locale = (self.preferred_locale)();
        self.store.init(InitOptions {
            fallback_locale: FALLBACK_LOCALE.to_string(),
            initial_locale: initial_locale.clone(),
        });
        self.state = LocaleState::Initialized;

        info!(
            "Locale initialized: {}",
            initial_locale.as_deref().unwrap_or(FALLBACK_LOCALE)
        );
        Ok(())
    }

    /// Switch the active locale; `None` selects [`FALLBACK_LOCALE`]
    pub fn set_locale(&mut self, new_locale: Option<&str>) {
        let locale = new_locale.unwrap_or(FALLBACK_LOCALE);
        debug!("Switching locale to {locale}");
        self.store.set_locale(locale);
    }

    /// The active locale, if any
    pub fn locale(&self) -> Option<&str> {
        self.store.locale()
    }

    /// Current lifecycle state
    pub fn state(&self) -> LocaleState {
        self.state
    }

    /// Whether [`Localizer::setup_locale`] has completed
    pub fn is_initialized(&self) -> bool {
        self.state == LocaleState::Initialized
    }

    /// Message for `key` in the active locale, or `key` itself when unknown
    pub fn translate(&self, key: &str) -> String {
        if let Some(message) = self.store.lookup(key) {
            message.to_string()
        } else {
            warn!(
                "Message '{key}' not found for locale {:?}",
                self.store.locale()
            );
            key.to_string()
        }
    }

    /// The underlying message store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Records what the localizer asks of its store
    #[derive(Default)]
    struct SpyStore {
        registered: Vec<String>,
        inits: Vec<InitOptions>,
        inner: MessageCatalog,
    }

    impl MessageStore for SpyStore {
        fn add_messages(&mut self, locale: &str, messages: Messages) {
            self.registered.push(locale.to_string());
            self.inner.add_messages(locale, messages);
        }

        fn init(&mut self, options: InitOptions) {
            self.inits.push(options.clone());
            self.inner.init(options);
        }

        fn set_locale(&mut self, locale: &str) {
            self.inner.set_locale(locale);
        }

        fn locale(&self) -> Option<&str> {
            self.inner.locale()
        }

        fn lookup(&self, key: &str) -> Option<&str> {
            self.inner.lookup(key)
        }
    }

    fn dutch() -> Option<String> {
        Some("nl-NL".to_string())
    }

    fn unknown() -> Option<String> {
        None
    }

    #[test]
    fn setup_registers_each_bundle_once() {
        let mut localizer = Localizer::with_store(SpyStore::default()).with_preferred_locale(dutch);
        assert_eq!(localizer.state(), LocaleState::Uninitialized);

        localizer.setup_locale().unwrap();
        localizer.setup_locale().unwrap();

        assert!(localizer.is_initialized());
        assert_eq!(localizer.store().registered, vec!["en", "nl"]);
        assert_eq!(
            localizer.store().inits,
            vec![InitOptions {
                fallback_locale: "en".to_string(),
                initial_locale: Some("nl-NL".to_string()),
            }]
        );
    }

    #[test]
    fn initial_locale_comes_from_environment() {
        let mut localizer = Localizer::new().with_preferred_locale(dutch);
        localizer.setup_locale().unwrap();

        assert_eq!(localizer.locale(), Some("nl-NL"));
        assert_eq!(localizer.translate("game.hints.year"), "Jaar");
    }

    #[test]
    fn missing_environment_locale_uses_fallback() {
        let mut localizer = Localizer::new().with_preferred_locale(unknown);
        localizer.setup_locale().unwrap();

        assert_eq!(localizer.locale(), Some("en"));
        assert_eq!(localizer.translate("game.hints.year"), "Year");
    }

    #[test]
    fn set_locale_defaults_to_english() {
        let mut localizer = Localizer::new().with_preferred_locale(dutch);
        localizer.setup_locale().unwrap();

        localizer.set_locale(None);
        assert_eq!(localizer.locale(), Some("en"));

        localizer.set_locale(Some("nl"));
        assert_eq!(localizer.locale(), Some("nl"));
        assert_eq!(localizer.translate("game.play"), "Afspelen");
    }

    #[test]
    fn unregistered_locale_falls_back() {
        let mut localizer = Localizer::new().with_preferred_locale(unknown);
        localizer.setup_locale().unwrap();

        localizer.set_locale(Some("fr"));
        assert_eq!(localizer.locale(), Some("fr"));
        assert_eq!(localizer.translate("game.play"), "Play");
        assert_eq!(localizer.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn bundles_share_the_same_keys() {
        let en = catalog::parse_messages("en", BUNDLES[0].1).unwrap();
        let nl = catalog::parse_messages("nl", BUNDLES[1].1).unwrap();

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut nl_keys: Vec<_> = nl.keys().collect();
        en_keys.sort();
        nl_keys.sort();
        assert_eq!(en_keys, nl_keys);
    }
}
