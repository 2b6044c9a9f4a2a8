use std::collections::HashMap;

use serde_json::Value;

use crate::errors::{Error, Result};

/// Message key to localized string, for one locale
pub type Messages = HashMap<String, String>;

/// Settings applied once the catalogs are registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Locale consulted when the active one has no message for a key
    pub fallback_locale: String,
    /// Locale to start in; the fallback is used when `None`
    pub initial_locale: Option<String>,
}

/// A store of per-locale message catalogs with one active locale
pub trait MessageStore {
    /// Register messages for `locale`, merging into what is already there
    fn add_messages(&mut self, locale: &str, messages: Messages);
    /// Set the fallback and initial locales
    fn init(&mut self, options: InitOptions);
    /// Switch the active locale
    fn set_locale(&mut self, locale: &str);
    /// The active locale, if one has been chosen
    fn locale(&self) -> Option<&str>;
    /// Resolve `key` in the active locale, then its parents, then the fallback
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// In-memory [`MessageStore`]
#[derive(Debug, Default)]
pub struct MessageCatalog {
    catalogs: HashMap<String, Messages>,
    fallback: Option<String>,
    active: Option<String>,
}

impl MessageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Locales with at least one registered catalog
    pub fn registered_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn find(&self, locale: &str, key: &str) -> Option<&str> {
        possible_locales(locale).iter().find_map(|candidate| {
            self.catalogs
                .get(candidate)
                .and_then(|messages| messages.get(key))
                .map(String::as_str)
        })
    }
}

impl MessageStore for MessageCatalog {
    fn add_messages(&mut self, locale: &str, messages: Messages) {
        self.catalogs
            .entry(locale.to_string())
            .or_default()
            .extend(messages);
    }

    fn init(&mut self, options: InitOptions) {
        self.active = Some(
            options
                .initial_locale
                .unwrap_or_else(|| options.fallback_locale.clone()),
        );
        self.fallback = Some(options.fallback_locale);
    }

    fn set_locale(&mut self, locale: &str) {
        self.active = Some(locale.to_string());
    }

    fn locale(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.active
            .as_deref()
            .and_then(|locale| self.find(locale, key))
            .or_else(|| {
                self.fallback
                    .as_deref()
                    .and_then(|locale| self.find(locale, key))
            })
    }
}

/// Candidate catalog tags for `tag`, most specific first.
///
/// `nl_NL.UTF-8` yields `["nl-NL", "nl"]`.
pub fn possible_locales(tag: &str) -> Vec<String> {
    // Drop POSIX encoding and modifier suffixes
    let tag = tag.split(['.', '@']).next().unwrap_or_default().replace('_', "-");
    let parts: Vec<&str> = tag.split('-').filter(|p| !p.is_empty()).collect();
    (1..=parts.len())
        .rev()
        .map(|len| parts[..len].join("-"))
        .collect()
}

/// Parse a JSON message bundle, flattening nested objects into dotted keys
pub fn parse_messages(locale: &str, source: &str) -> Result<Messages> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| Error::LocaleError(format!("Invalid {locale} message bundle: {e}")))?;
    if !value.is_object() {
        return Err(Error::LocaleError(format!(
            "Message bundle for {locale} must be a JSON object"
        )));
    }
    let mut messages = Messages::new();
    flatten_into(&mut messages, None, value);
    Ok(messages)
}

fn flatten_into(messages: &mut Messages, prefix: Option<&str>, value: Value) {
    let join = |key: &str| match prefix {
        Some(prefix) => format!("{prefix}.{key}"),
        None => key.to_string(),
    };
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join(&key);
                flatten_into(messages, Some(path.as_str()), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.into_iter().enumerate() {
                let path = join(&index.to_string());
                flatten_into(messages, Some(path.as_str()), child);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                messages.insert(key.to_string(), text);
            }
        }
        Value::Null => {}
        other => {
            if let Some(key) = prefix {
                messages.insert(key.to_string(), other.to_string());
            }
        }
    }
}
