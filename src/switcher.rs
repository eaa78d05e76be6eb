//! theme preference resolution state machine
use {
    crate::{
        color::Color,
        custom::{ColorField, CustomColorSet},
        error::{Result, ThemeError},
        sink::StyleSink,
        store::{KEY_CUSTOM_THEME, KEY_THEME, PreferenceStore},
        theme::{
            palette::ColorVariableMap,
            registry::{FALLBACK_THEME, ThemeRegistry},
        },
    },
    tracing::{info, warn},
};

/// the source the active theme is resolved from
///
/// exactly one variant is active at a time; the two persisted keys mirror
/// this, setting one source clears the other key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceSource {
    /// no preference resolved yet
    Unset,
    /// a predefined theme selected by registry id
    Predefined(String),
    /// a user-assembled custom color set
    Custom(CustomColorSet),
}

/// the theme preference resolver
///
/// every mutation runs its side effects synchronously and in the same order:
/// in-memory state first, write-through persistence second, sink apply last
pub struct ThemeSwitcher<S, K> {
    /// the catalog of predefined themes
    registry: ThemeRegistry,
    /// durable preference persistence
    store: S,
    /// the live presentation layer
    sink: K,
    /// the currently active preference source
    source: PreferenceSource,
    /// the committed custom color set
    ///
    /// single source of truth for merges: every single-field edit reads the
    /// other two values from here, never from a caller-held snapshot
    custom: CustomColorSet,
}

impl<S: PreferenceStore, K: StyleSink> ThemeSwitcher<S, K> {
    /// make a new switcher over the built-in registry
    ///
    /// no preference is resolved until [`load_on_startup`] or one of the
    /// mutations runs
    ///
    /// [`load_on_startup`]: ThemeSwitcher::load_on_startup
    pub fn new(store: S, sink: K) -> Self {
        Self {
            registry: ThemeRegistry::new(),
            store,
            sink,
            source: PreferenceSource::Unset,
            custom: CustomColorSet::default(),
        }
    }

    /// the predefined theme catalog
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// the currently active preference source
    pub fn source(&self) -> &PreferenceSource {
        &self.source
    }

    /// the committed custom color set
    pub fn custom_colors(&self) -> &CustomColorSet {
        &self.custom
    }

    /// the preference store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// the style sink
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// the resolved mapping for the current source
    ///
    /// derived, never persisted; `None` only before the first resolution
    pub fn active_theme(&self) -> Option<ColorVariableMap> {
        match &self.source {
            PreferenceSource::Unset => None,
            PreferenceSource::Predefined(name) => self.registry.get_theme(name),
            PreferenceSource::Custom(set) => Some(set.to_variable_map()),
        }
    }

    /// select a predefined theme by registry id
    ///
    /// fails with [`ThemeError::UnknownTheme`] on an unregistered id, with no
    /// state change and no persistence write
    pub fn select_predefined(&mut self, name: &str) -> Result<()> {
        let Some(colors) = self.registry.get_theme(name) else {
            return Err(ThemeError::UnknownTheme(name.to_owned()));
        };

        self.source = PreferenceSource::Predefined(name.to_owned());

        self.store.set(KEY_THEME, name);
        self.store.remove(KEY_CUSTOM_THEME);

        self.sink.apply(&colors);
        info!(theme = name, "applied predefined theme");

        Ok(())
    }

    /// set one custom color field, keeping the other two committed values
    ///
    /// fails with [`ThemeError::InvalidColor`] on a malformed value, with no
    /// state change
    pub fn set_custom_color(&mut self, field: ColorField, value: &str) -> Result<()> {
        let color = Color::parse(value)?;

        self.custom = self.custom.with_field(field, color);
        self.source = PreferenceSource::Custom(self.custom.clone());

        match self.custom.to_json() {
            Ok(raw) => self.store.set(KEY_CUSTOM_THEME, &raw),
            Err(e) => warn!(error = %e, "failed to serialize custom color set"),
        }
        self.store.remove(KEY_THEME);

        self.sink.apply(&self.custom.to_variable_map());
        info!(field = ?field, "applied custom color edit");

        Ok(())
    }

    /// restore the fallback default theme
    ///
    /// both persisted keys end up absent and the committed custom set is
    /// reseeded from the fallback palette, so a later single-field edit
    /// starts from sensible values instead of stale ones
    pub fn reset_to_default(&mut self) {
        let fallback = self.registry.fallback();

        self.source = PreferenceSource::Predefined(FALLBACK_THEME.to_owned());
        self.custom = CustomColorSet::from_theme(&fallback);

        self.store.remove(KEY_THEME);
        self.store.remove(KEY_CUSTOM_THEME);

        self.sink.apply(&fallback);
        info!("reset to default theme");
    }

    /// resolve the persisted preference once at startup
    ///
    /// strict precedence chain: custom > named predefined > built-in default.
    /// a corrupt custom record is removed and the chain falls through; a
    /// persisted theme id that no longer resolves falls to the default
    pub fn load_on_startup(&mut self) -> Result<()> {
        if let Some(raw) = self.store.get(KEY_CUSTOM_THEME) {
            match CustomColorSet::from_json(&raw) {
                Ok(set) => {
                    self.custom = set;
                    self.source = PreferenceSource::Custom(self.custom.clone());

                    // write back any normalization picked up during parsing
                    if let Ok(normalized) = self.custom.to_json()
                        && normalized != raw
                    {
                        self.store.set(KEY_CUSTOM_THEME, &normalized);
                    }

                    self.sink.apply(&self.custom.to_variable_map());
                    info!("restored custom theme");
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, "removing corrupt custom theme and falling back");
                    self.store.remove(KEY_CUSTOM_THEME);
                }
            }
        }

        if let Some(name) = self.store.get(KEY_THEME) {
            if self.registry.contains(&name) {
                return self.select_predefined(&name);
            }

            warn!(theme = %name, "persisted theme is not in the registry, falling back");
        }

        self.select_predefined(FALLBACK_THEME)
    }
}
