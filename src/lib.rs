//! themeshift is a persistent theme preference engine
//!
//! applications pick a visual theme either from a fixed catalog of
//! predefined palettes or from three individually chosen colors; the choice
//! is written through to a preference store on every change and reconciled
//! again at startup with a strict precedence chain (custom > named
//! predefined > built-in default). the resolved color mapping is pushed to a
//! pluggable style sink, the crate never touches presentation state directly
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

pub mod color;
pub mod custom;
pub mod error;
pub mod sink;
pub mod store;
pub mod switcher;
pub mod theme;

pub use crate::{
    color::Color,
    custom::{ColorField, CustomColorSet},
    error::{Result, ThemeError},
    sink::StyleSink,
    store::PreferenceStore,
    switcher::{PreferenceSource, ThemeSwitcher},
    theme::{palette::ColorVariableMap, registry::ThemeRegistry},
};
