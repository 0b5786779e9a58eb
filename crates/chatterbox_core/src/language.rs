//! Reply languages.

use serde::{Deserialize, Serialize};

/// Target language for generated replies.
///
/// # Examples
///
/// ```
/// use chatterbox_core::Language;
///
/// let lang: Language = "id".parse().unwrap();
/// assert_eq!(lang, Language::Indonesian);
/// assert_eq!(lang.to_string(), "id");
/// assert!("fr".parse::<Language>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum Language {
    /// English
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
    /// Bahasa Indonesia
    #[serde(rename = "id")]
    #[strum(serialize = "id")]
    Indonesian,
}
