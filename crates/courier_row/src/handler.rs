//! Capabilities a row calls into when the user interacts with it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What the user asked to translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Detected source language, when detection succeeded
    pub from: Option<String>,
    /// Target language
    pub to: String,
    /// Text to translate
    pub text: String,
}

/// Side effects of row interactions.
///
/// Each method corresponds to an affordance; a row only calls the ones its
/// options enable. Defaults do nothing.
pub trait RowHandler: Send + Sync {
    /// The row or its text was clicked.
    fn on_click(&self) {}

    /// The caller-provided copy action was triggered.
    fn copy_to_clipboard(&self) {}

    /// Put `text` on the system clipboard and confirm it to the user.
    fn copy_text(&self, _text: &str) {}

    /// The gift button was clicked.
    fn gift(&self) {}

    /// The hide/reveal button was clicked.
    fn toggle_hide(&self) {}

    /// The launch-app button was clicked.
    fn launch_app(&self) {}

    /// Open a translation of the row text.
    fn translate(&self, _request: &TranslateRequest) {}

    /// A caller-supplied context menu item was chosen.
    fn context_action(&self, _id: &str) {}
}

/// Handler ignoring every interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRowHandler;

impl RowHandler for NoopRowHandler {}

/// Guesses the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// ISO language code of `text`, or `None` when unsure.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Languages the user reads without translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslateSettings {
    /// Languages never offered for translation
    pub do_not_translate: HashSet<String>,
    /// Language of the application interface, also the translation target
    pub app_language: String,
}

impl TranslateSettings {
    /// Settings with only the interface language.
    pub fn new(app_language: impl Into<String>) -> Self {
        Self {
            do_not_translate: HashSet::new(),
            app_language: app_language.into(),
        }
    }

    /// Whether text in `language` should be offered for translation.
    ///
    /// Unknown languages are always offered.
    pub fn should_offer(&self, language: Option<&str>) -> bool {
        match language {
            None => true,
            Some(lang) => lang != self.app_language && !self.do_not_translate.contains(lang),
        }
    }
}
