//! Recording handler and fixed collaborators for row tests.

#![allow(dead_code)]

use courier_core::RowConfig;
use courier_row::{
    FixedWidthMeasurer, LanguageDetector, RowHandler, RowTheme, TextAndLabelItem,
    TextAndLabelOptions, TranslateRequest,
};
use std::sync::{Arc, Mutex};

/// One recorded handler call.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerCall {
    Click,
    CopyToClipboard,
    CopyText(String),
    Gift,
    ToggleHide,
    LaunchApp,
    Translate(TranslateRequest),
    ContextAction(String),
}

/// Handler that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRowHandler {
    calls: Mutex<Vec<HandlerCall>>,
}

impl RecordingRowHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<HandlerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HandlerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RowHandler for RecordingRowHandler {
    fn on_click(&self) {
        self.record(HandlerCall::Click);
    }

    fn copy_to_clipboard(&self) {
        self.record(HandlerCall::CopyToClipboard);
    }

    fn copy_text(&self, text: &str) {
        self.record(HandlerCall::CopyText(text.to_string()));
    }

    fn gift(&self) {
        self.record(HandlerCall::Gift);
    }

    fn toggle_hide(&self) {
        self.record(HandlerCall::ToggleHide);
    }

    fn launch_app(&self) {
        self.record(HandlerCall::LaunchApp);
    }

    fn translate(&self, request: &TranslateRequest) {
        self.record(HandlerCall::Translate(request.clone()));
    }

    fn context_action(&self, id: &str) {
        self.record(HandlerCall::ContextAction(id.to_string()));
    }
}

/// Detector that always answers the same language.
pub struct FixedDetector(pub Option<&'static str>);

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// Ten points per character, twenty per line.
pub fn measurer() -> Arc<FixedWidthMeasurer> {
    Arc::new(FixedWidthMeasurer::new(10.0, 20.0))
}

pub fn item_with(options: TextAndLabelOptions, handler: Arc<RecordingRowHandler>) -> TextAndLabelItem {
    TextAndLabelItem::new(
        RowConfig::default(),
        RowTheme::default(),
        measurer(),
        handler,
        options,
    )
}

/// 49 characters; two lines at 34 characters per line.
pub const TWO_LINE_TEXT: &str = "The quick brown fox jumps over the lazy dog again";

/// Five words per 34-character line, five lines in total.
pub fn five_line_text() -> String {
    vec!["lorem"; 25].join(" ")
}
