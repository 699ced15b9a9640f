//! The label/text row model: options, text masking, measurement and menus.

use crate::{
    LanguageDetector, RowHandler, RowTheme, TextLayout, TextMeasurer, TextRole, TranslateRequest,
    TranslateSettings, ViewType,
};
use courier_core::RowConfig;
use courier_error::{BuilderError, BuilderErrorKind, CourierResult, LayoutError, LayoutErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A caller-supplied entry appended to the context menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomMenuItem {
    /// Identifier passed back to [`RowHandler::context_action`]
    pub id: String,
    /// Menu title
    pub title: String,
}

impl CustomMenuItem {
    /// Creates a menu entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// What a row shows and which affordances it offers.
///
/// # Examples
///
/// ```
/// use courier_row::TextAndLabelOptionsBuilder;
///
/// let options = TextAndLabelOptionsBuilder::default()
///     .label("username")
///     .text("@courier")
///     .hide_text(Some(false))
///     .build()
///     .unwrap();
///
/// assert!(*options.can_copy());
/// assert_eq!(options.copy_menu_text(), "Copy");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(
    setter(into),
    build_fn(private, name = "build_internal", validate = "Self::validate")
)]
pub struct TextAndLabelOptions {
    /// Accent label above the text
    label: String,
    /// Body text, trimmed before display
    text: String,
    /// Title of the copy menu item
    #[builder(default = "\"Copy\".to_string()")]
    copy_menu_text: String,
    /// Presentation style
    #[builder(default)]
    view_type: ViewType,
    /// Whether the text can be selected
    #[builder(default = "true")]
    is_text_selectable: bool,
    /// Whether copying is offered at all
    #[builder(default = "true")]
    can_copy: bool,
    /// Copying goes through [`RowHandler::copy_to_clipboard`] and shows a copy button
    #[builder(default)]
    custom_copy: bool,
    /// `Some` shows the hide/reveal toggle; `Some(true)` masks the text
    #[builder(default)]
    hide_text: Option<bool>,
    /// Shows a gift button in place of the copy button
    #[builder(default)]
    gift: bool,
    /// Shows a launch-app button below the text
    #[builder(default)]
    launch_app: bool,
    /// Offers translation in the context menu
    #[builder(default)]
    can_translate: bool,
    /// Extra context menu entries
    #[builder(default)]
    context_items: Vec<CustomMenuItem>,
    /// Double clicks select whole words
    #[builder(default)]
    select_full_word: bool,
    /// Title of the translate menu item
    #[builder(default = "\"Translate\".to_string()")]
    translate_menu_text: String,
    /// Title of the "show more" affordance
    #[builder(default = "\"more\".to_string()")]
    show_more_text: String,
    /// Title of the launch-app button
    #[builder(default = "\"Open App\".to_string()")]
    launch_app_title: String,
}

impl TextAndLabelOptionsBuilder {
    /// Build the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the label or text is missing, or if the launch-app
    /// button is enabled with an empty title.
    pub fn build(&self) -> Result<TextAndLabelOptions, BuilderError> {
        self.build_internal().map_err(|e| match e {
            TextAndLabelOptionsBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            TextAndLabelOptionsBuilderError::ValidationError(message) => {
                BuilderError::new(BuilderErrorKind::ValidationFailed(message))
            }
        })
    }

    fn validate(&self) -> Result<(), String> {
        let launch_app = self.launch_app.unwrap_or(false);
        let untitled = self
            .launch_app_title
            .as_ref()
            .is_some_and(|title| title.trim().is_empty());
        if launch_app && untitled {
            return Err("launch_app_title must not be empty when launch_app is set".to_string());
        }
        Ok(())
    }
}

impl TextAndLabelOptions {
    /// Options for a plain, copyable row.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            copy_menu_text: "Copy".to_string(),
            view_type: ViewType::default(),
            is_text_selectable: true,
            can_copy: true,
            custom_copy: false,
            hide_text: None,
            gift: false,
            launch_app: false,
            can_translate: false,
            context_items: Vec::new(),
            select_full_word: false,
            translate_menu_text: "Translate".to_string(),
            show_more_text: "more".to_string(),
            launch_app_title: "Open App".to_string(),
        }
    }
}

/// Whether the text is cut behind "show more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoreState {
    /// Everything fits the collapsed line limit
    #[default]
    Fits,
    /// Lines beyond the limit are hidden
    Truncated,
    /// The user asked to see everything; never truncates again
    Expanded,
}

/// What a context menu entry does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    /// Copy the row text
    Copy,
    /// Translate the row text
    Translate(TranslateRequest),
    /// Caller-supplied action
    Custom(String),
}

/// One entry of the row's context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    /// Title shown to the user
    pub title: String,
    /// Action run when chosen
    pub action: MenuAction,
}

/// Measured text and label of a row at one width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Measurement {
    width: f64,
    text_width: f64,
    text: TextLayout,
    label: TextLayout,
}

/// Model of a label/text row.
///
/// Owns the display text and the measured layout; the view derives frames
/// from it and routes interactions back through it.
pub struct TextAndLabelItem {
    config: RowConfig,
    theme: RowTheme,
    measurer: Arc<dyn TextMeasurer>,
    handler: Arc<dyn RowHandler>,
    options: TextAndLabelOptions,
    text: String,
    more_state: MoreState,
    measurement: Option<Measurement>,
}

impl std::fmt::Debug for TextAndLabelItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAndLabelItem")
            .field("options", &self.options)
            .field("text", &self.text)
            .field("more_state", &self.more_state)
            .field("measurement", &self.measurement)
            .finish_non_exhaustive()
    }
}

/// Text shown for `text` under the given hide state.
///
/// Hidden text becomes one asterisk per two characters of the trimmed text.
pub fn display_text(text: &str, hide_text: Option<bool>) -> String {
    let trimmed = text.trim();
    if hide_text == Some(true) {
        "*".repeat(trimmed.chars().count() / 2)
    } else {
        trimmed.to_string()
    }
}

impl TextAndLabelItem {
    /// Creates an unmeasured row.
    pub fn new(
        config: RowConfig,
        theme: RowTheme,
        measurer: Arc<dyn TextMeasurer>,
        handler: Arc<dyn RowHandler>,
        options: TextAndLabelOptions,
    ) -> Self {
        let text = display_text(options.text(), *options.hide_text());
        Self {
            config,
            theme,
            measurer,
            handler,
            options,
            text,
            more_state: MoreState::Fits,
            measurement: None,
        }
    }

    /// Options the row was built with.
    pub fn options(&self) -> &TextAndLabelOptions {
        &self.options
    }

    /// Layout metrics.
    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    /// Colour palette.
    pub fn theme(&self) -> &RowTheme {
        &self.theme
    }

    /// The label.
    pub fn label(&self) -> &str {
        self.options.label()
    }

    /// The text as displayed, trimmed and masked when hidden.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current truncation state.
    pub fn more_state(&self) -> MoreState {
        self.more_state
    }

    /// Whether the text is currently masked.
    pub fn is_hidden(&self) -> bool {
        *self.options.hide_text() == Some(true)
    }

    /// Whether a copy or gift button is shown next to the text.
    ///
    /// A custom copy action only counts while copying is allowed.
    pub fn has_action_button(&self) -> bool {
        self.copies_through_action() || *self.options.gift()
    }

    fn copies_through_action(&self) -> bool {
        *self.options.can_copy() && *self.options.custom_copy()
    }

    /// Measurer used for the row's strings.
    pub(crate) fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Handler receiving the row's interactions.
    pub(crate) fn handler(&self) -> &dyn RowHandler {
        self.handler.as_ref()
    }

    /// Width of the container the row is drawn in at frame `width`.
    pub fn container_width(&self, width: f64) -> f64 {
        match self.options.view_type() {
            ViewType::Legacy => width,
            ViewType::Modern { .. } => self
                .config
                .max_block_width()
                .min(width - 2.0 * self.config.modern_outer_inset()),
        }
    }

    /// Left and right content insets inside the container.
    pub fn horizontal_insets(&self) -> (f64, f64) {
        match self.options.view_type() {
            ViewType::Legacy => (
                *self.config.legacy_inset_left(),
                *self.config.legacy_inset_right(),
            ),
            ViewType::Modern { insets, .. } => (insets.left, insets.right),
        }
    }

    fn text_width_for(&self, width: f64) -> CourierResult<f64> {
        let (left, right) = self.horizontal_insets();
        let mut available = self.container_width(width) - left - right;
        if self.has_action_button() {
            available -= self.config.action_button_width();
        }
        if !available.is_finite() || available <= 0.0 {
            return Err(LayoutError::new(LayoutErrorKind::InvalidWidth(width)).into());
        }
        Ok(available)
    }

    /// Measures label and text for frame `width`.
    ///
    /// Text that exceeds the collapsed line limit is truncated unless the row
    /// was expanded. Returns whether the row height changed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutErrorKind::InvalidWidth`] when `width` leaves no room
    /// for text.
    #[instrument(skip(self), fields(label = %self.options.label()))]
    pub fn make_size(&mut self, width: f64) -> CourierResult<bool> {
        let previous_height = self.height().ok();
        let text_width = self.text_width_for(width)?;
        let max_lines = *self.config.max_collapsed_lines();

        let mut text = self
            .measurer
            .measure(&self.text, TextRole::Body, text_width, None);
        if self.more_state != MoreState::Expanded {
            if text.line_count > max_lines {
                self.more_state = MoreState::Truncated;
                text = self
                    .measurer
                    .measure(&self.text, TextRole::Body, text_width, Some(max_lines));
            } else {
                self.more_state = MoreState::Fits;
            }
        }

        let label =
            self.measurer
                .measure(self.options.label(), TextRole::Label, text_width, Some(1));

        self.measurement = Some(Measurement {
            width,
            text_width,
            text,
            label,
        });

        let height = self.height()?;
        debug!(
            text_width,
            lines = text.line_count,
            more_state = ?self.more_state,
            height,
            "Measured row"
        );
        Ok(previous_height != Some(height))
    }

    fn measured(&self) -> CourierResult<&Measurement> {
        self.measurement
            .as_ref()
            .ok_or_else(|| LayoutError::new(LayoutErrorKind::NotMeasured).into())
    }

    /// Frame width of the last measurement.
    pub fn measured_width(&self) -> Option<f64> {
        self.measurement.map(|m| m.width)
    }

    /// Width available to the text at the last measurement.
    pub fn text_width(&self) -> CourierResult<f64> {
        Ok(self.measured()?.text_width)
    }

    /// Layout of the text at the last measurement.
    pub fn text_layout(&self) -> CourierResult<TextLayout> {
        Ok(self.measured()?.text)
    }

    /// Layout of the label at the last measurement.
    pub fn label_layout(&self) -> CourierResult<TextLayout> {
        Ok(self.measured()?.label)
    }

    /// Combined height of label, spacing and text.
    pub fn labels_height(&self) -> CourierResult<f64> {
        let m = self.measured()?;
        Ok(m.text.size.height + m.label.size.height + self.config.label_spacing())
    }

    /// Row height.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutErrorKind::NotMeasured`] before [`Self::make_size`].
    pub fn height(&self) -> CourierResult<f64> {
        let labels_height = self.labels_height()?;
        let mut height = match self.options.view_type() {
            ViewType::Legacy => labels_height + self.config.legacy_vertical_padding(),
            ViewType::Modern { insets, .. } => {
                labels_height + insets.top + insets.bottom - self.config.modern_vertical_adjust()
            }
        };
        if *self.options.launch_app() {
            height += self.config.launch_app_extra_height();
        }
        Ok(height)
    }

    /// Top of the label.
    pub fn label_y(&self) -> CourierResult<f64> {
        if *self.options.launch_app() {
            return Ok(*self.config.launch_app_top());
        }
        Ok((self.height()? - self.labels_height()?) / 2.0)
    }

    /// Top of the text.
    pub fn text_y(&self) -> CourierResult<f64> {
        Ok(self.label_y()? + self.measured()?.label.size.height + self.config.label_spacing())
    }

    /// Expands the text permanently and remeasures at the last width.
    ///
    /// # Errors
    ///
    /// Propagates measurement errors.
    #[instrument(skip(self), fields(label = %self.options.label()))]
    pub fn show_more(&mut self) -> CourierResult<()> {
        self.more_state = MoreState::Expanded;
        debug!("Expanding row text");
        match self.measured_width() {
            Some(width) => self.make_size(width).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Masks or reveals the text and remeasures at the last width.
    ///
    /// Only meaningful for rows built with a hide state.
    ///
    /// # Errors
    ///
    /// Propagates measurement errors.
    #[instrument(skip(self), fields(label = %self.options.label()))]
    pub fn set_hidden(&mut self, hidden: bool) -> CourierResult<()> {
        if self.options.hide_text().is_none() {
            return Ok(());
        }
        debug!(hidden, "Toggling text mask");
        self.options.hide_text = Some(hidden);
        self.text = display_text(self.options.text(), Some(hidden));
        match self.measured_width() {
            Some(width) => self.make_size(width).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Context menu entries for the row.
    ///
    /// Empty when copying is disabled. Translation is offered unless the
    /// detected language is one the user reads already.
    pub fn menu_items(
        &self,
        detector: &dyn LanguageDetector,
        settings: &TranslateSettings,
    ) -> Vec<ContextMenuItem> {
        if !*self.options.can_copy() {
            return Vec::new();
        }

        let mut items = vec![ContextMenuItem {
            title: self.options.copy_menu_text().clone(),
            action: MenuAction::Copy,
        }];

        if *self.options.can_translate() {
            let from = detector.detect(&self.text);
            if settings.should_offer(from.as_deref()) {
                items.push(ContextMenuItem {
                    title: self.options.translate_menu_text().clone(),
                    action: MenuAction::Translate(TranslateRequest {
                        from,
                        to: settings.app_language.clone(),
                        text: self.text.clone(),
                    }),
                });
            }
        }

        items.extend(self.options.context_items().iter().map(|item| ContextMenuItem {
            title: item.title.clone(),
            action: MenuAction::Custom(item.id.clone()),
        }));
        items
    }

    /// Runs a context menu action.
    pub fn perform_menu_action(&self, action: &MenuAction) {
        match action {
            MenuAction::Copy => self.copy(),
            MenuAction::Translate(request) => self.handler.translate(request),
            MenuAction::Custom(id) => self.handler.context_action(id),
        }
    }

    /// Copies through the custom action when present, else copies the displayed text.
    ///
    /// Does nothing when copying is disabled.
    pub fn copy(&self) {
        if !*self.options.can_copy() {
            return;
        }
        if *self.options.custom_copy() {
            self.handler.copy_to_clipboard();
        } else {
            self.handler.copy_text(&self.text);
        }
    }

    /// Runs the copy button: gift when present, else the custom copy action.
    ///
    /// Returns whether anything ran.
    pub fn press_action_button(&self) -> bool {
        if *self.options.gift() {
            self.handler.gift();
            true
        } else if self.copies_through_action() {
            self.handler.copy_to_clipboard();
            true
        } else {
            false
        }
    }
}
