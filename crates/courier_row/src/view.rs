//! Frames, visibility and event routing for a label/text row.
//!
//! [`TextAndLabelRowView`] turns a measured [`TextAndLabelItem`] into a
//! [`RowViewLayout`] of rectangles the host toolkit draws, and maps pointer
//! input on those rectangles back to row interactions.

use crate::{
    Color, Corners, MoreState, Point, Rect, Size, TextAndLabelItem, TextRole, ViewType,
};
use courier_error::{CourierResult, LayoutError, LayoutErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Icons drawn by the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Icon {
    /// Reveal hidden text
    EyeOn,
    /// Hide visible text
    EyeOff,
    /// Copy action
    CopyLink,
    /// Gift action
    Gift,
}

/// An icon button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconButton {
    /// Frame in container coordinates
    pub frame: Rect,
    /// Icon drawn centred in the frame
    pub icon: Icon,
    /// Icon tint
    pub tint: Color,
}

/// The launch-app footer button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchButton {
    /// Frame in container coordinates
    pub frame: Rect,
    /// Button title
    pub title: String,
    /// Fill colour
    pub background: Color,
    /// Title colour
    pub text_color: Color,
}

/// Everything needed to draw a row.
///
/// Child frames are relative to the container's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowViewLayout {
    /// Container frame in row coordinates
    pub container: Rect,
    /// Rounded corners of the container
    pub corners: Corners,
    /// Container fill
    pub background: Color,
    /// Where the label is drawn
    pub label_rect: Rect,
    /// Label colour
    pub label_color: Color,
    /// Text frame
    pub text_rect: Rect,
    /// Text colour
    pub text_color: Color,
    /// Whether the text accepts selection
    pub text_selectable: bool,
    /// Hide/reveal toggle, when the row has a hide state
    pub toggle_button: Option<IconButton>,
    /// Copy or gift button
    pub copy_button: Option<IconButton>,
    /// "Show more" affordance, when truncated
    pub more_button: Option<Rect>,
    /// Fade drawn under the "show more" affordance
    pub shadow: Option<Rect>,
    /// Launch-app footer
    pub launch_button: Option<LaunchButton>,
    /// Separator below the row
    pub separator: Option<Rect>,
    /// Separator colour
    pub separator_color: Color,
}

/// Pointer interactions a row reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowEvent {
    /// Click on the row or its text
    Click,
    /// Mouse released, inside the row or not
    MouseUp {
        /// Whether the pointer was still inside
        inside: bool,
    },
    /// Copy or gift button
    CopyButton,
    /// Hide/reveal toggle
    ToggleVisibility,
    /// Launch-app button
    LaunchApp,
    /// "Show more" affordance
    ShowMore,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowEventOutcome {
    /// The row has no affordance for the event
    Ignored,
    /// A handler ran; frames are unchanged
    Handled,
    /// The row's size changed and must be laid out again
    NeedsLayout,
}

/// Lays out a row and routes events to it.
#[derive(Debug, Clone, Default)]
pub struct TextAndLabelRowView {
    layout: Option<RowViewLayout>,
}

impl TextAndLabelRowView {
    /// Creates a view with no layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last computed layout.
    pub fn current(&self) -> Option<&RowViewLayout> {
        self.layout.as_ref()
    }

    /// Measures `item` for `frame_width` and computes its frames.
    ///
    /// # Errors
    ///
    /// Returns a layout error when `frame_width` cannot hold the row.
    #[instrument(skip(self, item), fields(label = %item.label()))]
    pub fn layout(
        &mut self,
        item: &mut TextAndLabelItem,
        frame_width: f64,
    ) -> CourierResult<&RowViewLayout> {
        item.make_size(frame_width)?;
        let layout = compute_layout(item, frame_width)?;
        debug!(container = ?layout.container, "Laid out row");
        Ok(self.layout.insert(layout))
    }

    /// Event for a pointer press at `point` in container coordinates.
    pub fn hit_test(&self, point: Point) -> Option<RowEvent> {
        let layout = self.layout.as_ref()?;
        let local = Rect::from_origin(Point::default(), layout.container.size);
        if !local.contains(point) {
            return None;
        }

        let event = if layout.copy_button.is_some_and(|b| b.frame.contains(point)) {
            RowEvent::CopyButton
        } else if layout.toggle_button.is_some_and(|b| b.frame.contains(point)) {
            RowEvent::ToggleVisibility
        } else if layout.more_button.is_some_and(|r| r.contains(point)) {
            RowEvent::ShowMore
        } else if layout
            .launch_button
            .as_ref()
            .is_some_and(|b| b.frame.contains(point))
        {
            RowEvent::LaunchApp
        } else {
            RowEvent::Click
        };
        Some(event)
    }

    /// Routes `event` to `item`'s handler.
    ///
    /// "Show more" expands the item and relays it out at the last width.
    ///
    /// # Errors
    ///
    /// Propagates layout errors from relaying out.
    #[instrument(skip(self, item), fields(label = %item.label()))]
    pub fn handle(
        &mut self,
        item: &mut TextAndLabelItem,
        event: RowEvent,
    ) -> CourierResult<RowEventOutcome> {
        let outcome = match event {
            RowEvent::Click | RowEvent::MouseUp { inside: true } => {
                item.handler().on_click();
                RowEventOutcome::Handled
            }
            RowEvent::MouseUp { inside: false } => RowEventOutcome::Ignored,
            RowEvent::CopyButton => {
                if item.press_action_button() {
                    RowEventOutcome::Handled
                } else {
                    RowEventOutcome::Ignored
                }
            }
            RowEvent::ToggleVisibility => {
                if item.options().hide_text().is_some() {
                    item.handler().toggle_hide();
                    RowEventOutcome::Handled
                } else {
                    RowEventOutcome::Ignored
                }
            }
            RowEvent::LaunchApp => {
                if *item.options().launch_app() {
                    item.handler().launch_app();
                    RowEventOutcome::Handled
                } else {
                    RowEventOutcome::Ignored
                }
            }
            RowEvent::ShowMore => {
                if item.more_state() == MoreState::Truncated {
                    item.show_more()?;
                    if let Some(width) = item.measured_width() {
                        self.layout = Some(compute_layout(item, width)?);
                    }
                    RowEventOutcome::NeedsLayout
                } else {
                    RowEventOutcome::Ignored
                }
            }
        };
        debug!(?event, ?outcome, "Handled row event");
        Ok(outcome)
    }
}

fn compute_layout(item: &TextAndLabelItem, frame_width: f64) -> CourierResult<RowViewLayout> {
    let config = item.config();
    let theme = item.theme();
    let options = item.options();

    let width = item.container_width(frame_width);
    if width <= 0.0 {
        return Err(LayoutError::new(LayoutErrorKind::InvalidWidth(frame_width)).into());
    }
    let height = item.height()?;
    // Containers start at the top of the frame and span the row height. Spacing
    // between stacked blocks belongs to the host list.
    let container = Rect::new((frame_width - width) / 2.0, 0.0, width, height);
    let (inset_left, inset_right) = item.horizontal_insets();

    let label = item.label_layout()?;
    let text = item.text_layout()?;
    let label_y = item.label_y()?;
    let text_y = item.text_y()?;
    let text_width = item.text_width()?;
    let icon = *config.icon_size();

    let label_rect = Rect::new(inset_left, label_y, label.size.width, label.size.height);
    let text_rect = Rect::new(inset_left, text_y, text_width, text.size.height);

    let toggle_button = options.hide_text().map(|hidden| IconButton {
        frame: Rect::new(
            label_rect.max_x() + config.toggle_spacing(),
            label_y + (label.size.height - icon) / 2.0,
            icon,
            icon,
        ),
        icon: if hidden { Icon::EyeOn } else { Icon::EyeOff },
        tint: theme.accent,
    });

    let copy_button = if item.has_action_button() {
        let labels_height = item.labels_height()?;
        Some(IconButton {
            frame: Rect::new(
                width - icon - inset_right,
                label_y + (labels_height - icon) / 2.0,
                icon,
                icon,
            ),
            icon: if *options.gift() {
                Icon::Gift
            } else {
                Icon::CopyLink
            },
            tint: theme.accent,
        })
    } else {
        None
    };

    let (more_button, shadow) = if item.more_state() == MoreState::Truncated {
        let more = item.measurer().measure(
            options.show_more_text(),
            TextRole::More,
            f64::INFINITY,
            Some(1),
        );
        let more_size = Size::new(
            more.size.width + config.more_padding(),
            more.size.height,
        );
        let more_rect = Rect::new(
            text_rect.max_x() - more_size.width,
            text_rect.max_y() - more_size.height + config.more_bottom_offset(),
            more_size.width,
            more_size.height,
        );
        let shadow_rect = Rect::new(
            text_rect.max_x() - config.shadow_right_offset(),
            text_rect.max_y() - config.shadow_height(),
            *config.shadow_width(),
            *config.shadow_height(),
        );
        (Some(more_rect), Some(shadow_rect))
    } else {
        (None, None)
    };

    let launch_button = options.launch_app().then(|| {
        let margin = *config.launch_button_margin();
        LaunchButton {
            frame: Rect::new(
                margin,
                height - config.launch_button_height() - margin,
                width - 2.0 * margin,
                *config.launch_button_height(),
            ),
            title: options.launch_app_title().clone(),
            background: theme.accent,
            text_color: theme.under_selected,
        }
    });

    let has_separator = match options.view_type() {
        ViewType::Legacy => true,
        ViewType::Modern { position, .. } => position.border(),
    };
    let separator = has_separator.then(|| {
        Rect::new(
            inset_left,
            height - config.border_size(),
            width - inset_left - inset_right,
            *config.border_size(),
        )
    });

    Ok(RowViewLayout {
        container,
        corners: options.view_type().corners(),
        background: theme.background,
        label_rect,
        label_color: theme.accent,
        text_rect,
        text_color: theme.text,
        text_selectable: *options.is_text_selectable()
            && *options.can_copy()
            && !item.is_hidden(),
        toggle_button,
        copy_button,
        more_button,
        shadow,
        launch_button,
        separator,
        separator_color: theme.border,
    })
}
