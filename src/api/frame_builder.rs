//! Builds the per-update directive frame.
//!
//! One pass over all ticks applies the control's visual rules:
//! proportional placement outside the expansion window, uniform spacing
//! with a distance fade inside it, an emphasized selected tick, and the
//! five named label slots.

use tracing::debug;

use crate::api::label_format::{
    DEFAULT_BOUNDARIES_FORMAT, DEFAULT_DATA_POINT_FORMAT, date_string,
};
use crate::core::breakpoints::Breakpoint;
use crate::core::data::{DatedPoint, SliderDataSource};
use crate::core::engine::{self, TickKind};
use crate::render::{Color, LabelDirective, SliderFrame, TickDirective, TickRole};

use super::SliderControl;

impl<D: SliderDataSource> SliderControl<D> {
    /// Produces the tick and label directives for the current state.
    ///
    /// An unusable control yields an empty frame; the host should render
    /// nothing rather than a partial track.
    #[must_use]
    pub fn build_frame(&self) -> SliderFrame {
        let mut frame = SliderFrame::new(self.viewport());
        if !self.is_usable() {
            debug!("build_frame skipped: control is not usable");
            return frame;
        }
        let Some(source) = self.data_source() else {
            return frame;
        };

        let count = source.len();
        let ctx = self.tick_context();
        let config = self.config();
        let style = self.style();
        let expanded = self.is_expanded();
        let selected_index = self.selected_index();
        let range = config.expansion_range;
        let breakpoints = self.breakpoints();
        let x_position = self.tick_x_position();

        let data_point_format = self
            .observers()
            .data_point_date_format()
            .unwrap_or(DEFAULT_DATA_POINT_FORMAT)
            .to_owned();
        let boundaries_format = self
            .observers()
            .boundaries_date_format()
            .unwrap_or(DEFAULT_BOUNDARIES_FORMAT)
            .to_owned();

        frame.ticks.reserve(count);
        for index in 0..count {
            let point = source.point_at(index);
            let offset = engine::display_offset(
                breakpoints,
                point.unix_time(),
                index,
                ctx,
                config.expansion_step,
            );
            let kind = engine::classify(breakpoints, index, ctx);

            let mut role = match kind {
                TickKind::LinearMiddle => {
                    let on_track = breakpoints.earliest().is_some_and(|p| offset >= p.offset)
                        && breakpoints.latest().is_some_and(|p| offset <= p.offset);
                    if on_track {
                        let distance = selected_index.map_or(0, |sel| sel.abs_diff(index));
                        TickRole::Accessory {
                            alpha: 1.0 - 0.5 * distance as f64 / range as f64,
                        }
                    } else {
                        TickRole::Hidden
                    }
                }
                _ => TickRole::Inactive,
            };
            let mut x_shift = 0.0;
            let mut stroke_width = 1.0;
            let mut scale = 1.0;

            // Boundary labels stay visible while expanded, except when the
            // selection sits on that boundary and owns the slot.
            if expanded && index == 0 && selected_index != Some(0) {
                push_label(
                    &mut frame,
                    Breakpoint::Earliest,
                    point,
                    &boundaries_format,
                    offset,
                    1.0,
                    style.label_color,
                );
            }
            if expanded && index == count - 1 && selected_index != Some(count - 1) {
                push_label(
                    &mut frame,
                    Breakpoint::Latest,
                    point,
                    &boundaries_format,
                    offset,
                    1.0,
                    style.label_color,
                );
            }

            if let Some(selected) = selected_index {
                let distance = selected.abs_diff(index);
                if distance < range {
                    if index == selected {
                        role = TickRole::Selected;
                        stroke_width = 3.0;
                        scale = 2.0;
                        x_shift = -15.0;
                        if expanded {
                            push_label(
                                &mut frame,
                                Breakpoint::Selected,
                                point,
                                &data_point_format,
                                offset,
                                1.0,
                                style.label_color,
                            );
                        }
                    } else if expanded {
                        x_shift = -2.0 * (range - distance) as f64;
                        if distance == range - 1 {
                            let slot = if index > selected {
                                Breakpoint::LastDistorted
                            } else {
                                Breakpoint::FirstDistorted
                            };
                            push_label(
                                &mut frame,
                                slot,
                                point,
                                &data_point_format,
                                offset,
                                0.3,
                                style.label_color,
                            );
                        }
                    }
                }
            }

            let color = match role {
                TickRole::Inactive => style.inactive_tick_color,
                TickRole::Accessory { alpha } => style.selected_tick_color.with_alpha(alpha),
                TickRole::Selected => style.selected_tick_color,
                TickRole::Hidden => style.selected_tick_color.with_alpha(0.0),
            };

            frame.ticks.push(TickDirective {
                index,
                offset,
                kind,
                role,
                color,
                x_position,
                x_shift,
                stroke_width,
                scale,
            });
        }

        frame
    }
}

fn push_label(
    frame: &mut SliderFrame,
    slot: Breakpoint,
    point: DatedPoint,
    format: &str,
    offset: f64,
    opacity: f64,
    color: Color,
) {
    frame.labels.push(LabelDirective {
        slot,
        text: date_string(point, format),
        offset,
        opacity,
        color,
    });
}
