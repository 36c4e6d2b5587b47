//! Planning positioned, colored arrows for a level.

use crate::sm::{math::exact_div, model::Chart, note::NoteStyle};

use super::{
    ChartError, GeometryError,
    beat::{Beats, decode_beats},
    config::{LANE_ANGLES, LANES, PlayfieldConfig},
    graphics::{ArrowShape, RECEPTOR_COLOR, Rgb},
    snap::calculate_color,
};

/// One arrow to draw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowPlan {
    /// The note style, never [`NoteStyle::Empty`].
    pub style: NoteStyle,
    /// Fill color.
    pub color: Rgb,
    /// Rotation around the view axis in radians.
    pub rotation: f64,
    /// Horizontal center.
    pub x: f64,
    /// Vertical center. The chart grows downwards from 0, so this is never positive.
    pub y: f64,
}

impl ArrowPlan {
    /// The mesh to draw this arrow with.
    #[must_use]
    pub const fn shape(&self) -> ArrowShape {
        match ArrowShape::of(self.style) {
            Some(shape) => shape,
            None => ArrowShape::Triangle,
        }
    }
}

/// All arrows of a level. Every entry carries its own position, so the order has no meaning to a renderer.
pub type ArrowsPlan = Vec<ArrowPlan>;

/// Height offset of subdivision `index` of `count` within a measure of `height`.
///
/// # Errors
///
/// [`GeometryError::InexactOffset`] unless the offset is an exact integer.
pub fn calculate_offset(height: u64, index: u64, count: u64) -> Result<u64, GeometryError> {
    exact_div(height, index, count).ok_or(GeometryError::InexactOffset {
        height,
        index,
        count,
    })
}

/// Plans arrows for decoded beats.
///
/// Each measure advances the position by `height_per_chart_beat` regardless of its subdivision.
/// The output is ordered by measure, then lane, then row.
///
/// # Errors
///
/// Fails if a row offset is not an exact integer or a tap's snap can not be classified.
pub fn plan_beats(beats: &Beats, config: &PlayfieldConfig) -> Result<ArrowsPlan, GeometryError> {
    let positions = config.lane_positions();
    let height = config.height_per_chart_beat;
    let mut plan = ArrowsPlan::new();
    let mut beat_offset = 0u64;
    for beat in beats {
        for (lane, column) in beat.iter().enumerate() {
            let count = column.len() as u64;
            for (index, &style) in column.iter().enumerate() {
                if style == NoteStyle::Empty {
                    continue;
                }
                let index = index as u64;
                let row_offset = calculate_offset(height, index, count)?;
                plan.push(ArrowPlan {
                    style,
                    color: calculate_color(style, index, count)?,
                    rotation: LANE_ANGLES[lane],
                    x: positions[lane],
                    y: -((beat_offset + row_offset) as f64),
                });
            }
        }
        beat_offset += height;
    }
    Ok(plan)
}

/// Plans arrows for the level at `level_index`.
///
/// # Errors
///
/// Fails if the level does not exist, its holds are broken, or its geometry is unsupported.
pub fn plan_arrows(
    chart: &Chart,
    level_index: usize,
    config: &PlayfieldConfig,
) -> Result<ArrowsPlan, ChartError> {
    let beats = decode_beats(chart, level_index)?;
    let plan = plan_beats(&beats, config)?;
    log::debug!(
        "planned {} arrows over {} measures for level {level_index}",
        plan.len(),
        beats.len()
    );
    Ok(plan)
}

/// The fixed receptor arrows at the judgment line, one per lane.
#[must_use]
pub fn receptor_plan(config: &PlayfieldConfig) -> [ArrowPlan; LANES] {
    let positions = config.lane_positions();
    std::array::from_fn(|lane| ArrowPlan {
        style: NoteStyle::Tap,
        color: RECEPTOR_COLOR,
        rotation: LANE_ANGLES[lane],
        x: positions[lane],
        y: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chart_process::{beat::decode_measures, snap::Snap};

    #[test]
    fn rows_are_spaced_within_measure() {
        let beats = decode_measures(&["1000010000100001", "1000"]).expect("valid");
        let plan = plan_beats(&beats, &PlayfieldConfig::default()).expect("valid");
        let ys: Vec<_> = plan.iter().map(|arrow| arrow.y).collect();
        assert_eq!(ys, vec![0.0, -240.0, -480.0, -720.0, -960.0]);
        let xs: Vec<_> = plan.iter().map(|arrow| arrow.x).collect();
        assert_eq!(xs, vec![-105.0, -35.0, 35.0, 105.0, -105.0]);
        assert_eq!(plan[1].color, Snap::Q4th.color());
    }

    #[test]
    fn inexact_subdivision_fails() {
        let beats = decode_measures(&["1000".repeat(7)]).expect("valid");
        assert_eq!(
            plan_beats(&beats, &PlayfieldConfig::default()),
            Err(GeometryError::InexactOffset {
                height: 960,
                index: 1,
                count: 7,
            })
        );
    }

    #[test]
    fn receptors_sit_on_zero() {
        let receptors = receptor_plan(&PlayfieldConfig::default());
        assert!(receptors.iter().all(|arrow| arrow.y == 0.0 && arrow.color == RECEPTOR_COLOR));
        assert_eq!(receptors[3].rotation, LANE_ANGLES[3]);
    }
}
