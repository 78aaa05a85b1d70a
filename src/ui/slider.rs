//! Projection between the current index and the slider thumb.
//!
//! The slider is a vertical track with a thumb that slides inside it. The thumb
//! can occupy `max_travel = track_height - thumb_height` pixels, and the item
//! sequence is spread evenly across that range:
//!
//! ```text
//! offset = index / (len - 1) * max_travel
//! index  = round(offset / max_travel * (len - 1))
//! ```
//!
//! Every function here is pure. Geometry is passed in by the caller, who reads
//! it from the [`SliderSurface`] on each event.

/// Track and thumb sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub track_height: f64,
    pub thumb_height: f64,
}

impl SliderGeometry {
    #[must_use]
    pub const fn new(track_height: f64, thumb_height: f64) -> Self {
        Self {
            track_height,
            thumb_height,
        }
    }

    /// Pixel range the thumb can occupy. Negative when the thumb is taller
    /// than the track.
    #[must_use]
    pub fn max_travel(&self) -> f64 {
        self.track_height - self.thumb_height
    }

    /// Like [`max_travel`](Self::max_travel) but never below zero.
    fn usable_travel(&self) -> f64 {
        self.max_travel().max(0.0)
    }
}

/// Read-only view of the slider as laid out by the host.
///
/// Implementations must report live values; the router calls these on every
/// event that needs them and never caches the result.
pub trait SliderSurface {
    /// Current track and thumb heights.
    fn geometry(&self) -> SliderGeometry;

    /// Top edge of the track in the same coordinate space as pointer `client_y`.
    fn track_top(&self) -> f64;
}

/// A surface with fixed measurements, for hosts that measure up front and for
/// tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface {
    pub geometry: SliderGeometry,
    pub track_top: f64,
}

impl FixedSurface {
    #[must_use]
    pub const fn new(track_height: f64, thumb_height: f64, track_top: f64) -> Self {
        Self {
            geometry: SliderGeometry::new(track_height, thumb_height),
            track_top,
        }
    }
}

impl SliderSurface for FixedSurface {
    fn geometry(&self) -> SliderGeometry {
        self.geometry
    }

    fn track_top(&self) -> f64 {
        self.track_top
    }
}

/// Position of `index` along the sequence as a ratio in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
fn index_ratio(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    (index as f64 / (len - 1) as f64).clamp(0.0, 1.0)
}

/// Thumb top offset in pixels for `index`.
///
/// # Examples
///
/// ```
/// use seqview::ui::{index_to_offset, SliderGeometry};
///
/// let geometry = SliderGeometry::new(200.0, 40.0);
/// assert_eq!(index_to_offset(2, 5, geometry), 80.0);
/// assert_eq!(index_to_offset(0, 1, geometry), 0.0);
/// ```
#[must_use]
pub fn index_to_offset(index: usize, len: usize, geometry: SliderGeometry) -> f64 {
    index_ratio(index, len) * geometry.usable_travel()
}

/// Index closest to a thumb top offset.
///
/// Ratios exactly halfway between two indices round away from zero.
///
/// # Examples
///
/// ```
/// use seqview::ui::{offset_to_index, SliderGeometry};
///
/// let geometry = SliderGeometry::new(200.0, 40.0);
/// assert_eq!(offset_to_index(159.0, 5, geometry), 4);
/// assert_eq!(offset_to_index(30.0, 5, geometry), 1);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn offset_to_index(offset: f64, len: usize, geometry: SliderGeometry) -> usize {
    if len <= 1 {
        return 0;
    }
    let max_travel = geometry.max_travel();
    let ratio = if max_travel > 0.0 { offset / max_travel } else { 0.0 };
    let last = len - 1;
    let index = (ratio * last as f64).round();
    if index.is_nan() || index <= 0.0 {
        0
    } else {
        (index as usize).min(last)
    }
}

/// Percentage reported to assistive technology for `index`.
#[must_use]
pub fn accessible_value(index: usize, len: usize) -> f64 {
    index_ratio(index, len) * 100.0
}

/// Thumb top offset for a pointer at `client_y`, centring the thumb on the
/// pointer and keeping it inside the track.
///
/// # Examples
///
/// ```
/// use seqview::ui::{pointer_offset, SliderGeometry};
///
/// let geometry = SliderGeometry::new(200.0, 40.0);
/// assert_eq!(pointer_offset(120.0, 0.0, geometry), 100.0);
/// assert_eq!(pointer_offset(-50.0, 0.0, geometry), 0.0);
/// assert_eq!(pointer_offset(900.0, 0.0, geometry), 160.0);
/// ```
#[must_use]
pub fn pointer_offset(client_y: f64, track_top: f64, geometry: SliderGeometry) -> f64 {
    let top = client_y - track_top - geometry.thumb_height / 2.0;
    if top.is_nan() {
        return 0.0;
    }
    top.clamp(0.0, geometry.usable_travel())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: SliderGeometry = SliderGeometry::new(200.0, 40.0);

    #[test]
    fn offsets_spread_evenly_across_travel() {
        assert_eq!(index_to_offset(0, 5, GEOMETRY), 0.0);
        assert_eq!(index_to_offset(1, 5, GEOMETRY), 40.0);
        assert_eq!(index_to_offset(2, 5, GEOMETRY), 80.0);
        assert_eq!(index_to_offset(4, 5, GEOMETRY), 160.0);
    }

    #[test]
    fn out_of_range_index_clamps_to_track_end() {
        assert_eq!(index_to_offset(9, 5, GEOMETRY), 160.0);
    }

    #[test]
    fn short_sequences_pin_thumb_to_top() {
        assert_eq!(index_to_offset(0, 0, GEOMETRY), 0.0);
        assert_eq!(index_to_offset(0, 1, GEOMETRY), 0.0);
        assert_eq!(offset_to_index(120.0, 1, GEOMETRY), 0);
        assert_eq!(offset_to_index(120.0, 0, GEOMETRY), 0);
        assert_eq!(accessible_value(0, 1), 0.0);
    }

    #[test]
    fn offsets_round_to_nearest_index() {
        assert_eq!(offset_to_index(159.0, 5, GEOMETRY), 4);
        assert_eq!(offset_to_index(61.0, 5, GEOMETRY), 2);
        assert_eq!(offset_to_index(59.0, 5, GEOMETRY), 1);
        assert_eq!(offset_to_index(0.0, 5, GEOMETRY), 0);
    }

    #[test]
    fn offsets_outside_track_clamp_to_ends() {
        assert_eq!(offset_to_index(-30.0, 5, GEOMETRY), 0);
        assert_eq!(offset_to_index(500.0, 5, GEOMETRY), 4);
    }

    #[test]
    fn degenerate_geometry_maps_to_first_index() {
        let flat = SliderGeometry::new(40.0, 40.0);
        let inverted = SliderGeometry::new(20.0, 40.0);

        assert_eq!(offset_to_index(10.0, 5, flat), 0);
        assert_eq!(offset_to_index(10.0, 5, inverted), 0);
        assert_eq!(index_to_offset(4, 5, flat), 0.0);
        assert_eq!(index_to_offset(4, 5, inverted), 0.0);
        assert_eq!(pointer_offset(100.0, 0.0, inverted), 0.0);
    }

    #[test]
    fn round_trip_recovers_every_index() {
        for len in 2..40 {
            for index in 0..len {
                let offset = index_to_offset(index, len, GEOMETRY);
                assert_eq!(offset_to_index(offset, len, GEOMETRY), index, "len={len}");
            }
        }
    }

    #[test]
    fn accessible_value_is_percentage_of_sequence() {
        assert_eq!(accessible_value(0, 5), 0.0);
        assert_eq!(accessible_value(2, 5), 50.0);
        assert_eq!(accessible_value(4, 5), 100.0);
    }

    #[test]
    fn pointer_offset_centres_thumb_on_pointer() {
        assert_eq!(pointer_offset(150.0, 50.0, GEOMETRY), 80.0);
        assert_eq!(pointer_offset(10.0, 50.0, GEOMETRY), 0.0);
        assert_eq!(pointer_offset(1000.0, 50.0, GEOMETRY), 160.0);
    }
}
