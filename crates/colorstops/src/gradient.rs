//! Gradients with any number of color stops.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use ordered_float::NotNan;

use crate::blend::Blending;
use crate::core::{decompress, evenly_spaced, inv_lerp};
use crate::error::GradientError;
use crate::{Color, Float};

/// A color stop.
///
/// A stop combines a color with the blending towards the next stop up. The
/// highest stop's blending also applies when extrapolating beyond it.
#[derive(Clone, Debug)]
pub struct GradientStop {
    pub color: Color,
    pub blending: Blending,
}

impl GradientStop {
    /// Create a new gradient stop.
    pub fn new(color: Color, blending: Blending) -> Self {
        Self { color, blending }
    }
}

impl From<(Color, Blending)> for GradientStop {
    fn from(value: (Color, Blending)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<GradientStop> for (Color, Blending) {
    fn from(value: GradientStop) -> Self {
        (value.color, value.blending)
    }
}

fn to_key(position: Float) -> Result<NotNan<Float>, GradientError> {
    NotNan::new(position).map_err(|_| GradientError::NotANumber)
}

// ====================================================================================================================

/// A gradient.
///
/// A gradient maps positions to [`GradientStop`]s, ordered by position. The
/// color for a position between two stops is the lower stop's blending of the
/// two stops' colors. Beyond the highest stop, the gradient extrapolates from
/// the two highest stops with the highest stop's blending. Below the lowest
/// stop, it extrapolates from the two lowest stops with the gradient's own
/// *left blending*.
///
/// Positions must be numbers. Stops with the same position replace each other.
///
/// ```
/// # use colorstops::{assert_same_color, Blending, Color, Gradient};
/// # use colorstops::error::GradientError;
/// let gradient = Gradient::evenly_spaced(
///     Blending::srgb(),
///     [Color::RED, Color::GREEN, Color::BLUE],
/// );
/// assert_eq!(gradient.len(), 3);
///
/// let color = gradient.color_at(0.25)?;
/// assert_same_color!(color, Color::rgb(0.5, 0.5, 0.0));
///
/// let colors = gradient.evenly_spaced_colors(5)?;
/// assert_same_color!(colors[4], Color::BLUE);
/// # Ok::<(), GradientError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Gradient {
    stops: BTreeMap<NotNan<Float>, GradientStop>,
    left_blending: Blending,
}

impl Gradient {
    /// Create a new gradient without stops.
    pub fn new(left_blending: Blending) -> Self {
        Self {
            stops: BTreeMap::new(),
            left_blending,
        }
    }

    /// Create a new gradient with the given stop at position 0.
    ///
    /// The stop's blending doubles as the gradient's left blending.
    pub fn from_stop(stop: GradientStop) -> Self {
        let mut gradient = Self::new(stop.blending.clone());
        gradient.stops.insert(NotNan::default(), stop);
        gradient
    }

    /// Create a new gradient with a single color at position 0.
    pub fn with_color(blending: Blending, color: Color) -> Self {
        Self::from_stop(GradientStop::new(color, blending))
    }

    /// Create a new gradient with two colors at positions 0 and 1.
    pub fn with_colors(blending: Blending, left: Color, right: Color) -> Self {
        Self::evenly_spaced(blending, [left, right])
    }

    /// Create a new gradient with the colors evenly spaced across `0..=1`.
    ///
    /// All stops use the given blending. A single color ends up at position 0.
    pub fn evenly_spaced<I>(blending: Blending, colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        let stops = colors
            .into_iter()
            .map(|color| GradientStop::new(color, blending.clone()))
            .collect::<Vec<_>>();
        Self::evenly_spaced_stops(blending, stops)
    }

    /// Create a new gradient with the stops evenly spaced across `0..=1`.
    ///
    /// A single stop ends up at position 0.
    pub fn evenly_spaced_stops<I>(left_blending: Blending, stops: I) -> Self
    where
        I: IntoIterator<Item = GradientStop>,
    {
        let stops = stops.into_iter().collect::<Vec<_>>();
        let positions = evenly_spaced(0.0, 1.0, stops.len());

        let mut gradient = Self::new(left_blending);
        for (position, stop) in positions.zip(stops) {
            // Positions from 0 to 1 are never not-a-number.
            if let Ok(key) = NotNan::new(position) {
                gradient.stops.insert(key, stop);
            }
        }
        gradient
    }

    /// Create a new gradient from positioned colors.
    ///
    /// All stops use the given blending. If several colors have the same
    /// position, the last one wins.
    ///
    /// # Errors
    ///
    /// This function fails if a position is not-a-number.
    pub fn from_positioned_colors<I>(blending: Blending, colors: I) -> Result<Self, GradientError>
    where
        I: IntoIterator<Item = (Float, Color)>,
    {
        let mut gradient = Self::new(blending);
        for (position, color) in colors {
            gradient.insert_color(position, color)?;
        }
        Ok(gradient)
    }

    /// Create a new gradient from positioned stops.
    ///
    /// If several stops have the same position, the last one wins.
    ///
    /// # Errors
    ///
    /// This function fails if a position is not-a-number.
    pub fn from_positioned_stops<I>(
        left_blending: Blending,
        stops: I,
    ) -> Result<Self, GradientError>
    where
        I: IntoIterator<Item = (Float, GradientStop)>,
    {
        let mut gradient = Self::new(left_blending);
        for (position, stop) in stops {
            gradient.insert(position, stop)?;
        }
        Ok(gradient)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the blending used below the lowest stop.
    #[inline]
    pub fn left_blending(&self) -> &Blending {
        &self.left_blending
    }

    /// Set the blending used below the lowest stop.
    #[inline]
    pub fn set_left_blending(&mut self, blending: Blending) {
        self.left_blending = blending;
    }

    /// Determine the number of stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Determine whether this gradient has no stops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Get the stop at the given position.
    pub fn get(&self, position: Float) -> Option<&GradientStop> {
        NotNan::new(position)
            .ok()
            .and_then(|key| self.stops.get(&key))
    }

    /// Get the lowest stop and its position.
    pub fn lowest(&self) -> Option<(Float, &GradientStop)> {
        self.stops
            .first_key_value()
            .map(|(key, stop)| (key.into_inner(), stop))
    }

    /// Get the highest stop and its position.
    pub fn highest(&self) -> Option<(Float, &GradientStop)> {
        self.stops
            .last_key_value()
            .map(|(key, stop)| (key.into_inner(), stop))
    }

    /// Iterate over the stops and their positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &GradientStop)> {
        self.stops.iter().map(|(key, stop)| (key.into_inner(), stop))
    }

    /// Insert a stop, returning the stop previously at the same position.
    ///
    /// # Errors
    ///
    /// This method fails if the position is not-a-number.
    pub fn insert(
        &mut self,
        position: Float,
        stop: GradientStop,
    ) -> Result<Option<GradientStop>, GradientError> {
        Ok(self.stops.insert(to_key(position)?, stop))
    }

    /// Insert a color with this gradient's left blending, returning the stop
    /// previously at the same position.
    ///
    /// # Errors
    ///
    /// This method fails if the position is not-a-number.
    pub fn insert_color(
        &mut self,
        position: Float,
        color: Color,
    ) -> Result<Option<GradientStop>, GradientError> {
        let stop = GradientStop::new(color, self.left_blending.clone());
        self.insert(position, stop)
    }

    /// Remove the stop at the given position.
    pub fn remove(&mut self, position: Float) -> Option<GradientStop> {
        NotNan::new(position)
            .ok()
            .and_then(|key| self.stops.remove(&key))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the stops bracketing the key as well as the blending to use.
    ///
    /// This method returns `None` if the gradient has fewer than two stops.
    #[allow(clippy::type_complexity)]
    fn bracket(
        &self,
        key: NotNan<Float>,
    ) -> Option<(
        (&NotNan<Float>, &GradientStop),
        (&NotNan<Float>, &GradientStop),
        &Blending,
    )> {
        let lower = self.stops.range(..key).next_back();
        let higher = self.stops.range((Excluded(key), Unbounded)).next();

        match (lower, higher) {
            (Some(lower), Some(higher)) => Some((lower, higher, &lower.1.blending)),
            (Some(_), None) => {
                let highest = self.stops.last_key_value()?;
                let second = self.stops.range(..*highest.0).next_back()?;
                Some((second, highest, &highest.1.blending))
            }
            (None, _) => {
                let lowest = self.stops.first_key_value()?;
                let second = self.stops.range((Excluded(*lowest.0), Unbounded)).next()?;
                Some((lowest, second, &self.left_blending))
            }
        }
    }

    /// Determine the color at the given position.
    ///
    /// A gradient with one stop has the same color everywhere. Otherwise, a
    /// position matching a stop has that stop's color, and any other position
    /// blends the colors of the bracketing stops. Positions outside the stops
    /// extrapolate.
    ///
    /// # Errors
    ///
    /// This method fails if the gradient has no stops. It also fails if the
    /// gradient has more than one stop and the position is not-a-number.
    pub fn color_at(&self, position: Float) -> Result<Color, GradientError> {
        if self.stops.len() <= 1 {
            return self
                .stops
                .values()
                .next()
                .map(|stop| stop.color)
                .ok_or(GradientError::NoStops);
        }

        let key = to_key(position)?;
        if let Some(stop) = self.stops.get(&key) {
            return Ok(stop.color);
        }

        let ((low, left), (high, right), blending) =
            self.bracket(key).ok_or(GradientError::NoStops)?;
        let pos = inv_lerp(low.into_inner(), high.into_inner(), position);
        Ok(blending.blend(&left.color, &right.color, pos))
    }

    /// Sample `count` colors evenly spaced from the lowest to the highest
    /// stop, inclusive.
    ///
    /// A single sample is the lowest stop's color.
    ///
    /// # Errors
    ///
    /// This method fails if the gradient has no stops.
    pub fn evenly_spaced_colors(&self, count: usize) -> Result<Vec<Color>, GradientError> {
        self.sample(count, 0.0)
    }

    /// Sample `count` colors evenly spaced across a padded range.
    ///
    /// Before sampling, this method widens the range from the lowest to the
    /// highest stop by the `padding` fraction of its width on either side. As
    /// a result, the samples include some overshoot beyond both ends of the
    /// gradient.
    ///
    /// ```
    /// # use colorstops::{assert_close_enough, Blending, Color, Gradient};
    /// # use colorstops::error::GradientError;
    /// let gradient = Gradient::with_colors(Blending::srgb(), Color::BLACK, Color::WHITE);
    /// let colors = gradient.evenly_spaced_padded_colors(3, 0.25)?;
    /// assert_close_enough!(colors[0].red(), -0.25);
    /// assert_close_enough!(colors[1].red(), 0.5);
    /// assert_close_enough!(colors[2].red(), 1.25);
    /// # Ok::<(), GradientError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if the gradient has no stops.
    pub fn evenly_spaced_padded_colors(
        &self,
        count: usize,
        padding: Float,
    ) -> Result<Vec<Color>, GradientError> {
        self.sample(count, padding)
    }

    fn sample(&self, count: usize, padding: Float) -> Result<Vec<Color>, GradientError> {
        let (low, stop) = self.lowest().ok_or(GradientError::NoStops)?;
        if self.stops.len() == 1 {
            return Ok(vec![stop.color; count]);
        }

        let (high, _) = self.highest().ok_or(GradientError::NoStops)?;
        let (low, high) = decompress(low, high, padding);
        evenly_spaced(low, high, count)
            .map(|position| self.color_at(position))
            .collect()
    }
}

// ====================================================================================================================
