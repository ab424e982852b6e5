//! Sampled signals over time.

use std::{cmp::Ordering, ops::Neg, sync::Arc};

use ndarray::Array1;
use thiserror::Error;

/// Errors returned when a [`TimeSeries`] would violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series has {times} times but {values} values")]
    LengthMismatch { times: usize, values: usize },

    #[error("series needs at least 2 samples, got {len}")]
    TooShort { len: usize },

    #[error("times must be strictly increasing, violated at index {index}")]
    NotIncreasing { index: usize },
}

/// A signal sampled at strictly increasing times.
///
/// Times are in seconds.
/// Values are in the SI base unit of whatever quantity the series carries
/// (radians for a flip angle, m³ for a volume, and so on).
///
/// A series is never modified in place.
/// Every transform returns a new series that shares the time samples of its
/// source, so deriving a chain of series allocates only the values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Arc<Array1<f64>>,
    values: Array1<f64>,
}

impl TimeSeries {
    /// Creates a series from its time and value samples.
    ///
    /// # Errors
    ///
    /// Returns a [`SeriesError`] if the lengths differ, if there are fewer
    /// than two samples, or if the times are not strictly increasing.
    pub fn new(times: Array1<f64>, values: Array1<f64>) -> Result<Self, SeriesError> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.len() < 2 {
            return Err(SeriesError::TooShort { len: times.len() });
        }
        let increasing = |i: usize| times[i].partial_cmp(&times[i - 1]) == Some(Ordering::Greater);
        if let Some(index) = (1..times.len()).find(|&i| !increasing(i)) {
            return Err(SeriesError::NotIncreasing { index });
        }

        Ok(Self {
            times: Arc::new(times),
            values,
        })
    }

    /// Returns the time samples, in seconds.
    #[must_use]
    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// Returns the value samples.
    #[must_use]
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`, a series holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns the samples as `[time, value]` points.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(t, v)| [t, v]).collect()
    }

    /// Returns the largest absolute value in the series.
    ///
    /// `NaN` values are ignored.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |max, v| max.max(v.abs()))
    }

    /// Returns `true` if both series share the same time samples.
    #[must_use]
    pub fn shares_times_with(&self, other: &TimeSeries) -> bool {
        Arc::ptr_eq(&self.times, &other.times)
    }

    /// Returns a series with the same times and the given values.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if `values` does not have one
    /// entry per time sample.
    pub fn with_values(&self, values: Array1<f64>) -> Result<Self, SeriesError> {
        if values.len() != self.times.len() {
            return Err(SeriesError::LengthMismatch {
                times: self.times.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            times: Arc::clone(&self.times),
            values,
        })
    }

    /// Applies `f` to every value, keeping the times.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            times: Arc::clone(&self.times),
            values: self.values.mapv(f),
        }
    }

    /// Returns the series with every value sign-flipped.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map(|v| -v)
    }

    /// Returns the time derivative of the series.
    ///
    /// Interior samples use second-order centered differences weighted by the
    /// spacing on each side, so non-uniform times are supported.
    /// The first and last samples use one-sided differences.
    #[must_use]
    pub fn derivate(&self) -> Self {
        let t = &*self.times;
        let f = &self.values;
        let n = f.len();

        let values = Array1::from_shape_fn(n, |i| {
            if i == 0 {
                (f[1] - f[0]) / (t[1] - t[0])
            } else if i == n - 1 {
                (f[n - 1] - f[n - 2]) / (t[n - 1] - t[n - 2])
            } else {
                let hs = t[i] - t[i - 1];
                let hd = t[i + 1] - t[i];
                (hs * hs * f[i + 1] + (hd * hd - hs * hs) * f[i] - hd * hd * f[i - 1])
                    / (hs * hd * (hs + hd))
            }
        });

        Self {
            times: Arc::clone(&self.times),
            values,
        }
    }
}

impl Neg for &TimeSeries {
    type Output = TimeSeries;

    fn neg(self) -> Self::Output {
        TimeSeries::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use proptest::prelude::*;

    fn ramp(times: Array1<f64>, slope: f64, offset: f64) -> TimeSeries {
        let values = times.mapv(|t| slope * t + offset);
        TimeSeries::new(times, values).unwrap()
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = TimeSeries::new(array![0.0, 1.0, 2.0], array![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                times: 3,
                values: 2
            }
        );
    }

    #[test]
    fn rejects_a_single_sample() {
        let err = TimeSeries::new(array![0.0], array![1.0]).unwrap_err();
        assert_eq!(err, SeriesError::TooShort { len: 1 });
    }

    #[test]
    fn rejects_times_that_do_not_increase() {
        let err = TimeSeries::new(array![0.0, 1.0, 1.0], Array1::zeros(3)).unwrap_err();
        assert_eq!(err, SeriesError::NotIncreasing { index: 2 });

        let err = TimeSeries::new(array![0.0, f64::NAN], Array1::zeros(2)).unwrap_err();
        assert_eq!(err, SeriesError::NotIncreasing { index: 1 });
    }

    #[test]
    fn with_values_shares_times() {
        let series = ramp(array![0.0, 1.0, 2.0], 1.0, 0.0);
        let other = series.with_values(array![5.0, 6.0, 7.0]).unwrap();

        assert!(other.shares_times_with(&series));
        assert_eq!(other.values(), &array![5.0, 6.0, 7.0]);
    }

    #[test]
    fn with_values_checks_length() {
        let series = ramp(array![0.0, 1.0, 2.0], 1.0, 0.0);
        assert!(matches!(
            series.with_values(array![1.0]),
            Err(SeriesError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn neg_flips_every_value() {
        let series = ramp(array![0.0, 1.0, 2.0], 2.0, -1.0);
        assert_eq!(series.neg().values(), &array![1.0, -1.0, -3.0]);
        assert_eq!((-&series).values(), series.neg().values());
    }

    #[test]
    fn derivative_of_a_ramp_is_its_slope() {
        let series = ramp(Array1::linspace(0.0, 4.0, 9), 3.0, 1.5);
        for value in series.derivate().values() {
            assert_relative_eq!(*value, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_on_a_non_uniform_grid() {
        let times = array![0.0, 0.1, 0.5, 0.6, 2.0, 3.5];
        let series = ramp(times, -0.7, 4.0);
        for value in series.derivate().values() {
            assert_relative_eq!(*value, -0.7, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_of_a_parabola_is_exact_inside() {
        // Centered differences are exact for second-order polynomials.
        let times = array![0.0, 0.5, 1.5, 2.0, 3.0];
        let series = TimeSeries::new(times.clone(), times.mapv(|t| t * t)).unwrap();
        let slope = series.derivate();

        for i in 1..times.len() - 1 {
            assert_relative_eq!(slope.values()[i], 2.0 * times[i], epsilon = 1e-12);
        }
        // One-sided at the ends.
        assert_relative_eq!(slope.values()[0], 0.5);
        assert_relative_eq!(slope.values()[4], 5.0);
    }

    #[test]
    fn derivative_keeps_length_and_times() {
        let series = ramp(array![0.0, 1.0], 1.0, 0.0);
        let slope = series.derivate();
        assert_eq!(slope.len(), 2);
        assert!(slope.shares_times_with(&series));
    }

    #[test]
    fn max_abs_and_points() {
        let series = TimeSeries::new(array![0.0, 1.0, 2.0], array![0.5, -2.0, 1.0]).unwrap();
        assert_relative_eq!(series.max_abs(), 2.0);
        assert_eq!(series.points(), vec![[0.0, 0.5], [1.0, -2.0], [2.0, 1.0]]);
    }

    proptest! {
        #[test]
        fn neg_twice_is_identity(values in prop::collection::vec(-1e6..1e6f64, 2..50)) {
            let n = values.len();
            let series = TimeSeries::new(
                Array1::linspace(0.0, 1.0, n),
                Array1::from(values),
            ).unwrap();
            let twice = series.neg().neg();
            prop_assert_eq!(twice.values(), series.values());
        }

        #[test]
        fn derivative_of_any_ramp_is_constant(
            slope in -100.0..100.0f64,
            offset in -100.0..100.0f64,
            n in 3usize..60,
        ) {
            let series = ramp(Array1::linspace(0.0, 10.0, n), slope, offset);
            for value in series.derivate().values() {
                prop_assert!((value - slope).abs() < 1e-9 * (1.0 + slope.abs()));
            }
        }
    }
}
