#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/statistics_test.rs"]
mod statistics_test;

use crate::prelude::Float;

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[Float]) -> Float {
    if values.is_empty() {
        0.
    } else {
        let sum: Float = values.iter().sum();
        sum / values.len() as Float
    }
}

/// Gets mean of values using given iterator.
pub fn get_mean_iter<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    let (sum, count) = values.fold((0., 0), |(sum, count), item| (sum + item, count + 1));

    if count == 0 {
        0.
    } else {
        sum / count as Float
    }
}

/// Returns standard deviation.
pub fn get_stdev(values: &[Float]) -> Float {
    get_variance_mean(values).0.sqrt()
}

/// Returns variance and mean.
fn get_variance_mean(values: &[Float]) -> (Float, Float) {
    let mean = get_mean_slice(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    // NOTE Bessel's correction is not used here
    ((first - (second * second / values.len() as Float)) / (values.len() as Float), mean)
}
