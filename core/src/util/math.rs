/// Largest element, or NaN for an empty slice.
pub fn max_f64(arr: &[f64]) -> f64 {
    let Some((&first, rest)) = arr.split_first() else {
        return f64::NAN;
    };
    rest.iter().fold(first, |max, &v| if max < v { v } else { max })
}

/// Smallest element, or NaN for an empty slice.
pub fn min_f64(arr: &[f64]) -> f64 {
    let Some((&first, rest)) = arr.split_first() else {
        return f64::NAN;
    };
    rest.iter().fold(first, |min, &v| if min > v { v } else { min })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_nan() {
        assert!(max_f64(&[]).is_nan());
        assert!(min_f64(&[]).is_nan());
    }

    #[test]
    fn test_extremes() {
        let v = [3.5, -2.0, 9.25, 0.0];
        assert_eq!(max_f64(&v), 9.25);
        assert_eq!(min_f64(&v), -2.0);
        assert_eq!(max_f64(&[-1.0]), -1.0);
    }
}
