/// Truncates two series to the same trailing window.
///
/// Both outputs are the suffix of length `min(len(a), len(b))` of their
/// respective inputs, so the oldest observations of the longer series are
/// dropped. No interpolation or timestamp matching is performed.
#[must_use]
pub fn align_trailing<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let m = a.len().min(b.len());
    (&a[a.len() - m..], &b[b.len() - m..])
}

/// Elementwise difference `a - b` over two aligned series.
#[must_use]
pub fn spread(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_keeps_suffix_of_each_input() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let b = vec![10.0, 20.0, 30.0];

        let (a_out, b_out) = align_trailing(&a, &b);

        assert_eq!(a_out, &[3.0, 4.0, 5.0]);
        assert_eq!(b_out, &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn align_output_lengths_are_min_of_inputs() {
        for (la, lb) in [(0, 5), (5, 0), (7, 7), (3, 9)] {
            let a: Vec<f64> = (0..la).map(f64::from).collect();
            let b: Vec<f64> = (0..lb).map(f64::from).collect();

            let (a_out, b_out) = align_trailing(&a, &b);

            assert_eq!(a_out.len(), b_out.len());
            assert_eq!(a_out.len(), la.min(lb) as usize);
        }
    }

    #[test]
    fn align_with_empty_input_yields_empty_outputs() {
        let a: Vec<f64> = vec![];
        let b = vec![1.0, 2.0];

        let (a_out, b_out) = align_trailing(&a, &b);

        assert!(a_out.is_empty());
        assert!(b_out.is_empty());
    }

    #[test]
    fn spread_is_elementwise_difference() {
        let a = vec![5.0, 7.0, 9.0];
        let b = vec![1.0, 2.0, 3.0];

        assert_eq!(spread(&a, &b), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn spread_of_empty_inputs_is_empty() {
        assert!(spread(&[], &[]).is_empty());
    }
}
