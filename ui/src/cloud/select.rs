use api::WordStat;

/// Copy `words`, order them by descending value and keep the first `limit`.
///
/// The sort is stable, so equal values keep their input order.
pub fn select_top(words: &[WordStat], limit: usize) -> Vec<WordStat> {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[f64]) -> Vec<WordStat> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| WordStat::new(format!("w{i}"), *v))
            .collect()
    }

    #[test]
    fn keeps_everything_below_limit() {
        let input = words(&[1.0, 3.0, 2.0]);
        let top = select_top(&input, 120);
        assert_eq!(top.len(), 3);
        assert_eq!(
            top.iter().map(|w| w.value).collect::<Vec<_>>(),
            vec![3.0, 2.0, 1.0]
        );
    }

    #[test]
    fn drops_the_lowest_thirty_of_one_fifty() {
        // Values 0..150 shuffled deterministically.
        let values: Vec<f64> = (0..150).map(|i| ((i * 67) % 150) as f64).collect();
        let input = words(&values);

        let top = select_top(&input, 120);
        assert_eq!(top.len(), 120);
        assert!(top.iter().all(|w| w.value >= 30.0));

        let kept: std::collections::HashSet<_> = top.iter().map(|w| w.text.clone()).collect();
        let dropped: Vec<_> = input.iter().filter(|w| !kept.contains(&w.text)).collect();
        assert_eq!(dropped.len(), 30);
        assert!(dropped.iter().all(|w| w.value < 30.0));
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            WordStat::new("first", 5.0),
            WordStat::new("big", 9.0),
            WordStat::new("second", 5.0),
            WordStat::new("third", 5.0),
        ];
        let top = select_top(&input, 3);
        let texts: Vec<_> = top.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["big", "first", "second"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = words(&[1.0, 2.0]);
        let _ = select_top(&input, 1);
        assert_eq!(input[0].value, 1.0);
    }
}
