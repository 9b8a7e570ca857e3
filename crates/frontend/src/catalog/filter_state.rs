use contracts::shared::filter::FilterPredicate;
use contracts::shared::validation::ValidationError;

/// Active filter predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    predicate: FilterPredicate,
}

impl FilterState {
    pub fn predicate(&self) -> &FilterPredicate {
        &self.predicate
    }

    /// Replace the predicate wholesale.
    ///
    /// An inverted price range clears the whole filter instead of keeping the
    /// previous value, the same as pressing the reset button.
    pub fn apply(&mut self, candidate: FilterPredicate) -> Result<(), ValidationError> {
        if let Err(e) = candidate.validate() {
            self.reset();
            return Err(e);
        }
        self.predicate = candidate.normalized();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.predicate = FilterPredicate::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_without_merge() {
        let mut state = FilterState::default();
        state
            .apply(FilterPredicate {
                name: "lap".into(),
                brand: "Dell".into(),
                ..Default::default()
            })
            .unwrap();
        state
            .apply(FilterPredicate {
                min_price: Some(10.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(state.predicate().name, "");
        assert_eq!(state.predicate().brand, "");
        assert_eq!(state.predicate().min_price, Some(10.0));
    }

    #[test]
    fn test_inverted_range_clears_previous_filter() {
        let mut state = FilterState::default();
        state
            .apply(FilterPredicate {
                brand: "Apple".into(),
                ..Default::default()
            })
            .unwrap();

        let result = state.apply(FilterPredicate {
            name: "lap".into(),
            min_price: Some(100.0),
            max_price: Some(50.0),
            ..Default::default()
        });

        assert_eq!(result, Err(ValidationError::InvertedRange));
        assert_eq!(state.predicate(), &FilterPredicate::default());
    }
}
