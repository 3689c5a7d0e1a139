//! Tests for sentence evaluation and model checking

#[cfg(test)]
mod tests {
    use pagerank::knights::logic::Model;
    use pagerank::knights::{LogicError, MAX_SYMBOLS, Sentence, model_check};

    fn model(values: &[(&str, bool)]) -> Model {
        values
            .iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
    }

    // Tests every connective against its truth table
    // Verified by treating implication as conjunction
    #[test]
    fn test_connectives() {
        let p = Sentence::symbol("P");
        let q = Sentence::symbol("Q");
        let cases = [(false, false), (false, true), (true, false), (true, true)];

        for (p_value, q_value) in cases {
            let m = model(&[("P", p_value), ("Q", q_value)]);
            let eval = |sentence: Sentence| sentence.evaluate(&m).unwrap();

            assert_eq!(eval(Sentence::not(p.clone())), !p_value);
            assert_eq!(eval(Sentence::and([p.clone(), q.clone()])), p_value && q_value);
            assert_eq!(eval(Sentence::or([p.clone(), q.clone()])), p_value || q_value);
            assert_eq!(eval(Sentence::implies(p.clone(), q.clone())), !p_value || q_value);
            assert_eq!(eval(Sentence::iff(p.clone(), q.clone())), p_value == q_value);
            assert_eq!(eval(Sentence::exclusive_or(p.clone(), q.clone())), p_value != q_value);
        }
    }

    // Tests evaluation reports symbols missing from the model
    // Verified by defaulting missing symbols to false
    #[test]
    fn test_unknown_symbol() {
        let sentence = Sentence::and([Sentence::symbol("P"), Sentence::symbol("R")]);

        assert_eq!(
            sentence.evaluate(&model(&[("P", true)])),
            Err(LogicError::UnknownSymbol {
                symbol: "R".to_string()
            })
        );
    }

    // Tests entailment holds only when the query is true in every model of the knowledge
    // Verified by accepting a query true in some model
    #[test]
    fn test_model_check() {
        let rain = Sentence::symbol("rain");
        let wet = Sentence::symbol("wet");
        let knowledge =
            Sentence::and([Sentence::implies(rain.clone(), wet.clone()), rain.clone()]);

        assert!(model_check(&knowledge, &wet).unwrap());
        assert!(!model_check(&Sentence::implies(rain, wet.clone()), &wet).unwrap());
        let tautology = Sentence::or([wet.clone(), Sentence::not(wet)]);
        assert!(model_check(&knowledge, &tautology).unwrap());
    }

    // Tests contradictory knowledge entails everything
    // Verified by returning false when no model satisfies the knowledge
    #[test]
    fn test_contradiction_entails_anything() {
        let p = Sentence::symbol("P");
        let contradiction = Sentence::and([p.clone(), Sentence::not(p)]);

        assert!(model_check(&contradiction, &Sentence::symbol("Q")).unwrap());
    }

    // Tests symbols are collected and oversized problems rejected
    // Verified by removing the symbol limit
    #[test]
    fn test_symbols_and_limit() {
        let sentence = Sentence::iff(
            Sentence::symbol("B"),
            Sentence::not(Sentence::or([Sentence::symbol("A"), Sentence::symbol("B")])),
        );
        let wide =
            Sentence::and((0..=MAX_SYMBOLS).map(|index| Sentence::symbol(&format!("S{index}"))));

        assert_eq!(sentence.symbols().into_iter().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(sentence.to_string(), "(B <=> ¬((A ∨ B)))");
        assert!(matches!(
            model_check(&wide, &Sentence::symbol("S0")),
            Err(LogicError::TooManySymbols { .. })
        ));
    }
}
