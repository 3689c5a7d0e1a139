//! Tests for logic error messages

#[cfg(test)]
mod tests {
    use pagerank::knights::LogicError;

    // Tests messages name the symbol and the limit
    // Verified by omitting the limit from the message
    #[test]
    fn test_messages() {
        let unknown = LogicError::UnknownSymbol {
            symbol: "A is a Knight".to_string(),
        };
        let too_many = LogicError::TooManySymbols { count: 25, max: 20 };

        assert_eq!(unknown.to_string(), "Symbol 'A is a Knight' has no value");
        assert_eq!(
            too_many.to_string(),
            "Model checking 25 symbols exceeds the limit of 20"
        );
    }
}
