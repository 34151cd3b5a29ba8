//! Edge case tests for kplc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, LexErrorKind, LexModule, Lexer, LexerConfig, Symbol, Token};
    use kplc_util::span::Position;

    fn lex_all(source: &str) -> Vec<Symbol> {
        let mut lexer = Lexer::new(source);
        let mut symbols = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is_end() { break; }
            symbols.push(token.symbol);
        }
        symbols
    }

    fn lex_err(source: &str) -> LexError {
        let mut lexer = Lexer::new(source);
        loop {
            match lexer.next_token() {
                Ok(token) if token.is_end() => panic!("no fault in {:?}", source),
                Ok(_) => continue,
                Err(err) => return err,
            }
        }
    }

    fn kind_of(source: &str) -> (LexModule, LexErrorKind) {
        let err = lex_err(source);
        (err.module, err.kind)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_end_repeats_forever() {
        let mut lexer = Lexer::new("   \n\t ");
        let first = lexer.next_token().unwrap();
        assert!(first.is_end());
        for _ in 0..10 {
            assert_eq!(lexer.next_token().unwrap(), first);
        }
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Symbol::Identity("x".into())]);
    }

    #[test]
    fn test_edge_underscore_ident() {
        assert_eq!(lex_all("_ __a"), vec![
            Symbol::Identity("_".into()),
            Symbol::Identity("__a".into()),
        ]);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("procedure datum give");
        assert_eq!(t, vec![Symbol::Procedure, Symbol::Datum, Symbol::Give]);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Give give nat8 Nat8");
        assert_eq!(t[0], Symbol::Identity("Give".into()));
        assert_eq!(t[1], Symbol::Give);
        assert_eq!(t[2], Symbol::Identity("nat8".into()));
        assert_eq!(t[3], Symbol::Nat8);
    }

    #[test]
    fn test_edge_identity_at_length_cap() {
        let name = "a".repeat(1024);
        assert_eq!(lex_all(&name), vec![Symbol::Identity(name.clone())]);
        assert_eq!(
            kind_of(&"a".repeat(1025)),
            (LexModule::Alphabetic, LexErrorKind::OutOfRange)
        );
    }

    #[test]
    fn test_edge_number_runs_into_identity() {
        assert_eq!(lex_all("12ab"), vec![
            Symbol::Natural(12),
            Symbol::Identity("ab".into()),
        ]);
    }

    #[test]
    fn test_edge_zero_before_exponent_marker() {
        assert_eq!(lex_all("0e5"), vec![
            Symbol::Natural(0),
            Symbol::Identity("e5".into()),
        ]);
    }

    #[test]
    fn test_edge_machine_bounds() {
        let t = lex_all("0x0 0xFFFFFFFFFFFFFFFF 0b0");
        assert_eq!(t, vec![Symbol::Machine(0), Symbol::Machine(u64::MAX), Symbol::Machine(0)]);
    }

    #[test]
    fn test_edge_max_natural() {
        assert_eq!(lex_all("9_223_372_036_854_775_807"), vec![Symbol::Natural(i64::MAX)]);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("< <= << > >= >> : :: + ++ - -- -> & && | || = ==");
        assert_eq!(t, vec![
            Symbol::Lesser,
            Symbol::LesserEquivalent,
            Symbol::LeftShift,
            Symbol::Greater,
            Symbol::GreaterEquivalent,
            Symbol::RightShift,
            Symbol::Colon,
            Symbol::DoubleColon,
            Symbol::Plus,
            Symbol::Increment,
            Symbol::Minus,
            Symbol::Decrement,
            Symbol::RightArrow,
            Symbol::And,
            Symbol::DoubleAnd,
            Symbol::Line,
            Symbol::DoubleLine,
            Symbol::Equal,
            Symbol::Equivalent,
        ]);
    }

    #[test]
    fn test_edge_maximal_munch_without_spaces() {
        assert_eq!(lex_all("a<=b"), vec![
            Symbol::Identity("a".into()),
            Symbol::LesserEquivalent,
            Symbol::Identity("b".into()),
        ]);
        assert_eq!(lex_all("+++"), vec![Symbol::Increment, Symbol::Plus]);
    }

    #[test]
    fn test_edge_right_shift_spellings() {
        let symbols: Vec<Symbol> = tokenize("><").unwrap().into_iter().map(|t| t.symbol).collect();
        assert_eq!(symbols, vec![Symbol::RightShift, Symbol::End]);
        assert_eq!(lex_all("a><b>>c"), vec![
            Symbol::Identity("a".into()),
            Symbol::RightShift,
            Symbol::Identity("b".into()),
            Symbol::RightShift,
            Symbol::Identity("c".into()),
        ]);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| **x == Symbol::LeftParenthesis).count(), 3);
    }

    #[test]
    fn test_edge_comment_tokens_are_returned() {
        assert_eq!(lex_all("\\\\ a\n\\* b *\\"), vec![Symbol::Comment, Symbol::Comment]);
    }

    #[test]
    fn test_edge_unterminated_block_comment_terminates() {
        let mut lexer = Lexer::new("\\* abc");
        assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Comment);
        assert!(lexer.next_token().unwrap().is_end());
        assert!(lexer.next_token().unwrap().is_end());
    }

    #[test]
    fn test_edge_open_block_comment_ending_in_newline() {
        let mut lexer = Lexer::new("\\* a\n");
        let comment = lexer.next_token().unwrap();
        assert_eq!(comment.symbol, Symbol::Comment);
        assert_eq!(comment.start(), Position::new(1, 1));
        assert_eq!(comment.end(), Position::new(1, 5));

        let end = lexer.next_token().unwrap();
        assert!(end.is_end());
        assert_eq!(end.start(), Position::new(2, 1));
    }

    #[test]
    fn test_edge_unrecognized_is_not_a_fault() {
        assert_eq!(lex_all("# $ ."), vec![
            Symbol::Unrecognized(b'#'),
            Symbol::Unrecognized(b'$'),
            Symbol::Unrecognized(b'.'),
        ]);
    }

    #[test]
    fn test_edge_token_after_newline_starts_at_column_one() {
        let tokens = tokenize("ab\ncd").unwrap();
        assert_eq!(tokens[1].start(), Position::new(2, 1));
        assert_eq!(tokens[1].end(), Position::new(2, 2));
    }

    #[test]
    fn test_edge_lexer_after_fault_resumes_at_cursor() {
        let mut lexer = Lexer::new("0b2 x");
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Natural(2));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_machine_without_digits() {
        assert_eq!(kind_of("0b___"), (LexModule::Binary, LexErrorKind::Valueless));
        assert_eq!(kind_of("0x__"), (LexModule::Hexadecimal, LexErrorKind::Valueless));
        assert_eq!(kind_of("0b2"), (LexModule::Binary, LexErrorKind::WrongFormat));
        assert_eq!(kind_of("0x"), (LexModule::Hexadecimal, LexErrorKind::WrongFormat));
    }

    #[test]
    fn test_err_overflow() {
        assert_eq!(
            kind_of("99999999999999999999"),
            (LexModule::Natural, LexErrorKind::OutOfRange)
        );
        assert_eq!(
            kind_of("0x10000000000000000"),
            (LexModule::Hexadecimal, LexErrorKind::OutOfRange)
        );
    }

    #[test]
    fn test_err_real_and_exponent() {
        assert_eq!(kind_of("1.2.3"), (LexModule::Real, LexErrorKind::WrongFormat));
        assert_eq!(kind_of("1e+"), (LexModule::Scientific, LexErrorKind::Incomplete));
    }

    #[test]
    fn test_err_start_is_token_start() {
        let err = lex_err("datum x = 0x;");
        assert_eq!(err.start, Position::new(1, 11));
        assert_eq!(err.code().as_str(), "E1401");
    }

    #[test]
    fn test_err_strict_comment() {
        let mut lexer = Lexer::with_config("\\*", LexerConfig {
            strict_comments: true,
            ..LexerConfig::default()
        });
        let err = lexer.next_token().unwrap_err();
        assert_eq!((err.module, err.kind), (LexModule::Symbolic, LexErrorKind::Incomplete));
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let symbols = lex_all(&input);
            assert_eq!(symbols.len(), 1);
            match crate::keyword_from_identity(&input) {
                Some(keyword) => assert_eq!(symbols[0], keyword),
                None => assert_eq!(symbols[0], Symbol::Identity(input.clone())),
            }
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(value in 0i64..=i64::MAX)| {
            let symbols = lex_all(&value.to_string());
            assert_eq!(symbols, vec![Symbol::Natural(value)]);
        });
    }

    #[test]
    fn test_property_arbitrary_hex_number_strings() {
        use proptest::prelude::*;

        proptest!(|(value in any::<u64>())| {
            let symbols = lex_all(&format!("0x{:X}", value));
            assert_eq!(symbols, vec![Symbol::Machine(value)]);
        });
    }

    #[test]
    fn test_property_separators_do_not_change_value() {
        use proptest::prelude::*;

        proptest!(|(value in 1u32..u32::MAX)| {
            let digits = value.to_string();
            let separated: String = digits
                .chars()
                .flat_map(|c| [c, '_'])
                .collect();
            assert_eq!(lex_all(&separated), vec![Symbol::Natural(i64::from(value))]);
        });
    }

    #[test]
    fn test_property_arbitrary_bytes_terminate() {
        use proptest::prelude::*;

        proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..200))| {
            let len = input.len();
            let mut lexer = Lexer::new(input);
            let mut calls = 0;
            loop {
                calls += 1;
                assert!(calls <= len + 1, "lexer did not make progress");
                match lexer.next_token() {
                    Ok(token) if token.is_end() => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
        });
    }

    #[test]
    fn test_property_token_positions_monotonic() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \n<>=+-]{0,120}")| {
            if let Ok(tokens) = tokenize(input.as_str()) {
                let tokens: Vec<Token> = tokens;
                for pair in tokens.windows(2) {
                    assert!(pair[0].start() < pair[1].start());
                    assert!(pair[0].end() < pair[1].start() || pair[1].is_end());
                }
            }
        });
    }

    #[test]
    fn test_property_positions_stay_one_based() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z \n\\\\*]{0,80}")| {
            for token in Lexer::new(input.as_str()).take_while(Result::is_ok) {
                let token = token.unwrap();
                assert!(token.start().line >= 1 && token.start().column >= 1);
                assert!(token.end().line >= 1 && token.end().column >= 1);
                assert!(token.start() <= token.end());
            }
        });
    }
}
