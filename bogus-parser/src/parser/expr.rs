use super::*;
use crate::lexer::ANY_BP;

impl Parser {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(ANY_BP) // 0 to accept any expression
    }

    /// Parses an expression with the specified `min_bp`.
    /// Only operators whose left binding power is strictly greater than `min_bp` are consumed.
    /// To parse any expression use, [`Self::parse_expr`].
    pub fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.nested(|parser| parser.parse_operators(min_bp))
    }

    /// Parses a prefix expression followed by every infix operator binding tighter than `min_bp`.
    fn parse_operators(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix_expr()?;

        loop {
            let (l_bp, r_bp) = match self.current().kind.infix_bp() {
                Some(bp) => bp,
                None => break, // not a valid infix operator, stop parsing
            };
            if l_bp <= min_bp {
                break; // not above min_bp, stop parsing
            }

            // self.current() is a valid infix operator
            let op = self.next();

            lhs = match op.kind {
                TokenKind::OpenParen => self.parse_call_expr(lhs, &op, r_bp)?,
                TokenKind::Equals => match lhs {
                    Expr::Identifier(ident) => Expr::Assign {
                        ident,
                        value: Box::new(self.parse_expr_bp(r_bp)?),
                    },
                    _ => return Err(ParseError::InvalidAssignmentTarget { span: op.span }),
                },
                TokenKind::Comma => {
                    // separators are only consumed by argument lists
                    return Err(ParseError::UnexpectedToken {
                        found: op.lexeme,
                        expected: "an operator",
                        span: op.span,
                    });
                }
                kind => Expr::Binary {
                    lhs: Box::new(lhs),
                    op: kind,
                    rhs: Box::new(self.parse_expr_bp(r_bp)?),
                },
            };
        }

        Ok(lhs)
    }

    /// Parses the expression started by the current token.
    /// NOTE: literals, identifiers, groupings and prefix operators are handled here
    fn parse_prefix_expr(&mut self) -> Result<Expr, ParseError> {
        let bp = match self.current().kind.prefix_bp() {
            Some(bp) => bp,
            None => return Err(self.unexpected("an expression")),
        };
        let token = self.next();

        match token.kind {
            TokenKind::IntLit => Self::int_literal(&token),
            TokenKind::StringLit => Self::string_literal(&token),
            TokenKind::True => Ok(Expr::Literal(Literal::Bool(true))),
            TokenKind::False => Ok(Expr::Literal(Literal::Bool(false))),
            TokenKind::Identifier => Ok(Expr::Identifier(token.lexeme)),
            TokenKind::OpenParen => {
                let inner = self.parse_expr_bp(bp)?;
                self.expect_closing(TokenKind::CloseParen, &token)?;
                Ok(Expr::Grouping(Box::new(inner)))
            }
            TokenKind::Bang | TokenKind::Minus => Ok(Expr::Unary {
                op: token.kind,
                arg: Box::new(self.parse_expr_bp(bp)?),
            }),
            _ => Err(ParseError::UnexpectedToken {
                found: token.lexeme,
                expected: "an expression",
                span: token.span,
            }),
        }
    }

    /// Parses the argument list of a call expression. The opening `(` has already been eaten.
    /// Every argument is parsed with `arg_bp` so that a `,` ends it.
    fn parse_call_expr(
        &mut self,
        callee: Expr,
        open: &Token,
        arg_bp: u8,
    ) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.eat(TokenKind::CloseParen) {
            loop {
                args.push(self.parse_expr_bp(arg_bp)?);

                if self.eat(TokenKind::CloseParen) {
                    break;
                } else if !self.eat(TokenKind::Comma) {
                    return Err(Self::unmatched(open));
                }
            }
        }

        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::tokens;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    fn expr(source: &str) -> Expr {
        Parser::new(tokens(source)).parse_expr().unwrap()
    }

    fn expr_err(source: &str) -> ParseError {
        Parser::new(tokens(source)).parse_expr().unwrap_err()
    }

    fn int(val: i64) -> Expr {
        Expr::Literal(Literal::Int(val))
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    fn binary(lhs: Expr, op: TokenKind, rhs: Expr) -> Expr {
        Expr::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn test_literal() {
        assert_debug_snapshot!(expr("true"), @r###"
        Literal(
            Bool(
                true,
            ),
        )
        "###);
        assert_debug_snapshot!(expr("1"), @r###"
        Literal(
            Int(
                1,
            ),
        )
        "###);
        assert_debug_snapshot!(expr(r#""hello world""#), @r###"
        Literal(
            Str(
                "hello world",
            ),
        )
        "###);
        assert_eq!(expr("false"), Expr::Literal(Literal::Bool(false)));
    }

    #[test]
    fn test_binary_expr() {
        assert_debug_snapshot!(expr("1 + 1"), @r###"
        Binary {
            lhs: Literal(
                Int(
                    1,
                ),
            ),
            op: Plus,
            rhs: Literal(
                Int(
                    1,
                ),
            ),
        }
        "###);
        assert_eq!(
            expr("1 + 2 * 3"),
            binary(int(1), TokenKind::Plus, binary(int(2), TokenKind::Asterisk, int(3)))
        );
        assert_eq!(
            expr("1 == 2 - 1"),
            binary(int(1), TokenKind::EqualsEquals, binary(int(2), TokenKind::Minus, int(1)))
        );
        assert_eq!(
            expr("1 < 2 == true"),
            binary(
                binary(int(1), TokenKind::LessThan, int(2)),
                TokenKind::EqualsEquals,
                Expr::Literal(Literal::Bool(true))
            )
        );
    }

    #[test]
    fn test_associativity() {
        // should be (2 * 2) * 2
        assert_eq!(
            expr("2 * 2 * 2"),
            binary(binary(int(2), TokenKind::Asterisk, int(2)), TokenKind::Asterisk, int(2))
        );
        // should be (3 - 2) - 1
        assert_eq!(
            expr("3 - 2 - 1"),
            binary(binary(int(3), TokenKind::Minus, int(2)), TokenKind::Minus, int(1))
        );
        // should be a = (b = c)
        assert_eq!(
            expr("a = b = c"),
            Expr::Assign {
                ident: "a".to_string(),
                value: Box::new(Expr::Assign {
                    ident: "b".to_string(),
                    value: Box::new(ident("c")),
                }),
            }
        );
    }

    #[test]
    fn test_grouping() {
        assert_eq!(
            expr("(1 + 2) * 3"),
            binary(
                Expr::Grouping(Box::new(binary(int(1), TokenKind::Plus, int(2)))),
                TokenKind::Asterisk,
                int(3)
            )
        );
        // a grouping only adds one layer around the same tree
        assert_eq!(
            expr("(1+2)"),
            Expr::Grouping(Box::new(expr("1+2")))
        );
    }

    #[test]
    fn test_unary_expr() {
        assert_eq!(
            expr("-1 * 2"),
            binary(
                Expr::Unary {
                    op: TokenKind::Minus,
                    arg: Box::new(int(1)),
                },
                TokenKind::Asterisk,
                int(2)
            )
        );
        assert_eq!(
            expr("1 - -2"),
            binary(
                int(1),
                TokenKind::Minus,
                Expr::Unary {
                    op: TokenKind::Minus,
                    arg: Box::new(int(2)),
                }
            )
        );
        assert_eq!(
            expr("!!a"),
            Expr::Unary {
                op: TokenKind::Bang,
                arg: Box::new(Expr::Unary {
                    op: TokenKind::Bang,
                    arg: Box::new(ident("a")),
                }),
            }
        );
    }

    #[test]
    fn test_identifier() {
        assert_debug_snapshot!(expr("foo"), @r###"
        Identifier(
            "foo",
        )
        "###);
    }

    #[test]
    fn test_fn_call() {
        assert_debug_snapshot!(expr("foo()"), @r###"
        Call {
            callee: Identifier(
                "foo",
            ),
            args: [],
        }
        "###);
        assert_eq!(
            expr("f(1, 2, 3)"),
            Expr::Call {
                callee: Box::new(ident("f")),
                args: vec![int(1), int(2), int(3)],
            }
        );
        assert_eq!(
            expr("foo(1 + 2, bar, baz())"),
            Expr::Call {
                callee: Box::new(ident("foo")),
                args: vec![
                    binary(int(1), TokenKind::Plus, int(2)),
                    ident("bar"),
                    Expr::Call {
                        callee: Box::new(ident("baz")),
                        args: vec![],
                    },
                ],
            }
        );
        // calls bind tighter than prefix operators and chain to the left
        assert_eq!(
            expr("-f(1)(2)"),
            Expr::Unary {
                op: TokenKind::Minus,
                arg: Box::new(Expr::Call {
                    callee: Box::new(Expr::Call {
                        callee: Box::new(ident("f")),
                        args: vec![int(1)],
                    }),
                    args: vec![int(2)],
                }),
            }
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            expr_err("* 2"),
            ParseError::UnexpectedToken {
                found: "*".to_string(),
                expected: "an expression",
                span: 0..1,
            }
        );
        assert_eq!(
            expr_err("1 +"),
            ParseError::UnterminatedExpression {
                expected: "an expression",
                span: 3..3,
            }
        );
        assert_eq!(
            expr_err("(1 + 2"),
            ParseError::UnmatchedDelimiter {
                delimiter: '(',
                span: 0..1,
            }
        );
        assert_eq!(
            expr_err("f(1, 2"),
            ParseError::UnmatchedDelimiter {
                delimiter: '(',
                span: 1..2,
            }
        );
        assert_eq!(
            expr_err("1 = 2"),
            ParseError::InvalidAssignmentTarget { span: 2..3 }
        );
        assert_eq!(
            expr_err("1, 2"),
            ParseError::UnexpectedToken {
                found: ",".to_string(),
                expected: "an operator",
                span: 1..2,
            }
        );
        assert_eq!(
            expr_err("99999999999999999999"),
            ParseError::IntegerOutOfRange {
                literal: "99999999999999999999".to_string(),
                span: 0..20,
            }
        );
    }
}
