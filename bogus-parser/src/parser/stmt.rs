use super::*;
use std::rc::Rc;

impl Parser {
    /// Parses a declaration (or statement).
    pub fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::Let => self.parse_let_declaration(),
            TokenKind::Fun => self.parse_fn_declaration(),
            _ => self.parse_stmt(),
        }
    }

    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::OpenBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::If => self.parse_if_stmt(),
            _ => {
                // expression statement
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::ExprStmt(expr))
            }
        }
    }

    /// Parses a braced list of declarations.
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.nested(|parser| {
            let open = parser.expect(TokenKind::OpenBrace)?;

            let mut body = Vec::new();
            while !parser.eat(TokenKind::CloseBrace) {
                if parser.at(TokenKind::Eof) {
                    return Err(Self::unmatched(&open));
                }
                body.push(parser.parse_declaration()?);
            }

            Ok(body)
        })
    }

    fn parse_let_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Let)?;
        let ident = self.expect_identifier()?;
        self.expect(TokenKind::Equals)?;
        let initializer = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::LetDeclaration { ident, initializer })
    }

    fn parse_fn_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Fun)?;
        let ident = self.expect_identifier()?;

        let open = self.expect(TokenKind::OpenParen)?;
        let mut params = Vec::new();
        if !self.eat(TokenKind::CloseParen) {
            loop {
                params.push(self.expect_identifier()?);

                if self.eat(TokenKind::CloseParen) {
                    break;
                } else if !self.eat(TokenKind::Comma) {
                    return Err(Self::unmatched(&open));
                }
            }
        }

        let body = self.parse_block()?;

        Ok(Stmt::FnDeclaration {
            body: Rc::new(body),
            ident,
            params,
        })
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::ReturnStmt(expr))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If)?;
        let condition = self.parse_expr()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.eat(TokenKind::Else) {
            if self.at(TokenKind::If) {
                // `else if` chains nest like blocks
                Some(vec![self.nested(Self::parse_if_stmt)?])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }
}
