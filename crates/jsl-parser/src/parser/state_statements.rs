//! Parser state - statement parsing methods
use super::base::{NodeIndex, NodeList};
use super::node::NodeData;
use super::state::{ParseError, ParseResult, ParserState};
use jsl_scanner::SyntaxKind;
use tracing::debug;

impl ParserState {
    /// Parse the whole file. Stops at the first syntax error.
    pub fn parse_source_file(&mut self) -> Result<NodeIndex, ParseError> {
        self.next_token();
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            statements.push(self.parse_statement()?);
        }
        if let Some(error) = self.unterminated_comment_error() {
            return Err(error);
        }
        let end = self.scanner.get_token_end();
        let line = self.scanner.line_map().line_of(0);
        let root = self.arena.add(
            NodeData::SourceFile {
                statements: NodeList::with_nodes(statements),
            },
            0,
            end,
            line,
        );
        debug!(file = %self.file_name, nodes = self.arena.len(), "parsed source file");
        Ok(root)
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<NodeIndex> {
        self.enter_recursion()?;
        let result = self.parse_statement_worker();
        self.exit_recursion();
        result
    }

    fn parse_statement_worker(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let jsdoc = self.token_jsdoc();
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(self.finish_node(NodeData::Empty, pos))
            }
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon()?;
                Ok(self.finish_node(NodeData::Empty, pos))
            }
            SyntaxKind::VarKeyword => {
                let statement = self.parse_variable_statement(false)?;
                self.parse_semicolon()?;
                self.attach_jsdoc(statement, jsdoc);
                Ok(statement)
            }
            SyntaxKind::FunctionKeyword => {
                let func = self.parse_function(true)?;
                self.attach_jsdoc(func, jsdoc);
                Ok(func)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::ContinueKeyword | SyntaxKind::BreakKeyword => self.parse_jump_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::Identifier if self.token_value() == "with" => {
                Err(self.error_at(pos, "'with' statements are not supported."))
            }
            _ => self.parse_expression_or_labeled_statement(jsdoc),
        }
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let statements = self.parse_statement_list()?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.finish_node(NodeData::Block { statements }, pos))
    }

    /// Statements up to `}`, `case`, `default` or end of input.
    fn parse_statement_list(&mut self) -> ParseResult<NodeList> {
        let mut statements = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken
                | SyntaxKind::CaseKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::EndOfFileToken
        ) {
            statements.push(self.parse_statement()?);
        }
        Ok(NodeList::with_nodes(statements))
    }

    fn parse_variable_statement(&mut self, no_in: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::VarKeyword)?;
        let mut declarations = Vec::new();
        loop {
            let decl_pos = self.token_pos();
            let name = self.parse_identifier_name(false)?;
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                self.parse_assignment_expression(no_in)?
            } else {
                NodeIndex::NONE
            };
            declarations.push(
                self.finish_node(NodeData::VariableDeclaration { name, initializer }, decl_pos),
            );
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        Ok(self.finish_node(
            NodeData::VariableStatement {
                declarations: NodeList::with_nodes(declarations),
            },
            pos,
        ))
    }

    fn parse_expression_or_labeled_statement(&mut self, jsdoc: Option<String>) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let expression = self.parse_expression(false)?;
        if self.is_token(SyntaxKind::ColonToken) && self.arena.identifier_text(expression).is_some() {
            self.next_token();
            let statement = self.parse_statement()?;
            return Ok(self.finish_node(
                NodeData::Labeled {
                    label: expression,
                    statement,
                },
                pos,
            ));
        }
        self.parse_semicolon()?;
        self.attach_jsdoc(expression, jsdoc);
        Ok(self.finish_node(NodeData::ExpressionStatement { expression }, pos))
    }

    fn parse_parenthesized_condition(&mut self) -> ParseResult<NodeIndex> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let condition = self.parse_expression(false)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(condition)
    }

    fn parse_if_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::IfKeyword)?;
        let condition = self.parse_parenthesized_condition()?;
        let then_statement = self.parse_statement()?;
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()?
        } else {
            NodeIndex::NONE
        };
        Ok(self.finish_node(
            NodeData::If {
                condition,
                then_statement,
                else_statement,
            },
            pos,
        ))
    }

    fn parse_for_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::ForKeyword)?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        let initializer = match self.token() {
            SyntaxKind::SemicolonToken => NodeIndex::NONE,
            SyntaxKind::VarKeyword => self.parse_variable_statement(true)?,
            _ => self.parse_expression(true)?,
        };

        if initializer.is_some() && self.parse_optional(SyntaxKind::InKeyword) {
            if let Some(NodeData::VariableStatement { declarations }) = self.arena.get_data(initializer) {
                if declarations.len() != 1 {
                    return Err(self.error_at_current(
                        "Only a single variable declaration is allowed in a 'for...in' statement."
                            .to_string(),
                    ));
                }
            }
            let expression = self.parse_expression(false)?;
            self.parse_expected(SyntaxKind::CloseParenToken)?;
            let statement = self.parse_iteration_body()?;
            return Ok(self.finish_node(
                NodeData::ForIn {
                    initializer,
                    expression,
                    statement,
                },
                pos,
            ));
        }

        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let condition = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression(false)?
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let incrementor = if self.is_token(SyntaxKind::CloseParenToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression(false)?
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let statement = self.parse_iteration_body()?;
        Ok(self.finish_node(
            NodeData::For {
                initializer,
                condition,
                incrementor,
                statement,
            },
            pos,
        ))
    }

    fn parse_while_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let condition = self.parse_parenthesized_condition()?;
        let statement = self.parse_iteration_body()?;
        Ok(self.finish_node(
            NodeData::While {
                condition,
                statement,
            },
            pos,
        ))
    }

    fn parse_do_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::DoKeyword)?;
        let statement = self.parse_iteration_body()?;
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let condition = self.parse_parenthesized_condition()?;
        // The semicolon after do-while is always optional.
        self.parse_optional(SyntaxKind::SemicolonToken);
        Ok(self.finish_node(
            NodeData::DoWhile {
                statement,
                condition,
            },
            pos,
        ))
    }

    fn parse_iteration_body(&mut self) -> ParseResult<NodeIndex> {
        self.iteration_depth += 1;
        let statement = self.parse_statement();
        self.iteration_depth -= 1;
        statement
    }

    /// Labeled jumps are not matched against their labels.
    fn parse_jump_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let is_break = self.is_token(SyntaxKind::BreakKeyword);
        self.next_token();
        let label = if self.is_token(SyntaxKind::Identifier) && !self.scanner.has_preceding_line_break() {
            self.parse_identifier_name(false)?
        } else {
            NodeIndex::NONE
        };
        if label.is_none() {
            if is_break && self.iteration_depth == 0 && self.switch_depth == 0 {
                return Err(self.error_at(
                    pos,
                    "A 'break' statement can only be used within an enclosing iteration or switch statement.",
                ));
            }
            if !is_break && self.iteration_depth == 0 {
                return Err(self.error_at(
                    pos,
                    "A 'continue' statement can only be used within an enclosing iteration statement.",
                ));
            }
        }
        self.parse_semicolon()?;
        let data = if is_break {
            NodeData::Break { label }
        } else {
            NodeData::Continue { label }
        };
        Ok(self.finish_node(data, pos))
    }

    fn parse_return_statement(&mut self) -> ParseResult<NodeIndex> {
        if self.function_depth == 0 {
            return Err(
                self.error_at_current("A 'return' statement can only be used within a function body.".to_string()),
            );
        }
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::ReturnKeyword)?;
        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression(false)?
        };
        self.parse_semicolon()?;
        Ok(self.finish_node(NodeData::Return { expression }, pos))
    }

    fn parse_throw_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::ThrowKeyword)?;
        if self.scanner.has_preceding_line_break() {
            return Err(self.error_at_current("Line break not permitted here.".to_string()));
        }
        let expression = self.parse_expression(false)?;
        self.parse_semicolon()?;
        Ok(self.finish_node(NodeData::Throw { expression }, pos))
    }

    fn parse_try_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::TryKeyword)?;
        let try_block = self.parse_block()?;

        let mut catch_variable = NodeIndex::NONE;
        let mut catch_block = NodeIndex::NONE;
        if self.parse_optional(SyntaxKind::CatchKeyword) {
            self.parse_expected(SyntaxKind::OpenParenToken)?;
            catch_variable = self.parse_identifier_name(false)?;
            self.parse_expected(SyntaxKind::CloseParenToken)?;
            catch_block = self.parse_block()?;
        }
        let finally_block = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            self.parse_block()?
        } else {
            NodeIndex::NONE
        };
        if catch_block.is_none() && finally_block.is_none() {
            return Err(self.error_at_current("'catch' or 'finally' expected.".to_string()));
        }
        Ok(self.finish_node(
            NodeData::Try {
                try_block,
                catch_variable,
                catch_block,
                finally_block,
            },
            pos,
        ))
    }

    fn parse_switch_statement(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::SwitchKeyword)?;
        let expression = self.parse_parenthesized_condition()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut clauses = Vec::new();
        let mut has_default = false;
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let clause_pos = self.token_pos();
            let test = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    self.parse_expression(false)?
                }
                SyntaxKind::DefaultKeyword => {
                    if has_default {
                        return Err(self.error_at_current(
                            "A 'default' clause cannot appear more than once in a 'switch' statement."
                                .to_string(),
                        ));
                    }
                    has_default = true;
                    self.next_token();
                    NodeIndex::NONE
                }
                _ => return Err(self.error_at_current("'case' or 'default' expected.".to_string())),
            };
            self.parse_expected(SyntaxKind::ColonToken)?;
            self.switch_depth += 1;
            let statements = self.parse_statement_list();
            self.switch_depth -= 1;
            let statements = statements?;
            clauses.push(self.finish_node(
                NodeData::CaseClause {
                    expression: test,
                    statements,
                },
                clause_pos,
            ));
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.finish_node(
            NodeData::Switch {
                expression,
                clauses: NodeList::with_nodes(clauses),
            },
            pos,
        ))
    }
}
