//! Parser state - expression parsing methods.
//!
//! Binary operators are parsed by precedence climbing over
//! [`SyntaxKind::binary_precedence`]; everything else is plain recursive
//! descent following the ES5 grammar.

use super::base::{NodeIndex, NodeList};
use super::node::{FunctionData, NodeData};
use super::state::{ParseResult, ParserState};
use jsl_scanner::SyntaxKind;

impl ParserState {
    /// Expression: assignment expressions separated by the comma operator.
    pub(crate) fn parse_expression(&mut self, no_in: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let mut expr = self.parse_assignment_expression(no_in)?;
        while self.is_token(SyntaxKind::CommaToken) {
            self.next_token();
            let right = self.parse_assignment_expression(no_in)?;
            expr = self.finish_node(
                NodeData::Binary {
                    left: expr,
                    operator: SyntaxKind::CommaToken,
                    right,
                },
                pos,
            );
        }
        Ok(expr)
    }

    pub(crate) fn parse_assignment_expression(&mut self, no_in: bool) -> ParseResult<NodeIndex> {
        self.enter_recursion()?;
        let result = self.parse_assignment_expression_worker(no_in);
        self.exit_recursion();
        result
    }

    fn parse_assignment_expression_worker(&mut self, no_in: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let expr = self.parse_conditional_expression(no_in)?;
        let operator = self.token();
        if !operator.is_assignment_operator() {
            return Ok(expr);
        }
        if !self.is_valid_assignment_target(expr) {
            return Err(self.error_at_current("Invalid left-hand side in assignment.".to_string()));
        }
        self.next_token();
        let right = self.parse_assignment_expression(no_in)?;
        Ok(self.finish_node(
            NodeData::Assignment {
                left: expr,
                operator,
                right,
            },
            pos,
        ))
    }

    fn is_valid_assignment_target(&self, index: NodeIndex) -> bool {
        let index = self.arena.skip_parens(index);
        matches!(
            self.arena.get_data(index),
            Some(
                NodeData::Identifier { .. }
                    | NodeData::PropertyAccess { .. }
                    | NodeData::ElementAccess { .. }
                    | NodeData::Call { .. }
            )
        )
    }

    fn parse_conditional_expression(&mut self, no_in: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let condition = self.parse_binary_expression(0, no_in)?;
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return Ok(condition);
        }
        let when_true = self.parse_assignment_expression(false)?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let when_false = self.parse_assignment_expression(no_in)?;
        Ok(self.finish_node(
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            },
            pos,
        ))
    }

    fn parse_binary_expression(&mut self, min_precedence: u8, no_in: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let mut left = self.parse_unary_expression()?;
        loop {
            let operator = self.token();
            let precedence = operator.binary_precedence();
            if precedence <= min_precedence || (no_in && operator == SyntaxKind::InKeyword) {
                break;
            }
            self.next_token();
            self.enter_recursion()?;
            let right = self.parse_binary_expression(precedence, no_in);
            self.exit_recursion();
            left = self.finish_node(
                NodeData::Binary {
                    left,
                    operator,
                    right: right?,
                },
                pos,
            );
        }
        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let operator = self.token();
        match operator {
            SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::DeleteKeyword => {
                self.next_token();
                self.enter_recursion()?;
                let operand = self.parse_unary_expression();
                self.exit_recursion();
                Ok(self.finish_node(
                    NodeData::Unary {
                        operator,
                        operand: operand?,
                        prefix: true,
                    },
                    pos,
                ))
            }
            _ => {
                let operand = self.parse_left_hand_side_expression(true)?;
                let operator = self.token();
                if matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
                    && !self.scanner.has_preceding_line_break()
                {
                    self.next_token();
                    return Ok(self.finish_node(
                        NodeData::Unary {
                            operator,
                            operand,
                            prefix: false,
                        },
                        pos,
                    ));
                }
                Ok(operand)
            }
        }
    }

    /// Member, call and `new` expressions. Calls are not consumed while
    /// parsing the callee of `new`.
    fn parse_left_hand_side_expression(&mut self, allow_call: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        let mut expr = if self.is_token(SyntaxKind::NewKeyword) {
            self.next_token();
            self.enter_recursion()?;
            let callee = self.parse_left_hand_side_expression(false);
            self.exit_recursion();
            let callee = callee?;
            let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
                self.parse_arguments()?
            } else {
                NodeList::new()
            };
            self.finish_node(
                NodeData::New {
                    expression: callee,
                    arguments,
                },
                pos,
            )
        } else {
            self.parse_primary_expression()?
        };

        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_identifier_name(true)?;
                    expr = self.finish_node(
                        NodeData::PropertyAccess {
                            expression: expr,
                            name,
                        },
                        pos,
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token();
                    let argument = self.parse_expression(false)?;
                    self.parse_expected(SyntaxKind::CloseBracketToken)?;
                    expr = self.finish_node(
                        NodeData::ElementAccess {
                            expression: expr,
                            argument,
                        },
                        pos,
                    );
                }
                SyntaxKind::OpenParenToken if allow_call => {
                    let arguments = self.parse_arguments()?;
                    expr = self.finish_node(
                        NodeData::Call {
                            expression: expr,
                            arguments,
                        },
                        pos,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_arguments(&mut self) -> ParseResult<NodeList> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut arguments = Vec::new();
        if !self.is_token(SyntaxKind::CloseParenToken) {
            loop {
                arguments.push(self.parse_assignment_expression(false)?);
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(NodeList::with_nodes(arguments))
    }

    fn parse_primary_expression(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::Identifier => self.parse_identifier_name(false),
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Ok(self.finish_node(NodeData::This, pos))
            }
            SyntaxKind::NullKeyword => {
                self.next_token();
                Ok(self.finish_node(NodeData::NullLiteral, pos))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let value = self.is_token(SyntaxKind::TrueKeyword);
                self.next_token();
                Ok(self.finish_node(NodeData::BooleanLiteral { value }, pos))
            }
            SyntaxKind::StringLiteral => self.parse_literal(),
            SyntaxKind::NumericLiteral => self.parse_literal(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.current_token = self.scanner.re_scan_slash_token();
                self.parse_literal()
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expression = self.parse_expression(false)?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(self.finish_node(NodeData::Paren { expression }, pos))
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => {
                let jsdoc = self.token_jsdoc();
                let func = self.parse_function(false)?;
                self.attach_jsdoc(func, jsdoc);
                Ok(func)
            }
            _ => Err(self.error_at_current("Expression expected.".to_string())),
        }
    }

    fn parse_literal(&mut self) -> ParseResult<NodeIndex> {
        if self.scanner.is_unterminated() {
            return Err(self.error_at_current(String::new()));
        }
        let pos = self.token_pos();
        let text = self.token_value().to_string();
        let data = match self.token() {
            SyntaxKind::StringLiteral => NodeData::StringLiteral { value: text },
            SyntaxKind::NumericLiteral => NodeData::NumericLiteral { text },
            _ => NodeData::RegexLiteral { text },
        };
        self.next_token();
        Ok(self.finish_node(data, pos))
    }

    fn parse_array_literal(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.is_token(SyntaxKind::CommaToken) {
                self.next_token();
                elements.push(NodeIndex::NONE);
                continue;
            }
            elements.push(self.parse_assignment_expression(false)?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(self.finish_node(
            NodeData::ArrayLiteral {
                elements: NodeList::with_nodes(elements),
            },
            pos,
        ))
    }

    /// Object literal. The documentation comment in front of a key is
    /// attached to the key node.
    fn parse_object_literal(&mut self) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut properties = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let property_pos = self.token_pos();
            let jsdoc = self.token_jsdoc();
            let name = match self.token() {
                SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.parse_literal()?,
                _ => self.parse_identifier_name(true)?,
            };
            if !self.is_token(SyntaxKind::ColonToken)
                && matches!(self.arena.identifier_text(name), Some("get" | "set"))
            {
                return Err(self.error_at(property_pos, "Accessor properties are not supported."));
            }
            self.attach_jsdoc(name, jsdoc);
            self.parse_expected(SyntaxKind::ColonToken)?;
            let initializer = self.parse_assignment_expression(false)?;
            properties.push(self.finish_node(
                NodeData::PropertyAssignment { name, initializer },
                property_pos,
            ));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.finish_node(
            NodeData::ObjectLiteral {
                properties: NodeList::with_nodes(properties),
            },
            pos,
        ))
    }

    /// Function declaration or expression, starting at `function`.
    pub(crate) fn parse_function(&mut self, is_declaration: bool) -> ParseResult<NodeIndex> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let name = if is_declaration || self.is_token(SyntaxKind::Identifier) {
            self.parse_identifier_name(false)?
        } else {
            NodeIndex::NONE
        };

        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut parameters = Vec::new();
        if !self.is_token(SyntaxKind::CloseParenToken) {
            loop {
                parameters.push(self.parse_identifier_name(false)?);
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;

        // Jumps never leave a function body.
        let outer_jumps = (self.iteration_depth, self.switch_depth);
        (self.iteration_depth, self.switch_depth) = (0, 0);
        self.function_depth += 1;
        let body = self.parse_block();
        self.function_depth -= 1;
        (self.iteration_depth, self.switch_depth) = outer_jumps;

        Ok(self.finish_node(
            NodeData::Function(FunctionData {
                name,
                parameters: NodeList::with_nodes(parameters),
                body: body?,
                is_declaration,
            }),
            pos,
        ))
    }
}
