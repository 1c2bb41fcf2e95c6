//! Syntax tree nodes.
//!
//! The tree is a closed tagged union: every node stores its [`NodeData`]
//! variant inline together with its source position, parent link and the
//! documentation comment the parser attached to it. Nodes live in a
//! [`NodeArena`] and refer to each other through [`NodeIndex`].

use super::base::{NodeIndex, NodeList};
use jsl_scanner::SyntaxKind;

/// A node in the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    /// Start position (byte offset of the first token)
    pub pos: u32,
    /// End position (byte offset after the last token)
    pub end: u32,
    /// 1-based line of `pos`
    pub line: u32,
    pub parent: NodeIndex,
    /// Raw `/** ... */` text attached by the parser.
    pub jsdoc: Option<String>,
}

impl Node {
    pub fn jsdoc(&self) -> Option<&str> {
        self.jsdoc.as_deref()
    }
}

/// Function declaration or expression.
#[derive(Clone, Debug)]
pub struct FunctionData {
    /// Identifier node, `NodeIndex::NONE` for anonymous functions.
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// Block node.
    pub body: NodeIndex,
    pub is_declaration: bool,
}

#[derive(Clone, Debug)]
pub enum NodeData {
    SourceFile {
        statements: NodeList,
    },

    // Primary expressions
    Identifier {
        text: String,
    },
    This,
    StringLiteral {
        value: String,
    },
    NumericLiteral {
        text: String,
    },
    RegexLiteral {
        text: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
    /// Elisions are stored as `NodeIndex::NONE`.
    ArrayLiteral {
        elements: NodeList,
    },
    ObjectLiteral {
        properties: NodeList,
    },
    PropertyAssignment {
        name: NodeIndex,
        initializer: NodeIndex,
    },
    Function(FunctionData),

    // Compound expressions
    PropertyAccess {
        expression: NodeIndex,
        name: NodeIndex,
    },
    ElementAccess {
        expression: NodeIndex,
        argument: NodeIndex,
    },
    Call {
        expression: NodeIndex,
        arguments: NodeList,
    },
    New {
        expression: NodeIndex,
        arguments: NodeList,
    },
    Unary {
        operator: SyntaxKind,
        operand: NodeIndex,
        prefix: bool,
    },
    /// Binary operators, including the comma operator.
    Binary {
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    },
    /// `=` and every compound assignment operator.
    Assignment {
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    Paren {
        expression: NodeIndex,
    },

    // Statements
    Block {
        statements: NodeList,
    },
    VariableStatement {
        declarations: NodeList,
    },
    VariableDeclaration {
        name: NodeIndex,
        initializer: NodeIndex,
    },
    ExpressionStatement {
        expression: NodeIndex,
    },
    If {
        condition: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    },
    For {
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    },
    ForIn {
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    While {
        condition: NodeIndex,
        statement: NodeIndex,
    },
    DoWhile {
        statement: NodeIndex,
        condition: NodeIndex,
    },
    Return {
        expression: NodeIndex,
    },
    Break {
        label: NodeIndex,
    },
    Continue {
        label: NodeIndex,
    },
    Throw {
        expression: NodeIndex,
    },
    Try {
        try_block: NodeIndex,
        catch_variable: NodeIndex,
        catch_block: NodeIndex,
        finally_block: NodeIndex,
    },
    Switch {
        expression: NodeIndex,
        clauses: NodeList,
    },
    /// `expression` is `NodeIndex::NONE` for the `default` clause.
    CaseClause {
        expression: NodeIndex,
        statements: NodeList,
    },
    Labeled {
        label: NodeIndex,
        statement: NodeIndex,
    },
    /// `;` and `debugger;`
    Empty,
}

impl NodeData {
    /// Short variant name, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeData::SourceFile { .. } => "SourceFile",
            NodeData::Identifier { .. } => "Identifier",
            NodeData::This => "This",
            NodeData::StringLiteral { .. } => "StringLiteral",
            NodeData::NumericLiteral { .. } => "NumericLiteral",
            NodeData::RegexLiteral { .. } => "RegexLiteral",
            NodeData::BooleanLiteral { .. } => "BooleanLiteral",
            NodeData::NullLiteral => "NullLiteral",
            NodeData::ArrayLiteral { .. } => "ArrayLiteral",
            NodeData::ObjectLiteral { .. } => "ObjectLiteral",
            NodeData::PropertyAssignment { .. } => "PropertyAssignment",
            NodeData::Function(_) => "Function",
            NodeData::PropertyAccess { .. } => "PropertyAccess",
            NodeData::ElementAccess { .. } => "ElementAccess",
            NodeData::Call { .. } => "Call",
            NodeData::New { .. } => "New",
            NodeData::Unary { .. } => "Unary",
            NodeData::Binary { .. } => "Binary",
            NodeData::Assignment { .. } => "Assignment",
            NodeData::Conditional { .. } => "Conditional",
            NodeData::Paren { .. } => "Paren",
            NodeData::Block { .. } => "Block",
            NodeData::VariableStatement { .. } => "VariableStatement",
            NodeData::VariableDeclaration { .. } => "VariableDeclaration",
            NodeData::ExpressionStatement { .. } => "ExpressionStatement",
            NodeData::If { .. } => "If",
            NodeData::For { .. } => "For",
            NodeData::ForIn { .. } => "ForIn",
            NodeData::While { .. } => "While",
            NodeData::DoWhile { .. } => "DoWhile",
            NodeData::Return { .. } => "Return",
            NodeData::Break { .. } => "Break",
            NodeData::Continue { .. } => "Continue",
            NodeData::Throw { .. } => "Throw",
            NodeData::Try { .. } => "Try",
            NodeData::Switch { .. } => "Switch",
            NodeData::CaseClause { .. } => "CaseClause",
            NodeData::Labeled { .. } => "Labeled",
            NodeData::Empty => "Empty",
        }
    }

    /// Visit the direct children in source order. Absent children are skipped.
    pub fn for_each_child(&self, mut f: impl FnMut(NodeIndex)) {
        let mut visit = |idx: NodeIndex| {
            if idx.is_some() {
                f(idx);
            }
        };
        match self {
            NodeData::SourceFile { statements } | NodeData::Block { statements } => {
                statements.iter().for_each(&mut visit);
            }
            NodeData::Identifier { .. }
            | NodeData::This
            | NodeData::StringLiteral { .. }
            | NodeData::NumericLiteral { .. }
            | NodeData::RegexLiteral { .. }
            | NodeData::BooleanLiteral { .. }
            | NodeData::NullLiteral
            | NodeData::Empty => {}
            NodeData::ArrayLiteral { elements } => elements.iter().for_each(&mut visit),
            NodeData::ObjectLiteral { properties } => properties.iter().for_each(&mut visit),
            NodeData::PropertyAssignment { name, initializer } => {
                visit(*name);
                visit(*initializer);
            }
            NodeData::Function(func) => {
                visit(func.name);
                func.parameters.iter().for_each(&mut visit);
                visit(func.body);
            }
            NodeData::PropertyAccess { expression, name } => {
                visit(*expression);
                visit(*name);
            }
            NodeData::ElementAccess {
                expression,
                argument,
            } => {
                visit(*expression);
                visit(*argument);
            }
            NodeData::Call {
                expression,
                arguments,
            }
            | NodeData::New {
                expression,
                arguments,
            } => {
                visit(*expression);
                arguments.iter().for_each(&mut visit);
            }
            NodeData::Unary { operand, .. } => visit(*operand),
            NodeData::Binary { left, right, .. } | NodeData::Assignment { left, right, .. } => {
                visit(*left);
                visit(*right);
            }
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                visit(*condition);
                visit(*when_true);
                visit(*when_false);
            }
            NodeData::Paren { expression }
            | NodeData::ExpressionStatement { expression }
            | NodeData::Return { expression }
            | NodeData::Throw { expression } => visit(*expression),
            NodeData::VariableStatement { declarations } => {
                declarations.iter().for_each(&mut visit);
            }
            NodeData::VariableDeclaration { name, initializer } => {
                visit(*name);
                visit(*initializer);
            }
            NodeData::If {
                condition,
                then_statement,
                else_statement,
            } => {
                visit(*condition);
                visit(*then_statement);
                visit(*else_statement);
            }
            NodeData::For {
                initializer,
                condition,
                incrementor,
                statement,
            } => {
                visit(*initializer);
                visit(*condition);
                visit(*incrementor);
                visit(*statement);
            }
            NodeData::ForIn {
                initializer,
                expression,
                statement,
            } => {
                visit(*initializer);
                visit(*expression);
                visit(*statement);
            }
            NodeData::While {
                condition,
                statement,
            } => {
                visit(*condition);
                visit(*statement);
            }
            NodeData::DoWhile {
                statement,
                condition,
            } => {
                visit(*statement);
                visit(*condition);
            }
            NodeData::Break { label } | NodeData::Continue { label } => visit(*label),
            NodeData::Try {
                try_block,
                catch_variable,
                catch_block,
                finally_block,
            } => {
                visit(*try_block);
                visit(*catch_variable);
                visit(*catch_block);
                visit(*finally_block);
            }
            NodeData::Switch {
                expression,
                clauses,
            } => {
                visit(*expression);
                clauses.iter().for_each(&mut visit);
            }
            NodeData::CaseClause {
                expression,
                statements,
            } => {
                visit(*expression);
                statements.iter().for_each(&mut visit);
            }
            NodeData::Labeled { label, statement } => {
                visit(*label);
                visit(*statement);
            }
        }
    }
}

/// Owner of every node of one parsed file.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
}
