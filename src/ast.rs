use crate::error::RuntimeError;

/// An expression tree node.
///
/// `Expr` is a closed set of node kinds. `Literal` and `Error` are terminal:
/// no further reduction happens on them. `FunctionCall` and `BinaryOp` are
/// reduced by the evaluator, children first. Nodes own their children
/// exclusively, so a tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer value.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A node that yields no value, such as a syntax error.
    Error {
        /// Diagnostic describing why there is no value.
        message: String,
    },
    /// Function call expression (e.g. `gcf(12,18)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// The operator.
        op:    BinaryOperator,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Creates an error node.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(left: Self, right: Self, op: BinaryOperator) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         right: Box::new(right),
                         op }
    }

    /// Creates a function call node.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.into(),
                             arguments }
    }

    /// Returns whether the node is terminal.
    ///
    /// ## Example
    /// ```
    /// use krunch::ast::{BinaryOperator, Expr};
    ///
    /// assert!(Expr::literal(3).is_terminal());
    /// assert!(Expr::error("nope").is_terminal());
    /// assert!(!Expr::binary(Expr::literal(1), Expr::literal(2), BinaryOperator::Add).is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Literal { .. } | Self::Error { .. } => true,
            Self::FunctionCall { .. } | Self::BinaryOp { .. } => false,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Number of nodes on the longest path from this node down to a
    /// terminal. A terminal has depth 1.
    ///
    /// Walks the tree with an explicit stack, so any tree can be measured.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match node {
                Self::Literal { .. } | Self::Error { .. } => {},
                Self::FunctionCall { arguments, .. } => {
                    pending.extend(arguments.iter().map(|argument| (argument, depth + 1)));
                },
                Self::BinaryOp { left, right, .. } => {
                    pending.extend([(&**left, depth + 1), (&**right, depth + 1)]);
                },
            }
        }
        deepest
    }

    /// Extracts the integer carried by a `Literal`.
    ///
    /// # Errors
    /// Every other node kind refuses with `RuntimeError::MissingValue`,
    /// which carries the node's textual form.
    pub fn value(&self) -> Result<i64, RuntimeError> {
        match self {
            Self::Literal { value } => Ok(*value),
            Self::Error { .. } | Self::FunctionCall { .. } | Self::BinaryOp { .. } => {
                Err(RuntimeError::MissingValue { node: self.to_string() })
            },
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "Literal({value})"),
            Self::Error { message } => write!(f, "Error({message})"),
            Self::FunctionCall { name, arguments } => {
                write!(f, "FunctionCall({name}")?;
                for argument in arguments {
                    write!(f, ", {argument}")?;
                }
                write!(f, ")")
            },
            Self::BinaryOp { left, right, op } => {
                write!(f, "BinaryOp({left}, {right}, {op:?})")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
}

impl BinaryOperator {
    /// Maps a source character to its operator, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns whether the operator belongs to the additive tier.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
