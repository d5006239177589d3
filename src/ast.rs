use std::rc::Rc;

/// Grouping direction of an operator when it meets another operator of the
/// same precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ** b ** c` groups as `a ** (b ** c)`.
    Right,
}

/// Represents a binary operator.
///
/// Every operator in the language is binary. The operator table below gives
/// each one a precedence rank (higher binds tighter) and an associativity.
///
/// | operator                          | rank | assoc |
/// |-----------------------------------|------|-------|
/// | `or`                              | 1    | left  |
/// | `and`                             | 2    | left  |
/// | `<` `<=` `>` `>=` `!=` `==`       | 3    | left  |
/// | `+` `-`                           | 4    | left  |
/// | `*` `/` `//` `%`                  | 5    | left  |
/// | `**`                              | 6    | right |
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`or`)
    Or,
    /// Logical and (`and`)
    And,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Not equal to (`!=`)
    NotEqual,
    /// Equal to (`==`)
    Equal,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Looks up an operator by its source spelling.
    ///
    /// The word operators `or` and `and` are matched case-insensitively, the
    /// same way the scanner treats keywords.
    ///
    /// # Example
    /// ```
    /// use stackwalk::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("//"), Some(BinaryOperator::FloorDiv));
    /// assert_eq!(BinaryOperator::from_symbol("AND"), Some(BinaryOperator::And));
    /// assert_eq!(BinaryOperator::from_symbol("=>"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        let op = match symbol {
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            "!=" => NotEqual,
            "==" => Equal,
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "//" => FloorDiv,
            "%" => Mod,
            "**" => Pow,
            word if word.eq_ignore_ascii_case("or") => Or,
            word if word.eq_ignore_ascii_case("and") => And,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the precedence rank of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match self {
            Or => 1,
            And => 2,
            Less | LessEqual | Greater | GreaterEqual | NotEqual | Equal => 3,
            Add | Sub => 4,
            Mul | Div | FloorDiv | Mod => 5,
            Pow => 6,
        }
    }

    /// Returns the associativity of the operator. Only `**` groups to the
    /// right.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// A user-defined function declaration.
///
/// Declarations are shared between the command list that introduced them and
/// every environment binding that refers to them.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The declared parameter names, in order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Command>,
}

/// A single executable command.
///
/// A program is a flat, ordered list of commands. Expressions appear in
/// postfix order (operands before the operator that consumes them), while
/// control flow and function bodies nest their own command lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pushes a numeric constant.
    Literal(f64),
    /// Pushes the value bound to a name, searching the environment chain.
    VariableRef(String),
    /// Pops one value and binds it to a name.
    Assign(String),
    /// Pops two values, applies the operator and pushes the result.
    BinaryOp(BinaryOperator),
    /// Binds a function declaration in the current environment.
    FunctionDecl(Rc<FunctionDef>),
    /// Calls a function with the `argc` values on top of the stack.
    FunctionCall {
        /// Name of the function being called.
        name: String,
        /// Number of argument commands emitted ahead of the call.
        argc: usize,
    },
    /// Conditional statement. A missing `else` is an empty alternative.
    If {
        /// Commands leaving the condition value on the stack.
        condition:   Vec<Self>,
        /// Executed when the condition is truthy.
        consequent:  Vec<Self>,
        /// Executed when the condition is falsy.
        alternative: Vec<Self>,
    },
    /// Loop statement; the condition is re-evaluated after every iteration.
    While {
        /// Commands leaving the condition value on the stack.
        condition: Vec<Self>,
        /// Executed while the condition is truthy.
        body:      Vec<Self>,
    },
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Or => "or",
            And => "and",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            NotEqual => "!=",
            Equal => "==",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}
