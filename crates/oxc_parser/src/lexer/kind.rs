use std::fmt;

/// Every distinct token shape the lexer produces.
///
/// `Undetermined` is returned when the lexer hit an error it could not
/// recover a real token from; the caller should look at the most recent
/// entry in `Lexer::errors` for why (see [`crate::Parser::unexpected`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    Eof,
    Undetermined,

    // Identifiers and literals
    Ident,
    PrivateIdentifier,
    Str,
    NoSubstitutionTemplate,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    RegExp,
    Decimal,
    Float,
    Binary,
    Octal,
    Hex,
    LegacyOctal,

    // Keywords
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
    Let,
    Static,
    Async,
    Get,
    Set,
    Of,
    As,
    From,
    Satisfies,

    // TypeScript contextual keywords
    Abstract,
    Declare,
    Interface,
    Namespace,
    Module,
    Type,
    Readonly,
    Public,
    Private,
    Protected,
    Implements,
    Is,
    Infer,
    Keyof,
    Unique,
    Override,
    Out,
    Global,
    Accessor,

    // Punctuators
    Amp,
    Amp2,
    AmpEq,
    Amp2Eq,
    Bang,
    BangEq,
    Bang2Eq,
    Caret,
    CaretEq,
    Colon,
    Comma,
    Dot,
    Dot3,
    Eq,
    Eq2,
    Eq3,
    GtEq,
    LAngle,
    LCurly,
    LBrack,
    LParen,
    Minus,
    Minus2,
    MinusEq,
    Percent,
    PercentEq,
    Pipe,
    Pipe2,
    PipeEq,
    Pipe2Eq,
    Plus,
    Plus2,
    PlusEq,
    Question,
    Question2,
    Question2Eq,
    QuestionDot,
    RAngle,
    RCurly,
    RBrack,
    RParen,
    Semicolon,
    Shl,
    ShlEq,
    Shr,
    ShrEq,
    Shr3,
    Shr3Eq,
    Slash,
    SlashEq,
    Star,
    StarEq,
    Star2,
    Star2Eq,
    Tilde,
    FatArrow,
    At,
    NeqSign,

    // JSX
    JsxText,
}

impl Kind {
    pub fn is_eof(self) -> bool {
        self == Self::Eof
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Decimal | Self::Float | Self::Binary | Self::Octal | Self::Hex | Self::LegacyOctal)
    }

    pub fn is_template(self) -> bool {
        matches!(
            self,
            Self::NoSubstitutionTemplate | Self::TemplateHead | Self::TemplateMiddle | Self::TemplateTail
        )
    }

    /// Keywords that can still be used as an identifier in non-strict,
    /// non-TypeScript contexts ("contextual keywords").
    pub fn is_contextual_keyword(self) -> bool {
        matches!(
            self,
            Self::Let
                | Self::Static
                | Self::Async
                | Self::Get
                | Self::Set
                | Self::Of
                | Self::As
                | Self::From
                | Self::Satisfies
                | Self::Abstract
                | Self::Declare
                | Self::Interface
                | Self::Namespace
                | Self::Module
                | Self::Type
                | Self::Readonly
                | Self::Public
                | Self::Private
                | Self::Protected
                | Self::Implements
                | Self::Is
                | Self::Infer
                | Self::Keyof
                | Self::Unique
                | Self::Override
                | Self::Out
                | Self::Global
                | Self::Accessor
        )
    }

    /// Tokens that can start an expression (used to disambiguate ASI and
    /// `<` JSX vs relational).
    pub fn is_before_expr(self) -> bool {
        !matches!(
            self,
            Self::RParen
                | Self::RBrack
                | Self::RCurly
                | Self::Ident
                | Self::Str
                | Self::Decimal
                | Self::Float
                | Self::Binary
                | Self::Octal
                | Self::Hex
                | Self::LegacyOctal
                | Self::This
                | Self::Super
                | Self::True
                | Self::False
                | Self::Null
        )
    }

    pub fn matches_keyword(identifier: &str) -> Option<Self> {
        Some(match identifier {
            "await" => Self::Await,
            "break" => Self::Break,
            "case" => Self::Case,
            "catch" => Self::Catch,
            "class" => Self::Class,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "debugger" => Self::Debugger,
            "default" => Self::Default,
            "delete" => Self::Delete,
            "do" => Self::Do,
            "else" => Self::Else,
            "enum" => Self::Enum,
            "export" => Self::Export,
            "extends" => Self::Extends,
            "false" => Self::False,
            "finally" => Self::Finally,
            "for" => Self::For,
            "function" => Self::Function,
            "if" => Self::If,
            "import" => Self::Import,
            "in" => Self::In,
            "instanceof" => Self::Instanceof,
            "new" => Self::New,
            "null" => Self::Null,
            "return" => Self::Return,
            "super" => Self::Super,
            "switch" => Self::Switch,
            "this" => Self::This,
            "throw" => Self::Throw,
            "true" => Self::True,
            "try" => Self::Try,
            "typeof" => Self::Typeof,
            "var" => Self::Var,
            "void" => Self::Void,
            "while" => Self::While,
            "with" => Self::With,
            "yield" => Self::Yield,
            "let" => Self::Let,
            "static" => Self::Static,
            "async" => Self::Async,
            "get" => Self::Get,
            "set" => Self::Set,
            "of" => Self::Of,
            "as" => Self::As,
            "from" => Self::From,
            "satisfies" => Self::Satisfies,
            "abstract" => Self::Abstract,
            "declare" => Self::Declare,
            "interface" => Self::Interface,
            "namespace" => Self::Namespace,
            "module" => Self::Module,
            "type" => Self::Type,
            "readonly" => Self::Readonly,
            "public" => Self::Public,
            "private" => Self::Private,
            "protected" => Self::Protected,
            "implements" => Self::Implements,
            "is" => Self::Is,
            "infer" => Self::Infer,
            "keyof" => Self::Keyof,
            "unique" => Self::Unique,
            "override" => Self::Override,
            "out" => Self::Out,
            "global" => Self::Global,
            "accessor" => Self::Accessor,
            _ => return None,
        })
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::Undetermined
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
