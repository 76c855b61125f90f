use bitflags::bitflags;

bitflags! {
    /// Ambient parsing context, threaded down through every recursive call
    /// instead of being read off a mutable field on `Parser` -- each nested
    /// parse function gets its own `Context` value (usually derived from the
    /// caller's with one flag flipped), so a callee can never accidentally
    /// leak a context change back up to its caller once it returns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Context: u16 {
        /// `in` is a valid binary operator (false inside a C-style `for`
        /// head's init clause, to disambiguate `for (a in b)`).
        const IN              = 1 << 0;
        /// `await` parses as the unary operator, not an identifier.
        const AWAIT           = 1 << 1;
        /// `yield` parses as the unary operator, not an identifier.
        const YIELD           = 1 << 2;
        /// A bare `return` is allowed (normally only inside a function body).
        const RETURN          = 1 << 3;
        /// Inside a `.d.ts` ambient context: bodies are forbidden, only
        /// declarations are allowed.
        const AMBIENT         = 1 << 4;
        /// Inside a loop body: `break`/`continue` with no label are legal.
        const BREAK           = 1 << 5;
        const CONTINUE        = 1 << 6;
        /// Strict mode is in effect (class bodies and modules are always
        /// strict; `"use strict"` can turn it on elsewhere).
        const STRICT_MODE     = 1 << 7;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::IN
    }
}

macro_rules! context_flag {
    ($getter:ident, $setter:ident, $flag:ident) => {
        pub fn $getter(self) -> bool {
            self.contains(Self::$flag)
        }

        #[must_use]
        pub fn $setter(self, value: bool) -> Self {
            if value { self | Self::$flag } else { self & !Self::$flag }
        }
    };
}

impl Context {
    context_flag!(has_in, and_in, IN);
    context_flag!(has_await, and_await, AWAIT);
    context_flag!(has_yield, and_yield, YIELD);
    context_flag!(has_return, and_return, RETURN);
    context_flag!(has_ambient, and_ambient, AMBIENT);
    context_flag!(has_break, and_break, BREAK);
    context_flag!(has_continue, and_continue, CONTINUE);
    context_flag!(has_strict_mode, and_strict_mode, STRICT_MODE);
}

/// What kind of statement position the parser is currently in; drives the
/// "no lexical declaration directly as the body of an `if`/`for`/`while`"
/// restriction, which is a property of the *position*, not of any ambient
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementContext {
    /// Top level of a program, block, or function body: anything is legal.
    StatementList,
    /// The single-statement body of an `if`/`for`/`while`/`do`/`with`/label:
    /// a lexical declaration or plain `function` declaration here is an
    /// error (callers should prefer a block statement).
    SingleStatement,
}

impl StatementContext {
    pub fn allows_lexical_declaration(self) -> bool {
        matches!(self, Self::StatementList)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_round_trip() {
        let ctx = Context::default().and_await(true).and_ambient(true);
        assert!(ctx.has_await());
        assert!(ctx.has_ambient());
        assert!(!ctx.has_yield());

        let ctx = ctx.and_await(false);
        assert!(!ctx.has_await());
        assert!(ctx.has_ambient());
    }

    #[test]
    fn single_statement_forbids_lexical_declarations() {
        assert!(StatementContext::StatementList.allows_lexical_declaration());
        assert!(!StatementContext::SingleStatement.allows_lexical_declaration());
    }
}
