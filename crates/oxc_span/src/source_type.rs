/// Which grammar the parser accepts: vanilla JavaScript or JavaScript plus
/// the TypeScript-only syntax extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

/// Whether the source is parsed as a Script (no top-level `await`, `import`,
/// `export`) or a Module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleKind {
    Script,
    #[default]
    Module,
}

/// Resolution policy for whether a bare `await` at the top level of a module
/// is the `await` operator or an ordinary identifier reference.
///
/// `Auto` mirrors how module-aware tooling behaves: operator unless doing so
/// would make the parse ambiguous, in which case the caller's environment
/// decides. `Operator` forces operator interpretation, for callers that know
/// top-level await is supported (e.g. ES modules, REPLs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopLevelAwait {
    #[default]
    Auto,
    Operator,
}

/// The small set of configuration flags the parser is constructed with:
/// language, JSX support, module-vs-script, and top-level-await policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType {
    language: Language,
    module_kind: ModuleKind,
    jsx: bool,
    top_level_await: TopLevelAwait,
}

impl Default for SourceType {
    fn default() -> Self {
        Self {
            language: Language::JavaScript,
            module_kind: ModuleKind::Module,
            jsx: false,
            top_level_await: TopLevelAwait::default(),
        }
    }
}

impl SourceType {
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_module_kind(mut self, module_kind: ModuleKind) -> Self {
        self.module_kind = module_kind;
        self
    }

    #[must_use]
    pub fn with_jsx(mut self, jsx: bool) -> Self {
        self.jsx = jsx;
        self
    }

    #[must_use]
    pub fn with_top_level_await(mut self, mode: TopLevelAwait) -> Self {
        self.top_level_await = mode;
        self
    }

    pub fn js() -> Self {
        Self::default().with_language(Language::JavaScript)
    }

    pub fn jsx() -> Self {
        Self::js().with_jsx(true)
    }

    pub fn ts() -> Self {
        Self::default().with_language(Language::TypeScript)
    }

    pub fn tsx() -> Self {
        Self::ts().with_jsx(true)
    }

    pub fn is_typescript(self) -> bool {
        self.language == Language::TypeScript
    }

    pub fn is_javascript(self) -> bool {
        self.language == Language::JavaScript
    }

    pub fn is_jsx(self) -> bool {
        self.jsx
    }

    pub fn module_kind(self) -> ModuleKind {
        self.module_kind
    }

    pub fn is_module(self) -> bool {
        self.module_kind == ModuleKind::Module
    }

    pub fn top_level_await(self) -> TopLevelAwait {
        self.top_level_await
    }
}

#[cfg(test)]
mod test {
    use super::{Language, SourceType};

    #[test]
    fn builders() {
        let ty = SourceType::tsx();
        assert!(ty.is_typescript());
        assert!(ty.is_jsx());

        let ty = SourceType::js();
        assert_eq!(ty.is_typescript(), false);
        assert_eq!(ty.with_language(Language::TypeScript).is_typescript(), true);
    }
}
