//! Name resolution for calls.

use rustc_hash::FxHashMap;
use shank_ir::{fold_name, Function, Program};

use crate::builtins::{BuiltinFunction, BUILTINS};

/// Something a call statement can invoke.
#[derive(Copy, Clone, Debug)]
pub enum Callable<'p> {
    User(&'p Function),
    Builtin(&'static BuiltinFunction),
}

impl Callable<'_> {
    pub fn name(&self) -> &str {
        match self {
            Callable::User(function) => &function.name,
            Callable::Builtin(builtin) => builtin.name,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Callable::Builtin(builtin) if builtin.variadic)
    }

    /// Declared parameter count. Meaningless for variadic built-ins.
    pub fn arity(&self) -> usize {
        match self {
            Callable::User(function) => function.params.len(),
            Callable::Builtin(builtin) => builtin.params.len(),
        }
    }

    /// Whether parameter `position` receives `var` arguments by reference.
    /// Every parameter of a variadic built-in does.
    pub fn param_is_var(&self, position: usize) -> bool {
        match self {
            Callable::User(function) => function
                .params
                .get(position)
                .is_some_and(|param| param.is_var),
            Callable::Builtin(builtin) => {
                builtin.variadic
                    || builtin
                        .params
                        .get(position)
                        .is_some_and(|param| param.is_var)
            }
        }
    }
}

/// Built-ins plus the program's functions, keyed by folded name.
///
/// Built-ins are registered first and win over a user function with the
/// same name.
#[derive(Debug)]
pub struct FunctionRegistry<'p> {
    functions: FxHashMap<String, Callable<'p>>,
}

impl<'p> FunctionRegistry<'p> {
    pub fn new(program: &'p Program) -> Self {
        let mut functions = FxHashMap::default();
        for builtin in &BUILTINS {
            functions.insert(fold_name(builtin.name), Callable::Builtin(builtin));
        }
        for function in program.functions() {
            let key = fold_name(&function.name);
            if functions.contains_key(&key) {
                tracing::warn!(
                    function = %function.name,
                    line = function.line,
                    "user function is shadowed by a built-in"
                );
                continue;
            }
            functions.insert(key, Callable::User(function));
        }
        FunctionRegistry { functions }
    }

    pub fn lookup(&self, name: &str) -> Option<Callable<'p>> {
        self.functions.get(&fold_name(name)).copied()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.functions.len()
    }
}
