//! Per-function name-to-type environment.

use rustc_hash::FxHashMap;
use shank_ir::{fold_name, Function, ShankType};

/// Declared types visible inside one function body.
///
/// Names are case-insensitive. A later declaration of the same name
/// replaces an earlier one: constants shadow parameters, locals shadow both.
#[derive(Clone, Debug, Default)]
pub struct TypeEnv {
    bindings: FxHashMap<String, ShankType>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment for `function`: parameters, then constants, then locals.
    pub fn for_function(function: &Function) -> Self {
        let mut env = TypeEnv::new();
        for decl in function.declarations() {
            env.bind(&decl.name, decl.ty.clone());
        }
        env
    }

    pub fn bind(&mut self, name: &str, ty: ShankType) {
        self.bindings.insert(fold_name(name), ty);
    }

    pub fn lookup(&self, name: &str) -> Option<&ShankType> {
        self.bindings.get(&fold_name(name))
    }
}
