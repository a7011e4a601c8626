//! Variable frames and the function table
//!
//! Variables live in a stack of frames searched innermost-first. The global
//! frame is created with the environment and is never popped. Functions share
//! one global table.

use crate::error::{Error, Result};
use crate::functions::{self, Function};
use dimcalc_units::Quantity;
use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

pub struct Environment {
    frames: Vec<HashMap<String, Quantity>>,
    functions: HashMap<String, Arc<Function>>,
}

impl Environment {
    /// Environment with the builtin functions and no variables.
    pub fn new() -> Self {
        let functions = functions::builtins()
            .map(|native| (native.name.to_string(), Arc::new(Function::Native(*native))))
            .collect();

        Self {
            frames: vec![HashMap::new()],
            functions,
        }
    }

    /// Environment with builtins plus `pi`, `e` and `tau`.
    pub fn with_constants() -> Self {
        let mut env = Self::new();
        env.define_variable("pi", PI.into());
        env.define_variable("e", E.into());
        env.define_variable("tau", TAU.into());
        env
    }

    /// Insert or overwrite in the innermost frame.
    pub fn define_variable(&mut self, name: impl Into<String>, value: Quantity) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    pub fn lookup_variable(&self, name: &str) -> Result<Quantity> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
            .ok_or_else(|| Error::UndefinedName(name.to_string()))
    }

    pub fn push_frame(&mut self, bindings: HashMap<String, Quantity>) {
        self.frames.push(bindings);
    }

    /// Pop the innermost frame. The global frame stays.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Push a frame that is popped when the returned guard drops.
    ///
    /// The guard derefs to the environment, so evaluation continues through it.
    pub fn enter_frame(&mut self, bindings: HashMap<String, Quantity>) -> FrameGuard<'_> {
        self.push_frame(bindings);
        FrameGuard { env: self }
    }

    /// Number of frames, global included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn define_function(&mut self, function: Function) {
        self.functions
            .insert(function.name().to_string(), Arc::new(function));
    }

    pub fn lookup_function(&self, name: &str) -> Result<Arc<Function>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedName(name.to_string()))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for one function-call frame
pub struct FrameGuard<'env> {
    env: &'env mut Environment,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl Deref for FrameGuard<'_> {
    type Target = Environment;

    fn deref(&self) -> &Environment {
        self.env
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Environment {
        self.env
    }
}
