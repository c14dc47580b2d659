use std::collections::HashMap;

use ticktree_core::{Behavior, Decorate, NodeSpec};

use crate::token::{FALLBACK, SEQUENCE};

/// Resolves a token to a node. Must be deterministic per token.
pub trait NodeFactory<W> {
    fn resolve(&self, token: &str) -> Option<NodeSpec<W>>;
}

type Constructor<W> = Box<dyn Fn() -> NodeSpec<W>>;

/// Token-to-constructor map.
///
/// The two control tokens are pre-registered; leaves and decorators are an
/// open set supplied by the embedding application. Constructor closures
/// capture whatever context their nodes need.
pub struct Registry<W> {
    constructors: HashMap<String, Constructor<W>>,
}

impl<W> Registry<W> {
    pub fn new() -> Self {
        let mut registry = Self {
            constructors: HashMap::new(),
        };
        registry.register(SEQUENCE, || NodeSpec::Sequence);
        registry.register(FALLBACK, || NodeSpec::Fallback);
        registry
    }

    pub fn register(
        &mut self,
        token: impl Into<String>,
        constructor: impl Fn() -> NodeSpec<W> + 'static,
    ) -> &mut Self {
        self.constructors.insert(token.into(), Box::new(constructor));
        self
    }

    pub fn register_leaf(
        &mut self,
        token: impl Into<String>,
        constructor: impl Fn() -> Box<dyn Behavior<W>> + 'static,
    ) -> &mut Self {
        self.register(token, move || NodeSpec::Leaf(constructor()))
    }

    pub fn register_decorator(
        &mut self,
        token: impl Into<String>,
        constructor: impl Fn() -> Box<dyn Decorate> + 'static,
    ) -> &mut Self {
        self.register(token, move || NodeSpec::Decorator(constructor()))
    }
}

impl<W> Default for Registry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> NodeFactory<W> for Registry<W> {
    fn resolve(&self, token: &str) -> Option<NodeSpec<W>> {
        self.constructors.get(token).map(|constructor| constructor())
    }
}
