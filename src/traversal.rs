//! Configurable fold over a syntax tree.
//!
//! The callback receives the running accumulator, the visited node and the
//! [`TraversalConfig`], which it may modify to steer the walk:
//!
//! - `stop_traversal` aborts every pending fold, including those of
//!   enclosing nodes;
//! - `ignore_children` skips the children of the node just visited
//!   (pre-order only);
//! - `needs_revisit_after_traversing_children` asks for a second callback on
//!   the same node once its children are done, with
//!   [`TraversalConfig::is_revisit`] set (pre-order only).
//!
//! Children are visited in [`SyntaxNodeKind::traversal_children`] order, so
//! a branch's condition is folded before its body.

use crate::syntax::{SyntaxNode, SyntaxNodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Pre,
    Post,
}

#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    pub order: Order,
    pub ignore_children: bool,
    pub stop_traversal: bool,
    pub needs_revisit_after_traversing_children: bool,
    is_revisit: bool,
}

impl TraversalConfig {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn pre_order() -> Self {
        Self::new(Order::Pre)
    }

    pub fn post_order() -> Self {
        Self::new(Order::Post)
    }

    /// True while the callback runs for the second time on the same node.
    pub fn is_revisit(&self) -> bool {
        self.is_revisit
    }
}

impl SyntaxNode {
    /// Folds `f` over this node and its descendants.
    pub fn reduce<R, F>(&self, config: &mut TraversalConfig, initial: R, f: &mut F) -> R
    where
        F: FnMut(R, &SyntaxNode, &mut TraversalConfig) -> R,
    {
        if config.stop_traversal {
            return initial;
        }

        match config.order {
            Order::Post => {
                let result = self.reduce_children(config, initial, f);
                if config.stop_traversal {
                    return result;
                }
                f(result, self, config)
            }
            Order::Pre => {
                config.needs_revisit_after_traversing_children = false;
                let result = f(initial, self, config);
                let revisit = std::mem::take(&mut config.needs_revisit_after_traversing_children);

                if config.stop_traversal {
                    return result;
                }

                let result = if std::mem::take(&mut config.ignore_children) {
                    result
                } else {
                    self.reduce_children(config, result, f)
                };

                if !revisit || config.stop_traversal {
                    return result;
                }

                config.is_revisit = true;
                let result = f(result, self, config);
                config.is_revisit = false;
                config.ignore_children = false;
                config.needs_revisit_after_traversing_children = false;
                result
            }
        }
    }

    fn reduce_children<R, F>(&self, config: &mut TraversalConfig, initial: R, f: &mut F) -> R
    where
        F: FnMut(R, &SyntaxNode, &mut TraversalConfig) -> R,
    {
        let mut result = initial;
        for child in self.traversal_children() {
            if config.stop_traversal {
                break;
            }
            result = child.reduce(config, result, f);
        }
        result
    }

    /// [`reduce`](Self::reduce) for side effects only.
    pub fn for_each_descendant<F>(&self, config: &mut TraversalConfig, mut f: F)
    where
        F: FnMut(&SyntaxNode, &mut TraversalConfig),
    {
        self.reduce(config, (), &mut |(), node, config| f(node, config));
    }
}
