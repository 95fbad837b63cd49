use crate::SourcePosition;

/// Common surface of every AST node.
///
/// Implementations use the `inherent` crate, so `position()` is callable
/// directly on any node without importing this trait.
pub trait AstNode {
    /// Returns the position of the first source character contributing to
    /// this node. For described definitions that is the description's
    /// opening quote; for variable definitions the `$`; for fragment
    /// selections the `...`.
    fn position(&self) -> SourcePosition;
}
