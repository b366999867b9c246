/// Policy governing how a nested embedding's own prefix combines with its
/// ancestor's accumulated prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixBehavior {
    /// The embedding's prefix replaces the ancestor prefix. This is the
    /// legacy default: nested prefixes silently discard ancestor context.
    #[default]
    Absolute,

    /// The embedding's prefix is appended to the ancestor prefix. No
    /// separator is inserted; the prefix author includes any desired
    /// underscore in the prefix itself.
    Relative,
}

/// Computes the effective column-name prefix for one embedding level.
///
/// An embedding with no prefix of its own contributes nothing: the ancestor
/// prefix passes through unchanged. Behavior applies one level at a time;
/// the result becomes the ancestor prefix of the next level down.
pub fn resolve_prefix(own: Option<&str>, behavior: PrefixBehavior, ancestor: &str) -> String {
    match (own, behavior) {
        (None, _) => ancestor.to_string(),
        (Some(own), PrefixBehavior::Absolute) => own.to_string(),
        (Some(own), PrefixBehavior::Relative) => format!("{ancestor}{own}"),
    }
}
