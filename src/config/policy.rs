//! Size computation policy.
//!
//! This module defines the flags that govern how one path is measured and
//! how the result is displayed.

/// Options for a single size computation.
///
/// The policy is fixed for the whole traversal: every subdirectory is
/// measured with the same flags as its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    /// Descend into subdirectories instead of counting them as zero
    pub recursive: bool,

    /// Scale the output to KB/MB/GB
    pub human_readable: bool,

    /// Count entries whose name starts with `.`
    pub include_hidden: bool,
}

impl Policy {
    /// Shorthand for building a policy from its three flags.
    #[must_use]
    pub const fn new(recursive: bool, human_readable: bool, include_hidden: bool) -> Self {
        Self {
            recursive,
            human_readable,
            include_hidden,
        }
    }
}
