//! Core parser trait for org outlines
//!
//! A parser turns source text into an [`OrgTree`].

use anyhow::Result;

use super::OrgTree;

/// Core trait for outline parsers
///
/// # Example
/// ```
/// use orgchart::core::Parser;
/// use orgchart::plugins::outline::OutlineParser;
///
/// let tree = OutlineParser::new().parse("CEO\n\tCTO").unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
pub trait Parser: Send + Sync {
    /// Parse source text into a tree
    fn parse(&self, input: &str) -> Result<OrgTree>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;
}
