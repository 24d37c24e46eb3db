//! Synthesis of the native `mklink` command line.
//!
//! [`build`] is a pure function of a [`LinkRequest`]: it is safe to call on
//! every keystroke and always rebuilds the command from scratch.
use std::fmt;

use crate::link::LinkRequest;

/// Name of the native link-creation builtin.
pub const MKLINK: &str = "mklink";

/// A ready-to-run link command.
///
/// Tokens are `mklink`, the optional type flag, the quoted link path and the
/// quoted target path, in that order. The rendered form joins them with
/// single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    tokens: Vec<String>,
}

impl BuiltCommand {
    /// Ordered tokens, paths already quoted.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Single-line form handed to the command interpreter.
    #[must_use]
    pub fn render(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for BuiltCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the `mklink` command for `request`.
///
/// Returns `None` while either path is empty. The link path always comes
/// before the target path, matching `mklink <link> <target>`.
///
/// # Examples
///
/// ```
/// use winmklink::command::build;
/// use winmklink::link::{LinkRequest, LinkType};
///
/// let req = LinkRequest::new(r"C:\data", r"C:\link", LinkType::SymbolicDirectory).unwrap();
/// let cmd = build(&req).unwrap();
/// assert_eq!(cmd.render(), r#"mklink /D "C:\link" "C:\data""#);
///
/// let empty = LinkRequest::new(r"C:\data", "", LinkType::SymbolicDirectory).unwrap();
/// assert!(build(&empty).is_none());
/// ```
#[must_use]
pub fn build(request: &LinkRequest) -> Option<BuiltCommand> {
    if !request.is_complete() {
        return None;
    }
    let mut tokens = vec![MKLINK.to_string()];
    tokens.extend(request.link_type().flag().map(String::from));
    tokens.push(quote(request.link_path()));
    tokens.push(quote(request.target_path()));
    Some(BuiltCommand { tokens })
}

// Paths never contain `"`; LinkRequest::new rejects them.
fn quote(path: &str) -> String {
    format!("\"{path}\"")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::link::LinkType;

    const FLAGS: [&str; 3] = ["/D", "/H", "/J"];

    fn request(target: &str, link: &str, link_type: LinkType) -> LinkRequest {
        LinkRequest::new(target, link, link_type).unwrap()
    }

    #[test]
    fn each_variant_carries_only_its_flag() {
        for t in LinkType::ALL {
            let cmd = build(&request(r"C:\t", r"C:\l", t)).unwrap();
            let flags: Vec<&str> = cmd
                .tokens()
                .iter()
                .map(String::as_str)
                .filter(|tok| FLAGS.contains(tok))
                .collect();
            let expected: Vec<&str> = t.flag().into_iter().collect();
            assert_eq!(flags, expected, "flags for {t}");
        }
    }

    #[test]
    fn empty_paths_yield_none() {
        for t in LinkType::ALL {
            assert!(build(&request("", "", t)).is_none());
            assert!(build(&request(r"C:\t", "", t)).is_none());
            assert!(build(&request("", r"C:\l", t)).is_none());
        }
    }

    #[test]
    fn link_precedes_target() {
        let cmd = build(&request("TARGET", "LINK", LinkType::SymbolicFile)).unwrap();
        let rendered = cmd.render();
        let link_at = rendered.find("\"LINK\"").unwrap();
        let target_at = rendered.find("\"TARGET\"").unwrap();
        assert!(link_at < target_at, "link must come first: {rendered}");
    }

    #[test]
    fn paths_quoted_even_without_spaces() {
        let cmd = build(&request("a", "b", LinkType::HardLinkFile)).unwrap();
        assert_eq!(cmd.render(), r#"mklink /H "b" "a""#);
        assert_eq!(cmd.render().matches('"').count(), 4);
    }

    #[test]
    fn paths_with_spaces_stay_single_tokens() {
        let cmd = build(&request(
            r"C:\Program Files\app",
            r"D:\my link",
            LinkType::JunctionDirectory,
        ))
        .unwrap();
        assert_eq!(cmd.tokens().len(), 4);
        assert_eq!(cmd.tokens()[2], r#""D:\my link""#);
        assert_eq!(cmd.tokens()[3], r#""C:\Program Files\app""#);
    }

    #[test]
    fn file_symlink_has_three_tokens() {
        let cmd = build(&request(r"C:\t", r"C:\l", LinkType::SymbolicFile)).unwrap();
        assert_eq!(cmd.tokens(), [MKLINK, r#""C:\l""#, r#""C:\t""#]);
    }

    #[test]
    fn build_is_idempotent() {
        let req = request(r"C:\data", r"C:\link", LinkType::SymbolicDirectory);
        assert_eq!(build(&req), build(&req));
        assert_eq!(
            build(&req).unwrap().render().as_bytes(),
            build(&req).unwrap().render().as_bytes()
        );
    }

    #[test]
    fn display_matches_render() {
        let cmd = build(&request(r"C:\t", r"C:\l", LinkType::HardLinkFile)).unwrap();
        assert_eq!(cmd.to_string(), cmd.render());
    }

    #[test]
    fn directory_symlink_scenario() {
        let cmd = build(&request(r"C:\data", r"C:\link", LinkType::SymbolicDirectory)).unwrap();
        insta::assert_snapshot!(cmd.render(), @r#"mklink /D "C:\link" "C:\data""#);
    }

    #[test]
    fn hard_link_scenario() {
        let cmd = build(&request(
            r"C:\file.txt",
            r"C:\shortcut.txt",
            LinkType::HardLinkFile,
        ))
        .unwrap();
        let rendered = cmd.render();
        assert!(rendered.contains(" /H "));
        assert!(!rendered.contains("/D"));
        assert!(!rendered.contains("/J"));
        insta::assert_snapshot!(rendered, @r#"mklink /H "C:\shortcut.txt" "C:\file.txt""#);
    }

    #[test]
    fn junction_scenario() {
        let cmd = build(&request(r"D:\games", r"C:\games", LinkType::JunctionDirectory)).unwrap();
        insta::assert_snapshot!(cmd.render(), @r#"mklink /J "C:\games" "D:\games""#);
    }
}
