//! Command: list the link types.
use super::CommandSetup;
use crate::link::LinkType;
use crate::logging::Logger;

/// One row per link type: id, `mklink` flag (or `-`), localized label.
#[must_use]
pub fn rows(setup: &CommandSetup) -> Vec<String> {
    LinkType::ALL
        .into_iter()
        .map(|t| {
            format!(
                "{:<12} {:<3} {}",
                t.id(),
                t.flag().unwrap_or("-"),
                t.label(setup.language)
            )
        })
        .collect()
}

/// Print the link type table.
pub fn run(setup: &CommandSetup, log: &Logger) {
    for row in rows(setup) {
        log.info(&row);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::commands::test_setup;
    use crate::i18n::Language;

    #[test]
    fn english_table() {
        let rows = rows(&test_setup(Language::En, None)).join("\n");
        insta::assert_snapshot!(rows, @r"
        symlink      -   Symbolic Link (File)
        symlink-dir  /D  Symbolic Link (Directory)
        hardlink     /H  Hard Link (File)
        junction     /J  Junction (Directory)
        ");
    }

    #[test]
    fn chinese_labels() {
        let rows = rows(&test_setup(Language::Zh, None));
        assert_eq!(rows.len(), 4);
        assert!(rows[3].ends_with("目录联接（Junction）"));
    }
}
