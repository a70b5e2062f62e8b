use regex::Regex;
use std::sync::LazyLock;

// BP-3648-add-lux-hack -> BP-3648
static LEADING_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+-[0-9]+)").expect("valid leading ticket regex"));

// chore/DEVOPS-989 -> DEVOPS-989
static NESTED_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([A-Z]+-[0-9]+)").expect("valid nested ticket regex"));

const DEFAULT_BRANCHES: &[&str] = &["main", "master", "develop"];

/// Derive a `"<ID>-<NUMBER>: "` prefix from the branch name, or `""`.
///
/// A ticket at the very start of the branch wins; otherwise the last ticket
/// that follows a `/` is used. Only uppercase project keys match.
pub fn extract_ticket_prefix(branch: &str) -> String {
    if let Some(caps) = LEADING_TICKET.captures(branch) {
        return format!("{}: ", &caps[1]);
    }

    NESTED_TICKET
        .captures_iter(branch)
        .last()
        .map(|caps| format!("{}: ", &caps[1]))
        .unwrap_or_default()
}

/// Branches that are not expected to carry a ticket id.
pub fn is_default_branch(branch: &str) -> bool {
    DEFAULT_BRANCHES.contains(&branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ticket_prefixes() {
        let cases = [
            ("FEAT-1234-add-new-feature", "FEAT-1234: "),
            ("FEAT-1234-add-x", "FEAT-1234: "),
            ("BUG-5678-fix-login-issue", "BUG-5678: "),
            ("feature/DEVOPS-123", "DEVOPS-123: "),
            ("chore/DEVOPS-989", "DEVOPS-989: "),
            ("chore/PROJ-456-cleanup", "PROJ-456: "),
            ("hotfix/URGENT-789-critical-fix", "URGENT-789: "),
            ("feature/epic/STORY-999-implementation", "STORY-999: "),
            ("A-1-test", "A-1: "),
            ("VERYLONGPREFIX-12345-description", "VERYLONGPREFIX-12345: "),
        ];

        for (branch, expected) in cases {
            assert_eq!(extract_ticket_prefix(branch), expected, "branch {branch:?}");
        }
    }

    #[test]
    fn non_ticket_branches_have_no_prefix() {
        for branch in [
            "main",
            "master",
            "develop",
            "feature/add-authentication",
            "my-random-branch",
            "feature-123-test",
            "feat-123-test",
            "feature/feat-123",
            "ABC-١٢-x",
            "feature/ABC-१",
            "",
        ] {
            assert_eq!(extract_ticket_prefix(branch), "", "branch {branch:?}");
        }
    }

    #[test]
    fn last_nested_ticket_wins() {
        assert_eq!(extract_ticket_prefix("team/EPIC-1/STORY-22-work"), "STORY-22: ");
    }

    #[test]
    fn leading_ticket_beats_nested_ticket() {
        assert_eq!(extract_ticket_prefix("ABC-1/DEF-2"), "ABC-1: ");
    }

    #[test]
    fn recognizes_default_branches() {
        assert!(is_default_branch("main"));
        assert!(is_default_branch("master"));
        assert!(is_default_branch("develop"));
        assert!(!is_default_branch("feature/x"));
        assert!(!is_default_branch("Main"));
    }
}
