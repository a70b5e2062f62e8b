//! Offline commit title derived purely from the shape of a unified diff.

/// Description used whenever the title comes from [`analyze`].
pub const HEURISTIC_DESCRIPTION: &str = "Code changes as analyzed from the git diff.";

/// Title used when the diff names no files at all.
pub const GENERIC_TITLE: &str = "Update project files";

/// How a single file in the diff was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub kind: ChangeKind,
    // Set once a mode marker has claimed this record.
    classified: bool,
}

/// Files touched by a diff, in the order their `diff --git` headers appear,
/// plus aggregate line counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChangeSet {
    pub files: Vec<FileRecord>,
    pub added_lines: usize,
    pub deleted_lines: usize,
}

impl FileChangeSet {
    /// Scan a raw diff once, line by line.
    pub fn from_diff(diff: &str) -> Self {
        let mut set = FileChangeSet::default();

        for line in diff.lines() {
            if line.starts_with("diff --git") {
                if let Some(token) = line.split_whitespace().nth(3) {
                    let name = token.strip_prefix("b/").unwrap_or(token);
                    set.files.push(FileRecord {
                        name: name.to_string(),
                        kind: ChangeKind::Modified,
                        classified: false,
                    });
                }
            } else if line.starts_with("new file mode") {
                set.reclassify_last_pending(ChangeKind::Added);
            } else if line.starts_with("deleted file mode") {
                set.reclassify_last_pending(ChangeKind::Removed);
            } else if line.starts_with('+') && !line.starts_with("+++") {
                set.added_lines += 1;
            } else if line.starts_with('-') && !line.starts_with("---") {
                set.deleted_lines += 1;
            }
        }

        set
    }

    /// Marks the most recently pushed file that is still pending. No-op when
    /// nothing is pending.
    fn reclassify_last_pending(&mut self, kind: ChangeKind) {
        let Some(idx) = self.files.iter().rposition(|f| !f.classified) else {
            return;
        };
        let record = &mut self.files[idx];
        record.kind = kind;
        record.classified = true;
    }

    pub fn names(&self, kind: ChangeKind) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Pick a title. Added beats removed beats modified.
    pub fn title(&self) -> String {
        let added = self.names(ChangeKind::Added);
        if let [name] = added.as_slice() {
            return format!("Add {name}");
        }
        if !added.is_empty() {
            return format!("Add {} new files", added.len());
        }

        let removed = self.names(ChangeKind::Removed);
        if let [name] = removed.as_slice() {
            return format!("Remove {name}");
        }
        if !removed.is_empty() {
            return format!("Remove {} files", removed.len());
        }

        let modified = self.names(ChangeKind::Modified);
        match modified.as_slice() {
            [] => GENERIC_TITLE.to_string(),
            [name] => {
                if self.added_lines > self.deleted_lines * 2 {
                    format!("Enhance {name}")
                } else if self.deleted_lines > self.added_lines * 2 {
                    format!("Refactor {name}")
                } else {
                    format!("Update {name}")
                }
            }
            many => format!("Update {} files", many.len()),
        }
    }
}

/// Summarize a diff into a commit title without any model.
pub fn analyze(diff: &str) -> String {
    FileChangeSet::from_diff(diff).title()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modified_diff(name: &str, added: usize, deleted: usize) -> String {
        let mut diff = format!(
            "diff --git a/{name} b/{name}\nindex 1234567..7890abc 100644\n--- a/{name}\n+++ b/{name}\n@@ -1,3 +1,3 @@\n"
        );
        for i in 0..added {
            diff.push_str(&format!("+added {i}\n"));
        }
        for i in 0..deleted {
            diff.push_str(&format!("-deleted {i}\n"));
        }
        diff
    }

    fn new_file_diff(name: &str) -> String {
        format!(
            "diff --git a/{name} b/{name}\nnew file mode 100644\nindex 0000000..1234567\n--- /dev/null\n+++ b/{name}\n@@ -0,0 +1,2 @@\n+package main\n+\n"
        )
    }

    fn deleted_file_diff(name: &str) -> String {
        format!(
            "diff --git a/{name} b/{name}\ndeleted file mode 100644\nindex 1234567..0000000\n--- a/{name}\n+++ /dev/null\n@@ -1,2 +0,0 @@\n-package main\n-\n"
        )
    }

    #[test]
    fn single_new_file_is_added() {
        assert_eq!(analyze(&new_file_diff("new-file.go")), "Add new-file.go");
    }

    #[test]
    fn several_new_files_are_counted() {
        let diff = [new_file_diff("file1.go"), new_file_diff("file2.go"), new_file_diff("file3.go")].concat();
        assert_eq!(analyze(&diff), "Add 3 new files");
    }

    #[test]
    fn single_deleted_file_is_removed() {
        assert_eq!(analyze(&deleted_file_diff("old-file.go")), "Remove old-file.go");
    }

    #[test]
    fn several_deleted_files_are_counted() {
        let diff = [deleted_file_diff("a.go"), deleted_file_diff("b.go")].concat();
        assert_eq!(analyze(&diff), "Remove 2 files");
    }

    #[test]
    fn added_files_take_precedence_over_removed_and_modified() {
        let diff = [
            modified_diff("main.go", 1, 1),
            deleted_file_diff("old.go"),
            new_file_diff("new.go"),
        ]
        .concat();
        assert_eq!(analyze(&diff), "Add new.go");
    }

    #[test]
    fn removed_files_take_precedence_over_modified() {
        let diff = [modified_diff("main.go", 3, 0), deleted_file_diff("old.go")].concat();
        assert_eq!(analyze(&diff), "Remove old.go");
    }

    #[test]
    fn single_modified_file_uses_line_balance() {
        assert_eq!(analyze(&modified_diff("main.go", 10, 2)), "Enhance main.go");
        assert_eq!(analyze(&modified_diff("main.go", 2, 10)), "Refactor main.go");
        assert_eq!(analyze(&modified_diff("main.go", 5, 5)), "Update main.go");
    }

    #[test]
    fn exactly_double_is_still_an_update() {
        assert_eq!(analyze(&modified_diff("lib.rs", 4, 2)), "Update lib.rs");
        assert_eq!(analyze(&modified_diff("lib.rs", 2, 4)), "Update lib.rs");
    }

    #[test]
    fn several_modified_files_are_counted() {
        let diff = [modified_diff("file1.go", 1, 0), modified_diff("file2.go", 1, 0)].concat();
        assert_eq!(analyze(&diff), "Update 2 files");
    }

    #[test]
    fn empty_or_headerless_diff_is_generic() {
        assert_eq!(analyze(""), "Update project files");
        assert_eq!(analyze("+just a line\n-another\n"), "Update project files");
    }

    #[test]
    fn marker_without_pending_file_is_ignored() {
        let set = FileChangeSet::from_diff("new file mode 100644\ndeleted file mode 100644\n");
        assert!(set.files.is_empty());
        assert_eq!(set.title(), "Update project files");
    }

    #[test]
    fn repeated_marker_claims_the_previous_pending_file() {
        let diff = "diff --git a/a.rs b/a.rs\ndiff --git a/b.rs b/b.rs\nnew file mode 100644\nnew file mode 100644\n";
        let set = FileChangeSet::from_diff(diff);
        assert_eq!(set.names(ChangeKind::Added), vec!["a.rs", "b.rs"]);
        assert!(set.names(ChangeKind::Modified).is_empty());
    }

    #[test]
    fn header_lines_are_not_counted() {
        let set = FileChangeSet::from_diff(&modified_diff("main.go", 2, 1));
        assert_eq!(set.added_lines, 2);
        assert_eq!(set.deleted_lines, 1);
    }

    #[test]
    fn records_keep_diff_order() {
        let diff = [
            new_file_diff("a.rs"),
            modified_diff("b.rs", 1, 1),
            deleted_file_diff("c.rs"),
        ]
        .concat();
        let set = FileChangeSet::from_diff(&diff);
        let kinds: Vec<_> = set.files.iter().map(|f| (f.name.as_str(), f.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("a.rs", ChangeKind::Added),
                ("b.rs", ChangeKind::Modified),
                ("c.rs", ChangeKind::Removed),
            ]
        );
    }
}
