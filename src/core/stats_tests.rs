//! Unit tests for ShortenStatistics
//! These are in a separate file to keep stats.rs clean

#[cfg(test)]
mod tests {
    use crate::core::stats::{clean_error_message, describe_error, shell_quote};
    use crate::core::ShortenStatistics;
    use crate::shortener::{Outcome, ShortenError, ShortenPlan, SkipReason};
    use std::io;
    use std::path::PathBuf;
    use std::time::Duration;

    fn shortened(from: &str, to: &str) -> Outcome {
        Outcome::Shortened {
            from: PathBuf::from(from),
            to: PathBuf::from(to),
        }
    }

    #[test]
    fn test_statistics_initialization() {
        let stats = ShortenStatistics::new();
        assert_eq!(stats.scanned, 0);
        assert_eq!(stats.shortened, 0);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.failed, 0);
        assert!(!stats.has_failures());
        assert!(stats.shortened_files.is_empty());
    }

    #[test]
    fn test_from_plan_counts_notable_skips() {
        let plan = ShortenPlan {
            scanned: 12,
            skipped: vec![(PathBuf::from("/t/recent-long-name.txt"), SkipReason::TooRecent)],
            ..ShortenPlan::default()
        };

        let stats = ShortenStatistics::from_plan(&plan, false);
        assert_eq!(stats.scanned, 12);
        assert_eq!(stats.eligible, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.skipped_files[0].detail, "modified too recently");
    }

    #[test]
    fn test_walk_errors_are_reported() {
        let plan = ShortenPlan {
            scanned: 3,
            walk_errors: vec!["walk error: permission denied".to_string()],
            ..ShortenPlan::default()
        };

        let stats = ShortenStatistics::from_plan(&plan, false);
        assert!(stats
            .generate_summary(Duration::ZERO)
            .contains("1 unreadable"));
        assert!(stats
            .generate_detailed_summary()
            .contains("UNREADABLE ENTRIES (1)"));
        assert!(!stats.has_failures());
    }

    #[test]
    fn test_update_with_shortened() {
        let mut stats = ShortenStatistics::new();
        stats.update(&shortened("/t/long-name.txt", "/t/long.txt"));
        assert_eq!(stats.shortened, 1);
        assert_eq!(stats.shortened_files[0].path, "/t/long-name.txt");
        assert_eq!(stats.shortened_files[0].detail, "/t/long.txt");
    }

    #[test]
    fn test_update_with_skip() {
        let mut stats = ShortenStatistics::new();
        stats.update(&Outcome::Skipped {
            path: PathBuf::from("/t/a.extension-too-long"),
            error: ShortenError::Configuration {
                name: "a.extension-too-long".to_string(),
                max_len: 8,
                required: 20,
            },
        });
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(
            stats.skipped_files[0].detail,
            "max length too small, needs at least 20"
        );
    }

    #[test]
    fn test_update_with_failed_rename() {
        let mut stats = ShortenStatistics::new();
        stats.update(&Outcome::Failed {
            path: PathBuf::from("/t/long-name.txt"),
            error: ShortenError::Rename {
                from: PathBuf::from("/t/long-name.txt"),
                to: PathBuf::from("/t/long.txt"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            },
        });
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.unlinked, 0);
        assert!(stats.has_failures());
        assert_eq!(stats.failed_files[0].detail, "permission denied");
    }

    #[test]
    fn test_update_with_missing_link() {
        let mut stats = ShortenStatistics::new();
        stats.update(&Outcome::Failed {
            path: PathBuf::from("/t/long-name.txt"),
            error: ShortenError::Link {
                from: PathBuf::from("/t/long-name.txt"),
                to: PathBuf::from("/t/long.txt"),
                source: io::Error::other("boom"),
            },
        });
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.unlinked, 1);
        assert!(stats.failed_files.is_empty());

        let details = stats.generate_detailed_summary();
        assert!(details.contains("RENAMED BUT NOT LINKED (1)"));
        assert!(details.contains("ln -s long.txt /t/long-name.txt"));
    }

    #[test]
    fn test_repair_hint_is_shell_quoted() {
        let mut stats = ShortenStatistics::new();
        stats.update(&Outcome::Failed {
            path: PathBuf::from("/t/my notes/it's a long name.txt"),
            error: ShortenError::Link {
                from: PathBuf::from("/t/my notes/it's a long name.txt"),
                to: PathBuf::from("/t/my notes/it's a.txt"),
                source: io::Error::other("boom"),
            },
        });

        let details = stats.generate_detailed_summary();
        assert!(details.contains(r"ln -s 'it'\''s a.txt' '/t/my notes/it'\''s a long name.txt'"));
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/t/plain-name_1.txt"), "/t/plain-name_1.txt");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("x~1f.txt"), "'x~1f.txt'");
        assert_eq!(shell_quote("$HOME"), "'$HOME'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_generate_summary() {
        let mut stats = ShortenStatistics::new();
        stats.scanned = 10;
        stats.update(&shortened("/t/a-long.txt", "/t/a.txt"));

        let summary = stats.generate_summary(Duration::from_millis(1500));
        assert!(summary.contains("1.5s"));
        assert!(summary.contains("10 scanned"));
        assert!(summary.contains("1 shortened"));
        assert!(!summary.contains("failed"));

        stats.dry_run = true;
        assert!(stats
            .generate_summary(Duration::ZERO)
            .contains("1 would be shortened"));
    }

    #[test]
    fn test_detailed_summary_empty_when_all_good() {
        let mut stats = ShortenStatistics::new();
        stats.update(&shortened("/t/a-long.txt", "/t/a.txt"));
        assert_eq!(stats.generate_detailed_summary(), "");
    }

    #[test]
    fn test_json_report() {
        let mut stats = ShortenStatistics::new();
        stats.update(&shortened("/t/a-long.txt", "/t/a.txt"));

        let json = stats.to_json(Duration::from_secs(2)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["statistics"]["shortened"], 1);
        assert_eq!(value["statistics"]["shortened_files"][0]["detail"], "/t/a.txt");
        assert_eq!(value["duration_secs"], 2.0);
    }

    #[test]
    fn test_describe_error() {
        let err = ShortenError::Vanished {
            path: PathBuf::from("/t/x"),
        };
        assert_eq!(describe_error(&err), "disappeared during the run");

        let err = ShortenError::Collision {
            path: PathBuf::from("/t/short.txt"),
        };
        assert_eq!(describe_error(&err), "short.txt already exists");
    }

    #[test]
    fn test_clean_error_message() {
        assert_eq!(
            clean_error_message("Invalid cross-device link (os error 18)"),
            "cross-device rename"
        );
        assert_eq!(clean_error_message("line one\n\tline two"), "line one line two");

        let long = "é".repeat(100);
        let cleaned = clean_error_message(&long);
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.chars().count(), 60);
    }
}
