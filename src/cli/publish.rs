//! The publish command: move every draft, then optionally commit and push.
//!
//! Moves run strictly in argument order. Each `mv` line is echoed to stdout
//! before it runs, and stdout carries nothing else. A failed move is logged
//! to stderr and never stops the remaining moves.

use crate::{
    cli::Cli,
    config::PublishConfig,
    debug, log,
    post::{PostMove, plan_moves},
    utils::{date::PublishDate, git},
};
use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// What happened to one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// `mv` failed; carries its error output.
    Failed(String),
    /// Dry run.
    Skipped,
}

/// A planned move and its outcome.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub mv: PostMove,
    pub outcome: MoveOutcome,
}

/// Outcomes for one invocation, in argument order.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub results: Vec<MoveResult>,
}

impl PublishReport {
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Moved))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Skipped))
    }

    /// File names of the posts that were actually moved.
    pub fn published_files(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| r.outcome == MoveOutcome::Moved)
            .map(|r| r.mv.target_file_name())
            .collect()
    }

    fn count(&self, pred: impl Fn(&MoveOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// One-line summary, e.g. `2 posts published, 1 failed`.
    pub fn summary(&self) -> String {
        let posts = |n: usize| if n == 1 { "post" } else { "posts" };
        let (moved, failed, skipped) = (self.moved(), self.failed(), self.skipped());

        let mut line = if skipped > 0 {
            format!("{skipped} {} would be published", posts(skipped))
        } else {
            format!("{moved} {} published", posts(moved))
        };
        if failed > 0 {
            line.push_str(&format!(", {failed} failed"));
        }
        line
    }
}

/// Entry point for the command line.
pub fn run(cli: &Cli, config: &PublishConfig) -> Result<()> {
    if cli.names.is_empty() {
        return Ok(());
    }

    let date = PublishDate::today()?;
    let report = publish(config, date, &cli.names, cli.dry, &mut io::stdout())?;
    debug!("publish"; "{}", report.summary());

    if config.git.push {
        if cli.dry {
            log!("push"; "dry run, skipping commit and push");
        } else if report.moved() == 0 {
            log!("push"; "nothing was moved, skipping commit and push");
        } else {
            push_published(config, &report)?;
        }
    }

    if cli.strict && report.failed() > 0 {
        bail!(
            "{} of {} moves failed",
            report.failed(),
            report.results.len()
        );
    }

    Ok(())
}

/// Echo each move to `out`, then run it, in order, regardless of earlier
/// failures.
///
/// Only a failure to write the echo aborts the loop.
pub fn publish<S: AsRef<str>>(
    config: &PublishConfig,
    date: PublishDate,
    names: &[S],
    dry: bool,
    out: &mut impl Write,
) -> Result<PublishReport> {
    let root = config.get_root();
    let mut results = Vec::with_capacity(names.len());

    for mv in plan_moves(&config.layout(), date, names) {
        writeln!(out, "{}", mv.command_line())
            .and_then(|()| out.flush())
            .context("failed to write to stdout")?;

        let outcome = if dry {
            MoveOutcome::Skipped
        } else {
            match mv.execute(root) {
                Ok(()) => MoveOutcome::Moved,
                Err(e) => {
                    log!("error"; "{}: {:#}", mv.name, e);
                    MoveOutcome::Failed(e.to_string())
                }
            }
        };

        results.push(MoveResult { mv, outcome });
    }

    Ok(PublishReport { results })
}

/// Stage the drafts and posts directories, commit, and push.
///
/// The moves are already done at this point and are not undone if any git
/// step fails.
fn push_published(config: &PublishConfig, report: &PublishReport) -> Result<()> {
    let root = config.get_root();
    let repo = git::discover_repo(root)?;
    debug!("git"; "repository at {}", repo.root.display());

    let layout = config.layout();
    git::stage(root, &[layout.drafts.as_path(), layout.posts.as_path()])?;

    if !git::has_staged_changes(root)? {
        log!("git"; "nothing to commit");
        return Ok(());
    }

    let message = config.git.commit_message(&report.published_files());
    git::commit(root, &message)?;

    let branch = config.git.branch.as_deref().or(repo.branch.as_deref());
    git::push(root, &config.git.remote, branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec;
    use std::{fs, path::Path};

    /// Run `publish`, returning the report and everything echoed.
    fn echo<S: AsRef<str>>(
        config: &PublishConfig,
        names: &[S],
        dry: bool,
    ) -> (PublishReport, String) {
        let mut out = Vec::new();
        let report = publish(config, date(), names, dry, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    /// Records how many drafts are left each time a line is flushed.
    struct DraftCounter<'a> {
        drafts: &'a Path,
        buf: Vec<u8>,
        seen: Vec<(String, usize)>,
    }

    impl Write for DraftCounter<'_> {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
            self.buf.clear();
            let left = fs::read_dir(self.drafts)?.count();
            self.seen.push((line, left));
            Ok(())
        }
    }

    fn date() -> PublishDate {
        PublishDate::from_ymd(2024, 3, 5).unwrap()
    }

    fn site(root: &Path, drafts: &[&str]) -> PublishConfig {
        fs::create_dir_all(root.join("_drafts")).unwrap();
        fs::create_dir_all(root.join("_posts")).unwrap();
        for name in drafts {
            fs::write(root.join("_drafts").join(name), *name).unwrap();
        }
        PublishConfig {
            root: root.to_path_buf(),
            ..PublishConfig::default()
        }
    }

    #[test]
    fn test_publish_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path(), &[]);
        let names: [&str; 0] = [];

        let (report, out) = echo(&config, &names, false);
        assert!(report.results.is_empty());
        assert_eq!(out, "");
        assert_eq!(report.summary(), "0 posts published");
    }

    #[test]
    fn test_publish_moves_plain_and_nested_names() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = site(root, &["a.md", "b.md"]);

        let (report, out) = echo(&config, &["a.md", "dir/b.md"], false);

        assert_eq!(
            out,
            "mv _drafts/a.md _posts/2024-03-05-a.md\nmv _drafts/b.md _posts/2024-03-05-b.md\n"
        );
        assert_eq!(report.moved(), 2);
        assert!(root.join("_posts/2024-03-05-a.md").is_file());
        assert!(root.join("_posts/2024-03-05-b.md").is_file());
        assert!(!root.join("_drafts/a.md").exists());
        assert_eq!(
            report.published_files(),
            ["2024-03-05-a.md", "2024-03-05-b.md"]
        );
    }

    #[test]
    fn test_failure_does_not_stop_later_moves() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = site(root, &["real.md"]);

        let (report, out) = echo(&config, &["ghost.md", "real.md"], false);

        // one line per argument, nothing from the failed mv
        assert_eq!(
            out,
            "mv _drafts/ghost.md _posts/2024-03-05-ghost.md\nmv _drafts/real.md _posts/2024-03-05-real.md\n"
        );

        assert!(matches!(report.results[0].outcome, MoveOutcome::Failed(_)));
        assert_eq!(report.results[1].outcome, MoveOutcome::Moved);
        assert!(root.join("_posts/2024-03-05-real.md").is_file());
        assert_eq!(report.summary(), "1 post published, 1 failed");
    }

    #[test]
    fn test_missing_posts_dir_fails_each_move() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("_drafts")).unwrap();
        fs::write(root.join("_drafts/a.md"), "a").unwrap();
        let config = PublishConfig {
            root: root.to_path_buf(),
            ..PublishConfig::default()
        };

        let report = echo(&config, &["a.md"], false).0;
        assert_eq!(report.failed(), 1);
        assert!(root.join("_drafts/a.md").is_file());
    }

    #[test]
    fn test_dry_run_moves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = site(root, &["a.md"]);

        let (report, out) = echo(&config, &["a.md"], true);

        assert_eq!(out, "mv _drafts/a.md _posts/2024-03-05-a.md\n");
        assert_eq!(report.skipped(), 1);
        assert!(report.published_files().is_empty());
        assert!(root.join("_drafts/a.md").is_file());
        assert!(!root.join("_posts/2024-03-05-a.md").exists());
        assert_eq!(report.summary(), "1 post would be published");
    }

    #[test]
    fn test_line_is_echoed_before_move_runs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = site(root, &["a.md", "b.md"]);
        let drafts = root.join("_drafts");
        let mut out = DraftCounter {
            drafts: &drafts,
            buf: Vec::new(),
            seen: Vec::new(),
        };

        let report = publish(&config, date(), &["a.md", "b.md"], false, &mut out).unwrap();
        assert_eq!(report.moved(), 2);
        assert_eq!(
            out.seen,
            [
                ("mv _drafts/a.md _posts/2024-03-05-a.md".to_string(), 2),
                ("mv _drafts/b.md _posts/2024-03-05-b.md".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_second_run_same_day_is_up_to_mv() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = site(root, &["a.md"]);

        assert_eq!(echo(&config, &["a.md"], false).0.moved(), 1);
        // draft is gone now, so mv reports the missing source
        assert_eq!(echo(&config, &["a.md"], false).0.failed(), 1);

        fs::write(root.join("_drafts/a.md"), "rewritten").unwrap();
        assert_eq!(echo(&config, &["a.md"], false).0.moved(), 1);
        assert_eq!(
            fs::read_to_string(root.join("_posts/2024-03-05-a.md")).unwrap(),
            "rewritten"
        );
    }

    #[test]
    fn test_run_without_names_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site(dir.path(), &[]);
        config.git.push = true;

        // not a repository: would fail if push were attempted
        run(&Cli::default(), &config).unwrap();
    }

    #[test]
    fn test_run_strict_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path(), &[]);
        let cli = Cli {
            names: vec!["ghost.md".to_string()],
            strict: true,
            ..Cli::default()
        };

        let err = run(&cli, &config).unwrap_err();
        assert_eq!(err.to_string(), "1 of 1 moves failed");

        let lenient = Cli {
            strict: false,
            ..cli
        };
        run(&lenient, &config).unwrap();
    }

    #[test]
    fn test_push_published_commits_to_bare_remote() {
        let dir = tempfile::tempdir().unwrap();
        let remote = dir.path().join("remote.git");
        let root = dir.path().join("blog");
        fs::create_dir(&root).unwrap();

        exec!(dir.path(); "git"; "init", "-q", "--bare", &remote).unwrap();
        exec!(&root; "git"; "init", "-q", "-b", "main").unwrap();
        exec!(&root; "git"; "config", "user.email", "author@example.com").unwrap();
        exec!(&root; "git"; "config", "user.name", "Author").unwrap();
        exec!(&root; "git"; "config", "commit.gpgsign", "false").unwrap();
        exec!(&root; "git"; "remote", "add", "origin", &remote).unwrap();

        let mut config = site(&root, &["a.md"]);
        config.git.push = true;

        let report = echo(&config, &["a.md"], false).0;
        push_published(&config, &report).unwrap();

        let log = exec!(&root; "git"; "log", "--format=%s", "origin/main").unwrap();
        assert_eq!(
            String::from_utf8_lossy(&log.stdout).trim(),
            "Publish 2024-03-05-a.md"
        );
    }
}
