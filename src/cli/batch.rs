//! `batch` command: compose the head of every content file in parallel.
//!
//! Each `<content>/<rel>.md` becomes `<output>/<rel>.head.html`. A file that
//! fails to load does not stop the run; all failures are reported at the end
//! and make the command fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::args::BatchArgs;
use super::common::{absolute, collect_content_files, compose_file};
use crate::asset::{AssetResolver, SiteAssetResolver};
use crate::config::SiteConfig;
use crate::content::{ContentFile, ContentKind};
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::{debug, log};

/// Extension replacing `.md` in output file names.
const OUTPUT_EXTENSION: &str = "head.html";

/// Execute batch command
pub fn run_batch(args: &BatchArgs, config: &SiteConfig) -> Result<()> {
    let content_dir = args
        .content
        .as_deref()
        .map_or_else(|| config.build.content.clone(), absolute);
    let output_dir = args
        .output
        .as_deref()
        .map_or_else(|| config.build.output.clone(), absolute);

    if !content_dir.is_dir() {
        bail!("content directory `{}` not found", content_dir.display());
    }

    let files = collect_content_files(&content_dir);
    if files.is_empty() {
        log!("batch"; "no content files in {}", config.root_relative(&content_dir).display());
        return Ok(());
    }

    let sections = files
        .iter()
        .filter(|f| ContentKind::of(f) == ContentKind::Section)
        .count();
    log!("batch"; "composing {}", plural_count(files.len(), "file"));

    let resolver = SiteAssetResolver::from_config(config);
    let progress = ProgressLine::new(&[("pages", files.len() - sections), ("sections", sections)]);

    let failures: Vec<(PathBuf, anyhow::Error)> = files
        .par_iter()
        .filter_map(|path| {
            let result = compose_to_file(path, &content_dir, &output_dir, config, &resolver);
            progress.inc(match ContentKind::of(path) {
                ContentKind::Page => "pages",
                ContentKind::Section => "sections",
            });
            result.err().map(|err| (path.clone(), err))
        })
        .collect();
    progress.finish();

    if !failures.is_empty() {
        for (path, err) in &failures {
            log!("error"; "{}: {:#}", config.root_relative(path).display(), err);
        }
        bail!("failed to compose {}", plural_count(failures.len(), "file"));
    }

    log!(
        "batch"; "wrote {} to {}",
        plural_count(files.len(), "head"),
        config.root_relative(&output_dir).display()
    );
    Ok(())
}

/// Output location of a content file.
pub fn output_path(file: &Path, content_dir: &Path, output_dir: &Path) -> PathBuf {
    let rel = file.strip_prefix(content_dir).unwrap_or(file);
    output_dir.join(rel).with_extension(OUTPUT_EXTENSION)
}

fn compose_to_file(
    path: &Path,
    content_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
    assets: &dyn AssetResolver,
) -> Result<()> {
    let file = ContentFile::load(path)?;
    let tags = compose_file(&file, content_dir, config, assets, None);

    let dest = output_path(path, content_dir, output_dir);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&dest, tags.to_string())
        .with_context(|| format!("failed to write {}", dest.display()))?;

    debug!("batch"; "{} -> {}", path.display(), dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn site(dir: &Path) -> SiteConfig {
        let mut config = test_parse_config("base_url = \"https://example.com\"");
        config.title = "Blog".into();
        config.build.normalize(dir);
        config.root = dir.to_path_buf();
        config
    }

    #[test]
    fn test_output_path() {
        let content = Path::new("/s/content");
        let output = Path::new("/s/public");
        assert_eq!(
            output_path(&content.join("blog/post.md"), content, output),
            PathBuf::from("/s/public/blog/post.head.html")
        );
        assert_eq!(
            output_path(&content.join("_index.md"), content, output),
            PathBuf::from("/s/public/_index.head.html")
        );
    }

    #[test]
    fn test_batch_writes_heads() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        fs::create_dir_all(dir.path().join("content/blog")).unwrap();
        fs::write(
            dir.path().join("content/blog/_index.md"),
            "+++\ntitle = \"Posts\"\n+++\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("content/blog/hello.md"),
            "+++\ntitle = \"Hello\"\n[taxonomies]\ntags = [\"rust\"]\n+++\nBody\n",
        )
        .unwrap();

        let args = BatchArgs {
            content: None,
            output: None,
        };
        run_batch(&args, &config).unwrap();

        let hello = fs::read_to_string(dir.path().join("public/blog/hello.head.html")).unwrap();
        assert!(hello.contains(r#"<meta property="og:title" content="Blog -&nbsp;Hello">"#));
        assert!(hello.contains(r#"<meta property="og:url" content="https://example.com/blog/hello/">"#));
        assert!(hello.contains(r#"<meta name="keywords" content="rust">"#));

        let index = fs::read_to_string(dir.path().join("public/blog/_index.head.html")).unwrap();
        assert!(index.contains("Blog -&nbsp;Posts"));
        assert!(index.contains(r#"content="https://example.com/blog/""#));
    }

    #[test]
    fn test_batch_reports_failures() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/good.md"), "+++\ntitle = \"Ok\"\n+++\n").unwrap();
        fs::write(dir.path().join("content/bad.md"), "+++\ntitle = \n+++\n").unwrap();

        let args = BatchArgs {
            content: None,
            output: None,
        };
        let err = run_batch(&args, &config).unwrap_err();
        assert!(err.to_string().contains("1 file"));
        // Good files are still written
        assert!(dir.path().join("public/good.head.html").exists());
    }

    #[test]
    fn test_batch_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        let args = BatchArgs {
            content: None,
            output: None,
        };
        assert!(run_batch(&args, &config).is_err());
    }
}
