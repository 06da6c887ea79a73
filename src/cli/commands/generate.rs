//! Generate command: one form submission per invocation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use seoprompt_core::{FormInput, ValidationError};
use seoprompt_reports::{validate_output_directory, write_download, DownloadFormat};

use crate::cli::args::GenerateArgs;
use crate::cli::ui::StatusPrinter;
use crate::config::SeoPromptConfig;
use crate::shell::{PromptShell, Submission};

const SUCCESS_MESSAGE: &str = "프롬프트 생성 완료! 아래 내용을 복사해서 Claude에 붙여넣으세요.";

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    prompt: &'a str,
    keyword_fallback: bool,
    downloads: Vec<JsonDownload<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonDownload<'a> {
    format: DownloadFormat,
    file_name: &'a str,
    mime_type: &'a str,
    path: Option<PathBuf>,
}

pub async fn run_generate_command(args: GenerateArgs) -> Result<()> {
    let env_vars: HashMap<String, String> = std::env::vars().collect();
    let config =
        SeoPromptConfig::load_with_precedence(args.config.as_deref(), Some(&args), &env_vars)?;
    let formats = config.output.download_formats()?;
    let printer = StatusPrinter::new(config.display.color);

    let form = collect_form(&args, &config).await?;
    log::debug!(
        "Form collected: source {} bytes, keyword given: {}",
        form.source_content.len(),
        !form.target_keyword.trim().is_empty()
    );

    let shell = PromptShell::standard().with_file_stem(config.output.file_stem.clone());
    let submission = match shell.submit(&form) {
        Ok(submission) => submission,
        Err(e) => {
            let (field, message) = missing_field_banner(&e);
            printer.error(field, &message);
            return Err(e.into());
        }
    };

    let saved = save_downloads(&submission, &formats, &config).await?;

    if args.json {
        let output = JsonOutput {
            prompt: submission.prompt.as_str(),
            keyword_fallback: submission.keyword_fallback(),
            downloads: submission
                .downloads
                .iter()
                .map(|d| JsonDownload {
                    format: d.format,
                    file_name: &d.file_name,
                    mime_type: d.mime_type,
                    path: saved
                        .iter()
                        .find(|(format, _)| *format == d.format)
                        .map(|(_, path)| path.clone()),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if config.display.quiet {
        println!("{}", submission.prompt);
        return Ok(());
    }

    printer.success("Done", &format!("✅ {}", SUCCESS_MESSAGE));
    println!("{}", submission.prompt);
    printer.divider();

    for (format, path) in &saved {
        printer.info(format.label(), &format!("💾 {} ({})", path.display(), format.mime_type()));
    }

    Ok(())
}

/// Banner keyword and message for a blank required field.
fn missing_field_banner(e: &ValidationError) -> (&'static str, String) {
    (e.field().label(), format!("❌ {}", e))
}

/// Fill the four form fields from flags, stdin and configured defaults.
async fn collect_form(args: &GenerateArgs, config: &SeoPromptConfig) -> Result<FormInput> {
    let source_content = match (&args.source, &args.source_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read source file {}", path.display()))?,
        _ if args.reads_stdin() && stdin_is_readable(args) => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read source content from stdin")?;
            buffer
        }
        _ => String::new(),
    };

    let pick = |flag: &Option<String>, fallback: &Option<String>| {
        flag.clone().or_else(|| fallback.clone()).unwrap_or_default()
    };

    Ok(FormInput {
        source_content,
        target_audience: pick(&args.audience, &config.defaults.target_audience),
        target_keyword: pick(&args.keyword, &config.defaults.target_keyword),
        tone: pick(&args.tone, &config.defaults.tone),
    })
}

/// Stdin is read when asked for explicitly with "-" or when it is piped.
fn stdin_is_readable(args: &GenerateArgs) -> bool {
    args.source_file.is_some() || !atty::is(atty::Stream::Stdin)
}

async fn save_downloads(
    submission: &Submission,
    formats: &[DownloadFormat],
    config: &SeoPromptConfig,
) -> Result<Vec<(DownloadFormat, PathBuf)>> {
    if formats.is_empty() {
        return Ok(Vec::new());
    }

    let dir = &config.output.directory;
    validate_output_directory(dir)?;

    let mut saved = Vec::new();
    for download in submission
        .downloads
        .iter()
        .filter(|d| formats.contains(&d.format))
    {
        let path = write_download(download, dir).await?;
        saved.push((download.format, path));
    }

    log::info!("Saved {} download(s) to {}", saved.len(), dir.display());
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collect_form_prefers_flags_over_defaults() {
        let args = GenerateArgs {
            source: Some("본문".to_string()),
            audience: Some("플래그 독자".to_string()),
            ..GenerateArgs::default()
        };
        let mut config = SeoPromptConfig::default();
        config.defaults.target_audience = Some("설정 독자".to_string());
        config.defaults.tone = Some("설정 어조".to_string());

        let form = collect_form(&args, &config).await.unwrap();

        assert_eq!(form.source_content, "본문");
        assert_eq!(form.target_audience, "플래그 독자");
        assert_eq!(form.target_keyword, "");
        assert_eq!(form.tone, "설정 어조");
    }

    #[test]
    fn test_missing_field_banner_names_the_field() {
        let err = PromptShell::standard()
            .submit(&FormInput::new("본문", "", "", "어조"))
            .unwrap_err();

        let (field, message) = missing_field_banner(&err);

        assert_eq!(field, "타겟 독자");
        assert_eq!(message, "❌ 타겟 독자를 입력해주세요.");
    }

    #[tokio::test]
    async fn test_collect_form_reads_source_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "파일 본문\n").unwrap();

        let args = GenerateArgs {
            source_file: Some(path),
            ..GenerateArgs::default()
        };

        let form = collect_form(&args, &SeoPromptConfig::default()).await.unwrap();
        assert_eq!(form.source_content, "파일 본문\n");
    }

    #[tokio::test]
    async fn test_save_downloads_respects_formats() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = SeoPromptConfig::default();
        config.output.directory = dir.path().to_path_buf();

        let submission = PromptShell::standard()
            .submit(&FormInput::new("본문", "독자", "", "어조"))
            .unwrap();

        let saved = save_downloads(&submission, &[DownloadFormat::PlainText], &config)
            .await
            .unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, dir.path().join("seo_prompt.txt"));
        assert!(!dir.path().join("seo_prompt.md").exists());
    }
}
