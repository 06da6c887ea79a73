//! SEO blog writing prompt.

use seoprompt_core::{PromptRequest, RenderedPrompt};

use crate::templates;
use crate::traits::{Prompt, PromptRenderer};

/// Declarative SEO blog prompt over four borrowed inputs.
///
/// Inputs are inserted verbatim. Trimming and the keyword fallback are the
/// caller's job (see [`PromptRequest::from_form`]).
///
/// # Example
///
/// ```rust
/// use seoprompt_prompt::{Prompt, SeoBlogPrompt};
///
/// let prompt = SeoBlogPrompt {
///     source_content: "우리 카페는 매일 아침 로스팅한 원두를 사용합니다.",
///     target_audience: "30대 직장인 커피 애호가",
///     target_keyword: "추천해줘",
///     tone: "친근하고 따뜻한 어조",
/// };
///
/// let rendered = prompt.render();
/// assert!(rendered.starts_with("<role>"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoBlogPrompt<'a> {
    pub source_content: &'a str,
    pub target_audience: &'a str,
    pub target_keyword: &'a str,
    pub tone: &'a str,
}

impl<'a> From<&'a PromptRequest> for SeoBlogPrompt<'a> {
    fn from(request: &'a PromptRequest) -> Self {
        Self {
            source_content: &request.source_content,
            target_audience: &request.target_audience,
            target_keyword: &request.target_keyword,
            tone: &request.tone,
        }
    }
}

impl Prompt for SeoBlogPrompt<'_> {
    fn render(&self) -> String {
        format!(
            r#"{role}

{task}

{inputs}

{rules}

{output}

{constraints}

{closing}

{thumbnail}"#,
            role = templates::render_role(),
            task = templates::render_task(),
            inputs = templates::render_inputs(
                self.source_content,
                self.target_audience,
                self.target_keyword,
                self.tone,
            ),
            rules = templates::render_seo_rules(),
            output = templates::render_output_format(),
            constraints = templates::render_constraints(),
            closing = templates::render_closing(),
            thumbnail = templates::render_thumbnail_request(),
        )
    }
}

/// Render the SEO blog prompt for four already-normalized inputs.
pub fn render_seo_prompt(
    source_content: &str,
    target_audience: &str,
    target_keyword: &str,
    tone: &str,
) -> String {
    SeoBlogPrompt {
        source_content,
        target_audience,
        target_keyword,
        tone,
    }
    .render()
}

/// The stock renderer used by the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoPromptRenderer;

impl PromptRenderer for SeoPromptRenderer {
    fn render(&self, request: &PromptRequest) -> RenderedPrompt {
        RenderedPrompt::new(SeoBlogPrompt::from(request).render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoprompt_core::{FormInput, KEYWORD_FALLBACK};

    #[test]
    fn test_seo_blog_prompt_render() {
        let rendered = render_seo_prompt("SRC-1", "AUD-2", "KW-3", "TONE-4");

        assert!(rendered.starts_with("<role>"));
        assert!(rendered.contains("[원문 내용]\nSRC-1\n"));
        assert!(rendered.contains("[타겟 독자]\nAUD-2\n"));
        assert!(rendered.contains("[목표 키워드]\nKW-3\n"));
        assert!(rendered.contains("[톤앤매너]\nTONE-4\n</input_required>"));
        assert!(rendered.ends_with("인포그래픽 스타일)"));
    }

    #[test]
    fn test_render_is_total_over_empty_inputs() {
        let rendered = render_seo_prompt("", "", "", "");
        assert!(rendered.contains("[원문 내용]\n\n\n[타겟 독자]"));
        assert!(rendered.contains("</constraints>"));
    }

    #[test]
    fn test_section_order() {
        let rendered = render_seo_prompt("a", "b", "c", "d");
        let markers = [
            "<role>",
            "<task>",
            "<input_required>",
            "<seo_rules>",
            "<output_format>",
            "<constraints>",
            "위 내용을 바탕으로 SEO 최적화 블로그 글을 작성해줘.",
            "[썸네일 이미지 프롬프트]",
        ];

        let positions: Vec<usize> = markers
            .iter()
            .map(|m| rendered.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_renderer_matches_free_function() {
        let form = FormInput::new(" 본문 ", "독자", "", "어조");
        let request = PromptRequest::from_form(&form).unwrap();

        let rendered = SeoPromptRenderer.render(&request);
        assert_eq!(
            rendered.as_str(),
            render_seo_prompt("본문", "독자", KEYWORD_FALLBACK, "어조")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_seo_prompt("본문", "독자", "키워드", "어조");
        let second = render_seo_prompt("본문", "독자", "키워드", "어조");
        assert_eq!(first, second);
    }
}
