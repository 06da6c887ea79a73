//! Template sections for the SEO blog prompt.
//!
//! Every section is fixed text except the input echo. Sections carry no
//! leading or trailing blank lines; the caller joins them with one blank line.

/// Render the role section.
pub fn render_role() -> &'static str {
    r#"<role>
당신은 Google SEO 전문가이자 워드프레스 콘텐츠 전략가입니다.
검색엔진 알고리즘(Google E-E-A-T, Core Web Vitals)에 정통하며,
키워드 최적화와 독자 경험을 동시에 고려한 콘텐츠를 설계합니다.
</role>"#
}

/// Render the task section.
pub fn render_task() -> &'static str {
    r#"<task>
내가 제공하는 원문 내용을 바탕으로:
1. SEO 관점에서 글의 구조를 재편성하고
2. 핵심 키워드 및 LSI 키워드를 전략적으로 배치하며
3. 워드프레스에 바로 적용 가능한 형태로 최종 콘텐츠를 작성해줘.
</task>"#
}

/// Render the input echo section.
///
/// Values are inserted verbatim.
pub fn render_inputs(
    source_content: &str,
    target_audience: &str,
    target_keyword: &str,
    tone: &str,
) -> String {
    format!(
        r#"<input_required>
[원문 내용]
{}

[타겟 독자]
{}

[목표 키워드]
{}

[톤앤매너]
{}
</input_required>"#,
        source_content, target_audience, target_keyword, tone
    )
}

/// Render the keyword placement rules.
pub fn render_keyword_strategy() -> &'static str {
    r#"[키워드 전략]
- 메인 키워드: 제목(H1), 첫 단락 100자 이내, 메타 디스크립션에 반드시 포함
- 서브 키워드(LSI): H2, H3 소제목에 자연스럽게 분산 배치
- 키워드 밀도: 전체 글의 1~2% 유지 (과도한 반복 금지)
- 롱테일 키워드: 소제목 또는 FAQ 섹션에 활용"#
}

/// Render the post structure rules.
pub fn render_post_structure() -> &'static str {
    r#"[글 구조]
- 전체 분량: 최소 1,200자 이상 (SEO 권장)
- H1(1개) → H2(3~5개) → H3(필요시) 계층 구조 유지
- 도입부: 독자의 Pain Point를 짚고 글의 가치를 명확히 제시
- 본문: 정보의 논리적 흐름 유지, 핵심 내용은 앞에 배치
- 마무리: 핵심 요약 + CTA(Call to Action) 포함"#
}

/// Render the WordPress optimization rules.
pub fn render_wordpress_optimization() -> &'static str {
    r#"[워드프레스 최적화]
- 메타 제목(Title Tag): 60자 이내, 메인 키워드 포함
- 메타 디스크립션: 150~160자, 키워드 + 클릭 유도 문구 포함
- URL Slug 추천: 영문 소문자, 하이픈(-) 구분, 키워드 포함
- 이미지 ALT 텍스트: 키워드 포함 문구 추천
- 내부 링크 위치: [내부링크: 관련 글 제목] 형태로 표시
- 추천 태그/카테고리 제안 포함"#
}

/// Render the full SEO rule set.
pub fn render_seo_rules() -> String {
    format!(
        r#"<seo_rules>
반드시 아래 SEO 규칙을 적용해줘:

{}

{}

{}
</seo_rules>"#,
        render_keyword_strategy(),
        render_post_structure(),
        render_wordpress_optimization()
    )
}

/// Render the output skeleton the downstream model fills in.
pub fn render_output_format() -> &'static str {
    r#"<output_format>
최종 결과물은 아래 순서로 출력해줘:
---
[SEO 분석 요약]
- 메인 키워드:
- 서브 키워드 목록:
- 예상 검색 의도(User Intent):

[워드프레스 설정값]
- 메타 제목:
- 메타 디스크립션:
- URL Slug:
- 추천 카테고리/태그:
- 이미지 ALT 텍스트 예시:

[최종 블로그 본문]
(H1 / H2 / H3 계층 구조로 작성된 완성 본문)

[내부 링크 제안]

[FAQ 섹션]
---
</output_format>"#
}

/// Render the writing constraints.
pub fn render_constraints() -> &'static str {
    r#"<constraints>
- 키워드를 억지로 끼워 넣지 말고 문맥상 자연스럽게 삽입할 것
- 독자가 끝까지 읽고 싶은 흐름을 유지할 것
- 표절 없이 내가 제공한 원문을 재구성하는 것에 집중할 것
- 불필요한 미사여구, 중복 표현 제거
</constraints>"#
}

/// Render the closing instruction.
pub fn render_closing() -> &'static str {
    "위 내용을 바탕으로 SEO 최적화 블로그 글을 작성해줘."
}

/// Render the independent thumbnail image request.
pub fn render_thumbnail_request() -> &'static str {
    r#"---

[썸네일 이미지 프롬프트]
위 블로그 내용의 분위기에 맞는 Flora AI용 썸네일 이미지 프롬프트를 영문으로 작성해줘. (1280x720, 클린/미니멀 + 인포그래픽 스타일)"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_no_surrounding_blank_lines() {
        let sections = [
            render_role().to_string(),
            render_task().to_string(),
            render_inputs("a", "b", "c", "d"),
            render_seo_rules(),
            render_output_format().to_string(),
            render_constraints().to_string(),
            render_closing().to_string(),
            render_thumbnail_request().to_string(),
        ];

        for section in &sections {
            assert!(!section.starts_with('\n'), "leading newline: {section}");
            assert!(!section.ends_with('\n'), "trailing newline: {section}");
        }
    }

    #[test]
    fn test_seo_rules_order() {
        let rules = render_seo_rules();
        let keyword = rules.find("[키워드 전략]").unwrap();
        let structure = rules.find("[글 구조]").unwrap();
        let wordpress = rules.find("[워드프레스 최적화]").unwrap();
        assert!(keyword < structure && structure < wordpress);
    }
}
