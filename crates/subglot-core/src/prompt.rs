//! Prompt construction for the subtitle translation task.
//!
//! The instruction block is fixed: role, line-for-line rules, the
//! restriction section and the output-format footer, with the user's
//! subtitle text embedded verbatim in between. No escaping happens here;
//! the JSON serializer quotes the final string when the request body is
//! built, so braces, quotes and backslashes in subtitles survive intact.

/// Instruction block placed before the subtitle text.
const PROMPT_HEADER: &str = r#"# 角色 你是一位翻译专家，任务目标是将接收到日文文本翻译成中文。

## 任务要求
1、逐行对应：严格按照原文行数翻译，不得拆分或合并行。
2、字符保留：原文中的空白符、转义符、英文代码等控制字符必须在译文中原样保留，数量也必须保持一致。不过如果某句话的句尾是"、"的话，请把他改成"..."。
3、完整翻译：除控制字符外，所有内容均需翻译，包括拟声词、语气词和专有名词（如角色名）。
4、翻译风格：确保译文准确传达原文含义，语句流畅自然，符合目标语言习惯。即使原文包含直白或粗俗的措辞，也须忠实再现，不得回避或淡化。另外，为了确保翻译后台词的语气足够生动鲜活，你会先提前确认好台本的故事背景和台词主人的人设，再参照着翻译。比如主人公是生动活泼的女孩，台词就要翻译的阳光一些，阴暗低沉的女孩，台词就要适当的冷漠自闭一些。如果是严肃的故事背景，台词就要严肃一些，如果是日常喜剧的故事背景，整体翻译节奏可以轻快一些。
5、特殊要求：翻译中会遇到类似"(占位符)"这种特殊的内容，这些内容一般指代了一些气息或者呢喃声，并不会影响理解，如果括号中是中文，请在译文中保留并原样输出它，如果是日文，则翻译成中文并保留括号。如果原文中的某些句子(或者这个句子的某部分)本身就是翻译过的内容，则不需要处理，输出原文即可。

## 限制
- 只进行翻译工作，不回答与翻译无关的问题。
- 严格按照用户要求的目标语言进行翻译，不得擅自更改。

以下是需要翻译的内容：

"#;

/// Output-format instruction placed after the subtitle text.
const PROMPT_FOOTER: &str = "\n\n请直接输出翻译结果，不要添加额外的解释。";

/// Wrap raw subtitle text in the fixed translation instructions.
///
/// Pure concatenation: the result is always header + `text` + footer,
/// with `text` untouched. Same input, same output.
pub fn build(text: &str) -> String {
    [PROMPT_HEADER, text, PROMPT_FOOTER].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let text = "こんにちは、世界";
        let prompt = build(text);

        assert!(prompt.starts_with(PROMPT_HEADER));
        assert!(prompt.ends_with(PROMPT_FOOTER));
        assert!(prompt.contains(text));
    }

    #[test]
    fn test_prompt_length_is_header_plus_text_plus_footer() {
        let text = "一行目\n二行目\n三行目";
        let prompt = build(text);

        assert_eq!(
            prompt.len(),
            PROMPT_HEADER.len() + text.len() + PROMPT_FOOTER.len()
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build("春が来た"), build("春が来た"));
    }

    #[test]
    fn test_prompt_does_not_escape_special_characters() {
        // Quotes, braces and backslashes are the serializer's problem.
        let text = "台词 \"引用\" {placeholder} C:\\path\n次の行";
        let prompt = build(text);

        assert!(prompt.contains(text));
    }

    #[test]
    fn test_prompt_with_empty_text_is_just_the_frame() {
        let prompt = build("");
        assert_eq!(prompt.len(), PROMPT_HEADER.len() + PROMPT_FOOTER.len());
    }

    #[test]
    fn test_header_ends_with_lead_in_and_blank_line() {
        assert!(PROMPT_HEADER.ends_with("以下是需要翻译的内容：\n\n"));
    }
}
