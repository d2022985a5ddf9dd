use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::error::{QuizError, Result};
use crate::model::*;

pub fn parse_quiz(content: &str) -> Result<Quiz> {
    let (frontmatter, body) = split_frontmatter(content)?;
    let fm: Frontmatter = match frontmatter {
        Some(text) if !text.trim().is_empty() => serde_yaml::from_str(&text)?,
        _ => Frontmatter::default(),
    };

    let (title, questions) = parse_body(&body)?;
    if questions.is_empty() {
        return Err(QuizError::InvalidQuiz(
            "no questions found (each question starts with a '## ' heading)".to_string(),
        ));
    }

    let title = fm
        .title
        .clone()
        .or(title)
        .unwrap_or_else(|| "Code Quiz".to_string());

    Ok(Quiz {
        frontmatter: fm,
        title,
        questions,
    })
}

fn split_frontmatter(content: &str) -> Result<(Option<String>, String)> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return Ok((None, content.to_string()));
    }

    let after_first = &trimmed[3..];
    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| QuizError::InvalidQuiz("no closing --- for frontmatter".to_string()))?;

    let fm = after_first[..end_pos].trim().to_string();
    let body = after_first[end_pos + 4..].to_string();

    Ok((Some(fm), body))
}

#[derive(Default)]
struct QuestionBuilder {
    prompt: String,
    code_snippet: Option<String>,
    language: Option<String>,
    options: Vec<AnswerOption>,
    hint: Option<String>,
}

impl QuestionBuilder {
    fn finish(self, number: usize) -> Result<Question> {
        let prompt = self.prompt.trim().to_string();
        if self.options.is_empty() {
            return Err(QuizError::InvalidQuiz(format!(
                "question {} ({}) has no answer options",
                number, prompt
            )));
        }
        if !self.options.iter().any(|o| o.is_correct) {
            return Err(QuizError::InvalidQuiz(format!(
                "question {} ({}) has no option marked correct with [x]",
                number, prompt
            )));
        }

        Ok(Question {
            prompt,
            code_snippet: self
                .code_snippet
                .map(|c| c.trim_end().to_string())
                .unwrap_or_default(),
            language: self.language,
            options: self.options,
            hint: self.hint,
        })
    }
}

fn parse_body(body: &str) -> Result<(Option<String>, Vec<Question>)> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut title: Option<String> = None;
    let mut questions: Vec<Question> = Vec::new();
    let mut current: Option<QuestionBuilder> = None;

    let mut in_h1 = false;
    let mut in_h2 = false;
    let mut h1_text = String::new();
    let mut in_code_block = false;
    let mut code_block_text = String::new();
    let mut code_block_lang: Option<String> = None;
    let mut in_list_item = false;
    let mut list_item_text = String::new();
    let mut task_list_checked: Option<bool> = None;
    let mut in_paragraph = false;
    let mut paragraph_text = String::new();
    let mut in_hint_block = false;
    let mut hint_text = String::new();

    for event in Parser::new_ext(body, opts) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => match level {
                HeadingLevel::H1 => {
                    in_h1 = true;
                    h1_text.clear();
                }
                HeadingLevel::H2 => {
                    if in_hint_block {
                        return Err(unterminated_hint(questions.len() + 1));
                    }
                    if let Some(q) = current.take() {
                        questions.push(q.finish(questions.len() + 1)?);
                    }
                    current = Some(QuestionBuilder::default());
                    in_h2 = true;
                }
                _ => {}
            },
            Event::End(TagEnd::Heading(level)) => match level {
                HeadingLevel::H1 => {
                    in_h1 = false;
                    if title.is_none() && !h1_text.trim().is_empty() {
                        title = Some(h1_text.trim().to_string());
                    }
                }
                HeadingLevel::H2 => in_h2 = false,
                _ => {}
            },
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_block_text.clear();
                code_block_lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|s| s.to_string()),
                    CodeBlockKind::Indented => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                // Only the first code block of a question is its snippet.
                if let Some(q) = current.as_mut() {
                    if q.code_snippet.is_none() {
                        q.code_snippet = Some(std::mem::take(&mut code_block_text));
                        q.language = code_block_lang.take();
                    }
                }
            }
            Event::Start(Tag::Item) => {
                in_list_item = true;
                list_item_text.clear();
                task_list_checked = None;
            }
            Event::End(TagEnd::Item) => {
                in_list_item = false;
                if let (Some(q), Some(checked)) = (current.as_mut(), task_list_checked) {
                    q.options.push(AnswerOption {
                        label: list_item_text.trim().to_string(),
                        is_correct: checked,
                    });
                }
                task_list_checked = None;
            }
            Event::TaskListMarker(checked) => {
                task_list_checked = Some(checked);
            }
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                if in_list_item {
                    continue;
                }
                let text = paragraph_text.trim().to_string();

                if let Some(rest) = text.strip_prefix(":::hint") {
                    in_hint_block = true;
                    hint_text.clear();
                    push_hint_line(&mut hint_text, rest);
                } else if in_hint_block {
                    push_hint_line(&mut hint_text, &text);
                }

                if in_hint_block && hint_text.ends_with(":::") {
                    in_hint_block = false;
                    let hint = hint_text.trim_end_matches(":::").trim().to_string();
                    if let Some(q) = current.as_mut() {
                        if !hint.is_empty() {
                            q.hint = Some(hint);
                        }
                    }
                    hint_text.clear();
                }
            }
            Event::Text(text) => {
                if in_h1 {
                    h1_text.push_str(&text);
                } else if in_h2 {
                    if let Some(q) = current.as_mut() {
                        q.prompt.push_str(&text);
                    }
                } else if in_code_block {
                    code_block_text.push_str(&text);
                } else if in_list_item {
                    list_item_text.push_str(&text);
                } else if in_paragraph {
                    paragraph_text.push_str(&text);
                }
            }
            Event::Code(code) => {
                if in_h2 {
                    if let Some(q) = current.as_mut() {
                        q.prompt.push_str(&code);
                    }
                } else if in_list_item {
                    list_item_text.push_str(&code);
                } else if in_paragraph {
                    paragraph_text.push_str(&format!("`{}`", code));
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_paragraph {
                    paragraph_text.push('\n');
                } else if in_list_item {
                    list_item_text.push(' ');
                }
            }
            _ => {}
        }
    }

    if in_hint_block {
        return Err(unterminated_hint(questions.len() + 1));
    }
    if let Some(q) = current.take() {
        questions.push(q.finish(questions.len() + 1)?);
    }

    Ok((title, questions))
}

fn unterminated_hint(number: usize) -> QuizError {
    QuizError::InvalidQuiz(format!(
        "question {} has an unterminated :::hint block",
        number
    ))
}

fn push_hint_line(hint: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !hint.is_empty() {
        hint.push(' ');
    }
    hint.push_str(&text.split_whitespace().collect::<Vec<_>>().join(" "));
}
