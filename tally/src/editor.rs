use std::borrow::Cow;

use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

pub struct Editor {
    editor: Reedline,
    prompt: TallyPrompt,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            editor: Reedline::create(),
            prompt: TallyPrompt::default(),
        }
    }
}

pub enum EditorRead {
    Read(String),
    Break,
    Continue,
}

impl Editor {
    pub fn read(&mut self) -> std::io::Result<EditorRead> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(input) if input.trim().is_empty() => Ok(EditorRead::Continue),
            Signal::Success(input) => Ok(EditorRead::Read(input)),
            Signal::CtrlC | Signal::CtrlD => Ok(EditorRead::Break),
        }
    }

    /// Records whether the last line evaluated cleanly; shown in the prompt.
    pub const fn mark(&mut self, ok: bool) {
        self.prompt.failed = !ok;
    }
}

/// `>> ` normally, `!> ` right after a line that did not evaluate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallyPrompt {
    failed: bool,
}

impl Prompt for TallyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(if self.failed { "!> " } else { ">> " })
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    // expressions are single-line
    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let status = match history_search.status {
            PromptHistorySearchStatus::Passing => "search",
            PromptHistorySearchStatus::Failing => "no match",
        };

        Cow::Owned(format!("[{status}: {}] ", history_search.term))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prompt_reflects_last_line() {
        let mut prompt = TallyPrompt::default();
        assert_eq!(prompt.render_prompt_left(), ">> ");

        prompt.failed = true;
        assert_eq!(prompt.render_prompt_left(), "!> ");
    }

    #[test]
    fn history_search() {
        let prompt = TallyPrompt::default();
        let search = PromptHistorySearch::new(PromptHistorySearchStatus::Failing, "3 +".into());
        assert_eq!(
            prompt.render_prompt_history_search_indicator(search),
            "[no match: 3 +] "
        );
    }
}
