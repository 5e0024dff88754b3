use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

static PROMPT_INDICATOR: &str = "〉";
static VI_INSERT_PROMPT_INDICATOR: &str = ": ";
static MULTILINE_INDICATOR: &str = "::: ";

/// Shows where the player is, e.g. `3/5〉`.
#[derive(Clone, Default)]
pub(crate) struct QuizPrompt {
    label: String,
}

impl QuizPrompt {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

impl Prompt for QuizPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.label.as_str())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => PROMPT_INDICATOR.into(),
            PromptEditMode::Vi(PromptViMode::Normal) => PROMPT_INDICATOR.into(),
            PromptEditMode::Vi(PromptViMode::Insert) => VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(str) => format!("({str})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search) \"{}\": ", prefix, history_search.term))
    }
}
