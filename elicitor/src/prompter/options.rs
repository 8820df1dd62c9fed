//! Prompter configuration options

/// Tokens that a `boolean` input is matched against, case-insensitively
pub const DEFAULT_TRUTHY_TOKENS: [&str; 5] = ["1", "true", "yes", "y", "on"];

const DEFAULT_ARRAY_SEPARATOR: char = ',';
const DEFAULT_TOOL: usize = 1;
const DEFAULT_CONFIRM_PROMPT: &str = "Press Enter to ACCEPT (Ctrl+C to abort)… ";

/// Represents [`SchemaPrompter`](super::SchemaPrompter) configuration options
#[derive(Debug, Clone)]
pub struct PrompterOptions {
    /// Whether schemas are dumped to the transcript before prompting
    pub(crate) echo_schema: bool,

    /// Separator used to split `array` inputs
    pub(crate) array_separator: char,

    /// Lowercase tokens treated as `true` for `boolean` inputs
    pub(crate) truthy: Vec<String>,

    /// 1-based index of the tool picked on empty input
    pub(crate) default_tool: usize,

    /// Prompt shown while waiting for a URL-mode confirmation
    pub(crate) confirm_prompt: String,
}

impl Default for PrompterOptions {
    #[inline]
    fn default() -> Self {
        Self {
            echo_schema: true,
            array_separator: DEFAULT_ARRAY_SEPARATOR,
            truthy: DEFAULT_TRUTHY_TOKENS.map(String::from).to_vec(),
            default_tool: DEFAULT_TOOL,
            confirm_prompt: DEFAULT_CONFIRM_PROMPT.into(),
        }
    }
}

impl PrompterOptions {
    /// Enables or disables dumping schemas to the transcript
    ///
    /// Default: `true`
    pub fn with_schema_echo(mut self, echo: bool) -> Self {
        self.echo_schema = echo;
        self
    }

    /// Specifies the separator for `array` inputs
    ///
    /// Default: `,`
    pub fn with_array_separator(mut self, separator: char) -> Self {
        self.array_separator = separator;
        self
    }

    /// Replaces the tokens treated as `true` for `boolean` inputs
    ///
    /// Default: `1`, `true`, `yes`, `y`, `on`
    pub fn with_truthy_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.truthy = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    /// Specifies the 1-based index of the tool picked on empty input
    ///
    /// Default: `1`
    pub fn with_default_tool(mut self, index: usize) -> Self {
        self.default_tool = index;
        self
    }

    /// Specifies the prompt shown while waiting for a URL-mode confirmation
    pub fn with_confirm_prompt(mut self, prompt: &str) -> Self {
        self.confirm_prompt = prompt.into();
        self
    }
}
