//! Schema-driven prompting for elicitation requests and tool arguments
//!
//! # Example
//! ```
//! use elicitor::{SchemaPrompter, console::ScriptedConsole, types::ElicitRequest};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), elicitor::error::Error> {
//! let request = ElicitRequest::from(json!({
//!     "message": "Who is booking?",
//!     "requestedSchema": {
//!         "properties": {
//!             "name": { "type": "string" },
//!             "age": { "type": "integer", "default": 30 }
//!         },
//!         "required": ["name"]
//!     }
//! }));
//!
//! let mut prompter = SchemaPrompter::new(ScriptedConsole::new(["", "Alice", ""]));
//! let result = prompter.elicit(&request).await?;
//!
//! assert_eq!(
//!     serde_json::to_value(&result)?,
//!     json!({ "action": "accept", "content": { "name": "Alice", "age": 30 } }));
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use coerce::Outcome;
use crate::{
    console::Console,
    error::Error,
    types::{
        CallToolRequestParams,
        CollectedValues,
        ElicitRequest,
        ElicitResult,
        FormElicitation,
        ObjectSchema,
        PropertySchema,
        Tool,
        UrlElicitation,
        helpers::display_value,
    },
};

pub use options::PrompterOptions;

pub mod options;
mod coerce;

/// Specifies what is shown in front of the type in a prompt label
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Property title, falling back to the property name
    #[default]
    Title,

    /// Property name
    Name,
}

/// Collects values for a schema from a [`Console`], one property at a time.
///
/// Local errors (a value that does not coerce, an empty required value) are
/// written to the console and the same property is asked again. Only console
/// failures are returned to the caller.
#[derive(Debug)]
pub struct SchemaPrompter<C> {
    console: C,
    options: PrompterOptions,
}

impl<C: Console> SchemaPrompter<C> {
    /// Creates a new [`SchemaPrompter`] over the `console`
    #[inline]
    pub fn new(console: C) -> Self {
        Self {
            console,
            options: PrompterOptions::default(),
        }
    }

    /// Configures the prompter options
    #[inline]
    pub fn with_options<F>(mut self, config: F) -> Self
    where
        F: FnOnce(PrompterOptions) -> PrompterOptions
    {
        self.options = config(self.options);
        self
    }

    /// Returns a reference to the underlying console
    #[inline]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Unwraps the underlying console
    #[inline]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Answers an elicitation request.
    ///
    /// A request with a URL waits for a single confirmation, any other
    /// request is handled as a form.
    pub async fn elicit(&mut self, request: &ElicitRequest) -> Result<ElicitResult, Error> {
        match request {
            ElicitRequest::Url(url) => self.confirm_url(url).await,
            ElicitRequest::Form(form) => self.elicit_form(form).await,
        }
    }

    /// Shows the URL and the tracking identifier and waits for one line of confirmation
    pub async fn confirm_url(&mut self, request: &UrlElicitation) -> Result<ElicitResult, Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            logger = "elicitor",
            url = %request.url,
            elicitation_id = ?request.elicitation_id,
            "URL mode elicitation");

        self.console.write_line("").await?;
        self.console.write_line("=== ELICITATION (URL MODE) ===").await?;
        self.console.write_line(&request.message).await?;
        self.console.write_line(&format!("URL: {}", request.url)).await?;
        self.console.write_line(&format!(
            "elicitation_id: {}",
            request.elicitation_id.as_deref().unwrap_or("None"))).await?;

        self.console.read_line(&self.options.confirm_prompt).await?;
        Ok(ElicitResult::accept())
    }

    /// Collects every property of the requested schema and accepts with the collected content
    pub async fn elicit_form(&mut self, request: &FormElicitation) -> Result<ElicitResult, Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(logger = "elicitor", "Form mode elicitation");

        self.console.write_line("").await?;
        self.console.write_line("=== ELICITATION (FORM MODE) ===").await?;
        self.console.write_line(&request.message).await?;
        self.echo_schema("Requested schema:", &request.requested_schema).await?;

        let content = self
            .collect(&request.schema(), LabelStyle::Title)
            .await?;
        Ok(ElicitResult::accept().with_content(content))
    }

    /// Collects the arguments of a tool call.
    ///
    /// Returns an empty mapping without touching the console if the tool
    /// declares no properties.
    pub async fn prompt_tool_args(&mut self, tool: &Tool) -> Result<CollectedValues, Error> {
        let schema = tool.schema();
        if schema.is_empty() {
            return Ok(CollectedValues::new());
        }

        self.console.write_line("").await?;
        self.echo_schema("Tool input schema:", &tool.input_schema).await?;
        self.collect(&schema, LabelStyle::Name).await
    }

    /// Lists `tools` and asks for a 1-based choice.
    ///
    /// Empty input picks the configured default. Returns `None` without
    /// reading anything if there are no tools.
    pub async fn pick_tool<'a>(&mut self, tools: &'a [Tool]) -> Result<Option<&'a Tool>, Error> {
        if tools.is_empty() {
            self.console.write_line("No tools exposed by server.").await?;
            return Ok(None);
        }

        self.console.write_line("").await?;
        self.console.write_line("Tools:").await?;
        for (i, tool) in tools.iter().enumerate() {
            self.console.write_line(&format!("  {}. {}", i + 1, tool.name)).await?;
        }

        let count = tools.len();
        let default = self.options.default_tool;
        self.console.write_line("").await?;
        let prompt = format!("Pick a tool [1-{count}] (default {default}): ");
        loop {
            let raw = self.console.read_line(&prompt).await?;
            let raw = raw.trim();
            let choice = if raw.is_empty() {
                Some(default)
            } else {
                raw.parse::<usize>().ok()
            };
            match choice {
                Some(index) if (1..=count).contains(&index) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(logger = "elicitor", tool = %tools[index - 1].name, "Tool picked");
                    return Ok(Some(&tools[index - 1]));
                },
                _ => {
                    self.console
                        .write_line(&format!("Invalid choice '{raw}': expected a number between 1 and {count}"))
                        .await?
                },
            }
        }
    }

    /// Picks a tool, collects its arguments and returns the call parameters
    pub async fn collect_tool_call(&mut self, tools: &[Tool]) -> Result<Option<CallToolRequestParams>, Error> {
        let Some(tool) = self.pick_tool(tools).await? else {
            return Ok(None);
        };
        let args = self.prompt_tool_args(tool).await?;

        self.console.write_line("").await?;
        self.console.write_line(&format!(
            "Calling {} with args: {}",
            tool.name,
            serde_json::to_string(&args)?)).await?;

        Ok(Some(CallToolRequestParams::new(&tool.name, args)))
    }

    /// Collects values for every property of `schema` in declaration order
    pub async fn collect(&mut self, schema: &ObjectSchema, style: LabelStyle) -> Result<CollectedValues, Error> {
        let mut values = CollectedValues::new();
        for (name, prop) in schema.iter() {
            let required = schema.is_required(name);
            let prompt = label(name, prop, required, style);
            if let Some(value) = self.collect_field(name, &prompt, prop, required).await? {
                values.insert(name.into(), value);
            }
        }
        Ok(values)
    }

    async fn collect_field(
        &mut self,
        _name: &str,
        prompt: &str,
        prop: &PropertySchema,
        required: bool,
    ) -> Result<Option<Value>, Error> {
        loop {
            let raw = self.console.read_line(prompt).await?;
            match coerce::resolve(raw.trim(), prop, required, &self.options) {
                Outcome::Store(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(logger = "elicitor", field = _name, "Value accepted");
                    return Ok(Some(value));
                },
                Outcome::Skip => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(logger = "elicitor", field = _name, "Optional value skipped");
                    return Ok(None);
                },
                Outcome::Reject(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(logger = "elicitor", field = _name, code = ?err.code(), "Value rejected");
                    self.console.write_line(&err.to_string()).await?;
                },
            }
        }
    }

    async fn echo_schema(&mut self, heading: &str, schema: &Value) -> Result<(), Error> {
        if !self.options.echo_schema {
            return Ok(());
        }
        let pretty = serde_json::to_string_pretty(schema)?;
        self.console.write_line(heading).await?;
        self.console.write_line(&pretty).await
    }
}

/// Builds a prompt label like `Age (integer) [required] [default=30]: `
pub(crate) fn label(name: &str, prop: &PropertySchema, required: bool, style: LabelStyle) -> String {
    let shown = match style {
        LabelStyle::Title => prop.display_title(name),
        LabelStyle::Name => name,
    };
    let mut label = format!("{shown} ({})", prop.r#type);
    if required {
        label.push_str(" [required]");
    }
    if let Some(default) = &prop.default {
        label.push_str(&format!(" [default={}]", display_value(default)));
    }
    label.push_str(": ");
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use schemars::JsonSchema;
    use crate::console::ScriptedConsole;
    use crate::error::ErrorCode;
    use crate::types::PropertyType;

    fn prompter<const N: usize>(answers: [&str; N]) -> SchemaPrompter<ScriptedConsole> {
        SchemaPrompter::new(ScriptedConsole::new(answers))
    }

    fn booking_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "integer", "default": 30 }
            },
            "required": ["name"]
        })
    }

    #[tokio::test]
    async fn it_returns_empty_args_without_reading_input() {
        let mut prompter = prompter([]);
        let tool = Tool::new("ping", json!({ "type": "object", "properties": {} }));

        let args = prompter.prompt_tool_args(&tool).await.unwrap();

        assert!(args.is_empty());
        assert_eq!(prompter.console().reads(), 0);
        assert!(prompter.console().transcript().is_empty());
    }

    #[tokio::test]
    async fn it_returns_empty_args_for_missing_schema() {
        let mut prompter = prompter([]);
        let tool: Tool = serde_json::from_value(json!({ "name": "ping" })).unwrap();

        let args = prompter.prompt_tool_args(&tool).await.unwrap();

        assert!(args.is_empty());
        assert_eq!(prompter.console().reads(), 0);
    }

    #[tokio::test]
    async fn it_stores_default_of_required_field_exactly() {
        let mut prompter = prompter([""]);
        let schema = ObjectSchema::new()
            .with_required("party", PropertySchema::integer().with_default("4"));

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert_eq!(values["party"], json!("4"));
        assert_eq!(prompter.console().reads(), 1);
    }

    #[tokio::test]
    async fn it_reprompts_once_for_invalid_integer() {
        let mut prompter = prompter(["abc", "42"]);
        let schema = ObjectSchema::new().with_required("guests", "integer");

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert_eq!(values["guests"], json!(42));
        assert_eq!(prompter.console().count_lines("Invalid value for type 'integer'"), 1);
        assert_eq!(prompter.console().reads(), 2);
    }

    #[tokio::test]
    async fn it_reprompts_for_invalid_number() {
        let mut prompter = prompter(["cheap", " 12.5 "]);
        let schema = ObjectSchema::new().with_prop("budget", "number");

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert_eq!(values["budget"], json!(12.5));
        assert_eq!(prompter.console().count_lines("Invalid value for type 'number'"), 1);
    }

    #[tokio::test]
    async fn it_collects_booleans_permissively() {
        let schema = ObjectSchema::new().with_prop("vegan", "boolean");
        for (raw, expected) in [
            ("yes", true), ("Y", true), ("ON", true), ("1", true), ("true", true),
            ("false", false), ("maybe", false)
        ] {
            let mut prompter = prompter([raw]);

            let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

            assert_eq!(values["vegan"], json!(expected), "{raw}");
        }
    }

    #[tokio::test]
    async fn it_collects_arrays() {
        let mut prompter = prompter(["a, b ,, c"]);
        let schema = ObjectSchema::new().with_prop("dishes", "array");

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert_eq!(values["dishes"], json!(["a", "b", "c"]));
    }

    #[tokio::test]
    async fn it_skips_optional_fields_on_empty_input() {
        let mut prompter = prompter(["", "Austin"]);
        let schema = ObjectSchema::new()
            .with_prop("notes", "string")
            .with_required("city", "string");

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert!(!values.contains_key("notes"));
        assert_eq!(values["city"], json!("Austin"));
    }

    #[tokio::test]
    async fn it_answers_form_elicitation() {
        let mut prompter = prompter(["", "Alice", ""]);
        let request = ElicitRequest::form("Who is booking?", booking_schema());

        let result = prompter.elicit(&request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "action": "accept", "content": { "name": "Alice", "age": 30 } }));

        let console = prompter.console();
        assert_eq!(console.count_lines("Required."), 1);
        assert_eq!(console.count_lines("name (string) [required]: "), 2);
        assert_eq!(console.count_lines("age (integer) [default=30]: "), 1);
        assert_eq!(console.count_lines("=== ELICITATION (FORM MODE) ==="), 1);
        assert_eq!(console.count_lines("Requested schema:"), 1);
    }

    #[tokio::test]
    async fn it_keeps_content_keys_in_schema_order() {
        let mut prompter = prompter(["Bob", "2"]);
        let request = ElicitRequest::form("", json!({
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "integer" }
            }
        }));

        let result = prompter.elicit(&request).await.unwrap();
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"action":"accept","content":{"zeta":"Bob","alpha":2}}"#);
    }

    #[tokio::test]
    async fn it_uses_titles_in_form_mode_and_names_for_tools() {
        let schema = json!({
            "properties": { "city": { "type": "string", "title": "City name" } }
        });

        let mut form = prompter(["Austin"]);
        form.elicit(&ElicitRequest::form("", schema.clone())).await.unwrap();
        assert_eq!(form.console().count_lines("City name (string): "), 1);

        let mut tool = prompter(["Austin"]);
        tool.prompt_tool_args(&Tool::new("search", schema)).await.unwrap();
        assert_eq!(tool.console().count_lines("city (string): "), 1);
        assert_eq!(tool.console().count_lines("Tool input schema:"), 1);
    }

    #[tokio::test]
    async fn it_accepts_empty_form_for_malformed_schema() {
        let mut prompter = prompter([]);
        let request = ElicitRequest::from(json!({ "message": "hi", "requestedSchema": "nope" }));

        let result = prompter.elicit(&request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "action": "accept", "content": {} }));
        assert_eq!(prompter.console().reads(), 0);
    }

    #[tokio::test]
    async fn it_confirms_url_elicitation() {
        let mut prompter = prompter(["y"]);
        let request = ElicitRequest::from(json!({
            "url": "https://x/confirm",
            "elicitation_id": "e1"
        }));

        let result = prompter.elicit(&request).await.unwrap();

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "action": "accept" }));
        let console = prompter.console();
        assert_eq!(console.reads(), 1);
        assert_eq!(console.count_lines("=== ELICITATION (URL MODE) ==="), 1);
        assert_eq!(console.count_lines("URL: https://x/confirm"), 1);
        assert_eq!(console.count_lines("elicitation_id: e1"), 1);
        assert_eq!(console.count_lines("Press Enter to ACCEPT"), 1);
    }

    #[tokio::test]
    async fn it_shows_missing_elicitation_id_as_none() {
        let mut prompter = prompter([""]);
        let request = ElicitRequest::url("Authorize", "https://x/confirm");

        prompter.elicit(&request).await.unwrap();

        assert_eq!(prompter.console().count_lines("elicitation_id: None"), 1);
    }

    #[tokio::test]
    async fn it_propagates_closed_input() {
        let mut prompter = prompter(["", ""]);
        let request = ElicitRequest::form("", booking_schema());

        let err = prompter.elicit(&request).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::TransportClosed);
        assert_eq!(prompter.console().count_lines("Required."), 2);
    }

    #[tokio::test]
    async fn it_hides_schema_when_echo_is_disabled() {
        let mut prompter = prompter(["Alice", ""])
            .with_options(|opt| opt.with_schema_echo(false));
        let request = ElicitRequest::form("", booking_schema());

        prompter.elicit(&request).await.unwrap();

        assert_eq!(prompter.console().count_lines("Requested schema:"), 0);
    }

    #[tokio::test]
    async fn it_uses_configured_truthy_tokens() {
        let mut prompter = prompter(["ja"])
            .with_options(|opt| opt.with_truthy_tokens(["ja"]));
        let schema = ObjectSchema::new().with_prop("vegan", "boolean");

        let values = prompter.collect(&schema, LabelStyle::Name).await.unwrap();

        assert_eq!(values["vegan"], json!(true));
    }

    #[tokio::test]
    async fn it_reads_typed_content_back() {
        #[derive(Deserialize, JsonSchema)]
        struct Reservation {
            guests: i64,
            vegan: bool,
            dishes: Vec<String>,
        }

        let mut prompter = prompter(["4", "y", "curry, naan"]);
        let request = ElicitRequest::form("Reserve", ObjectSchema::of::<Reservation>());

        let result = prompter.elicit(&request).await.unwrap();
        let reservation: Reservation = result.content().unwrap();

        assert_eq!(reservation.guests, 4);
        assert!(reservation.vegan);
        assert_eq!(reservation.dishes, ["curry", "naan"]);
    }

    #[tokio::test]
    async fn it_coerces_nullable_fields_from_rust_type() {
        #[derive(Deserialize, JsonSchema)]
        struct Booking {
            guests: Option<i64>,
            vegan: Option<bool>,
        }

        let schema = ObjectSchema::of::<Booking>();
        assert_eq!(schema.property("guests").unwrap().r#type, PropertyType::Integer);
        assert_eq!(schema.property("vegan").unwrap().r#type, PropertyType::Bool);

        let mut prompter = prompter(["4", "yes"]);
        let result = prompter
            .elicit(&ElicitRequest::form("Book", schema))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "action": "accept", "content": { "guests": 4, "vegan": true } }));

        let booking: Booking = result.content().unwrap();
        assert_eq!(booking.guests, Some(4));
        assert_eq!(booking.vegan, Some(true));
    }

    #[tokio::test]
    async fn it_ignores_required_names_missing_from_properties() {
        let mut prompter = prompter(["Alice"]);
        let request = ElicitRequest::form("", json!({
            "properties": { "name": { "type": "string" } },
            "required": ["name", "phone"]
        }));

        let result = prompter.elicit(&request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "action": "accept", "content": { "name": "Alice" } }));
        assert_eq!(prompter.console().reads(), 1);
        assert_eq!(prompter.console().count_lines("phone"), 0);
    }

    #[tokio::test]
    async fn it_uses_configured_confirm_prompt() {
        let mut prompter = prompter([""])
            .with_options(|opt| opt.with_confirm_prompt("Done signing in? "));
        let request = ElicitRequest::url("Authorize", "https://x/confirm");

        prompter.elicit(&request).await.unwrap();

        assert_eq!(prompter.console().count_lines("Done signing in? "), 1);
        assert_eq!(prompter.console().count_lines("Press Enter to ACCEPT"), 0);
    }

    fn tools() -> Vec<Tool> {
        vec![
            Tool::new("ping", json!({})),
            Tool::new("get_recommendations", json!({
                "type": "object",
                "properties": {
                    "city": { "type": "string" },
                    "state": { "type": "string" },
                    "cuisine": { "type": "string", "default": "thai" }
                },
                "required": ["city", "state"]
            })),
        ]
    }

    #[tokio::test]
    async fn it_picks_default_tool_on_empty_input() {
        let tools = tools();
        let mut prompter = prompter([""]);

        let tool = prompter.pick_tool(&tools).await.unwrap().unwrap();

        assert_eq!(tool.name, "ping");
        assert_eq!(prompter.console().count_lines("  2. get_recommendations"), 1);
    }

    #[tokio::test]
    async fn it_reprompts_for_invalid_tool_choice() {
        let tools = tools();
        let mut prompter = prompter(["x", "3", "2"]);

        let tool = prompter.pick_tool(&tools).await.unwrap().unwrap();

        assert_eq!(tool.name, "get_recommendations");
        assert_eq!(prompter.console().count_lines("Invalid choice"), 2);
    }

    #[tokio::test]
    async fn it_reports_empty_tool_list() {
        let mut prompter = prompter([]);

        let tool = prompter.pick_tool(&[]).await.unwrap();

        assert!(tool.is_none());
        assert_eq!(prompter.console().count_lines("No tools exposed by server."), 1);
        assert_eq!(prompter.console().reads(), 0);
    }

    #[tokio::test]
    async fn it_collects_tool_call() {
        let tools = tools();
        let mut prompter = prompter(["2", "Austin", "TX", ""]);

        let call = prompter.collect_tool_call(&tools).await.unwrap().unwrap();

        assert_eq!(call.name, "get_recommendations");
        assert_eq!(
            serde_json::to_value(&call.args).unwrap(),
            json!({ "city": "Austin", "state": "TX", "cuisine": "thai" }));
        assert_eq!(prompter.console().count_lines(
            r#"Calling get_recommendations with args: {"city":"Austin","state":"TX","cuisine":"thai"}"#), 1);
    }

    #[test]
    fn it_builds_labels() {
        let prop = PropertySchema::integer()
            .with_title("Party size")
            .with_default(2);

        assert_eq!(label("party", &prop, true, LabelStyle::Title), "Party size (integer) [required] [default=2]: ");
        assert_eq!(label("party", &prop, false, LabelStyle::Name), "party (integer) [default=2]: ");
        assert_eq!(label("x", &PropertySchema::new("date"), false, LabelStyle::Title), "x (date): ");
    }
}
