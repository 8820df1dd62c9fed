//! # Elicitor
//! Schema-driven interactive prompting for MCP clients: answers form-mode and
//! URL-mode elicitation requests and collects tool-call arguments from a human operator.
//!
//! ## Dependencies
//! ```toml
//! [dependencies]
//! elicitor = { version = "0.1.0", features = ["tracing"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use elicitor::{SchemaPrompter, console::StdConsole, types::ElicitRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), elicitor::error::Error> {
//!     let request: ElicitRequest = serde_json::from_str(r#"{
//!         "message": "Where are you dining?",
//!         "requestedSchema": {
//!             "properties": { "city": { "type": "string" } },
//!             "required": ["city"]
//!         }
//!     }"#)?;
//!
//!     let mut prompter = SchemaPrompter::new(StdConsole::stdio());
//!     let result = prompter.elicit(&request).await?;
//!     println!("{}", serde_json::to_string(&result)?);
//!     Ok(())
//! }
//! ```

pub use prompter::{SchemaPrompter, LabelStyle, PrompterOptions};
pub use console::Console;

pub mod types;
pub mod error;
pub mod console;
pub mod prompter;
