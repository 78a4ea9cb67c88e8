use colored::*;
use protorules_core::traits::{MethodTrait, MethodTraits, StreamingMode};
use std::fmt::Display;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct ServiceList(pub Vec<String>);

/// A pattern body rendered for one method. `pattern` is `None` when no pattern matched.
pub struct RenderedMethod {
    pub method: String,
    pub pattern: Option<String>,
    pub body: String,
}

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        FormattedString(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}\n\n'{}'", msg.red().bold(), err))
    }
}

impl From<ServiceList> for FormattedString {
    fn from(ServiceList(services): ServiceList) -> Self {
        if services.is_empty() {
            return FormattedString("No services found.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Available Services:\n");
        for svc in services {
            out.push_str(&format!("  - {}\n", svc.green()));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<MethodTraits> for FormattedString {
    fn from(traits: MethodTraits) -> Self {
        let mut out = String::new();
        out.push_str(&format!("{} {}\n\n", "Method:".bold(), traits.method.cyan()));

        let streaming = match traits.streaming {
            StreamingMode::Unary => "unary",
            StreamingMode::ClientStreaming => "client streaming",
            StreamingMode::ServerStreaming => "server streaming",
            StreamingMode::Bidirectional => "bidirectional streaming",
        };
        out.push_str(&format!("  {:<40} {}\n", "streaming", streaming.yellow()));

        for method_trait in MethodTrait::ALL {
            let value = if traits.has(method_trait) {
                "yes".green()
            } else {
                "no".dimmed()
            };
            out.push_str(&format!("  {:<40} {}\n", method_trait.name(), value));
        }

        if let Some(info) = &traits.operation_info {
            out.push_str(&format!(
                "\n  {} response={:?} metadata={:?}\n",
                "operation_info:".bold(),
                info.response_type,
                info.metadata_type
            ));
        }

        if let Some(pagination) = &traits.pagination {
            out.push_str(&format!(
                "\n  {} repeated {} {}\n",
                "page elements:".bold(),
                pagination.element_type.full_name().blue(),
                pagination.field_name
            ));
        }

        FormattedString(out.trim_end().to_string())
    }
}

impl From<RenderedMethod> for FormattedString {
    fn from(rendered: RenderedMethod) -> Self {
        match rendered.pattern {
            Some(pattern) => FormattedString(format!(
                "{} {}\n{}",
                rendered.method.cyan(),
                format!("[{pattern}]").dimmed(),
                rendered.body
            )),
            None => FormattedString(format!(
                "{} {}",
                rendered.method.cyan(),
                "no matching pattern".yellow()
            )),
        }
    }
}
