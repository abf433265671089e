//! Output Rendering
//!
//! Renders use case results as human text or a single JSON line.

use crossterm::style::Stylize;

use crate::application::{ConfigureDomainResult, DeployResult};
use crate::domain::entities::{RouteEntry, RouteTarget};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            arrow: "->",
        }
    }
}

fn success_icon(icon: &str, color: bool) -> String {
    if color {
        format!("{}", icon.green())
    } else {
        icon.to_string()
    }
}

/// Trait for rendering deploy results
pub trait DeployResultRenderer {
    fn render(&self, result: &DeployResult) -> String;
}

/// Text renderer for deploy results
///
/// Warnings are not repeated here; the console event sink reports them.
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn route_line(&self, route: &RouteEntry) -> String {
        let target = match &route.target {
            RouteTarget::Storage => "storage".to_string(),
            RouteTarget::Compute(name) => format!("function {}", name),
        };
        format!("    {} {} {}", route.path_pattern, self.icons().arrow, target)
    }
}

impl DeployResultRenderer for TextRenderer {
    fn render(&self, result: &DeployResult) -> String {
        let icons = self.icons();
        let mut out = Vec::new();

        let title = if result.dry_run {
            "Dry Run Complete"
        } else {
            "Deploy Complete"
        };
        out.push(format!("{} {}", success_icon(icons.check, self.color), title));
        out.push(String::new());
        out.push(format!("  Stack: {}", result.plan.stack_name));
        out.push(format!("  Mode:  {}", result.plan.mode));
        if let Some(host) = result.decision.hostname() {
            out.push(format!("  Alias: {}", host));
        }

        if result.dry_run || self.verbose > 0 {
            out.push(String::new());
            out.push(format!("  Routes ({}):", result.plan.routes.len()));
            out.extend(result.plan.routes.iter().map(|r| self.route_line(r)));
        }

        if !result.outputs.is_empty() {
            out.push(String::new());
            out.push("  Outputs:".to_string());
            for output in &result.outputs {
                out.push(format!("    {}: {}", output.name, output.value));
            }
        }

        if self.verbose > 0 && result.attempts > 1 {
            out.push(format!("  Provisioned after {} attempts", result.attempts));
        }

        out.join("\n")
    }
}

/// JSON renderer: one `result` object, matching the NDJSON event stream
pub struct JsonRenderer;

impl DeployResultRenderer for JsonRenderer {
    fn render(&self, result: &DeployResult) -> String {
        let mut value = serde_json::json!({
            "event": "result",
            "command": "deploy",
            "stack": result.plan.stack_name,
            "mode": result.plan.mode.as_str(),
            "dry_run": result.dry_run,
            "attempts": result.attempts,
            "alias": result.decision.hostname(),
            "outputs": result.outputs,
            "warnings": result.warnings,
        });
        if result.dry_run {
            if let Some(map) = value.as_object_mut() {
                map.insert(
                    "plan".to_string(),
                    serde_json::to_value(&result.plan).unwrap_or(serde_json::Value::Null),
                );
            }
        }
        value.to_string()
    }
}

/// Render the outcome of `configure-domain`
pub fn render_configure_domain(
    result: &ConfigureDomainResult,
    format: OutputFormat,
    unicode: bool,
) -> String {
    if format == OutputFormat::Json {
        return serde_json::json!({
            "event": "result",
            "command": "configure-domain",
            "stack": result.plan.stack_name,
            "domain_name": result.plan.zone_name,
            "hosted_zone_id": result.bootstrap.hosted_zone_id,
            "certificate_arn": result.bootstrap.certificate_arn,
            "name_servers": result.bootstrap.name_servers,
        })
        .to_string();
    }

    let icons = if unicode {
        Icons::unicode()
    } else {
        Icons::ascii()
    };
    let mut out = vec![
        format!("{} Domain Configured", icons.check),
        String::new(),
        format!("  Domain:          {}", result.plan.zone_name),
        format!("  Hosted zone id:  {}", result.bootstrap.hosted_zone_id),
        format!("  Certificate ARN: {}", result.bootstrap.certificate_arn),
    ];
    if !result.bootstrap.name_servers.is_empty() {
        out.push(String::new());
        out.push("  Delegate the domain to these name servers:".to_string());
        for ns in &result.bootstrap.name_servers {
            out.push(format!("    {} {}", icons.arrow, ns));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BuildContext, DomainBootstrapResult};
    use crate::domain::ports::ProvisionerResult;
    use crate::domain::services::{
        DomainBootstrapPlanner, DomainResolver, OutputFormatter, TopologyCompiler,
    };
    use crate::domain::value_objects::{BuildId, DomainConfig};

    fn deployed(dry_run: bool) -> DeployResult {
        let ctx = BuildContext::preview(BuildId::parse("ab12cd34").unwrap())
            .with_api_entries(["functions/hello.ts"])
            .with_domain(DomainConfig::new("example.com", "Z1", "arn:aws:acm:x"));
        let plan = TopologyCompiler::compile(&ctx).unwrap();
        let decision =
            DomainResolver::resolve(ctx.domain.as_ref(), ctx.build_id.as_ref(), ctx.is_prod);
        let provisioned = ProvisionerResult::new("d111.cloudfront.net");
        let outputs = if dry_run {
            Vec::new()
        } else {
            OutputFormatter::format(&plan, &decision, &provisioned)
        };
        DeployResult {
            plan,
            decision,
            provisioned: (!dry_run).then_some(provisioned),
            outputs,
            attempts: if dry_run { 0 } else { 1 },
            warnings: Vec::new(),
            dry_run,
        }
    }

    #[test]
    fn text_lists_outputs() {
        let text = TextRenderer::default().render(&deployed(false));
        assert!(text.starts_with("✓ Deploy Complete"));
        assert!(text.contains("  Alias: ab12cd34.example.com"));
        assert!(text.contains("    Base Url: https://ab12cd34.example.com"));
        assert!(text.contains("    Function Path - hello: https://ab12cd34.example.com/api/hello"));
        assert!(!text.contains("Routes"));
    }

    #[test]
    fn dry_run_text_lists_routes_in_precedence_order() {
        let renderer = TextRenderer {
            unicode: false,
            ..TextRenderer::default()
        };
        let text = renderer.render(&deployed(true));
        assert!(text.starts_with("[OK] Dry Run Complete"));
        let api = text.find("/api/hello -> function hello").unwrap();
        let default = text.find("* -> storage").unwrap();
        assert!(api < default);
    }

    #[test]
    fn colored_text_wraps_icon() {
        let renderer = TextRenderer {
            color: true,
            ..TextRenderer::default()
        };
        let text = renderer.render(&deployed(false));
        let plain = TextRenderer::default().render(&deployed(false));
        assert!(text.starts_with(&format!("{} Deploy Complete", "✓".green())));
        assert_ne!(text, plain);
        assert!(plain.starts_with("✓ Deploy Complete"));
    }

    #[test]
    fn json_is_a_single_line() {
        let json = JsonRenderer.render(&deployed(false));
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event"], "result");
        assert_eq!(value["outputs"][0]["name"], "Base Url");
        assert!(value.get("plan").is_none());
    }

    #[test]
    fn dry_run_json_includes_plan() {
        let json = JsonRenderer.render(&deployed(true));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plan"]["stack_name"], "ServerlessUIAppPreviewab12cd34");
    }

    #[test]
    fn configure_domain_text_lists_name_servers() {
        let result = ConfigureDomainResult {
            plan: DomainBootstrapPlanner::plan("example.com").unwrap(),
            bootstrap: DomainBootstrapResult {
                hosted_zone_id: "Z1".to_string(),
                certificate_arn: "arn:aws:acm:us-east-1:1:certificate/x".to_string(),
                name_servers: vec!["ns-01.example.net".to_string()],
            },
        };
        let text = render_configure_domain(&result, OutputFormat::Text, false);
        assert!(text.contains("  Hosted zone id:  Z1"));
        assert!(text.contains("    -> ns-01.example.net"));
    }
}
