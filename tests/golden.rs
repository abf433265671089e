//! Golden tests for rendered deploy results.
//!
//! Each scenario runs the full deploy use case against an in-memory
//! provisioner and snapshots the text a user would see.

use insta::assert_snapshot;

use serverlessui::application::{DeployOptions, DeployUseCase};
use serverlessui::domain::entities::{DeploymentPlan, DomainBootstrapPlan, DomainBootstrapResult};
use serverlessui::domain::ports::{
    FixedBuildIdGenerator, ProvisionError, Provisioner, ProvisionerResult, StaticEntryDiscovery,
};
use serverlessui::domain::value_objects::{BuildId, DomainConfig};
use serverlessui::presentation::{DeployResultRenderer, TextRenderer};

struct FixedDomainProvisioner;

impl Provisioner for FixedDomainProvisioner {
    fn provision(&self, _plan: &DeploymentPlan) -> Result<ProvisionerResult, ProvisionError> {
        Ok(ProvisionerResult::new("d111abcdef8.cloudfront.net"))
    }

    fn provision_domain(
        &self,
        _plan: &DomainBootstrapPlan,
    ) -> Result<DomainBootstrapResult, ProvisionError> {
        Err(ProvisionError::Permanent("not supported".to_string()))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn render(options: &DeployOptions, verbose: u8) -> String {
    let use_case = DeployUseCase::new(
        FixedDomainProvisioner,
        FixedBuildIdGenerator(BuildId::parse("ab12cd34").unwrap()),
        StaticEntryDiscovery(vec!["functions/hello.ts".into(), "functions/users.js".into()]),
    );
    let result = use_case.execute(options).unwrap();
    TextRenderer {
        color: false,
        unicode: false,
        verbose,
    }
    .render(&result)
}

#[test]
fn test_golden_preview_with_domain() {
    let options = DeployOptions::new().with_domain(DomainConfig::new(
        "example.com",
        "Z1",
        "arn:aws:acm:us-east-1:123:certificate/abc",
    ));

    assert_snapshot!(render(&options, 0), @r"
[OK] Deploy Complete

  Stack: ServerlessUIAppPreviewab12cd34
  Mode:  static+api
  Alias: ab12cd34.example.com

  Outputs:
    Base Url: https://ab12cd34.example.com
    Function Path - hello: https://ab12cd34.example.com/api/hello
    Function Path - users: https://ab12cd34.example.com/api/users
");
}

#[test]
fn test_golden_production_without_domain() {
    let options = DeployOptions::new().with_production(true);

    assert_snapshot!(render(&options, 0), @r"
[OK] Deploy Complete

  Stack: ServerlessUIAppProduction
  Mode:  static+api

  Outputs:
    Base Url: https://d111abcdef8.cloudfront.net
    Function Path - hello: https://d111abcdef8.cloudfront.net/api/hello
    Function Path - users: https://d111abcdef8.cloudfront.net/api/users
");
}

#[test]
fn test_golden_dry_run_lists_routes() {
    let options = DeployOptions::new().with_production(true).with_dry_run(true);

    assert_snapshot!(render(&options, 0), @r"
[OK] Dry Run Complete

  Stack: ServerlessUIAppProduction
  Mode:  static+api

  Routes (3):
    /api/hello -> function hello
    /api/users -> function users
    * -> storage
");
}

#[test]
fn test_golden_next_app() {
    let options = DeployOptions::new().with_production(true).with_next_app(true);

    assert_snapshot!(render(&options, 1), @r"
[OK] Deploy Complete

  Stack: ServerlessUIAppProduction
  Mode:  next-app

  Routes (1):
    * -> function next

  Outputs:
    Base Url: https://d111abcdef8.cloudfront.net
");
}
