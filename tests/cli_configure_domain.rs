//! End-to-end tests for `serverlessui configure-domain`.

mod common;

use common::TestEnv;

#[test]
fn test_configure_domain_prints_triple() {
    let env = TestEnv::new();

    let result = env.run(&["configure-domain", "--domain", "example.com"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Domain Configured"));
    assert!(result.stdout.contains("arn:aws:acm:us-east-1:"));
    assert!(env
        .project_path("cdk.out/ServerlessUIDomain-exampledotcom.plan.json")
        .exists());
    assert!(!env.project_path("serverlessui.toml").exists());
}

#[test]
fn test_configure_domain_save_then_deploy_uses_domain() {
    let env = TestEnv::new();
    env.write_project_file("functions/hello.ts", "export const handler = 1;");

    let configured = env.run(&["configure-domain", "--domain", "example.com", "--save"]);
    assert!(configured.success, "stderr:\n{}", configured.stderr);

    let saved = std::fs::read_to_string(env.project_path("serverlessui.toml")).unwrap();
    assert!(saved.contains("[domain]"));
    assert!(saved.contains("domain_name = \"example.com\""));

    let deployed = env.run(&["deploy", "--prod", "--json"]);
    assert!(deployed.success, "stderr:\n{}", deployed.stderr);
    let last = deployed.json_lines().pop().unwrap();
    assert_eq!(last["outputs"][0]["value"], "https://www.example.com");
}

#[test]
fn test_configure_domain_json() {
    let env = TestEnv::new();

    let result = env.run(&["configure-domain", "--domain", "example.com", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let line = result.json_lines().pop().unwrap();
    assert_eq!(line["command"], "configure-domain");
    assert_eq!(line["stack"], "ServerlessUIDomain-exampledotcom");
    assert_eq!(line["name_servers"].as_array().unwrap().len(), 4);
}

#[test]
fn test_configure_domain_rejects_invalid_name() {
    let env = TestEnv::new();

    let result = env.run(&["configure-domain", "--domain", "localhost"]);

    assert!(!result.success);
    assert!(result.stderr.contains("configuration error"));
}
