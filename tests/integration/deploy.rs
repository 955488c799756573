//! Deployment binary failure modes.
//!
//! The deployment scripts are the one place where failure must surface as a
//! hard signal: exit code 1 with the error printed to stderr.

use std::process::Command;

// First hardhat/anvil development key
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn deploy_award() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_deploy-award"));
	// Nothing listens on this port
	cmd.env("RPC_URL", "http://127.0.0.1:9")
		.env("PRIVATE_KEY", DEV_KEY);
	cmd
}

#[test]
fn test_missing_artifact_exits_one_and_prints_the_error() {
	let output = deploy_award()
		.env("AWARD_ARTIFACT", "does/not/exist.json")
		.output()
		.expect("binary should spawn");

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(!stderr.is_empty());
	assert!(stderr.contains("failed to read artifact"));
}

#[test]
fn test_unreachable_endpoint_exits_one_and_prints_the_error() {
	let dir = std::env::temp_dir().join(format!("award-portal-deploy-{}", std::process::id()));
	std::fs::create_dir_all(&dir).expect("temp dir should be writable");
	let artifact = dir.join("ItemAward.json");
	std::fs::write(&artifact, r#"{ "bytecode": "0x6080" }"#)
		.expect("artifact should be writable");

	let output = deploy_award()
		.env("AWARD_ARTIFACT", &artifact)
		.output()
		.expect("binary should spawn");

	std::fs::remove_dir_all(&dir).ok();

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("deployment failed"));
	assert!(output.stdout.is_empty());
}

#[test]
fn test_artifact_without_bytecode_exits_one_and_prints_the_error() {
	let dir = std::env::temp_dir().join(format!("award-portal-deploy-abi-{}", std::process::id()));
	std::fs::create_dir_all(&dir).expect("temp dir should be writable");
	let artifact = dir.join("ItemAward.json");
	std::fs::write(&artifact, r#"{ "abi": [] }"#).expect("artifact should be writable");

	let output = deploy_award()
		.env("AWARD_ARTIFACT", &artifact)
		.output()
		.expect("binary should spawn");

	std::fs::remove_dir_all(&dir).ok();

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("no bytecode field"));
}
