//! Integration tests for the ganttgate binary.
//!
//! Each test spawns the actual `ganttgate` binary on a free local port,
//! waits for `/health` to respond, then drives the HTTP contract with real
//! requests.

use anyhow::{bail, Context, Result};
use std::{
    net::TcpListener,
    process::{Child, Command, Stdio},
    time::Duration,
};
use tokio::time::sleep;

struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn pick_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind a local port")?;
    Ok(listener
        .local_addr()
        .context("Failed to read local port")?
        .port())
}

fn spawn_gate(port: u16, extra_args: &[&str]) -> Result<ChildGuard> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ganttgate"));
    command.env("GANTTGATE_LOG_LEVEL", "debug");
    // Clear conflicting env vars that might leak from the host
    command.env_remove("GANTTGATE_PORT");
    command.env_remove("GANTTGATE_PASSWORD");

    let child = command
        .args(["--port", &port.to_string()])
        .args(extra_args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .context("Failed to spawn ganttgate binary")?;

    Ok(ChildGuard(child))
}

async fn wait_for_ready(client: &reqwest::Client, base: &str) -> Result<()> {
    for _ in 0..40 {
        match client.get(format!("{base}/health")).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => sleep(Duration::from_millis(250)).await,
        }
    }
    bail!("ganttgate did not become ready at {base}");
}

#[tokio::test]
async fn gate_serves_form_and_checks_password() -> Result<()> {
    let port = pick_port()?;
    let base = format!("http://127.0.0.1:{port}");

    let _child = spawn_gate(port, &[])?;

    let client = reqwest::Client::new();
    wait_for_ready(&client, &base).await?;

    // Health reports build metadata
    let resp = client.get(format!("{base}/health")).send().await?;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("X-App"));
    let health = resp.text().await?;
    assert!(health.contains("ganttgate"));

    // Initial page shows the gate heading and the form
    let resp = client.get(format!("{base}/")).send().await?;
    assert!(resp.status().is_success());
    let body = resp.text().await?;
    assert!(body.contains("ガントチャート アクセス認証"));
    assert!(body.contains(r#"<form method="post">"#));

    // Default secret is accepted
    let resp = client
        .post(format!("{base}/"))
        .form(&[("password", "gantt")])
        .send()
        .await?;
    assert!(resp.status().is_success());
    let body = resp.text().await?;
    assert!(body.contains("認証に成功しました"));
    assert!(!body.contains("<input"));

    // Wrong case is a mismatch, still a 200
    let resp = client
        .post(format!("{base}/"))
        .form(&[("password", "Gantt")])
        .send()
        .await?;
    assert!(resp.status().is_success());
    let body = resp.text().await?;
    assert!(body.contains("パスワードが違います。"));
    assert!(body.contains(r#"<form method="post">"#));

    // Missing field reads as absent
    let resp = client
        .post(format!("{base}/"))
        .form(&[("user", "alice")])
        .send()
        .await?;
    let body = resp.text().await?;
    assert!(body.contains("パスワードが違います。"));

    // No session: a plain GET after success shows the form again
    let resp = client.get(format!("{base}/")).send().await?;
    let body = resp.text().await?;
    assert!(body.contains(r#"<form method="post">"#));
    assert!(!body.contains("認証に成功しました"));

    Ok(())
}

#[tokio::test]
async fn gate_accepts_only_the_configured_password() -> Result<()> {
    let port = pick_port()?;
    let base = format!("http://127.0.0.1:{port}");

    let _child = spawn_gate(port, &["--password", "s3cret"])?;

    let client = reqwest::Client::new();
    wait_for_ready(&client, &base).await?;

    // The default password no longer passes
    let resp = client
        .post(format!("{base}/"))
        .form(&[("password", "gantt")])
        .send()
        .await?;
    let body = resp.text().await?;
    assert!(body.contains("パスワードが違います。"));

    let resp = client
        .post(format!("{base}/"))
        .form(&[("password", "s3cret")])
        .send()
        .await?;
    let body = resp.text().await?;
    assert!(body.contains("認証に成功しました"));

    Ok(())
}
